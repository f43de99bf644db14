use chrono::NaiveTime;

use crate::TranslationError;

/// Validate a remark clock time: `HHMM`, or `MM` past the report hour.
pub fn clock_time(value: &str) -> Result<&str, TranslationError> {
    let valid = match value.len() {
        2 => value.parse::<u32>().is_ok_and(|minute| minute < 60),
        4 => NaiveTime::parse_from_str(value, "%H%M").is_ok(),
        _ => false,
    };
    if valid { Ok(value) } else { Err(TranslationError::InvalidTime { value: value.to_string() }) }
}

/// Look `code` up in a fixed `(code, phrase)` table.
pub fn lookup(table: &[(&str, &'static str)], field: &'static str, code: &str) -> Result<&'static str, TranslationError> {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, phrase)| *phrase)
        .ok_or_else(|| TranslationError::UnknownCode { field, value: code.to_string() })
}

/// `RY11L` / `RWY11L` as `runway 11 left`.
pub fn runway(location: &str) -> Result<String, TranslationError> {
    let designator = location
        .strip_prefix("RWY")
        .or_else(|| location.strip_prefix("RY"))
        .ok_or_else(|| TranslationError::UnknownCode { field: "runway", value: location.to_string() })?;

    let (number, side) = match designator.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&designator[..idx], Some(c)),
        _ => (designator, None),
    };
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TranslationError::UnknownCode { field: "runway", value: location.to_string() });
    }

    match side {
        None => Ok(format!("runway {number}")),
        Some(side) => {
            let side = lookup(&[("L", "left"), ("C", "center"), ("R", "right")], "runway side", &side.to_string())?;
            Ok(format!("runway {number} {side}"))
        }
    }
}

/// Event marker of a begin/end group.
pub fn event(code: &str) -> Result<&'static str, TranslationError> {
    lookup(&[("B", "began"), ("E", "ended")], "event", code)
}

/// Reported visibility with its unit, e.g. `1 1/2sm`.
pub fn statute_miles(value: &str) -> String {
    format!("{value}sm")
}

/// Signed tenths of a degree, as in the hourly temperature group.
pub fn tenths_celsius(sign: &str, digits: &str) -> Result<String, TranslationError> {
    let tenths: i32 = digits
        .parse()
        .map_err(|_| TranslationError::UnknownCode { field: "temperature", value: digits.to_string() })?;
    let celsius = match sign {
        "0" => f64::from(tenths) / 10.0,
        "1" => -f64::from(tenths) / 10.0,
        _ => return Err(TranslationError::UnknownCode { field: "temperature sign", value: sign.to_string() }),
    };
    // sign `1` with `000` still encodes zero
    let celsius = if celsius == 0.0 { 0.0 } else { celsius };
    let fahrenheit = (celsius * 1.8 + 32.0).round() as i32;
    Ok(format!("{celsius:.1}°C ({fahrenheit}°F)"))
}
