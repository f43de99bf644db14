//! Formatting helpers for decoded report body fields.
//!
//! Each function takes already tokenized values (as they appear in a report,
//! e.g. `"M05"` for -5 degrees) and returns one sentence fragment. They are
//! pure and total: input that cannot be formatted yields an empty string.
//!
//! ```text
//! temperature("M05", "C")      -> "-5°C (23°F)"
//! altimeter("2992", "inHg")    -> "29.92 inHg (1013 hPa)"
//! visibility("P6", "sm")       -> "Greater than 6sm ( >10km )"
//! wind("020", "14", "20", ..)  -> "NNE-020 at 14kt gusting to 20kt"
//! ```

pub mod tables;

use tables::{CLOUD_COVER, CLOUD_TYPES, ICING_CONDITIONS, TURBULENCE_CONDITIONS, WX_CODES};

/// Statute miles in one meter.
const SM_PER_METER: f64 = 0.000621371;
/// Kilometers in one statute mile.
const KM_PER_SM: f64 = 1.0 / 0.621371;
/// Hectopascals in one inch of mercury.
const HPA_PER_INHG: f64 = 33.8638866667;

/// A reported cloud layer: cover code, base in hundreds of feet and an
/// optional cloud type such as `CB`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CloudLayer {
    pub cover: String,
    pub base: String,
    pub modifier: Option<String>,
}

impl CloudLayer {
    pub fn new(cover: &str, base: &str, modifier: Option<&str>) -> Self {
        CloudLayer { cover: cover.to_string(), base: base.to_string(), modifier: modifier.map(str::to_string) }
    }
}

pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Round to one decimal and drop a trailing `.0`.
pub(crate) fn short_decimal(value: f64) -> String {
    let s = format!("{value:.1}");
    if let Some(whole) = s.strip_suffix(".0") {
        return whole.to_string();
    }
    s
}

/// Parse `"10"`, `"1/2"` or `"1 1/2"` into a number.
pub(crate) fn parse_distance(value: &str) -> Option<f64> {
    let value = value.trim();
    match value.split_once(' ') {
        Some((whole, fraction)) => Some(whole.parse::<f64>().ok()? + parse_fraction(fraction)?),
        None if value.contains('/') => parse_fraction(value),
        None => value.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

fn parse_fraction(value: &str) -> Option<f64> {
    let (num, den) = value.split_once('/')?;
    let num = num.parse::<f64>().ok()?;
    let den = den.parse::<f64>().ok().filter(|d| *d != 0.0)?;
    Some(num / den)
}

/// Cardinal direction (16-point) for a wind direction in degrees.
///
/// ```text
/// (360) -- 011/012 -- 033/034 -- (045) -- 056/057 -- 078/079 -- (090)
/// (090) -- 101/102 -- 123/124 -- (135) -- 146/147 -- 168/169 -- (180)
/// (180) -- 191/192 -- 213/214 -- (225) -- 236/237 -- 258/259 -- (270)
/// (270) -- 281/282 -- 303/304 -- (315) -- 326/327 -- 348/349 -- (360)
/// ```
pub fn cardinal_direction(degrees: i32) -> String {
    let d = degrees.rem_euclid(360);
    let mut ret = String::new();

    if (304..=360).contains(&d) || (0..=56).contains(&d) {
        ret.push('N');
        if (304..=348).contains(&d) {
            if (327..=348).contains(&d) {
                ret.push('N');
            }
            ret.push('W');
        } else if (12..=56).contains(&d) {
            if (12..=33).contains(&d) {
                ret.push('N');
            }
            ret.push('E');
        }
    } else if (124..=236).contains(&d) {
        ret.push('S');
        if (124..=168).contains(&d) {
            if (147..=168).contains(&d) {
                ret.push('S');
            }
            ret.push('E');
        } else if (192..=236).contains(&d) {
            if (192..=213).contains(&d) {
                ret.push('S');
            }
            ret.push('W');
        }
    } else if (57..=123).contains(&d) {
        ret.push('E');
        if (57..=78).contains(&d) {
            ret.push_str("NE");
        } else if (102..=123).contains(&d) {
            ret.push_str("SE");
        }
    } else if (237..=303).contains(&d) {
        ret.push('W');
        if (237..=258).contains(&d) {
            ret.push_str("SW");
        } else if (282..=303).contains(&d) {
            ret.push_str("NW");
        }
    }
    ret
}

/// Wind as a sentence, e.g. `NNE-020 (variable 010 to 040) at 14kt gusting to 20kt`.
pub fn wind(direction: &str, speed: &str, gust: &str, variable: &[String], unit: &str, cardinals: bool) -> String {
    let mut ret = String::new();

    if direction == "000" {
        ret.push_str("Calm");
    } else if is_digits(direction) {
        if cardinals {
            if let Ok(degrees) = direction.parse::<i32>() {
                ret.push_str(&cardinal_direction(degrees));
                ret.push('-');
            }
        }
        ret.push_str(direction);
    } else if direction == "VRB" {
        ret.push_str("Variable");
    } else {
        ret.push_str(direction);
    }

    if let [from, to] = variable {
        ret.push_str(&format!(" (variable {from} to {to})"));
    }
    if !speed.is_empty() && speed != "0" && speed != "00" {
        ret.push_str(&format!(" at {speed}{unit}"));
    }
    if !gust.is_empty() {
        ret.push_str(&format!(" gusting to {gust}{unit}"));
    }
    ret
}

/// Visibility in the reported unit with the other unit in parentheses.
///
/// `unit` is `"m"` (value in meters, shown as km) or `"sm"`.
pub fn visibility(vis: &str, unit: &str) -> String {
    match vis {
        "P6" => return "Greater than 6sm ( >10km )".to_string(),
        "M1/4" => return "Less than .25sm ( <0.4km )".to_string(),
        _ => {}
    }
    let Some(value) = parse_distance(vis) else {
        return String::new();
    };

    match unit {
        "m" => format!("{}km ({}sm)", short_decimal(value / 1000.0), short_decimal(value * SM_PER_METER)),
        "sm" => format!("{}sm ({}km)", value, short_decimal(value * KM_PER_SM)),
        _ => String::new(),
    }
}

/// Temperature in the reported unit with the other unit in parentheses.
///
/// A leading `M` means minus.
pub fn temperature(temp: &str, unit: &str) -> String {
    let Ok(value) = temp.replace('M', "-").parse::<i32>() else {
        return String::new();
    };
    match unit.to_ascii_uppercase().as_str() {
        "C" => format!("{value}°C ({}°F)", (f64::from(value) * 1.8 + 32.0).round() as i32),
        "F" => format!("{value}°F ({}°C)", ((f64::from(value) - 32.0) / 1.8).round() as i32),
        _ => String::new(),
    }
}

/// Altimeter setting in hPa and inHg.
///
/// `alt` is four digits, optionally prefixed by a letter (`A2992`, `Q1013`).
pub fn altimeter(alt: &str, unit: &str) -> String {
    let digits = if is_digits(alt) {
        alt
    } else {
        match alt.get(1..) {
            Some(rest) if alt.len() == 5 && is_digits(rest) => rest,
            _ => return String::new(),
        }
    };

    match unit {
        "hPa" => match digits.parse::<f64>() {
            Ok(value) => format!("{digits} hPa ({:.2} inHg)", value / HPA_PER_INHG),
            Err(_) => String::new(),
        },
        "inHg" if digits.len() > 2 => {
            let inches = format!("{}.{}", &digits[..2], &digits[2..]);
            match inches.parse::<f64>() {
                Ok(value) => format!("{inches} inHg ({} hPa)", (value * HPA_PER_INHG).round() as i64),
                Err(_) => String::new(),
            }
        }
        _ => String::new(),
    }
}

/// Cloud layers as one sentence, or `Sky clear` when none are reported.
pub fn clouds(layers: &[CloudLayer], unit: &str) -> String {
    let described: Vec<String> = layers
        .iter()
        .filter_map(|layer| {
            let phrase = CLOUD_COVER.get(layer.cover.as_str())?;
            if !is_digits(&layer.base) {
                return None;
            }
            let altitude = layer.base.parse::<u32>().ok()? * 100;
            let mut out = format!("{phrase} {altitude}{unit}");
            if let Some(modifier) = &layer.modifier {
                out.push_str(&format!(" ({})", CLOUD_TYPES.get(modifier.as_str())?));
            }
            Some(out)
        })
        .collect();

    if described.is_empty() { "Sky clear".to_string() } else { format!("{} - Reported AGL", described.join(", ")) }
}

/// Weather code such as `+TSRA` as words.
///
/// Codes that are not 2, 4 or 6 letters long (after intensity) are returned
/// as-is.
pub fn wx_code(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    let (intensity, code) = match code.as_bytes()[0] {
        b'+' => ("Heavy", &code[1..]),
        b'-' => ("Light", &code[1..]),
        _ => ("", code),
    };
    if !matches!(code.len(), 2 | 4 | 6) || !code.is_ascii() {
        return code.to_string();
    }

    let mut words: Vec<&str> = Vec::new();
    if !intensity.is_empty() {
        words.push(intensity);
    }
    for i in (0..code.len()).step_by(2) {
        let pair = &code[i..i + 2];
        words.push(WX_CODES.get(pair).copied().unwrap_or(pair));
    }
    words.join(" ")
}

/// Comma separated list of weather codes as words.
pub fn other_list(codes: &[String]) -> String {
    codes.iter().map(|c| wx_code(c)).collect::<Vec<_>>().join(", ")
}

/// Wind shear group such as `WS020/14030KT`.
pub fn wind_shear(shear: &str, unit_alt: &str, unit_wind: &str) -> String {
    if !shear.contains("WS") || !shear.contains('/') {
        return String::new();
    }
    let suffix: Vec<char> = unit_wind.to_ascii_uppercase().chars().collect();
    let body = shear.get(2..).unwrap_or_default().trim_end_matches(suffix.as_slice());

    let Some((alt, wind)) = body.split_once('/') else {
        return String::new();
    };
    let (Ok(alt), Some(direction), Some(speed)) = (alt.parse::<u32>(), wind.get(..3), wind.get(3..)) else {
        return String::new();
    };
    format!("Wind shear {}{unit_alt} from {direction} at {speed}{unit_wind}", alt * 100)
}

/// TAF turbulence (`5xxxxx`) or icing (`6xxxxx`) groups as a sentence.
///
/// Consecutive layers of the same band stacked 9000ft deep are merged.
pub fn turb_ice(groups: &[String], unit: &str) -> String {
    let conditions = match groups.first().and_then(|g| g.chars().next()) {
        Some('5') => &*TURBULENCE_CONDITIONS,
        Some('6') => &*ICING_CONDITIONS,
        _ => return String::new(),
    };

    // (band, floor in hundreds of feet, depth in thousands of feet)
    let mut layers: Vec<(&str, u32, u32)> = groups
        .iter()
        .filter(|g| g.len() == 6 && g.is_ascii())
        .filter_map(|g| Some((&g[1..2], g[2..5].parse().ok()?, g[5..6].parse().ok()?)))
        .collect();

    for i in (0..layers.len().saturating_sub(1)).rev() {
        let (band, floor, depth) = layers[i];
        let (next_band, next_floor, next_depth) = layers[i + 1];
        if depth == 9 && band == next_band && next_floor == floor + depth * 10 {
            layers[i].2 = depth + next_depth;
            layers.remove(i + 1);
        }
    }

    layers
        .iter()
        .filter_map(|(band, floor, depth)| {
            let condition = conditions.get(*band)?;
            let low = floor * 100;
            let high = low + depth * 1000;
            Some(format!("{condition} from {low}{unit} to {high}{unit}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// TAF minimum/maximum temperature group such as `TX23/1815Z`.
pub fn min_max_temp(temp: &str, unit: &str) -> String {
    if temp.len() < 7 {
        return String::new();
    }
    let kind = match temp.get(..2) {
        Some("TX") => "Maximum",
        Some("TN") => "Minimum",
        _ => return String::new(),
    };
    let body = temp[2..].replace('Z', "");
    let Some((value, when)) = body.split_once('/') else {
        return String::new();
    };
    let when = match (when.get(..2), when.get(2..)) {
        (Some(day), Some(hour)) if !hour.is_empty() => format!("{day}-{hour}"),
        _ => when.to_string(),
    };
    format!("{kind} temperature of {} at {when}:00Z", temperature(value, unit))
}
