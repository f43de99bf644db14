//! Translation functions for remark atoms.
//!
//! Each function turns the decoded fields of one atom into one sentence, or
//! fails with a [`TranslationError`] when a field is missing or holds a value
//! that cannot be formatted (an unknown code, a clock time like `2599`).

use regex::Captures;

use super::helpers::{clock_time, event, lookup, runway, statute_miles, tenths_celsius};
use crate::{Fields, TranslationError};

type Translated = Result<String, TranslationError>;

const PRECIPITATION: &[(&str, &str)] = &[
    ("RA", "Rain"),
    ("SN", "Snow"),
    ("DZ", "Drizzle"),
    ("GR", "Hail"),
    ("GS", "Small hail"),
    ("PL", "Ice pellets"),
    ("SG", "Snow grains"),
    ("IC", "Ice crystals"),
    ("UP", "Unknown precipitation"),
    ("TS", "Thunderstorm"),
];

const DIRECTIONS: &[(&str, &str)] = &[
    ("N", "north"),
    ("NE", "northeast"),
    ("E", "east"),
    ("SE", "southeast"),
    ("S", "south"),
    ("SW", "southwest"),
    ("W", "west"),
    ("NW", "northwest"),
];

const LIGHTNING_TYPES: &[(&str, &str)] =
    &[("IC", "in-cloud"), ("CC", "cloud-to-cloud"), ("CG", "cloud-to-ground"), ("CA", "cloud-to-air")];

/// `RAB1359E1415` -> `Rain began at 1359 and ended at 1415`
pub fn begin_end_precipitation(fields: &Fields) -> Translated {
    let precip = lookup(PRECIPITATION, "precipitation", fields.require("precip")?)?;
    let first = event(fields.require("first_type")?)?;
    let first_time = clock_time(fields.require("first_time")?)?;

    let mut out = format!("{precip} {first} at {first_time}");

    if fields.get("second").is_some() {
        let second = event(fields.require("second_type")?)?;
        let second_time = clock_time(fields.require("second_time")?)?;
        out.push_str(&format!(" and {second} at {second_time}"));
    }
    Ok(out)
}

/// `CIG 005 RY11L` -> `Ceiling height 005 over runway 11 left`
///
/// Works on the raw captures rather than decoded fields.
pub fn ceiling_at_second_location(caps: &Captures<'_>) -> Translated {
    let source = caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
    let missing = |field| TranslationError::MissingField { field, input: source.clone() };

    let height = caps.name("height").ok_or_else(|| missing("height"))?.as_str();
    let location = caps.name("location").ok_or_else(|| missing("location"))?.as_str();

    Ok(format!("Ceiling height {height} over {}", runway(location)?))
}

/// `CIG 005V010` -> `Ceiling height variable between 005 and 010`
pub fn variable_ceiling(fields: &Fields) -> Translated {
    let low = fields.require("low")?;
    let high = fields.require("high")?;
    Ok(format!("Ceiling height variable between {low} and {high}"))
}

pub fn remarks_identifier(_fields: &Fields) -> Translated {
    Ok("Remarks".to_string())
}

/// `AO1` / `AO2`
pub fn automated_station(fields: &Fields) -> Translated {
    let kind = lookup(
        &[("1", "without a precipitation discriminator"), ("2", "with a precipitation discriminator")],
        "station type",
        fields.require("kind")?,
    )?;
    Ok(format!("Automated station {kind}"))
}

/// `PK WND 28045/1955` -> `Peak wind 280 at 45kt at 1955`
pub fn peak_wind(fields: &Fields) -> Translated {
    let direction = fields.require("direction")?;
    let speed = fields.require("speed")?;
    let speed: u32 = speed
        .parse()
        .map_err(|_| TranslationError::UnknownCode { field: "wind speed", value: speed.to_string() })?;
    let time = clock_time(fields.require("time")?)?;
    Ok(format!("Peak wind {direction} at {speed}kt at {time}"))
}

/// `WSHFT 1715 FROPA` -> `Wind shift at 1715 due to frontal passage`
pub fn wind_shift(fields: &Fields) -> Translated {
    let time = clock_time(fields.require("time")?)?;
    let mut out = format!("Wind shift at {time}");
    if fields.get("fropa").is_some() {
        out.push_str(" due to frontal passage");
    }
    Ok(out)
}

/// `TWR VIS 1 1/2` -> `Tower visibility 1 1/2sm`
pub fn tower_or_surface_visibility(fields: &Fields) -> Translated {
    let source = lookup(&[("TWR", "Tower"), ("SFC", "Surface")], "visibility source", fields.require("source")?)?;
    let visibility = statute_miles(fields.require("visibility")?);
    Ok(format!("{source} visibility {visibility}"))
}

/// `VIS 2 1/2 RY11` -> `Visibility 2 1/2sm at runway 11`
pub fn visibility_at_second_location(fields: &Fields) -> Translated {
    let visibility = statute_miles(fields.require("visibility")?);
    let location = runway(fields.require("location")?)?;
    Ok(format!("Visibility {visibility} at {location}"))
}

/// `FRQ LTGICCG OHD` -> `Frequent lightning (in-cloud, cloud-to-ground) overhead`
pub fn lightning(fields: &Fields) -> Translated {
    let frequency = lookup(
        &[("OCNL", "Occasional"), ("FRQ", "Frequent"), ("CONS", "Continuous")],
        "lightning frequency",
        fields.require("frequency")?,
    )?;
    let mut out = format!("{frequency} lightning");

    let types = fields.get("types").unwrap_or_default();
    if !types.is_empty() {
        let names = types
            .as_bytes()
            .chunks(2)
            .map(|pair| lookup(LIGHTNING_TYPES, "lightning type", std::str::from_utf8(pair).unwrap_or_default()))
            .collect::<Result<Vec<_>, _>>()?;
        out.push_str(&format!(" ({})", names.join(", ")));
    }

    if let Some(location) = fields.get("location") {
        let described = match location {
            "OHD" => "overhead".to_string(),
            "VC" => "in the vicinity".to_string(),
            "ALQDS" => "in all quadrants".to_string(),
            "DSNT" => "distant".to_string(),
            _ => match location.strip_prefix("DSNT ") {
                Some(sector) => format!("distant {}", sector_name(sector)?),
                None => sector_name(location)?,
            },
        };
        out.push(' ');
        out.push_str(&described);
    }
    Ok(out)
}

/// `SW` -> `to the southwest`, `NE-SE` -> `from northeast to southeast`
fn sector_name(sector: &str) -> Translated {
    match sector.split_once('-') {
        Some((from, to)) => Ok(format!(
            "from {} to {}",
            lookup(DIRECTIONS, "direction", from)?,
            lookup(DIRECTIONS, "direction", to)?
        )),
        None => Ok(format!("to the {}", lookup(DIRECTIONS, "direction", sector)?)),
    }
}

/// `VIRGA SW` -> `Virga to the southwest`
pub fn virga(fields: &Fields) -> Translated {
    match fields.get("direction") {
        Some(direction) => Ok(format!("Virga to the {}", lookup(DIRECTIONS, "direction", direction)?)),
        None => Ok("Virga".to_string()),
    }
}

/// `TORNADO B13 6 NE` -> `Tornado began at 13, 6sm northeast`
pub fn tornadic_activity(fields: &Fields) -> Translated {
    let kind = lookup(
        &[("TORNADO", "Tornado"), ("FUNNEL CLOUD", "Funnel cloud"), ("WATERSPOUT", "Waterspout")],
        "tornadic activity",
        fields.require("kind")?,
    )?;
    let what = event(fields.require("event")?)?;
    let time = clock_time(fields.require("time")?)?;
    let mut out = format!("{kind} {what} at {time}");

    if let (Some(distance), Some(direction)) = (fields.get("distance"), fields.get("direction")) {
        out.push_str(&format!(", {distance}sm {}", lookup(DIRECTIONS, "direction", direction)?));
    }
    Ok(out)
}

/// `PRESRR` -> `Pressure rising rapidly`
pub fn pressure_change(fields: &Fields) -> Translated {
    let trend = lookup(&[("RR", "rising"), ("FR", "falling")], "pressure trend", fields.require("trend")?)?;
    Ok(format!("Pressure {trend} rapidly"))
}

/// `SLP132` -> `Sea level pressure 1013.2 hPa`
///
/// The group carries tens, units and tenths of hPa; values of 500 and above
/// are in the 900s.
pub fn sea_level_pressure(fields: &Fields) -> Translated {
    let pressure = fields.require("pressure")?;
    if pressure == "NO" {
        return Ok("Sea level pressure not available".to_string());
    }
    let tenths: u32 = pressure
        .parse()
        .map_err(|_| TranslationError::UnknownCode { field: "sea level pressure", value: pressure.to_string() })?;
    let hpa = f64::from(tenths) / 10.0 + if tenths >= 500 { 900.0 } else { 1000.0 };
    Ok(format!("Sea level pressure {hpa:.1} hPa"))
}

/// `T01170106` -> `Temperature 11.7°C (53°F), dewpoint 10.6°C (51°F)`
pub fn hourly_temperature(fields: &Fields) -> Translated {
    let temp = tenths_celsius(fields.require("temp_sign")?, fields.require("temp")?)?;
    let mut out = format!("Temperature {temp}");
    if let (Some(sign), Some(dew)) = (fields.get("dew_sign"), fields.get("dew")) {
        out.push_str(&format!(", dewpoint {}", tenths_celsius(sign, dew)?));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remarks::atoms::*;

    #[test]
    fn begin_end_precipitation_single_and_double_event() {
        let fields = BEGIN_END_PRECIPITATION.decode("RAB1359E1415");
        assert_eq!(begin_end_precipitation(&fields).unwrap(), "Rain began at 1359 and ended at 1415");

        let fields = BEGIN_END_PRECIPITATION.decode("TSB05");
        assert_eq!(begin_end_precipitation(&fields).unwrap(), "Thunderstorm began at 05");
    }

    #[test]
    fn begin_end_precipitation_rejects_impossible_time() {
        let fields = BEGIN_END_PRECIPITATION.decode("SNE2599");
        assert_eq!(
            begin_end_precipitation(&fields),
            Err(TranslationError::InvalidTime { value: "2599".into() })
        );
    }

    #[test]
    fn begin_end_precipitation_missing_fields() {
        assert!(matches!(
            begin_end_precipitation(&Fields::default()),
            Err(TranslationError::MissingField { field: "precip", .. })
        ));
    }

    #[test]
    fn ceiling_second_location_sides() {
        let cases = [
            ("CIG 005 RY11", "Ceiling height 005 over runway 11"),
            ("CIG 005 RY11L", "Ceiling height 005 over runway 11 left"),
            ("CIG 017 RWY04C", "Ceiling height 017 over runway 04 center"),
            ("CIG 002 RY29R", "Ceiling height 002 over runway 29 right"),
        ];
        for (input, expected) in cases {
            let caps = CEILING_HEIGHT_AT_SECOND_LOCATION.captures(input).unwrap();
            assert_eq!(ceiling_at_second_location(&caps).unwrap(), expected, "input={input}");
        }
    }

    #[test]
    fn lightning_descriptions() {
        let cases = [
            ("FRQ LTGICCG OHD", "Frequent lightning (in-cloud, cloud-to-ground) overhead"),
            ("OCNL LTGCG DSNT SW", "Occasional lightning (cloud-to-ground) distant to the southwest"),
            ("CONS LTG ALQDS", "Continuous lightning in all quadrants"),
            ("OCNL LTGIC NE-SE", "Occasional lightning (in-cloud) from northeast to southeast"),
            ("FRQ LTGCG DSNT W-NW", "Frequent lightning (cloud-to-ground) distant from west to northwest"),
            ("CONS LTGIC S", "Continuous lightning (in-cloud) to the south"),
            ("FRQ LTG", "Frequent lightning"),
        ];
        for (input, expected) in cases {
            assert_eq!(lightning(&LIGHTNING.decode(input)).unwrap(), expected, "input={input}");
        }
    }

    #[test]
    fn simple_groups() {
        assert_eq!(remarks_identifier(&REMARKS_IDENTIFIER.decode("RMK")).unwrap(), "Remarks");
        assert_eq!(
            automated_station(&AUTOMATED_STATION.decode("AO2")).unwrap(),
            "Automated station with a precipitation discriminator"
        );
        assert_eq!(peak_wind(&PEAK_WIND.decode("PK WND 28045/1955")).unwrap(), "Peak wind 280 at 45kt at 1955");
        assert_eq!(peak_wind(&PEAK_WIND.decode("PK WND 01108/05")).unwrap(), "Peak wind 011 at 8kt at 05");
        assert_eq!(
            wind_shift(&WIND_SHIFT.decode("WSHFT 1715 FROPA")).unwrap(),
            "Wind shift at 1715 due to frontal passage"
        );
        assert_eq!(wind_shift(&WIND_SHIFT.decode("WSHFT 30")).unwrap(), "Wind shift at 30");
        assert_eq!(
            tower_or_surface_visibility(&TOWER_OR_SURFACE_VISIBILITY.decode("TWR VIS 1 1/2")).unwrap(),
            "Tower visibility 1 1/2sm"
        );
        assert_eq!(
            visibility_at_second_location(&VISIBILITY_AT_SECOND_LOCATION.decode("VIS 2 1/2 RY11")).unwrap(),
            "Visibility 2 1/2sm at runway 11"
        );
        assert_eq!(
            variable_ceiling(&VARIABLE_CEILING_HEIGHT.decode("CIG 005V010")).unwrap(),
            "Ceiling height variable between 005 and 010"
        );
        assert_eq!(virga(&VIRGA.decode("VIRGA SW")).unwrap(), "Virga to the southwest");
        assert_eq!(virga(&VIRGA.decode("VIRGA")).unwrap(), "Virga");
        assert_eq!(
            tornadic_activity(&TORNADIC_ACTIVITY.decode("TORNADO B13 6 NE")).unwrap(),
            "Tornado began at 13, 6sm northeast"
        );
        assert_eq!(
            tornadic_activity(&TORNADIC_ACTIVITY.decode("FUNNEL CLOUD E1545")).unwrap(),
            "Funnel cloud ended at 1545"
        );
        assert_eq!(pressure_change(&PRESSURE_CHANGE.decode("PRESFR")).unwrap(), "Pressure falling rapidly");
    }

    #[test]
    fn sea_level_pressure_centuries() {
        assert_eq!(sea_level_pressure(&SEA_LEVEL_PRESSURE.decode("SLP132")).unwrap(), "Sea level pressure 1013.2 hPa");
        assert_eq!(sea_level_pressure(&SEA_LEVEL_PRESSURE.decode("SLP982")).unwrap(), "Sea level pressure 998.2 hPa");
        assert_eq!(
            sea_level_pressure(&SEA_LEVEL_PRESSURE.decode("SLPNO")).unwrap(),
            "Sea level pressure not available"
        );
    }

    #[test]
    fn hourly_temperature_with_and_without_dewpoint() {
        assert_eq!(
            hourly_temperature(&HOURLY_TEMPERATURE.decode("T01170106")).unwrap(),
            "Temperature 11.7°C (53°F), dewpoint 10.6°C (51°F)"
        );
        assert_eq!(hourly_temperature(&HOURLY_TEMPERATURE.decode("T1022")).unwrap(), "Temperature -2.2°C (28°F)");
    }
}
