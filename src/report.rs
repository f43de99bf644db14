//! Whole-report translation.
//!
//! The structures here hold a report that has already been split into its
//! fields. `translate_metar` / `translate_taf` run every field through the
//! matching [`format`](crate::format) helper and the remarks through the
//! default remarks parser in lenient mode, so one bad remark never costs the
//! rest of the report.

use crate::format::{self, CloudLayer};
use crate::{ParseOptions, Result, Translations, api};

/// Units the report values are expressed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Units {
    /// `"sm"` or `"m"`.
    pub visibility: String,
    /// `"inHg"` or `"hPa"`.
    pub altimeter: String,
    /// `"C"` or `"F"`.
    pub temperature: String,
    pub altitude: String,
    pub wind_speed: String,
}

impl Default for Units {
    fn default() -> Self {
        Units {
            visibility: "sm".to_string(),
            altimeter: "inHg".to_string(),
            temperature: "C".to_string(),
            altitude: "ft".to_string(),
            wind_speed: "kt".to_string(),
        }
    }
}

impl Units {
    /// ICAO units: meters, hPa, Celsius, feet and knots.
    pub fn international() -> Self {
        Units { visibility: "m".to_string(), altimeter: "hPa".to_string(), ..Self::default() }
    }
}

/// Fields shared by METAR reports and TAF forecast lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportData {
    pub visibility: String,
    pub altimeter: String,
    pub clouds: Vec<CloudLayer>,
    /// Weather codes such as `-RA` or `BR`.
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetarData {
    pub report: ReportData,
    pub wind_direction: String,
    pub wind_speed: String,
    pub wind_gust: String,
    /// Empty, or the two bounds of a `180V240` group.
    pub wind_variable_direction: Vec<String>,
    pub temperature: String,
    pub dewpoint: String,
    /// Everything after `RMK`, including the identifier itself.
    pub remarks: String,
}

/// One forecast period of a TAF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TafLine {
    pub report: ReportData,
    /// `FROM`, `BECMG`, `TEMPO`, `PROB30`, ...
    pub line_type: String,
    pub wind_direction: String,
    pub wind_speed: String,
    pub wind_gust: String,
    pub wind_shear: String,
    pub turbulence: Vec<String>,
    pub icing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TafData {
    pub forecast: Vec<TafLine>,
    pub min_temp: String,
    pub max_temp: String,
    pub remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetarTranslations {
    pub wind: String,
    pub visibility: String,
    pub clouds: String,
    pub temperature: String,
    pub dewpoint: String,
    pub altimeter: String,
    pub other: String,
    pub remarks: Translations,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TafLineTranslations {
    pub wind: String,
    pub visibility: String,
    /// `None` for a `BECMG` line that reports no layers: the sky is not
    /// becoming clear, it is just unchanged.
    pub clouds: Option<String>,
    pub altimeter: String,
    pub other: String,
    pub wind_shear: String,
    pub turbulence: String,
    pub icing: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TafTranslations {
    pub forecast: Vec<TafLineTranslations>,
    pub min_temp: String,
    pub max_temp: String,
    pub remarks: Translations,
}

struct Shared {
    visibility: String,
    altimeter: String,
    clouds: String,
    other: String,
}

fn shared(data: &ReportData, units: &Units) -> Shared {
    Shared {
        visibility: format::visibility(&data.visibility, &units.visibility),
        altimeter: format::altimeter(&data.altimeter, &units.altimeter),
        clouds: format::clouds(&data.clouds, &units.altitude),
        other: format::other_list(&data.other),
    }
}

fn remarks(text: &str) -> Result<Translations> {
    api::translate_remarks_with(text, &ParseOptions::lenient())
}

/// Translate every field of a decoded METAR.
pub fn translate_metar(data: &MetarData, units: &Units) -> Result<MetarTranslations> {
    let Shared { visibility, altimeter, clouds, other } = shared(&data.report, units);

    Ok(MetarTranslations {
        wind: format::wind(
            &data.wind_direction,
            &data.wind_speed,
            &data.wind_gust,
            &data.wind_variable_direction,
            &units.wind_speed,
            true,
        ),
        visibility,
        clouds,
        temperature: format::temperature(&data.temperature, &units.temperature),
        dewpoint: format::temperature(&data.dewpoint, &units.temperature),
        altimeter,
        other,
        remarks: remarks(&data.remarks)?,
    })
}

/// Translate every forecast line of a decoded TAF plus its temperature
/// groups and remarks.
pub fn translate_taf(data: &TafData, units: &Units) -> Result<TafTranslations> {
    let forecast = data
        .forecast
        .iter()
        .map(|line| {
            let Shared { visibility, altimeter, clouds, other } = shared(&line.report, units);
            let clouds = if line.line_type == "BECMG" && clouds == "Sky clear" { None } else { Some(clouds) };

            TafLineTranslations {
                wind: format::wind(&line.wind_direction, &line.wind_speed, &line.wind_gust, &[], &units.wind_speed, true),
                visibility,
                clouds,
                altimeter,
                other,
                wind_shear: format::wind_shear(&line.wind_shear, &units.altitude, &units.wind_speed),
                turbulence: format::turb_ice(&line.turbulence, &units.altitude),
                icing: format::turb_ice(&line.icing, &units.altitude),
            }
        })
        .collect();

    Ok(TafTranslations {
        forecast,
        min_temp: format::min_max_temp(&data.min_temp, &units.temperature),
        max_temp: format::min_max_temp(&data.max_temp, &units.temperature),
        remarks: remarks(&data.remarks)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn metar_fields() {
        let data = MetarData {
            report: ReportData {
                visibility: "10".into(),
                altimeter: "2992".into(),
                clouds: vec![CloudLayer::new("FEW", "015", None), CloudLayer::new("BKN", "250", None)],
                other: strings(&["-RA", "BR"]),
            },
            wind_direction: "020".into(),
            wind_speed: "14".into(),
            wind_gust: "20".into(),
            wind_variable_direction: vec![],
            temperature: "M05".into(),
            dewpoint: "M10".into(),
            remarks: "RMK AO2 SLP132".into(),
        };
        let out = translate_metar(&data, &Units::default()).unwrap();

        assert_eq!(out.wind, "NNE-020 at 14kt gusting to 20kt");
        assert_eq!(out.visibility, "10sm (16.1km)");
        assert_eq!(out.altimeter, "29.92 inHg (1013 hPa)");
        assert_eq!(out.clouds, "Few clouds at 1500ft, Broken layer at 25000ft - Reported AGL");
        assert_eq!(out.temperature, "-5°C (23°F)");
        assert_eq!(out.dewpoint, "-10°C (14°F)");
        assert_eq!(out.other, "Light Rain, Mist");
        assert_eq!(out.remarks.keys().collect::<Vec<_>>(), vec!["RMK", "AO2", "SLP132"]);
    }

    #[test]
    fn metar_remarks_are_lenient() {
        let data = MetarData { remarks: "RMK RAB2599 SLP132".into(), ..Default::default() };
        let out = translate_metar(&data, &Units::default()).unwrap();
        assert_eq!(out.remarks.get("Begin/End Precip/TS"), Some("ERROR: invalid time '2599'"));
        assert_eq!(out.remarks.get("SLP132"), Some("Sea level pressure 1013.2 hPa"));
    }

    #[test]
    fn taf_lines() {
        let data = TafData {
            forecast: vec![
                TafLine {
                    line_type: "FROM".into(),
                    wind_direction: "VRB".into(),
                    wind_speed: "03".into(),
                    wind_shear: "WS020/14030KT".into(),
                    turbulence: strings(&["520004"]),
                    ..Default::default()
                },
                TafLine { line_type: "BECMG".into(), icing: strings(&["620304"]), ..Default::default() },
                TafLine { line_type: "TEMPO".into(), ..Default::default() },
            ],
            min_temp: "TNM03/1810Z".into(),
            max_temp: "TX23/1815Z".into(),
            remarks: String::new(),
        };
        let out = translate_taf(&data, &Units::default()).unwrap();

        assert_eq!(out.forecast.len(), 3);
        assert_eq!(out.forecast[0].wind, "Variable at 03kt");
        assert_eq!(out.forecast[0].wind_shear, "Wind shear 2000ft from 140 at 30kt");
        assert_eq!(
            out.forecast[0].turbulence,
            "Occasional moderate turbulence in clear air from 0ft to 4000ft"
        );
        assert_eq!(out.forecast[1].clouds, None);
        assert_eq!(out.forecast[1].icing, "Light icing in clouds from 3000ft to 7000ft");
        assert_eq!(out.forecast[2].clouds.as_deref(), Some("Sky clear"));
        assert_eq!(out.min_temp, "Minimum temperature of -3°C (27°F) at 18-10:00Z");
        assert_eq!(out.max_temp, "Maximum temperature of 23°C (73°F) at 18-15:00Z");
        assert!(out.remarks.is_empty());
    }

    #[test]
    fn international_units() {
        let units = Units::international();
        let data = MetarData {
            report: ReportData { visibility: "9999".into(), altimeter: "Q1013".into(), ..Default::default() },
            ..Default::default()
        };
        let out = translate_metar(&data, &units).unwrap();
        assert_eq!(out.visibility, "10km (6.2sm)");
        assert_eq!(out.altimeter, "1013 hPa (29.91 inHg)");
    }
}
