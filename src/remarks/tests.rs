use crate::remarks;
use crate::{Error, ParseOptions, TranslationError};

fn strict(input: &str) -> Vec<(String, String)> {
    let parser = remarks::parser().unwrap();
    parser
        .parse(input, &ParseOptions::default())
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn single_remark_examples() {
    // Array of (input, raw, expected)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("RMK", "RMK", "Remarks"),
        ("AO1", "AO1", "Automated station without a precipitation discriminator"),
        ("AO2", "AO2", "Automated station with a precipitation discriminator"),
        ("ACFT MSHP", "ACFT MSHP", "Aircraft mishap"),
        ("PK WND 28045/1955", "PK WND 28045/1955", "Peak wind 280 at 45kt at 1955"),
        ("PK WND 321100/25", "PK WND 321100/25", "Peak wind 321 at 100kt at 25"),
        ("WSHFT 1715", "WSHFT 1715", "Wind shift at 1715"),
        ("WSHFT 30 FROPA", "WSHFT 30 FROPA", "Wind shift at 30 due to frontal passage"),
        ("TWR VIS 1 1/2", "TWR VIS 1 1/2", "Tower visibility 1 1/2sm"),
        ("SFC VIS 1/4", "SFC VIS 1/4", "Surface visibility 1/4sm"),
        ("VIS 2 1/2 RY11", "VIS 2 1/2 RY11", "Visibility 2 1/2sm at runway 11"),
        ("VIS 3/4 RWY29L", "VIS 3/4 RWY29L", "Visibility 3/4sm at runway 29 left"),
        ("CIG 005V010", "CIG 005V010", "Ceiling height variable between 005 and 010"),
        ("CIG 002 RY11L", "CIG 002 RY11L", "Ceiling height 002 over runway 11 left"),
        ("OCNL LTGICCG OHD", "OCNL LTGICCG OHD", "Occasional lightning (in-cloud, cloud-to-ground) overhead"),
        ("CONS LTGCA VC", "CONS LTGCA VC", "Continuous lightning (cloud-to-air) in the vicinity"),
        ("VIRGA", "VIRGA", "Virga"),
        ("VIRGA NE", "VIRGA NE", "Virga to the northeast"),
        ("WATERSPOUT B1520 2 W", "WATERSPOUT B1520 2 W", "Waterspout began at 1520, 2sm west"),
        ("RAB1359E1415", "RAB1359E1415", "Rain began at 1359 and ended at 1415"),
        ("SNE45", "SNE45", "Snow ended at 45"),
        ("PRESRR", "PRESRR", "Pressure rising rapidly"),
        ("SLP132", "SLP132", "Sea level pressure 1013.2 hPa"),
        ("SLP982", "SLP982", "Sea level pressure 998.2 hPa"),
        ("SLPNO", "SLPNO", "Sea level pressure not available"),
        ("T00080011", "T00080011", "Temperature 0.8°C (33°F), dewpoint 1.1°C (34°F)"),
        ("$", "$", "Maintenance is needed on the system"),
    ];

    for (input, raw, expected) in cases {
        let out = strict(input);
        assert_eq!(out, vec![(raw.to_string(), expected.to_string())], "input={input}");
    }
}

#[test]
fn full_remarks_section_in_extraction_order() {
    let out = strict("RMK AO2 PK WND 28045/1955 WSHFT 1715 FROPA TWR VIS 1 1/2 RAB1359E1415 PRESFR SLP132 T01170106 $");
    let raws: Vec<&str> = out.iter().map(|(raw, _)| raw.as_str()).collect();
    assert_eq!(
        raws,
        vec![
            "RMK",
            "AO2",
            "PK WND 28045/1955",
            "WSHFT 1715 FROPA",
            "TWR VIS 1 1/2",
            "RAB1359E1415",
            "PRESFR",
            "SLP132",
            "T01170106",
            "$",
        ]
    );
    assert_eq!(out[8].1, "Temperature 11.7°C (53°F), dewpoint 10.6°C (51°F)");
}

#[test]
fn compass_points_read_the_same_across_groups() {
    let out = strict("OCNL LTGCG DSNT SW VIRGA SW");
    assert_eq!(
        out,
        vec![
            (
                "OCNL LTGCG DSNT SW".to_string(),
                "Occasional lightning (cloud-to-ground) distant to the southwest".to_string()
            ),
            ("VIRGA SW".to_string(), "Virga to the southwest".to_string()),
        ]
    );
}

#[test]
fn minus_zero_temperature_reads_as_zero() {
    assert_eq!(
        strict("T10000000"),
        vec![("T10000000".to_string(), "Temperature 0.0°C (32°F), dewpoint 0.0°C (32°F)".to_string())]
    );
}

#[test]
fn repeated_groups_are_all_translated() {
    let out = strict("RAB05 SNB20E45");
    assert_eq!(
        out,
        vec![
            ("RAB05".to_string(), "Rain began at 05".to_string()),
            ("SNB20E45".to_string(), "Snow began at 20 and ended at 45".to_string()),
        ]
    );
}

#[test]
fn unknown_groups_are_left_alone() {
    let parser = remarks::parser().unwrap();
    let run = parser.run_with_metrics("RMK AO2 SNINCR 2/10 SLP045", &ParseOptions::default()).unwrap();
    assert_eq!(run.translations.len(), 3);
    assert_eq!(run.metrics.leftover, "SNINCR 2/10");
}

#[test]
fn strict_mode_aborts_on_impossible_time() {
    let parser = remarks::parser().unwrap();
    let err = parser.parse("RMK AO2 RAB2599 SLP132", &ParseOptions::default()).unwrap_err();
    assert_eq!(err, Error::Translation(TranslationError::InvalidTime { value: "2599".into() }));
}

#[test]
fn lenient_mode_records_failure_and_continues() {
    let parser = remarks::parser().unwrap();
    let out = parser.parse("RMK AO2 RAB2599 SLP132", &ParseOptions::lenient()).unwrap();
    assert_eq!(out.get("Begin/End Precip/TS"), Some("ERROR: invalid time '2599'"));
    assert_eq!(out.get("SLP132"), Some("Sea level pressure 1013.2 hPa"));
    assert!(!out.contains_key("RAB2599"));
    assert_eq!(out.len(), 4);
}

#[test]
fn handlers_cover_every_atom_once() {
    let handlers = remarks::handlers().unwrap();
    let mut names: Vec<&str> = handlers.iter().map(|h| h.name()).collect();
    assert_eq!(names.len(), 17);
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 17);
}
