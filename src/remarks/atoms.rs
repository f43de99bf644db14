//! Catalog of recognised remark code groups.
//!
//! Each atom is compiled once on first use. Named capture groups are the
//! field names the translation functions in `translate.rs` read.

use once_cell::sync::Lazy;

use crate::Atom;

/// `RMK`, start of the remarks section.
pub static REMARKS_IDENTIFIER: Lazy<Atom> = Lazy::new(|| atom!("Remarks Identifier", regex: r"\bRMK\b"));

/// `AO1` / `AO2`, automated station type.
pub static AUTOMATED_STATION: Lazy<Atom> =
    Lazy::new(|| atom!("Automated Station", regex: r"\bAO(?P<kind>[12])\b"));

pub static AIRCRAFT_MISHAP: Lazy<Atom> = Lazy::new(|| atom!("Aircraft Mishap", literal: "ACFT MSHP"));

/// `PK WND 28045/1955`: direction, speed and time of the peak wind.
pub static PEAK_WIND: Lazy<Atom> = Lazy::new(|| {
    atom!("Peak Wind", regex: r"\bPK WND (?P<direction>\d{3})(?P<speed>\d{2,3})/(?P<time>\d{4}|\d{2})\b")
});

/// `WSHFT 1715 FROPA`
pub static WIND_SHIFT: Lazy<Atom> =
    Lazy::new(|| atom!("Wind Shift", regex: r"\bWSHFT (?P<time>\d{4}|\d{2})(?P<fropa> FROPA)?\b"));

/// `TWR VIS 1 1/2` / `SFC VIS 1/4`
pub static TOWER_OR_SURFACE_VISIBILITY: Lazy<Atom> = Lazy::new(|| {
    atom!(
        "Tower or Surface Visibility",
        regex: r"\b(?P<source>TWR|SFC) VIS (?P<visibility>\d{1,2} \d/\d{1,2}|\d/\d{1,2}|\d{1,2})\b",
    )
});

/// `VIS 2 1/2 RWY11`
pub static VISIBILITY_AT_SECOND_LOCATION: Lazy<Atom> = Lazy::new(|| {
    atom!(
        "Visibility at Second Location",
        regex: r"\bVIS (?P<visibility>\d{1,2} \d/\d{1,2}|\d/\d{1,2}|\d{1,2}) (?P<location>RW?Y\d{2}[LCR]?)\b",
    )
});

/// `CIG 005V010`
pub static VARIABLE_CEILING_HEIGHT: Lazy<Atom> =
    Lazy::new(|| atom!("Variable Ceiling Height", regex: r"\bCIG (?P<low>\d{3})V(?P<high>\d{3})\b"));

/// `CIG 005 RY11L`
pub static CEILING_HEIGHT_AT_SECOND_LOCATION: Lazy<Atom> = Lazy::new(|| {
    atom!(
        "Ceiling Height at Second Location",
        regex: r"\bCIG (?P<height>\d{3}) (?P<location>RW?Y\d{2}[LCR]?)\b",
    )
});

/// `FRQ LTGICCG OHD`, `OCNL LTGCG DSNT SW`
pub static LIGHTNING: Lazy<Atom> = Lazy::new(|| {
    atom!(
        "Lightning Activity",
        regex: r"\b(?P<frequency>OCNL|FRQ|CONS) LTG(?P<types>(?:IC|CC|CG|CA)*)(?: (?P<location>OHD|VC|ALQDS|DSNT(?: (?:NE|NW|SE|SW|N|E|S|W)(?:-(?:NE|NW|SE|SW|N|E|S|W))?)?|(?:NE|NW|SE|SW|N|E|S|W)(?:-(?:NE|NW|SE|SW|N|E|S|W))?))?\b",
    )
});

/// `VIRGA SW`
pub static VIRGA: Lazy<Atom> =
    Lazy::new(|| atom!("Virga", regex: r"\bVIRGA(?: (?P<direction>NE|NW|SE|SW|N|E|S|W))?\b"));

/// `TORNADO B13 6 NE`
pub static TORNADIC_ACTIVITY: Lazy<Atom> = Lazy::new(|| {
    atom!(
        "Tornadic Activity",
        regex: r"\b(?P<kind>TORNADO|FUNNEL CLOUD|WATERSPOUT) (?P<event>[BE])(?P<time>\d{4}|\d{2})(?: (?P<distance>\d{1,2}) (?P<direction>NE|NW|SE|SW|N|E|S|W))?\b",
    )
});

/// `RAB1359E1415`, `TSB05`: beginning and ending of precipitation or thunderstorms.
pub static BEGIN_END_PRECIPITATION: Lazy<Atom> = Lazy::new(|| {
    atom!(
        "Begin/End Precip/TS",
        regex: r"\b(?P<precip>RA|SN|DZ|GR|GS|PL|SG|IC|UP|TS)(?P<first_type>[BE])(?P<first_time>\d{4}|\d{2})(?P<second>(?P<second_type>[BE])(?P<second_time>\d{4}|\d{2}))?\b",
    )
});

/// `PRESRR` / `PRESFR`
pub static PRESSURE_CHANGE: Lazy<Atom> =
    Lazy::new(|| atom!("Pressure Change", regex: r"\bPRES(?P<trend>RR|FR)\b"));

/// `SLP132` / `SLPNO`
pub static SEA_LEVEL_PRESSURE: Lazy<Atom> =
    Lazy::new(|| atom!("Sea Level Pressure", regex: r"\bSLP(?P<pressure>\d{3}|NO)\b"));

/// `T01170106`: temperature and dewpoint in tenths of a degree.
pub static HOURLY_TEMPERATURE: Lazy<Atom> = Lazy::new(|| {
    atom!(
        "Hourly Temperature",
        regex: r"\bT(?P<temp_sign>[01])(?P<temp>\d{3})(?:(?P<dew_sign>[01])(?P<dew>\d{3}))?\b",
    )
});

/// `$`, station needs maintenance.
pub static MAINTENANCE_INDICATOR: Lazy<Atom> = Lazy::new(|| atom!("Maintenance Indicator", literal: "$"));
