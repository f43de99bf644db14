use std::collections::HashMap;

use once_cell::sync::Lazy;

// Maps
/// Sky cover codes to the phrase preceding the layer altitude.
pub static CLOUD_COVER: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("OVC", "Overcast layer at"),
        ("BKN", "Broken layer at"),
        ("SCT", "Scattered clouds at"),
        ("FEW", "Few clouds at"),
        ("VV", "Vertical visibility up to"),
    ])
});

/// Cloud type modifiers appended in parentheses.
pub static CLOUD_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AC", "Altocumulus"),
        ("ACC", "Altocumulus Castellanus"),
        ("AS", "Altostratus"),
        ("CB", "Cumulonimbus"),
        ("CC", "Cirrocumulus"),
        ("CI", "Cirrus"),
        ("CS", "Cirrostratus"),
        ("CU", "Cumulus"),
        ("FC", "Fractocumulus"),
        ("FS", "Fractostratus"),
        ("NS", "Nimbostratus"),
        ("SC", "Stratocumulus"),
        ("ST", "Stratus"),
        ("TCU", "Towering Cumulus"),
    ])
});

/// Two-letter weather descriptors and phenomena.
pub static WX_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("BC", "Patchy"),
        ("BL", "Blowing"),
        ("BR", "Mist"),
        ("DR", "Low Drifting"),
        ("DS", "Duststorm"),
        ("DU", "Widespread Dust"),
        ("DZ", "Drizzle"),
        ("FC", "Funnel Cloud"),
        ("FG", "Fog"),
        ("FU", "Smoke"),
        ("FZ", "Freezing"),
        ("GR", "Hail"),
        ("GS", "Small Hail"),
        ("HZ", "Haze"),
        ("IC", "Ice Crystals"),
        ("MI", "Shallow"),
        ("PL", "Ice Pellets"),
        ("PO", "Dust Whirls"),
        ("PR", "Partial"),
        ("PY", "Spray"),
        ("RA", "Rain"),
        ("SA", "Sand"),
        ("SG", "Snow Grains"),
        ("SH", "Showers"),
        ("SN", "Snow"),
        ("SQ", "Squall"),
        ("SS", "Sandstorm"),
        ("TS", "Thunderstorm"),
        ("UP", "Unknown Precip"),
        ("VA", "Volcanic Ash"),
        ("VC", "Vicinity"),
    ])
});

/// TAF turbulence intensity band (second digit of a `5` group).
pub static TURBULENCE_CONDITIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("0", "None"),
        ("1", "Light turbulence"),
        ("2", "Occasional moderate turbulence in clear air"),
        ("3", "Frequent moderate turbulence in clear air"),
        ("4", "Occasional moderate turbulence in clouds"),
        ("5", "Frequent moderate turbulence in clouds"),
        ("6", "Occasional severe turbulence in clear air"),
        ("7", "Frequent severe turbulence in clear air"),
        ("8", "Occasional severe turbulence in clouds"),
        ("9", "Frequent severe turbulence in clouds"),
        ("X", "Extreme turbulence"),
    ])
});

/// TAF icing intensity band (second digit of a `6` group).
pub static ICING_CONDITIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("0", "No icing"),
        ("1", "Light icing"),
        ("2", "Light icing in clouds"),
        ("3", "Light icing in precipitation"),
        ("4", "Moderate icing"),
        ("5", "Moderate icing in clouds"),
        ("6", "Moderate icing in precipitation"),
        ("7", "Severe icing"),
        ("8", "Severe icing in clouds"),
        ("9", "Severe icing in precipitation"),
    ])
});
