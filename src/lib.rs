//! Translate encoded aviation weather fields into readable English.
//!
//! The core is a small extraction pipeline: an [`Atom`] recognises one code
//! group, a [`Handler`] binds it to a translation function and a [`Parser`]
//! repeatedly pulls recognised atoms out of a report fragment, mapping the raw
//! text to a sentence.
//!
//! ```
//! use metartrans::translate_remarks;
//!
//! let out = translate_remarks("RMK AO2 RAB1359E1415 SLP132").unwrap();
//! assert_eq!(out.get("RAB1359E1415"), Some("Rain began at 1359 and ended at 1415"));
//! assert_eq!(out.get("SLP132"), Some("Sea level pressure 1013.2 hPa"));
//! ```
//!
//! Body fields of a decoded report (wind, visibility, temperature, ...) are
//! handled by the pure formatting helpers in [`format`], and whole reports by
//! [`translate_metar`] / [`translate_taf`].

extern crate self as metartrans;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod format;
pub mod remarks;
mod report;

pub use api::{default_parser, translate_remarks, translate_remarks_verbose, translate_remarks_with};
pub use engine::{
    Atom, AtomSpan, DEFAULT_ERROR_PREFIX, Fields, Handler, HandlerId, MatchRule, ParseMetrics, ParseOptions, Parser,
    RunResult, StepMetrics, StepOutcome, Translator,
};
pub use error::{Error, Result, TranslationError};
pub use report::{
    MetarData, MetarTranslations, ReportData, TafData, TafLine, TafLineTranslations, TafTranslations, Units,
    translate_metar, translate_taf,
};

// --- Translations: ordered raw -> text mapping -------------------------------

/// Result of a parse: raw matched text (or atom name, for recorded failures)
/// mapped to translated text.
///
/// Entries keep insertion order, which is extraction order. Inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: Vec<(String, String)>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `raw -> text`, returning the previous text for `raw` if any.
    pub fn insert(&mut self, raw: impl Into<String>, text: impl Into<String>) -> Option<String> {
        let raw = raw.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(k, _)| *k == raw) {
            Some((_, v)) => Some(std::mem::replace(v, text)),
            None => {
                self.entries.push((raw, text));
                None
            }
        }
    }

    pub fn get(&self, raw: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == raw).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, raw: &str) -> bool {
        self.get(raw).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }
}

impl IntoIterator for Translations {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Translations::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}
