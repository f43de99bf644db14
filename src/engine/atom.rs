//! Atoms: named matchers over a report fragment.
//!
//! An [`Atom`] answers three orthogonal questions about a string:
//!
//! ```text
//! "AO2 PK WND 28045/1955 SLP132"
//!        └──────┬───────┘
//!   find     -> AtomSpan { matched: "PK WND 28045/1955", start: 4, end: 21 }
//!   contains -> true
//!   decode   -> { direction: "280", speed: "45", time: "1955" }
//! ```
//!
//! `extract` builds on `find` and splices the span out of the string. No
//! whitespace is trimmed around the hole, so `"A B C"` minus `"B"` is
//! `"A  C"`.
//!
//! Every query goes through the same first non-empty match, so repeated calls
//! within one parse always agree on the span.

use std::collections::HashMap;
use std::fmt;

use regex::{Captures, Regex};

use crate::error::{Error, Result, TranslationError};

/// A matched substring and its byte offsets (`end` is exclusive).
///
/// "No match" is expressed as `Option<AtomSpan>::None`, so a span always
/// carries all three values and `start < end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomSpan {
    pub matched: String,
    pub start: usize,
    pub end: usize,
}

/// How an atom recognises itself inside a string.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// Regular expression; named capture groups become decoded fields.
    Regex(Regex),
    /// Plain substring. Carries no fields.
    Literal(String),
}

impl MatchRule {
    /// Whether `decode` can ever return fields for this rule.
    pub fn supports_captures(&self) -> bool {
        matches!(self, MatchRule::Regex(_))
    }

    fn find(&self, input: &str) -> Option<AtomSpan> {
        match self {
            MatchRule::Regex(re) => re
                .find_iter(input)
                .find(|m| !m.is_empty())
                .map(|m| AtomSpan { matched: m.as_str().to_string(), start: m.start(), end: m.end() }),
            MatchRule::Literal(text) if text.is_empty() => None,
            MatchRule::Literal(text) => {
                input.find(text.as_str()).map(|start| AtomSpan { matched: text.clone(), start, end: start + text.len() })
            }
        }
    }
}

impl PartialEq for MatchRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MatchRule::Regex(a), MatchRule::Regex(b)) => a.as_str() == b.as_str(),
            (MatchRule::Literal(a), MatchRule::Literal(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MatchRule {}

/// A single recognised code group, e.g. a sea level pressure remark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    name: String,
    rule: MatchRule,
}

impl Atom {
    /// Create an atom, rejecting empty names.
    pub fn new(name: impl Into<String>, rule: MatchRule) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::type_mismatch("atom name must be a non-empty string"));
        }
        Ok(Atom { name, rule })
    }

    /// Compile `pattern` into a regex rule.
    ///
    /// An invalid pattern is reported as [`Error::TypeMismatch`]: the value
    /// handed in is not a usable matching rule.
    pub fn from_pattern(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|err| Error::type_mismatch(format!("'{pattern}' is not a valid pattern: {err}")))?;
        Atom::new(name, MatchRule::Regex(regex))
    }

    /// Catalog constructor used by the `atom!` macro; names are literals.
    #[doc(hidden)]
    pub fn builtin(name: &'static str, rule: MatchRule) -> Self {
        debug_assert!(!name.is_empty());
        Atom { name: name.to_string(), rule }
    }

    /// Return a copy of this atom matching with `rule` instead.
    ///
    /// A rule of a different kind than the current one is refused, since
    /// handlers bound to this atom were validated against its kind.
    pub fn with_rule(&self, rule: MatchRule) -> Result<Self> {
        if self.rule.supports_captures() != rule.supports_captures() {
            return Err(Error::type_mismatch(format!("atom '{}' cannot switch rule kind", self.name)));
        }
        Ok(Atom { name: self.name.clone(), rule })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &MatchRule {
        &self.rule
    }

    /// Locate the first non-empty match of the atom in `input`.
    pub fn find(&self, input: &str) -> Option<AtomSpan> {
        self.rule.find(input)
    }

    /// True when the atom occurs somewhere in `input`.
    pub fn contains(&self, input: &str) -> bool {
        self.find(input).is_some()
    }

    /// Return the matched text and `input` with the match spliced out.
    pub fn extract(&self, input: &str) -> Result<(String, String)> {
        let span = self
            .find(input)
            .ok_or_else(|| Error::atom_not_found(&self.name, input))?;

        let mut remainder = String::with_capacity(input.len() - (span.end - span.start));
        remainder.push_str(&input[..span.start]);
        remainder.push_str(&input[span.end..]);

        Ok((span.matched, remainder))
    }

    /// Capture groups of the first non-empty match. Literal rules have none.
    pub fn captures<'h>(&self, input: &'h str) -> Option<Captures<'h>> {
        match &self.rule {
            MatchRule::Regex(re) => re.captures_iter(input).find(|caps| caps.get(0).is_some_and(|m| !m.is_empty())),
            MatchRule::Literal(_) => None,
        }
    }

    /// Named fields of the first match; empty when nothing matches.
    pub fn decode(&self, input: &str) -> Fields {
        let MatchRule::Regex(re) = &self.rule else {
            return Fields::default();
        };
        let Some(caps) = self.captures(input) else {
            return Fields::default();
        };

        let values = re
            .capture_names()
            .flatten()
            .filter_map(|name| caps.name(name).map(|m| (name.to_string(), m.as_str().to_string())))
            .collect();

        Fields { source: caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default(), values }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            MatchRule::Regex(re) => write!(f, "Atom(name={}, pattern={})", self.name, re.as_str()),
            MatchRule::Literal(text) => write!(f, "Atom(name={}, literal={})", self.name, text),
        }
    }
}

/// Named values decoded from one atom match.
///
/// Only groups that took part in the match are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    source: String,
    values: HashMap<String, String>,
}

impl Fields {
    /// The full matched text the fields were decoded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Like [`get`](Self::get) but a missing field is a translation failure.
    pub fn require(&self, name: &'static str) -> Result<&str, TranslationError> {
        self.get(name).ok_or_else(|| TranslationError::MissingField { field: name, input: self.source.clone() })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
