//! Handlers: an atom bound to the function that translates it.
//!
//! ```text
//! Handler ──applies(s)──▶ atom.contains(s)
//!         ──translate(s)─▶ applies? ─no─▶ Error::CanNotHandle
//!                             │
//!                            yes
//!                             ▼
//!                  Translator::Captures(caps)     (raw regex captures)
//!                  Translator::Atom(&atom, s)     (atom + full string)
//! ```
//!
//! The translator kind is fixed when the handler is built. A translator that
//! wants captures can only be bound to an atom whose rule produces them.

use std::fmt;
use std::sync::Arc;

use regex::Captures;

use crate::engine::atom::Atom;
use crate::error::{Error, Result, TranslationError};

pub(crate) type CapturesFn = dyn Fn(&Captures<'_>) -> Result<String, TranslationError> + Send + Sync;
pub(crate) type AtomFn = dyn Fn(&Atom, &str) -> Result<String, TranslationError> + Send + Sync;

/// The translation function bound to a handler.
#[derive(Clone)]
pub enum Translator {
    /// Receives the capture groups of the atom's first match.
    Captures(Arc<CapturesFn>),
    /// Receives the atom itself and the whole string being parsed.
    Atom(Arc<AtomFn>),
}

impl Translator {
    fn same_fn(&self, other: &Translator) -> bool {
        match (self, other) {
            (Translator::Captures(a), Translator::Captures(b)) => Arc::ptr_eq(a, b),
            (Translator::Atom(a), Translator::Atom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translator::Captures(_) => f.write_str("Translator::Captures(<function>)"),
            Translator::Atom(_) => f.write_str("Translator::Atom(<function>)"),
        }
    }
}

/// Pairs one [`Atom`] with one [`Translator`].
///
/// Cloning is cheap; clones compare equal to the original.
#[derive(Debug, Clone)]
pub struct Handler {
    atom: Atom,
    translator: Translator,
}

impl Handler {
    /// Bind `translator` to `atom`.
    ///
    /// Fails with [`Error::TypeMismatch`] when a `Captures` translator is
    /// paired with a rule that has no capture groups.
    pub fn new(atom: Atom, translator: Translator) -> Result<Self> {
        if matches!(translator, Translator::Captures(_)) && !atom.rule().supports_captures() {
            return Err(Error::type_mismatch(format!(
                "atom '{}' does not produce captures for its translator",
                atom.name()
            )));
        }
        Ok(Handler { atom, translator })
    }

    /// Handler whose translator receives the atom and the full string.
    ///
    /// Any atom works with this contract, so construction cannot fail.
    pub fn with_atom_fn<F>(atom: Atom, f: F) -> Self
    where
        F: Fn(&Atom, &str) -> Result<String, TranslationError> + Send + Sync + 'static,
    {
        Handler { atom, translator: Translator::Atom(Arc::new(f)) }
    }

    /// Handler whose translator receives the raw regex captures.
    pub fn with_captures_fn<F>(atom: Atom, f: F) -> Result<Self>
    where
        F: Fn(&Captures<'_>) -> Result<String, TranslationError> + Send + Sync + 'static,
    {
        Handler::new(atom, Translator::Captures(Arc::new(f)))
    }

    /// Handler that always produces the same sentence.
    pub fn constant(atom: Atom, text: &'static str) -> Self {
        Handler::with_atom_fn(atom, move |_, _| Ok(text.to_string()))
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    pub fn name(&self) -> &str {
        self.atom.name()
    }

    /// True when this handler can translate something in `input`.
    pub fn applies(&self, input: &str) -> bool {
        self.atom.contains(input)
    }

    /// Translate the atom found in `input`.
    ///
    /// The translator's output is returned unchanged. Its failures come back
    /// as [`Error::Translation`], distinct from [`Error::CanNotHandle`].
    pub fn translate(&self, input: &str) -> Result<String> {
        let not_handled = || Error::CanNotHandle { atom: self.atom.to_string(), input: input.to_string() };

        match &self.translator {
            Translator::Captures(f) => {
                let caps = self.atom.captures(input).ok_or_else(not_handled)?;
                Ok(f(&caps)?)
            }
            Translator::Atom(f) => {
                if !self.applies(input) {
                    return Err(not_handled());
                }
                Ok(f(&self.atom, input)?)
            }
        }
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.translator.same_fn(&other.translator)
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler(atom: {})", self.atom.name())
    }
}
