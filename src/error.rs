//! Error types for atoms, handlers and the parser.
//!
//! Two families are kept apart:
//!
//! - [`Error`] covers contract violations (bad construction, unknown handler,
//!   a handler asked to translate text it does not match). These always
//!   surface immediately.
//! - [`TranslationError`] is raised by translation functions when an atom
//!   matched syntactically but cannot be turned into a sentence. The parser
//!   decides what to do with it based on `ParseOptions::strict`.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by atoms, handlers and the parser registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor or registry operation received a value of the wrong kind
    /// (an empty atom name, an invalid pattern, a translator that needs
    /// captures bound to a rule without them).
    #[error("type mismatch: {message}")]
    TypeMismatch { message: String },

    /// Something was looked up where it is not: an atom span in a string
    /// being extracted from, or a handler in a parser being unregistered from.
    #[error("{item} not found in {within}")]
    NotFound { item: String, within: String },

    /// A handler was asked to translate a string its atom does not match.
    #[error("atom '{atom}' has nothing to translate from '{input}'")]
    CanNotHandle { atom: String, input: String },

    /// The atom matched but its translation function gave up.
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl Error {
    pub(crate) fn type_mismatch(message: impl Into<String>) -> Self {
        Error::TypeMismatch { message: message.into() }
    }

    pub(crate) fn atom_not_found(atom: &str, input: &str) -> Self {
        Error::NotFound { item: format!("atom '{atom}'"), within: format!("'{input}'") }
    }

    pub(crate) fn not_registered(handler: impl fmt::Display) -> Self {
        Error::NotFound { item: handler.to_string(), within: "parser".to_string() }
    }
}

/// Semantic failure while formatting a matched atom.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A named field expected by the translation was absent from the decode.
    #[error("missing field '{field}' in '{input}'")]
    MissingField { field: &'static str, input: String },

    /// A field was present but holds a code the translation does not know.
    #[error("unrecognized {field} '{value}'")]
    UnknownCode { field: &'static str, value: String },

    /// A clock time that does not exist (hour over 23, minute over 59).
    #[error("invalid time '{value}'")]
    InvalidTime { value: String },

    /// Free-form failure from a caller supplied translation function.
    #[error("{0}")]
    Other(String),
}

impl TranslationError {
    /// Build a free-form translation error.
    pub fn other(message: impl Into<String>) -> Self {
        TranslationError::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_error_is_transparent() {
        let err: Error = TranslationError::UnknownCode { field: "precip", value: "XX".into() }.into();
        assert_eq!(err.to_string(), "unrecognized precip 'XX'");
        assert!(matches!(err, Error::Translation(_)));
    }

    #[test]
    fn not_found_covers_atoms_and_handlers() {
        let err = Error::atom_not_found("Virga", "AO2 SLP132");
        assert_eq!(err.to_string(), "atom 'Virga' not found in 'AO2 SLP132'");

        let err = Error::not_registered("Handler(atom: Virga)");
        assert_eq!(err.to_string(), "Handler(atom: Virga) not found in parser");
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn can_not_handle_names_atom_and_input() {
        let err = Error::CanNotHandle { atom: "Virga".into(), input: "AO2 SLP132".into() };
        assert_eq!(err.to_string(), "atom 'Virga' has nothing to translate from 'AO2 SLP132'");
    }
}
