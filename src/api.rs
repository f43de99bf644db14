use once_cell::sync::Lazy;

use crate::{ParseOptions, Parser, Result, RunResult, Translations, remarks};

static DEFAULT_PARSER: Lazy<Result<Parser>> = Lazy::new(remarks::parser);

/// The shared remarks parser with the full catalog registered.
///
/// Built on first use. The registry is never mutated afterwards, so it can be
/// used from any number of threads.
pub fn default_parser() -> Result<&'static Parser> {
    DEFAULT_PARSER.as_ref().map_err(Clone::clone)
}

/// Translate a remarks section, failing on the first group that cannot be
/// translated.
///
/// ```
/// let out = metartrans::translate_remarks("RMK AO2 PRESRR").unwrap();
/// assert_eq!(out.get("PRESRR"), Some("Pressure rising rapidly"));
/// ```
pub fn translate_remarks(text: &str) -> Result<Translations> {
    translate_remarks_with(text, &ParseOptions::default())
}

/// Translate a remarks section with explicit options.
pub fn translate_remarks_with(text: &str, options: &ParseOptions) -> Result<Translations> {
    default_parser()?.parse(text, options)
}

/// Like [`translate_remarks_with`], but also returns the per-step trace.
pub fn translate_remarks_verbose(text: &str, options: &ParseOptions) -> Result<RunResult> {
    default_parser()?.run_with_metrics(text, options)
}
