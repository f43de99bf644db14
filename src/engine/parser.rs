//! Handler registry and the extraction loop.
//!
//! The parser owns an ordered list of handlers and repeatedly pulls atoms out
//! of a working copy of the input:
//!
//! ```text
//! working = input
//! loop:
//!   handler = first registered, not failed, handler.applies(working)
//!   none?     -> done
//!   translate -> Ok(text)  : (raw, working) = atom.extract(working)
//!                            out[raw] = text
//!             -> Err(Translation) + strict   : abort, no partial output
//!             -> Err(Translation) + lenient  : out[atom name] = prefix + msg
//!                                              mark handler failed
//! ```
//!
//! ## Ordering
//!
//! Registration order is trial order. After every extraction the scan restarts
//! from the first handler, so a later handler always sees the string with the
//! earlier handlers' matches already removed.
//!
//! ## Termination
//!
//! Every extraction removes a non-empty span, so the working string shrinks
//! strictly. Every lenient failure removes one handler from consideration.
//! The loop therefore ends after at most `len(input)` extractions plus
//! `len(handlers)` failures.
//!
//! ## Reentrancy
//!
//! The working string and the failed set are locals of one call. `parse`
//! takes `&self`, so a registry that is not being mutated can be shared
//! across threads.

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use log::{debug, trace};

use super::handler::Handler;
use super::metrics::{ParseMetrics, RunResult, StepMetrics, StepOutcome};
use crate::Translations;
use crate::error::{Error, Result};

/// Default prefix for failures recorded in lenient mode.
pub const DEFAULT_ERROR_PREFIX: &str = "ERROR: ";

/// Stable identity of a registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(usize);

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Options that affect failure handling during a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Abort on the first translation failure (default `true`).
    pub strict: bool,
    /// Prepended to failure messages recorded in lenient mode.
    pub error_prefix: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions { strict: true, error_prefix: DEFAULT_ERROR_PREFIX.to_string() }
    }
}

impl ParseOptions {
    /// Lenient options with the default prefix.
    pub fn lenient() -> Self {
        ParseOptions { strict: false, ..Self::default() }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }
}

/// Ordered registry of handlers.
///
/// Usage: build once (typically per report dialect), `register` handlers in
/// priority order, then call `parse` as often as needed.
#[derive(Debug, Default, Clone)]
pub struct Parser {
    handlers: Vec<(HandlerId, Handler)>,
    next_id: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the registry and return its id.
    pub fn register(&mut self, handler: Handler) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Remove the handler registered under `id`.
    pub fn unregister(&mut self, id: HandlerId) -> Result<Handler> {
        let idx = self
            .handlers
            .iter()
            .position(|(hid, _)| *hid == id)
            .ok_or_else(|| Error::not_registered(format!("handler {id}")))?;
        Ok(self.handlers.remove(idx).1)
    }

    /// Remove the first registered handler equal to `handler`.
    pub fn unregister_handler(&mut self, handler: &Handler) -> Result<Handler> {
        let idx = self
            .handlers
            .iter()
            .position(|(_, h)| h == handler)
            .ok_or_else(|| Error::not_registered(handler))?;
        Ok(self.handlers.remove(idx).1)
    }

    /// Registered handlers in trial order.
    pub fn handlers(&self) -> impl Iterator<Item = &Handler> {
        self.handlers.iter().map(|(_, h)| h)
    }

    pub fn get(&self, id: HandlerId) -> Option<&Handler> {
        self.handlers.iter().find(|(hid, _)| *hid == id).map(|(_, h)| h)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Translate every recognised atom in `input`.
    ///
    /// Keys are the raw matched text (or the atom name for lenient failures),
    /// in extraction order.
    pub fn parse(&self, input: &str, options: &ParseOptions) -> Result<Translations> {
        self.run_with_metrics(input, options).map(|run| run.translations)
    }

    /// First handler, in registration order, that applies to `working` and
    /// has not failed during this call.
    fn next_applicable(&self, working: &str, failed: &HashSet<HandlerId>) -> Option<(HandlerId, &Handler)> {
        self.handlers
            .iter()
            .filter(|(id, _)| !failed.contains(id))
            .find(|(_, h)| {
                let applies = h.applies(working);
                trace!("[parse:applies] handler=\"{}\" applies={}", h.name(), applies);
                applies
            })
            .map(|(id, h)| (*id, h))
    }

    /// Run the extraction loop and return the translations with a trace.
    pub fn run_with_metrics(&self, input: &str, options: &ParseOptions) -> Result<RunResult> {
        let total_start = Instant::now();
        let mut translations = Translations::new();
        let mut metrics = ParseMetrics::default();

        if input.is_empty() {
            metrics.total = total_start.elapsed();
            return Ok(RunResult { translations, metrics });
        }

        let mut working = input.to_string();
        let mut failed: HashSet<HandlerId> = HashSet::new();

        while let Some((id, handler)) = self.next_applicable(&working, &failed) {
            let step_start = Instant::now();

            let outcome = match handler.translate(&working) {
                Ok(text) => {
                    let (raw, remainder) = handler.atom().extract(&working)?;
                    debug!("[parse:extract] handler=\"{}\" raw=\"{}\" text=\"{}\"", handler.name(), raw, text);
                    working = remainder;
                    translations.insert(raw.clone(), text.clone());
                    StepOutcome::Translated { raw, text }
                }
                Err(Error::Translation(err)) if !options.strict => {
                    let message = format!("{}{}", options.error_prefix, err);
                    debug!("[parse:failed] handler=\"{}\" id={} message=\"{}\"", handler.name(), id, message);
                    failed.insert(id);
                    translations.insert(handler.name(), message.clone());
                    StepOutcome::Failed { message }
                }
                Err(err) => {
                    debug!("[parse:abort] handler=\"{}\" error=\"{}\"", handler.name(), err);
                    return Err(err);
                }
            };

            metrics.steps.push(StepMetrics {
                handler: handler.name().to_string(),
                outcome,
                duration: step_start.elapsed(),
            });
        }

        metrics.leftover = working.split_whitespace().collect::<Vec<_>>().join(" ");
        metrics.total = total_start.elapsed();

        Ok(RunResult { translations, metrics })
    }
}
