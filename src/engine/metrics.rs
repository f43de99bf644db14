//! Parse run metrics.
//!
//! The intended usage is:
//!
//! - `Parser::parse` for normal operation.
//! - `Parser::run_with_metrics` for debugging a fragment: which handler fired
//!   in which order, what it matched, what failed and what was left over.
//!
//! ## Design notes
//!
//! - One `StepMetrics` is recorded per loop iteration, so the step list reads
//!   in extraction order, the same order as the resulting `Translations`.
//! - `leftover` has its whitespace collapsed. Extraction itself never trims,
//!   this is only for display.

use crate::Translations;
use std::time::Duration;

/// What happened on one iteration of the parse loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The handler translated its atom and the span was removed.
    Translated { raw: String, text: String },
    /// The translator failed in lenient mode; the handler is skipped from now on.
    Failed { message: String },
}

/// Timing and outcome for a single handler invocation.
#[derive(Debug, Clone)]
pub struct StepMetrics {
    /// Atom name of the handler that ran.
    pub handler: String,
    pub outcome: StepOutcome,
    /// Elapsed time for translate + extract.
    pub duration: Duration,
}

#[derive(Debug, Default, Clone)]
pub struct ParseMetrics {
    /// Total elapsed time for [`Parser::run_with_metrics`](super::Parser::run_with_metrics).
    pub total: Duration,
    /// Steps in the order they ran.
    pub steps: Vec<StepMetrics>,
    /// Text no handler claimed.
    pub leftover: String,
}

impl ParseMetrics {
    /// Number of steps that failed and were recorded inline.
    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|s| matches!(s.outcome, StepOutcome::Failed { .. })).count()
    }
}

/// Parser output bundled with its trace.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub translations: Translations,
    pub metrics: ParseMetrics,
}
