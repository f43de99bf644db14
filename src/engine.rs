//! Atom extraction engine.
//!
//! This module is the core of the crate. It is split into focused submodules
//! under `src/engine/`:
//!
//! ```text
//! Atom      (atom.rs)     find / contains / extract / decode over a string
//!   │
//!   ▼
//! Handler   (handler.rs)  atom + translator, applies / translate
//!   │
//!   ▼
//! Parser    (parser.rs)   ordered registry, extraction loop, strict/lenient
//!   │
//!   ▼
//! Translations + ParseMetrics (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `atom.rs`: `Atom`, `MatchRule`, `AtomSpan` and decoded `Fields`.
//! - `handler.rs`: `Handler` and the two `Translator` contracts.
//! - `parser.rs`: `Parser`, `HandlerId` and `ParseOptions`.
//! - `metrics.rs`: per-step trace returned by `Parser::run_with_metrics`.
//!
//! ## Adding new atoms
//!
//! Catalog atoms live under `src/remarks/`. A new code group needs an atom
//! (pattern with named groups), a translation function and a line in
//! `remarks::handlers` at the right position: registration order decides
//! which handler claims overlapping text first.
//!
//! ## Debugging
//!
//! The parser logs through the `log` facade: `debug` for every extraction or
//! failure, `trace` for every applicability check.

#[path = "engine/atom.rs"]
mod atom;
#[path = "engine/handler.rs"]
mod handler;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;

pub use atom::{Atom, AtomSpan, Fields, MatchRule};
pub use handler::{Handler, Translator};
pub use metrics::{ParseMetrics, RunResult, StepMetrics, StepOutcome};
pub use parser::{DEFAULT_ERROR_PREFIX, HandlerId, ParseOptions, Parser};
