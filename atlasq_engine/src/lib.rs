#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Pattern-action query engine.
//!
//! Free-text input is tokenized into lowercase words, matched against an
//! ordered table of word templates with `%` wildcard slots, and dispatched
//! to the action bound to the first template that matches. Matching is pure
//! and deterministic; actions are the only place side effects (network
//! lookups) happen.

pub mod matcher;
pub mod pattern;
pub mod table;
pub mod token;

pub use matcher::{Binding, match_pattern};
pub use pattern::{Pattern, PatternToken, WILDCARD};
pub use table::{
    Action, ActionOutcome, NO_ANSWERS, NOT_UNDERSTOOD, Outcome, PatternActionTable,
};
pub use token::tokenize;
