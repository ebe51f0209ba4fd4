//! Pattern-action dispatch.
//!
//! The [`PatternActionTable`] pairs each registered [`Pattern`] with a
//! boxed [`Action`] and resolves queries first-match-wins in registration
//! order. The table is built once at startup and never mutated afterwards;
//! a query that could match two templates always resolves via the earlier
//! one, so more specific templates must be registered before more general
//! ones.

use async_trait::async_trait;
use tracing::debug;

use crate::matcher::{Binding, match_pattern};
use crate::pattern::Pattern;

/// Answer returned when a pattern matched but its action had nothing to say.
pub const NO_ANSWERS: &str = "No answers";

/// Answer returned when no registered pattern matches the query.
pub const NOT_UNDERSTOOD: &str = "I don't understand";

/// What an action produced: answer lines, or a request to end the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Answer lines for the caller to display. May be empty; the table
    /// normalizes an empty list to [`NO_ANSWERS`].
    Answers(Vec<String>),
    /// The session should end. Carries no displayable text.
    EndSession,
}

/// Outcome of resolving one query against the table. Callers always get at
/// least one displayable line from [`Outcome::Answers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answers(Vec<String>),
    EndSession,
}

/// A query handler bound to one pattern.
///
/// Implementations receive the wildcard [`Binding`] of the match and
/// compute answer lines, usually by calling an external data source.
/// Failures propagate out of [`PatternActionTable::resolve`] untouched.
#[async_trait]
pub trait Action: Send + Sync {
    /// Stable name for logging.
    fn name(&self) -> &str;

    async fn run(&self, binding: Binding) -> anyhow::Result<ActionOutcome>;
}

struct Entry {
    pattern: Pattern,
    action: Box<dyn Action>,
}

/// Ordered, immutable dispatch table. Registration order is priority order.
#[derive(Default)]
pub struct PatternActionTable {
    entries: Vec<Entry>,
}

impl PatternActionTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Later entries only fire when every earlier pattern
    /// fails to match.
    pub fn register(&mut self, pattern: Pattern, action: Box<dyn Action>) {
        debug!("Registering pattern '{}' -> {}", pattern, action.name());
        self.entries.push(Entry { pattern, action });
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve one tokenized query.
    ///
    /// Tries entries in registration order and dispatches to the first
    /// whose pattern matches. An empty answer list becomes
    /// `["No answers"]`; no match at all becomes `["I don't understand"]`.
    /// Action errors propagate to the caller,
    /// which is expected to report them and keep the session alive.
    pub async fn resolve(&self, input: &[String]) -> anyhow::Result<Outcome> {
        for entry in &self.entries {
            let Some(binding) = match_pattern(&entry.pattern, input) else {
                continue;
            };

            debug!("Query matched '{}' -> {}", entry.pattern, entry.action.name());

            return match entry.action.run(binding).await? {
                ActionOutcome::Answers(answers) if answers.is_empty() => {
                    Ok(Outcome::Answers(vec![NO_ANSWERS.to_string()]))
                }
                ActionOutcome::Answers(answers) => Ok(Outcome::Answers(answers)),
                ActionOutcome::EndSession => Ok(Outcome::EndSession),
            };
        }

        Ok(Outcome::Answers(vec![NOT_UNDERSTOOD.to_string()]))
    }
}
