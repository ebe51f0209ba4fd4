//! Wildcard pattern matching.
//!
//! Matches a [`Pattern`] against a tokenized query using two cursors and
//! plain backtracking. A wildcard takes the shortest span (at least one
//! token) that lets the rest of the pattern match; when that choice
//! deadlocks the remainder, the span grows and the tail is retried.
//! Queries are whole sentences, so the worst case stays tiny and no
//! memoization is needed.

use crate::pattern::{Pattern, PatternToken};

/// The wildcard captures of one successful match: one non-empty token span
/// per wildcard slot, in left-to-right slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    spans: Vec<Vec<String>>,
}

impl Binding {
    /// The captured spans in slot order.
    #[must_use]
    pub fn spans(&self) -> &[Vec<String>] {
        &self.spans
    }

    /// Join the span for slot `index` into a single name, e.g.
    /// `["the", "united", "states"]` becomes `"the united states"`.
    #[must_use]
    pub fn entity(&self, index: usize) -> Option<String> {
        self.spans.get(index).map(|span| span.join(" "))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Match `pattern` against the whole of `input`.
///
/// Returns the wildcard [`Binding`] on success and `None` when no
/// partition of the input fits the pattern. Pure and deterministic: ties
/// between partitions resolve to the leftmost-shortest wildcard spans.
#[must_use]
pub fn match_pattern(pattern: &Pattern, input: &[String]) -> Option<Binding> {
    // Cheap length gate: every fixed word and every wildcard needs at
    // least one input token.
    if input.len() < pattern.tokens().len() {
        return None;
    }

    let mut spans = Vec::with_capacity(pattern.wildcard_count());
    if match_from(pattern.tokens(), input, &mut spans) {
        Some(Binding { spans })
    } else {
        None
    }
}

fn match_from(pattern: &[PatternToken], input: &[String], spans: &mut Vec<Vec<String>>) -> bool {
    let Some((head, rest)) = pattern.split_first() else {
        // Pattern exhausted: the input must be fully consumed too.
        return input.is_empty();
    };

    match head {
        PatternToken::Word(word) => {
            input.first().is_some_and(|token| token == word)
                && match_from(rest, &input[1..], spans)
        }
        PatternToken::Wildcard => {
            for len in 1..=input.len() {
                spans.push(input[..len].to_vec());
                if match_from(rest, &input[len..], spans) {
                    return true;
                }
                spans.pop();
            }
            false
        }
    }
}
