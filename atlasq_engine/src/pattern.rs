//! Word-pattern templates.
//!
//! A pattern is an ordered sequence of literal words and `%` wildcard
//! slots, parsed once at registration time and immutable afterwards. A
//! wildcard stands for one or more contiguous input words.

use std::fmt;

/// The wildcard marker in pattern templates.
pub const WILDCARD: &str = "%";

/// One element of a pattern: a literal word or a wildcard slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// Must equal the input token exactly.
    Word(String),
    /// Consumes one or more contiguous input tokens.
    Wildcard,
}

/// An immutable word template, e.g. `what is the area of %`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
}

impl Pattern {
    /// Parse a whitespace-separated template. Each `%` word becomes a
    /// wildcard slot; everything else is a literal word.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let tokens = template
            .split_whitespace()
            .map(|word| {
                if word == WILDCARD {
                    PatternToken::Wildcard
                } else {
                    PatternToken::Word(word.to_string())
                }
            })
            .collect();

        Self { tokens }
    }

    /// The pattern's tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Number of wildcard slots in the pattern.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, PatternToken::Wildcard))
            .count()
    }

    /// Number of literal words in the pattern.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.tokens.len() - self.wildcard_count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match token {
                PatternToken::Word(w) => write!(f, "{w}")?,
                PatternToken::Wildcard => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}
