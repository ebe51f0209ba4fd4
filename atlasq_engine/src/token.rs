//! Query-line normalization.
//!
//! The matcher compares tokens literally, so everything reaching it must
//! already be lowercase with question marks stripped. This is the single
//! place that normalization happens.

/// Split a raw query line into engine tokens.
///
/// Lowercases, drops question marks, and splits on whitespace. Returns an
/// empty vector for blank input.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    line.replace('?', "")
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_strips_question_marks() {
        assert_eq!(
            tokenize("What is the Area of France?"),
            vec!["what", "is", "the", "area", "of", "france"]
        );
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  bye \t "), vec!["bye"]);
    }

    #[test]
    fn test_tokenize_blank_line_is_empty() {
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("???").is_empty());
    }
}
