//! Word-level tokenization
//!
//! A token is a maximal run of word characters, where a word character is
//! any Unicode alphanumeric or the underscore. Runs are case-folded to
//! lower case so that `"Engine"` and `"engine"` count as the same term.
//! Everything else (punctuation, whitespace, symbols) separates runs and
//! is never part of a token.

/// Returns true when `c` belongs to a word run.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterates over the lower-cased word tokens of `text`, in order.
///
/// No length filtering happens here; callers apply their own thresholds.
///
/// ```
/// use salience::nlp::tokenizer::word_tokens;
///
/// let tokens: Vec<String> = word_tokens("Hello, World!").collect();
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn word_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| !run.is_empty())
        .map(str::to_lowercase)
}

/// Truncates `text` to at most `max_chars` characters for preview display,
/// appending an ellipsis when anything was cut.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
/// Trailing whitespace is trimmed before the ellipsis.
///
/// ```
/// use salience::nlp::tokenizer::excerpt;
///
/// assert_eq!(excerpt("A short note", 80), "A short note");
/// assert_eq!(excerpt("abcdefghij", 4), "abcd...");
/// ```
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        word_tokens(text).collect()
    }

    #[test]
    fn test_basic_tokenization() {
        assert_eq!(tokens("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(tokens("RUST Rust rust"), vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(tokens("snake_case v2"), vec!["snake_case", "v2"]);
    }

    #[test]
    fn test_apostrophe_splits_runs() {
        assert_eq!(tokens("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_punctuation_only_input() {
        assert!(tokens("?!... --- ,,,").is_empty());
    }

    #[test]
    fn test_unicode_alphanumerics() {
        assert_eq!(tokens("Größe naïve"), vec!["größe", "naïve"]);
    }

    #[test]
    fn test_excerpt_returns_short_text_unchanged() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("abcdefghij", 10), "abcdefghij");
    }

    #[test]
    fn test_excerpt_cuts_and_appends_ellipsis() {
        assert_eq!(excerpt("abcdefghijk", 10), "abcdefghij...");
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_excerpt_trims_trailing_whitespace_before_ellipsis() {
        assert_eq!(excerpt("hello world", 6), "hello...");
    }
}
