//! Sentence segmentation
//!
//! Splits raw text into candidate sentences on runs of terminal
//! punctuation (`.`, `!`, `?`), trims each candidate, and drops the ones
//! too short to carry meaning. Surviving sentences are indexed by their
//! position among the kept ones, so indices stay contiguous from zero.
//!
//! The splitter is deliberately naive: abbreviations like `"Dr."` split
//! too, and the resulting fragments are expected to fall under the length
//! threshold rather than be special-cased.

use crate::types::{Sentence, SummarizerConfig};

/// Returns true for sentence-terminal punctuation.
#[inline]
fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Segments `text` into trimmed sentences longer than
/// [`min_sentence_chars`](SummarizerConfig::min_sentence_chars).
///
/// Consecutive terminals (`"?!"`, `"..."`) produce empty fragments between
/// them, which the length filter removes, so runs behave as a single
/// boundary. Text without any terminal punctuation is one candidate
/// sentence.
pub fn segment(text: &str, config: &SummarizerConfig) -> Vec<Sentence> {
    text.split(is_terminal)
        .map(str::trim)
        .filter(|candidate| candidate.chars().count() > config.min_sentence_chars)
        .enumerate()
        .map(|(index, candidate)| Sentence::new(candidate, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let config = SummarizerConfig::default();
        let sentences = segment(
            "This is the first sentence. And here is the second one!",
            &config,
        );
        assert_eq!(
            texts(&sentences),
            vec!["This is the first sentence", "And here is the second one"]
        );
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].index, 1);
    }

    #[test]
    fn test_punctuation_runs_act_as_one_boundary() {
        let config = SummarizerConfig::default();
        let sentences = segment("What is this?! A strange mystery...", &config);
        assert_eq!(
            texts(&sentences),
            vec!["What is this", "A strange mystery"]
        );
    }

    #[test]
    fn test_short_fragments_are_dropped() {
        let config = SummarizerConfig::default();
        assert!(segment("A. B. C.", &config).is_empty());
    }

    #[test]
    fn test_boundary_length_is_exclusive() {
        // A trimmed candidate of exactly min_sentence_chars is still noise.
        let config = SummarizerConfig::default();
        let sentences = segment("ABCDEFGHIJ. this sentence is long enough.", &config);
        assert_eq!(texts(&sentences), vec!["this sentence is long enough"]);
        // Indices are assigned after filtering, so the survivor is zero.
        assert_eq!(sentences[0].index, 0);
    }

    #[test]
    fn test_empty_and_whitespace_inputs() {
        let config = SummarizerConfig::default();
        assert!(segment("", &config).is_empty());
        assert!(segment("   \n\t  ", &config).is_empty());
    }

    #[test]
    fn test_text_without_terminals_is_one_sentence() {
        let config = SummarizerConfig::default();
        let sentences = segment("summarization without punctuation", &config);
        assert_eq!(texts(&sentences), vec!["summarization without punctuation"]);
        assert_eq!(sentences[0].index, 0);
    }

    #[test]
    fn test_short_text_without_terminals_is_dropped() {
        let config = SummarizerConfig::default();
        assert!(segment("tiny", &config).is_empty());
    }

    #[test]
    fn test_indices_are_contiguous() {
        let config = SummarizerConfig::default();
        let sentences = segment(
            "The first sentence is here. Now a second sentence. Finally a third sentence.",
            &config,
        );
        let indices: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_custom_threshold() {
        let config = SummarizerConfig::default().with_min_sentence_chars(2);
        let sentences = segment("Hi there. Yo.", &config);
        // "Yo" is exactly two characters and stays below the cut.
        assert_eq!(texts(&sentences), vec!["Hi there"]);
    }

    #[test]
    fn test_empty_candidates_always_dropped() {
        // Even with a zero threshold the empty fragments between
        // consecutive terminals never survive.
        let config = SummarizerConfig::default().with_min_sentence_chars(0);
        let sentences = segment("Hi!! Yo.", &config);
        assert_eq!(texts(&sentences), vec!["Hi", "Yo"]);
    }
}
