//! Core data types shared across the summarization stages.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A single sentence surviving segmentation.
///
/// `text` is trimmed of surrounding whitespace and carries no terminal
/// punctuation; `index` is the sentence's position among the *kept*
/// sentences, so indices are always contiguous from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Trimmed sentence body.
    pub text: String,
    /// Position in reading order among kept sentences.
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

// ============================================================================
// SummarizerConfig
// ============================================================================

fn default_max_sentences() -> usize {
    3
}

fn default_min_sentence_chars() -> usize {
    10
}

fn default_min_token_chars() -> usize {
    3
}

fn default_min_input_chars() -> usize {
    100
}

/// Configuration for the summarization pipeline.
///
/// All thresholds are measured in Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Maximum number of sentences in the summary. Values of zero are
    /// treated as one at ranking time.
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,
    /// Segments whose trimmed length is `<=` this many characters are
    /// discarded as noise (fragments, abbreviations, stray markers).
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,
    /// Tokens this many characters or shorter are excluded from the
    /// frequency table, suppressing articles and prepositions without
    /// a stopword list.
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
    /// Trimmed inputs shorter than this are rejected by
    /// [`try_summarize`](crate::Summarizer::try_summarize).
    #[serde(default = "default_min_input_chars")]
    pub min_input_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_sentences: default_max_sentences(),
            min_sentence_chars: default_min_sentence_chars(),
            min_token_chars: default_min_token_chars(),
            min_input_chars: default_min_input_chars(),
        }
    }
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summary budget, clamped to at least one sentence.
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences.max(1);
        self
    }

    pub fn with_min_sentence_chars(mut self, min_sentence_chars: usize) -> Self {
        self.min_sentence_chars = min_sentence_chars;
        self
    }

    pub fn with_min_token_chars(mut self, min_token_chars: usize) -> Self {
        self.min_token_chars = min_token_chars;
        self
    }

    pub fn with_min_input_chars(mut self, min_input_chars: usize) -> Self {
        self.min_input_chars = min_input_chars;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
