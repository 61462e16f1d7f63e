//! Deterministic extractive text summarization.
//!
//! `salience` condenses a document to its most representative sentences.
//! Each sentence is scored by the summed document-wide frequency of its
//! terms, the top scorers within a sentence budget are kept, and the
//! summary is reassembled in reading order. There is no model, no
//! training, and no randomness: the same input and configuration always
//! produce the same summary, byte for byte.
//!
//! The pipeline has four stages, each observable via
//! [`SummaryObserver`]:
//!
//! 1. [Segment](nlp::segmenter) — split on terminal punctuation, drop
//!    fragments too short to matter
//! 2. [Frequency](frequency) — count significant terms across the whole
//!    input, no stopword list required
//! 3. [Rank](rank) — keep the most salient sentences, ties fall to the
//!    earlier one
//! 4. [Assemble](summarizer::assemble) — rejoin the keepers in reading
//!    order with normalized punctuation
//!
//! # Example
//!
//! ```
//! let text = "The quick brown fox jumps high. A lazy dog sleeps in the sun.";
//! let summary = salience::summarize(text, 3);
//! assert_eq!(summary, text);
//! ```
//!
//! Selecting one sentence out of three:
//!
//! ```
//! use salience::{Summarizer, SummarizerConfig};
//!
//! let config = SummarizerConfig::new().with_max_sentences(1);
//! let summarizer = Summarizer::with_config(config);
//! let text = "Storage engines batch writes for throughput. \
//!             Unrelated chatter fills the hallway. \
//!             Storage engines flush batch writes on commit.";
//! assert_eq!(
//!     summarizer.summarize(text),
//!     "Storage engines flush batch writes on commit."
//! );
//! ```
//!
//! # Feature flags
//!
//! - `tracing` — emit a `tracing` span per pipeline stage.

pub mod batch;
pub mod error;
pub mod frequency;
pub mod nlp;
pub mod observer;
pub mod rank;
pub mod summarizer;
pub mod types;

pub use batch::summarize_batch;
pub use error::SummarizeError;
pub use frequency::FrequencyTable;
pub use observer::{NoopObserver, StageTimingObserver, SummaryObserver};
pub use summarizer::{assemble, Summarizer};
pub use types::{Sentence, SummarizerConfig};

/// Summarize `text` to at most `max_sentences` sentences with default
/// thresholds. Budgets of zero are treated as one.
///
/// Convenience wrapper over [`Summarizer`]; construct one directly to
/// reuse a configuration or observe stages.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    Summarizer::new()
        .with_max_sentences(max_sentences)
        .summarize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_function_matches_summarizer() {
        let text = "Alpha beta gamma delta run. Delta gamma beta alpha run.";
        let via_struct = Summarizer::new().with_max_sentences(1).summarize(text);
        assert_eq!(summarize(text, 1), via_struct);
    }

    #[test]
    fn test_free_function_clamps_zero_budget() {
        let text = "Alpha beta gamma delta run. Delta gamma beta alpha run.";
        assert_eq!(summarize(text, 0), "Alpha beta gamma delta run.");
    }
}
