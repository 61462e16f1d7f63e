//! Error types for the summarization boundary.
//!
//! The core pipeline is total: every stage accepts any `&str` and empty
//! output is expressed as an empty summary, never an error. Errors only
//! exist at the caller-facing boundary where inputs too short to be worth
//! summarizing are rejected up front.

use thiserror::Error;

/// Errors returned by [`Summarizer::try_summarize`](crate::Summarizer::try_summarize).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// The trimmed input is below the configured minimum length.
    #[error("text too short to summarize: {length} characters (minimum {minimum})")]
    TextTooShort {
        /// Trimmed input length in characters.
        length: usize,
        /// Configured minimum, see [`SummarizerConfig::min_input_chars`](crate::SummarizerConfig::min_input_chars).
        minimum: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_display() {
        let err = SummarizeError::TextTooShort {
            length: 42,
            minimum: 100,
        };
        assert_eq!(
            err.to_string(),
            "text too short to summarize: 42 characters (minimum 100)"
        );
    }
}
