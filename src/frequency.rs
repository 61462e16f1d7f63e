//! Term frequency statistics
//!
//! Builds an exact occurrence count of the significant terms in a text.
//! Terms are lower-cased word tokens longer than
//! [`min_token_chars`](crate::SummarizerConfig::min_token_chars); the
//! length cut suppresses articles, prepositions, and other high-frequency
//! glue words without maintaining a stopword list.
//!
//! Counts are taken over the *entire* input, including fragments the
//! segmenter later discards, so a term's weight reflects the whole
//! document.

use rustc_hash::FxHashMap;

use crate::nlp::tokenizer::word_tokens;
use crate::types::SummarizerConfig;

/// Occurrence counts of significant terms in a document.
///
/// ```
/// use salience::{FrequencyTable, SummarizerConfig};
///
/// let config = SummarizerConfig::default();
/// let table = FrequencyTable::from_text("Engine engine noise", &config);
/// assert_eq!(table.count("engine"), 2);
/// assert_eq!(table.count("noise"), 1);
/// assert_eq!(table.count("absent"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Counts the significant terms of `text`.
    pub fn from_text(text: &str, config: &SummarizerConfig) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in word_tokens(text) {
            if token.chars().count() > config.min_token_chars {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrence count for `term`, zero when absent.
    ///
    /// Lookups are exact: callers pass already lower-cased tokens.
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(term, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }
}
