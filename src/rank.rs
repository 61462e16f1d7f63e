//! Sentence ranking
//!
//! Scores each sentence by the summed document-wide frequency of its
//! tokens and keeps the top scorers, restoring reading order afterwards.
//! When the budget already covers every sentence the ranking is skipped
//! entirely and the input comes back untouched.

use std::cmp::Reverse;

use crate::frequency::FrequencyTable;
use crate::nlp::tokenizer::word_tokens;
use crate::types::Sentence;

/// Salience of a sentence: the sum of the table counts of *all* its
/// tokens. Tokens absent from the table (including ones below the
/// significance length) contribute zero, so longer sentences with more
/// significant terms naturally score higher.
///
/// ```
/// use salience::rank::salience;
/// use salience::{FrequencyTable, SummarizerConfig};
///
/// let config = SummarizerConfig::default();
/// let table = FrequencyTable::from_text("alpha alpha beta", &config);
/// assert_eq!(salience("alpha beta the", &table), 3);
/// ```
pub fn salience(text: &str, table: &FrequencyTable) -> usize {
    word_tokens(text).map(|token| table.count(&token)).sum()
}

/// Selects the `max_sentences` most salient sentences, in reading order.
///
/// A budget of zero is treated as one. Ties break toward the earlier
/// sentence, and whenever the budget covers the whole input the sentences
/// are returned as-is without consulting the table, so the output length
/// is always `min(max_sentences, sentences.len())`.
pub fn rank(
    sentences: Vec<Sentence>,
    table: &FrequencyTable,
    max_sentences: usize,
) -> Vec<Sentence> {
    let budget = max_sentences.max(1);
    if sentences.len() <= budget {
        return sentences;
    }

    let mut scored: Vec<(Sentence, usize)> = sentences
        .into_iter()
        .map(|sentence| {
            let score = salience(&sentence.text, table);
            (sentence, score)
        })
        .collect();

    // Highest salience first; the earlier sentence wins ties.
    scored.sort_by_key(|(sentence, score)| (Reverse(*score), sentence.index));
    scored.truncate(budget);
    // Back to reading order.
    scored.sort_by_key(|(sentence, _)| sentence.index);

    scored.into_iter().map(|(sentence, _)| sentence).collect()
}
