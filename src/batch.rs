//! Batch summarization
//!
//! Summarizes many independent documents with one configuration. Each
//! document is self-contained (its frequency table never mixes with its
//! neighbors'), so the batch parallelizes trivially with rayon. Small
//! batches stay sequential; thread pool dispatch costs more than the
//! work itself below the cutoff.

use rayon::prelude::*;

use crate::summarizer::Summarizer;
use crate::types::SummarizerConfig;

/// Batches smaller than this run sequentially.
const PARALLEL_CUTOFF: usize = 8;

/// Summarizes every text in `texts`, preserving input order.
///
/// Output `i` is exactly `Summarizer::with_config(config).summarize(&texts[i])`;
/// parallelism never changes results.
pub fn summarize_batch<S>(texts: &[S], config: &SummarizerConfig) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    let summarizer = Summarizer::with_config(config.clone());
    if texts.len() < PARALLEL_CUTOFF {
        return texts
            .iter()
            .map(|text| summarizer.summarize(text.as_ref()))
            .collect();
    }
    texts
        .par_iter()
        .map(|text| summarizer.summarize(text.as_ref()))
        .collect()
}
