//! Summarizer — orchestrates stage execution and artifact flow.
//!
//! [`Summarizer::run`] executes the four pipeline stages in order,
//! threading artifacts between them and notifying a
//! [`SummaryObserver`] at each boundary:
//!
//! 1. Segment — split raw text into trimmed, indexed sentences
//! 2. Frequency — count significant terms over the whole input
//! 3. Rank — keep the most salient sentences within the budget
//! 4. Assemble — rejoin the keepers in reading order
//!
//! Every stage runs on every input. When the budget already covers all
//! sentences the rank stage passes them through without consulting the
//! table, so observers always see the same four boundaries.

use crate::error::SummarizeError;
use crate::frequency::FrequencyTable;
use crate::nlp::segmenter::segment;
use crate::observer::{
    NoopObserver, StageClock, StageReportBuilder, SummaryObserver, STAGE_ASSEMBLE,
    STAGE_FREQUENCY, STAGE_RANK, STAGE_SEGMENT,
};
use crate::rank::rank;
use crate::types::{Sentence, SummarizerConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summary_stage", stage = $name).entered();
    };
}

// ============================================================================
// Summarizer
// ============================================================================

/// Extractive summarizer over a fixed [`SummarizerConfig`].
///
/// The summarizer is cheap to construct and carries no per-run state, so
/// one instance can serve any number of inputs, including concurrently.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    /// A summarizer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SummarizerConfig) -> Self {
        Self { config }
    }

    /// Override the summary budget, clamped to at least one sentence.
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.config = self.config.with_max_sentences(max_sentences);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text`, ignoring stage callbacks.
    pub fn summarize(&self, text: &str) -> String {
        self.run(text, &mut NoopObserver)
    }

    /// Summarize `text` after rejecting inputs shorter than
    /// [`min_input_chars`](SummarizerConfig::min_input_chars).
    ///
    /// Length is measured on the trimmed input in characters. This is the
    /// caller-facing entry point; [`summarize`](Self::summarize) itself
    /// accepts any input.
    pub fn try_summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let length = text.trim().chars().count();
        if length < self.config.min_input_chars {
            return Err(SummarizeError::TextTooShort {
                length,
                minimum: self.config.min_input_chars,
            });
        }
        Ok(self.summarize(text))
    }

    /// Execute the pipeline, producing the summary string.
    ///
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`] for zero-overhead execution.
    pub fn run(&self, text: &str, observer: &mut impl SummaryObserver) -> String {
        // Stage 1: Segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = segment(text, &self.config);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);

        // Stage 2: Count term frequencies over the whole input
        trace_stage!(STAGE_FREQUENCY);
        observer.on_stage_start(STAGE_FREQUENCY);
        let clock = StageClock::start();
        let table = FrequencyTable::from_text(text, &self.config);
        let report = StageReportBuilder::new(clock.elapsed())
            .terms(table.len())
            .build();
        observer.on_stage_end(STAGE_FREQUENCY, &report);
        observer.on_frequencies(&table);

        // Stage 3: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let selected = rank(sentences, &table, self.config.max_sentences);
        let report = StageReportBuilder::new(clock.elapsed())
            .selected(selected.len())
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_selection(&selected);

        // Stage 4: Assemble
        trace_stage!(STAGE_ASSEMBLE);
        observer.on_stage_start(STAGE_ASSEMBLE);
        let clock = StageClock::start();
        let summary = assemble(&selected);
        let report = StageReportBuilder::new(clock.elapsed())
            .chars(summary.chars().count())
            .build();
        observer.on_stage_end(STAGE_ASSEMBLE, &report);
        observer.on_summary(&summary);

        summary
    }
}

// ============================================================================
// Summary assembly
// ============================================================================

/// Joins sentences with `". "` and closes with a single terminal period.
///
/// No sentences means an empty summary with no stray punctuation. The
/// output is normalized: original terminators (`!`, `?`, runs of periods)
/// do not survive into the summary.
pub fn assemble(sentences: &[Sentence]) -> String {
    if sentences.is_empty() {
        return String::new();
    }
    let mut summary = sentences
        .iter()
        .map(|sentence| sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");
    summary.push('.');
    summary
}

// ============================================================================
// Tests
// ============================================================================
