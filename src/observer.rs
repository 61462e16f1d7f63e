//! Stage observation — timing and artifact callbacks.
//!
//! [`Summarizer::run`](crate::Summarizer::run) notifies a
//! [`SummaryObserver`] at every stage boundary and hands it a read-only
//! view of each intermediate artifact. Observers never influence the
//! summary; they exist for timing, debugging, and instrumentation. Pass
//! [`NoopObserver`] for zero-overhead execution.

use std::time::{Duration, Instant};

use crate::frequency::FrequencyTable;
use crate::types::Sentence;

// ============================================================================
// Stage names
// ============================================================================

/// Sentence segmentation stage.
pub const STAGE_SEGMENT: &str = "segment";
/// Term frequency counting stage.
pub const STAGE_FREQUENCY: &str = "frequency";
/// Salience ranking stage.
pub const STAGE_RANK: &str = "rank";
/// Summary assembly stage.
pub const STAGE_ASSEMBLE: &str = "assemble";

// ============================================================================
// StageClock — wall-clock timing for a single stage
// ============================================================================

/// Measures the wall-clock duration of one stage.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

// ============================================================================
// StageReport — per-stage summary handed to observers
// ============================================================================

/// What a stage did, reported at its end boundary.
///
/// Only the metrics a stage actually produces are populated; the rest
/// stay `None`.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    terms: Option<usize>,
    selected: Option<usize>,
    chars: Option<usize>,
}

impl StageReport {
    /// A report carrying only the elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            sentences: None,
            terms: None,
            selected: None,
            chars: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Sentences kept by segmentation.
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Distinct terms in the frequency table.
    pub fn terms(&self) -> Option<usize> {
        self.terms
    }

    /// Sentences surviving the ranking budget.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Characters in the assembled summary.
    pub fn chars(&self) -> Option<usize> {
        self.chars
    }
}

/// Builder for [`StageReport`] with optional metrics.
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, sentences: usize) -> Self {
        self.report.sentences = Some(sentences);
        self
    }

    pub fn terms(mut self, terms: usize) -> Self {
        self.report.terms = Some(terms);
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.report.selected = Some(selected);
        self
    }

    pub fn chars(mut self, chars: usize) -> Self {
        self.report.chars = Some(chars);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// SummaryObserver — stage boundary callbacks
// ============================================================================

/// Callbacks fired at stage boundaries during a summarization run.
///
/// All methods have empty default bodies, so implementors override only
/// what they care about.
pub trait SummaryObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished; `report` carries its timing and metrics.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Sentences produced by segmentation.
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// The completed frequency table.
    fn on_frequencies(&mut self, _table: &FrequencyTable) {}

    /// Sentences chosen by ranking, in reading order.
    fn on_selection(&mut self, _selected: &[Sentence]) {}

    /// The assembled summary, identical to the run's return value.
    fn on_summary(&mut self, _summary: &str) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SummaryObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per stage, in execution order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected `(stage, report)` pairs in execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Total wall-clock time across all observed stages.
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, report)| report.elapsed()).sum()
    }
}

impl SummaryObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

// ============================================================================
// Tests
// ============================================================================
