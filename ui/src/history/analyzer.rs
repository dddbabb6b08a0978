//! Aggregation of raw run records into chart-ready history.

use super::{HistoryError, JobRunRecord};

/// Most recent runs kept for chart rendering.
pub const RECENT_WINDOW_CAP: usize = 20;
/// Tail of the window inspected for the gradient band.
pub const RECENT_FAILURE_SPAN: usize = 5;

/// Derived view over one job's run history, recomputed on every fetch and
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedHistory {
    pub total_runs: usize,
    /// `round(100 · complete / total)` over the full collection, not the window.
    pub success_rate: u8,
    /// Chronologically ascending suffix of the history, capped at
    /// [`RECENT_WINDOW_CAP`] entries.
    pub recent_window: Vec<JobRunRecord>,
    /// Failures among the last [`RECENT_FAILURE_SPAN`] window entries.
    pub recent_failure_count: usize,
}

/// Analyzes a snapshot of run records.
///
/// Records may arrive in any order; a working copy is sorted by start time
/// descending (stable, so equal start times keep their input order) before
/// the window is taken.
pub fn analyze(records: &[JobRunRecord]) -> Result<AnalyzedHistory, HistoryError> {
    if records.is_empty() {
        return Err(HistoryError::EmptyHistory);
    }

    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    let total_runs = sorted.len();
    let complete = sorted.iter().filter(|r| r.status.is_complete()).count();
    let success_rate = (100.0 * complete as f64 / total_runs as f64).round() as u8;

    let mut recent_window: Vec<JobRunRecord> =
        sorted.into_iter().take(RECENT_WINDOW_CAP).collect();
    recent_window.reverse();

    let span = RECENT_FAILURE_SPAN.min(recent_window.len());
    let recent_failure_count = recent_window[recent_window.len() - span..]
        .iter()
        .filter(|r| !r.status.is_complete())
        .count();

    Ok(AnalyzedHistory {
        total_runs,
        success_rate,
        recent_window,
        recent_failure_count,
    })
}
