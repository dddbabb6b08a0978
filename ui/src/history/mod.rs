//! Run-history pipeline: backend records in, renderer-ready series out.

mod analyzer;
mod chart;
mod fetch;
mod records;

pub use analyzer::{analyze, AnalyzedHistory, RECENT_FAILURE_SPAN, RECENT_WINDOW_CAP};
pub use chart::{build, gradient_for, ChartSeries};
pub use fetch::fetch_history;
pub use records::{records_from_payload, JobRunRecord, RunStatus};

use thiserror::Error;

/// Failures of the history pipeline. All are recoverable: the caller
/// downgrades the chart to a textual status indicator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("job has no recorded runs")]
    EmptyHistory,
    #[error("history payload was malformed: {0}")]
    MalformedResponse(String),
    #[error("history request failed: {0}")]
    Transport(String),
}
