//! History fetch against the external scheduler backend.

use super::{records_from_payload, HistoryError, JobRunRecord};
use crate::core::platform::backend_url;

/// Fetches `/jobs/history/{job_id}` and interprets the payload.
///
/// Transport and body-decode failures map to [`HistoryError::Transport`];
/// error envelopes and wrong-shaped payloads to
/// [`HistoryError::MalformedResponse`]. The backend reports both "no such
/// job" and internal errors through the envelope, so no status-code
/// inspection happens here.
pub async fn fetch_history(job_id: &str) -> Result<Vec<JobRunRecord>, HistoryError> {
    let url = backend_url(&format!("/jobs/history/{job_id}"));
    let response = reqwest::get(url)
        .await
        .map_err(|err| HistoryError::Transport(err.to_string()))?;
    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|err| HistoryError::Transport(err.to_string()))?;
    records_from_payload(payload)
}
