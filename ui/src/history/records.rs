//! Backend run records and tolerant payload interpretation.

use serde::Deserialize;
use time::OffsetDateTime;

use super::HistoryError;

/// Outcome of one run. Anything other than `complete` counts as a failure
/// for coloring; unknown strings are preserved rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RunStatus {
    Complete,
    Failed,
    Other(String),
}

impl From<String> for RunStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "complete" => Self::Complete,
            "failed" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl RunStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// One execution attempt of a scheduled job, as serialized by the backend.
/// `Duration` arrives as integer nanoseconds (a serialized Go duration).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRunRecord {
    #[serde(rename = "RunNumber")]
    pub run_number: u32,
    #[serde(rename = "StartTime", with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(rename = "Duration")]
    pub duration_nanos: i64,
    #[serde(rename = "Status")]
    pub status: RunStatus,
}

impl JobRunRecord {
    pub fn duration_ms(&self) -> f64 {
        self.duration_nanos as f64 / 1_000_000.0
    }
}

/// Interprets a `/jobs/history/{id}` body: a JSON array of records, an error
/// envelope `{"error": "..."}`, or some other shape the backend should not
/// have sent but occasionally does.
pub fn records_from_payload(
    payload: serde_json::Value,
) -> Result<Vec<JobRunRecord>, HistoryError> {
    if let Some(object) = payload.as_object() {
        if let Some(message) = object.get("error").and_then(|v| v.as_str()) {
            return Err(HistoryError::MalformedResponse(message.to_string()));
        }
    }

    match payload {
        serde_json::Value::Array(_) => serde_json::from_value(payload)
            .map_err(|err| HistoryError::MalformedResponse(err.to_string())),
        other => Err(HistoryError::MalformedResponse(format!(
            "expected an array of runs, got {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_records() {
        let records = records_from_payload(json!([
            {
                "RunNumber": 3,
                "StartTime": "2024-01-15T09:30:00Z",
                "Duration": 1_500_000_000i64,
                "Status": "complete"
            },
            {
                "RunNumber": 4,
                "StartTime": "2024-01-15T10:30:00Z",
                "Duration": 250_000_000i64,
                "Status": "timeout"
            }
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, RunStatus::Complete);
        assert_eq!(records[0].duration_ms(), 1500.0);
        assert_eq!(records[1].status, RunStatus::Other("timeout".into()));
        assert!(!records[1].status.is_complete());
    }

    #[test]
    fn error_envelope_is_malformed_response() {
        let err = records_from_payload(json!({"error": "job not found"})).unwrap_err();
        assert_eq!(
            err,
            HistoryError::MalformedResponse("job not found".into())
        );
    }

    #[test]
    fn non_array_payload_is_malformed_response() {
        for payload in [json!(null), json!(42), json!({"rows": []})] {
            assert!(matches!(
                records_from_payload(payload),
                Err(HistoryError::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn empty_array_is_ok_and_empty() {
        assert!(records_from_payload(json!([])).unwrap().is_empty());
    }
}
