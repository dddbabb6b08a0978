//! End-to-end checks over the run-history pipeline: raw backend payload →
//! analysis → chart series → renderer config.

use serde_json::json;
use time::UtcOffset;

use ui::core::theme::{rate_color, FAILURE_COLOR, SUCCESS_COLOR, WARNING_GRADIENT};
use ui::history::{analyze, build, records_from_payload, HistoryError, RECENT_WINDOW_CAP};
use ui::jobs::{chart_config, fallback_label, outcome_for, ChartOutcome};

fn payload_run(run: u32, iso: &str, nanos: i64, status: &str) -> serde_json::Value {
    json!({
        "RunNumber": run,
        "StartTime": iso,
        "Duration": nanos,
        "Status": status,
    })
}

#[test]
fn payload_to_renderer_config() {
    // Server-ordered newest first, as the backend sends it.
    let payload = json!([
        payload_run(5, "2024-01-15T12:00:00Z", 3_000_000, "failed"),
        payload_run(4, "2024-01-15T11:00:00Z", 2_000_000, "complete"),
        payload_run(3, "2024-01-15T10:00:00Z", 2_500_000, "complete"),
        payload_run(2, "2024-01-15T09:00:00Z", 1_000_000, "complete"),
        payload_run(1, "2024-01-15T08:00:00Z", 4_000_000, "complete"),
    ]);

    let records = records_from_payload(payload).unwrap();
    let history = analyze(&records).unwrap();
    assert_eq!(history.total_runs, 5);
    assert_eq!(history.success_rate, 80);
    assert_eq!(history.recent_failure_count, 1);

    let series = build(&history, UtcOffset::UTC);
    assert_eq!(series.labels, vec!["08:00", "09:00", "10:00", "11:00", "12:00"]);
    assert_eq!(
        series.durations_ms,
        vec![4.0, 1.0, 2.5, 2.0, 3.0]
    );
    // The failure sits at the newest point; only the final segment is infected.
    assert_eq!(series.point_colors[4], FAILURE_COLOR);
    assert_eq!(
        series.segment_colors,
        vec![SUCCESS_COLOR, SUCCESS_COLOR, SUCCESS_COLOR, FAILURE_COLOR]
    );
    assert_eq!(series.fill_gradient, WARNING_GRADIENT);

    // 80 sits exactly on the success boundary.
    assert_eq!(rate_color(history.success_rate), SUCCESS_COLOR);

    let config = chart_config(&series);
    assert_eq!(config["data"]["labels"][0], "08:00");
    assert_eq!(config["data"]["datasets"][0]["data"][4], 3.0);
}

#[test]
fn oversized_history_is_capped_at_the_window() {
    let runs: Vec<serde_json::Value> = (0..35)
        .map(|i| {
            payload_run(
                35 - i,
                &format!("2024-01-15T{:02}:{:02}:00Z", 12 - i / 60, 59 - i % 60),
                1_000_000,
                "complete",
            )
        })
        .collect();

    let records = records_from_payload(serde_json::Value::Array(runs)).unwrap();
    let history = analyze(&records).unwrap();
    assert_eq!(history.total_runs, 35);
    assert_eq!(history.recent_window.len(), RECENT_WINDOW_CAP);

    let series = build(&history, UtcOffset::UTC);
    assert_eq!(series.labels.len(), RECENT_WINDOW_CAP);
    assert_eq!(series.segment_colors.len(), RECENT_WINDOW_CAP - 1);
}

#[test]
fn controller_outcomes_downgrade_failures_to_labels() {
    let empty = outcome_for(Ok(Vec::new()), UtcOffset::UTC);
    assert_eq!(empty, ChartOutcome::Fallback("No runs"));

    let envelope = records_from_payload(json!({"error": "boom"}));
    let malformed = outcome_for(envelope, UtcOffset::UTC);
    assert_eq!(malformed, ChartOutcome::Fallback("Invalid data"));

    assert_eq!(
        fallback_label(&HistoryError::Transport("timeout".into())),
        "Error"
    );
}
