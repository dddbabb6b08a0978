//! Per-job chart lifecycle: fetch → analyze → build → render, with textual
//! fallbacks in the success-rate slot when the pipeline fails.

use time::UtcOffset;

use crate::history::{analyze, ChartSeries, HistoryError, JobRunRecord};

/// What the controller should do with a finished fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Render { rate: u8, series: ChartSeries },
    Fallback(&'static str),
}

/// Resolves a fetch result into either a renderable chart or a fallback
/// label. Pure, so the whole decision path is testable off the DOM.
pub fn outcome_for(
    fetched: Result<Vec<JobRunRecord>, HistoryError>,
    offset: UtcOffset,
) -> ChartOutcome {
    match fetched.and_then(|records| analyze(&records)) {
        Ok(history) => ChartOutcome::Render {
            rate: history.success_rate,
            series: crate::history::build(&history, offset),
        },
        Err(err) => ChartOutcome::Fallback(fallback_label(&err)),
    }
}

/// Message shown in the success-rate slot when no chart can be drawn.
pub fn fallback_label(err: &HistoryError) -> &'static str {
    match err {
        HistoryError::EmptyHistory => "No runs",
        HistoryError::MalformedResponse(_) => "Invalid data",
        HistoryError::Transport(_) => "Error",
    }
}

/// Fetches one job's history and drives its canvas and success-rate slot.
///
/// Both DOM nodes are re-queried by id immediately before mutation: a fetch
/// resolving after its rows were swapped away becomes a no-op.
#[cfg(target_arch = "wasm32")]
pub async fn hydrate(job_id: String) {
    use dioxus::logger::tracing::warn;

    use crate::core::platform::local_clock;
    use crate::history::fetch_history;
    use crate::jobs::renderer::render_chart;

    let outcome = outcome_for(fetch_history(&job_id).await, local_clock().offset);
    match outcome {
        ChartOutcome::Render { rate, series } => {
            show_success_rate(&job_id, rate);
            if let Err(err) = render_chart(&format!("chart-{job_id}"), &series) {
                warn!("chart render failed for {job_id}: {err}");
                apply_fallback(&job_id, "Error");
            }
        }
        ChartOutcome::Fallback(label) => apply_fallback(&job_id, label),
    }
}

#[cfg(target_arch = "wasm32")]
fn show_success_rate(job_id: &str, rate: u8) {
    use crate::core::theme::rate_color;

    if let Some(slot) = element_by_id(&format!("success-rate-{job_id}")) {
        let color = rate_color(rate);
        slot.set_inner_html(&format!(
            "<div style=\"text-align: center;\">\
             <div style=\"font-size: 1.1em; font-weight: bold; color: {color};\">{rate}%</div>\
             <div style=\"font-size: 0.8em; color: #666;\">success</div>\
             </div>"
        ));
    }
}

/// Hides the canvas and leaves a textual status in the success-rate slot.
#[cfg(target_arch = "wasm32")]
fn apply_fallback(job_id: &str, label: &str) {
    use wasm_bindgen::JsCast;

    use crate::core::theme::MUTED_COLOR;

    if let Some(canvas) = element_by_id(&format!("chart-{job_id}")) {
        if let Some(html) = canvas.dyn_ref::<web_sys::HtmlElement>() {
            html.style().set_property("display", "none").ok();
        }
    }
    if let Some(slot) = element_by_id(&format!("success-rate-{job_id}")) {
        slot.set_inner_html(&format!(
            "<span style=\"color: {MUTED_COLOR};\">{label}</span>"
        ));
    }
}

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{rate_color, SUCCESS_COLOR};
    use crate::history::RunStatus;
    use time::{Duration, OffsetDateTime};

    fn record(minutes_ago: i64, status: RunStatus) -> JobRunRecord {
        let base = OffsetDateTime::from_unix_timestamp(1_705_310_000).unwrap();
        JobRunRecord {
            run_number: 1,
            start_time: base - Duration::minutes(minutes_ago),
            duration_nanos: 5_000_000,
            status,
        }
    }

    #[test]
    fn fallback_labels_distinguish_conditions() {
        assert_eq!(fallback_label(&HistoryError::EmptyHistory), "No runs");
        assert_eq!(
            fallback_label(&HistoryError::MalformedResponse("x".into())),
            "Invalid data"
        );
        assert_eq!(fallback_label(&HistoryError::Transport("x".into())), "Error");
    }

    #[test]
    fn empty_fetch_downgrades_to_no_runs() {
        let outcome = outcome_for(Ok(Vec::new()), UtcOffset::UTC);
        assert_eq!(outcome, ChartOutcome::Fallback("No runs"));
    }

    #[test]
    fn transport_failure_downgrades_to_error() {
        let outcome = outcome_for(
            Err(HistoryError::Transport("connection refused".into())),
            UtcOffset::UTC,
        );
        assert_eq!(outcome, ChartOutcome::Fallback("Error"));
    }

    #[test]
    fn healthy_history_renders_with_banded_rate() {
        let records = vec![
            record(0, RunStatus::Complete),
            record(1, RunStatus::Complete),
            record(2, RunStatus::Complete),
            record(3, RunStatus::Complete),
            record(4, RunStatus::Failed),
        ];
        match outcome_for(Ok(records), UtcOffset::UTC) {
            ChartOutcome::Render { rate, series } => {
                assert_eq!(rate, 80);
                assert_eq!(rate_color(rate), SUCCESS_COLOR);
                assert_eq!(series.labels.len(), 5);
            }
            other => panic!("expected render outcome, got {other:?}"),
        }
    }
}
