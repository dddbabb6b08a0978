//! Transformation of analyzed history into the series handed to the chart
//! renderer.

use time::{macros::format_description, UtcOffset};

use crate::core::theme::{
    GradientStops, FAILURE_COLOR, FAILURE_GRADIENT, SUCCESS_COLOR, SUCCESS_GRADIENT,
    WARNING_GRADIENT,
};

use super::AnalyzedHistory;

/// Renderer-ready line-chart data. Rebuilt on every render and discarded
/// after handoff.
///
/// `labels`, `durations_ms` and `point_colors` run parallel to the recent
/// window; `segment_colors` has one entry per line segment between
/// consecutive points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub durations_ms: Vec<f64>,
    pub point_colors: Vec<&'static str>,
    pub segment_colors: Vec<&'static str>,
    pub fill_gradient: GradientStops,
}

/// Builds the chart series for a job's recent window.
///
/// Points are labelled by local wall-clock `HH:MM`; durations are converted
/// to milliseconds with no rounding (rounding is a rendering concern).
pub fn build(history: &AnalyzedHistory, offset: UtcOffset) -> ChartSeries {
    let window = &history.recent_window;

    let labels = window
        .iter()
        .map(|run| {
            run.start_time
                .to_offset(offset)
                .format(&format_description!("[hour]:[minute]"))
                .unwrap_or_else(|_| "—".to_string())
        })
        .collect();

    let durations_ms = window.iter().map(|run| run.duration_ms()).collect();

    let point_colors: Vec<&'static str> = window
        .iter()
        .map(|run| {
            if run.status.is_complete() {
                SUCCESS_COLOR
            } else {
                FAILURE_COLOR
            }
        })
        .collect();

    // A failed run infects both segments touching it.
    let segment_colors = window
        .windows(2)
        .map(|pair| {
            if pair[0].status.is_complete() && pair[1].status.is_complete() {
                SUCCESS_COLOR
            } else {
                FAILURE_COLOR
            }
        })
        .collect();

    ChartSeries {
        labels,
        durations_ms,
        point_colors,
        segment_colors,
        fill_gradient: gradient_for(history.recent_failure_count),
    }
}

/// Fill gradient band for a window's recent failure count: more than two
/// failures reads as failing, one or two as warning, none as healthy.
pub fn gradient_for(recent_failure_count: usize) -> GradientStops {
    match recent_failure_count {
        0 => SUCCESS_GRADIENT,
        1..=2 => WARNING_GRADIENT,
        _ => FAILURE_GRADIENT,
    }
}
