//! Canonical color table and numeric banding thresholds for the jobs view.
//!
//! Every hue and cutoff used by the chart pipeline lives here so coloring
//! policy can be tuned without touching the logic that applies it.

/// Hue for completed runs and healthy summaries.
pub const SUCCESS_COLOR: &str = "#4ade80";
/// Hue for degraded-but-working summaries.
pub const WARNING_COLOR: &str = "#fbbf24";
/// Hue for failed runs and unhealthy summaries.
pub const FAILURE_COLOR: &str = "#ef4444";
/// Muted hue for placeholder text ("No runs", fallbacks).
pub const MUTED_COLOR: &str = "#999";

/// Success-rate percentage at or above which the summary reads as healthy.
pub const RATE_SUCCESS_THRESHOLD: u8 = 80;
/// Success-rate percentage at or above which the summary reads as degraded.
pub const RATE_WARNING_THRESHOLD: u8 = 50;

/// Two-stop vertical fill, rendered top-down from `top` to `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStops {
    pub top: &'static str,
    pub bottom: &'static str,
}

pub const SUCCESS_GRADIENT: GradientStops = GradientStops {
    top: "rgba(74, 222, 128, 0.3)",
    bottom: "rgba(74, 222, 128, 0.02)",
};

pub const WARNING_GRADIENT: GradientStops = GradientStops {
    top: "rgba(251, 191, 36, 0.3)",
    bottom: "rgba(251, 191, 36, 0.02)",
};

pub const FAILURE_GRADIENT: GradientStops = GradientStops {
    top: "rgba(239, 68, 68, 0.3)",
    bottom: "rgba(239, 68, 68, 0.02)",
};

/// Banded hue for a 0–100 success rate: >= 80 success, >= 50 warning,
/// otherwise failure.
pub fn rate_color(rate: u8) -> &'static str {
    if rate >= RATE_SUCCESS_THRESHOLD {
        SUCCESS_COLOR
    } else if rate >= RATE_WARNING_THRESHOLD {
        WARNING_COLOR
    } else {
        FAILURE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_banding_boundaries_are_inclusive() {
        assert_eq!(rate_color(100), SUCCESS_COLOR);
        assert_eq!(rate_color(80), SUCCESS_COLOR);
        assert_eq!(rate_color(79), WARNING_COLOR);
        assert_eq!(rate_color(50), WARNING_COLOR);
        assert_eq!(rate_color(49), FAILURE_COLOR);
        assert_eq!(rate_color(0), FAILURE_COLOR);
    }
}
