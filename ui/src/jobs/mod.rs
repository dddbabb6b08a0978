//! Jobs-table behavior: chart hydration, success-rate summaries, row
//! expand/collapse and pagination.

pub mod chart_panel;
pub mod renderer;

#[cfg(target_arch = "wasm32")]
pub mod bind;
#[cfg(target_arch = "wasm32")]
pub mod results_rows;

pub use chart_panel::{fallback_label, outcome_for, ChartOutcome};
pub use renderer::chart_config;
