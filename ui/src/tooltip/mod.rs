//! Localized-time tooltip: pure placement math plus the DOM controller that
//! owns the shared tooltip element.

pub mod position;
pub mod tracker;

#[cfg(target_arch = "wasm32")]
pub mod controller;

pub use position::{place, BoxSize, Placement, TriggerRect, Viewport};
pub use tracker::TrackedTrigger;
