//! Shared UI crate for Runboard. Cross-platform logic and views live here.

pub mod core;
pub mod history;
pub mod jobs;
pub mod tooltip;
pub mod views;

mod navbar;
pub mod components {
    pub use super::navbar::Navbar;
}
