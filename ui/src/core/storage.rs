//! Local persistence for per-job UI state.
//!
//! The expand/collapse flag for each job lives in browser-local storage as a
//! flat job-id → bool map, re-read on every content swap so restored rows
//! match what the viewer last chose.

use std::collections::BTreeMap;

const EXPANDED_JOBS_KEY: &str = "expandedJobs";

pub type ExpandedJobs = BTreeMap<String, bool>;

pub fn load_expanded() -> ExpandedJobs {
    raw_load()
        .and_then(|payload| serde_json::from_str(&payload).ok())
        .unwrap_or_default()
}

pub fn set_expanded(job_id: &str, expanded: bool) {
    let mut map = load_expanded();
    map.insert(job_id.to_string(), expanded);
    if let Ok(payload) = serde_json::to_string(&map) {
        raw_store(&payload);
    }
}

pub fn is_expanded(job_id: &str) -> bool {
    load_expanded().get(job_id).copied().unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn raw_load() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(EXPANDED_JOBS_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
fn raw_store(payload: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        storage.set_item(EXPANDED_JOBS_KEY, payload).ok();
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static FALLBACK_STORE: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_load() -> Option<String> {
    FALLBACK_STORE.with(|cell| cell.borrow().clone())
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_store(payload: &str) {
    FALLBACK_STORE.with(|cell| *cell.borrow_mut() = Some(payload.to_string()));
}
