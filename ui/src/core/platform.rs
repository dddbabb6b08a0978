//! Platform glue: task spawning, backend URL resolution and the viewer's
//! live clock context.

use time::UtcOffset;

use super::time_local::offset_label;

/// Origin used when no page origin is available (native tests, dev tools).
/// Matches the scheduler's default listen address.
const FALLBACK_ORIGIN: &str = "http://localhost:8000";

/// The viewer's current offset and zone labels, sampled per use so tooltips
/// track clock/zone changes during a long-lived page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalClock {
    pub offset: UtcOffset,
    /// Short display name, e.g. `EST`; falls back to an offset label.
    pub zone_short: String,
    /// IANA name, e.g. `America/New_York`.
    pub zone_name: String,
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    futures::executor::block_on(future);
}

/// Absolute backend URL for `path`, resolved against the page origin.
///
/// `reqwest` rejects relative URLs at request-build time, before any I/O,
/// so every backend fetch routes its path through here.
pub fn backend_url(path: &str) -> String {
    format!("{}{path}", origin())
}

#[cfg(target_arch = "wasm32")]
fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn origin() -> String {
    FALLBACK_ORIGIN.to_string()
}

pub fn local_clock() -> LocalClock {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let zone_short = zone_short_name().unwrap_or_else(|| offset_label(offset));
    let zone_name = zone_name().unwrap_or_else(|| zone_short.clone());
    LocalClock {
        offset,
        zone_short,
        zone_name,
    }
}

/// IANA zone name from the JS runtime, when one is available.
#[cfg(target_arch = "wasm32")]
fn zone_name() -> Option<String> {
    use wasm_bindgen::JsValue;

    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = format.resolved_options();
    js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|value| value.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn zone_name() -> Option<String> {
    None
}

/// Short zone name from the JS runtime, e.g. `EST` or `GMT+5:30`, pulled out
/// of `Intl.DateTimeFormat` parts formatted with `timeZoneName: "short"`.
#[cfg(target_arch = "wasm32")]
fn zone_short_name() -> Option<String> {
    use wasm_bindgen::JsValue;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("timeZoneName"),
        &JsValue::from_str("short"),
    )
    .ok()?;
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &options);
    let parts = format.format_to_parts(&js_sys::Date::new_0());
    parts.iter().find_map(|part| {
        let kind = js_sys::Reflect::get(&part, &JsValue::from_str("type"))
            .ok()
            .and_then(|value| value.as_string());
        if kind.as_deref() != Some("timeZoneName") {
            return None;
        }
        js_sys::Reflect::get(&part, &JsValue::from_str("value"))
            .ok()
            .and_then(|value| value.as_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn zone_short_name() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_always_carries_zone_labels() {
        let clock = local_clock();
        assert!(!clock.zone_name.is_empty());
        assert!(!clock.zone_short.is_empty());
    }

    #[test]
    fn backend_urls_are_absolute() {
        let url = backend_url("/jobs/history/cleanup-job");
        let parsed = reqwest::Url::parse(&url).expect("backend URLs must carry an origin");
        assert!(parsed.scheme().starts_with("http"));
        assert_eq!(parsed.path(), "/jobs/history/cleanup-job");
    }

    #[test]
    fn backend_urls_keep_query_strings() {
        let url = backend_url("/jobs/results/cleanup-job?offset=10");
        let parsed = reqwest::Url::parse(&url).unwrap();
        assert_eq!(parsed.query(), Some("offset=10"));
    }
}
