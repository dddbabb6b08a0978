//! The single wiring pass that runs after initial mount and after every
//! asynchronous content swap.
//!
//! Every discovered element is marked with a data attribute before a
//! listener is attached, so repeated passes never accumulate duplicate
//! handlers. The tooltip layer needs no per-element marking at all: it
//! delegates from `document.body`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::core::platform::spawn_future;
use crate::jobs::{chart_panel, results_rows};
use crate::tooltip::controller;

const BOUND_ATTR: &str = "data-runboard-bound";

/// Rewires the jobs table: tooltip delegation, persisted expansion, toggle
/// and pagination buttons, and chart hydration for any canvas that has not
/// been drawn yet. Safe to call any number of times.
pub fn rebind() {
    controller::install_delegation();
    results_rows::restore_expanded();
    wire_toggles();
    wire_load_more();
    hydrate_charts();
}

fn wire_toggles() {
    for element in unbound(".toggle-btn[data-job-id]") {
        let Some(job_id) = element.get_attribute("data-job-id") else {
            continue;
        };
        let handler = Closure::wrap(Box::new(move |_event: MouseEvent| {
            results_rows::toggle_job_results(&job_id);
        }) as Box<dyn FnMut(MouseEvent)>);
        element
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .ok();
        handler.forget();
    }
}

fn wire_load_more() {
    for element in unbound("button.load-more-btn[data-job-id][data-offset]") {
        let Ok(button) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let target = button.clone();
        let handler = Closure::wrap(Box::new(move |_event: MouseEvent| {
            spawn_future(results_rows::load_more(target.clone()));
        }) as Box<dyn FnMut(MouseEvent)>);
        button
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .ok();
        handler.forget();
    }
}

fn hydrate_charts() {
    for canvas in unbound("canvas[id^=\"chart-\"]") {
        let Some(id) = canvas.get_attribute("id") else {
            continue;
        };
        if let Some(job_id) = id.strip_prefix("chart-") {
            spawn_future(chart_panel::hydrate(job_id.to_string()));
        }
    }
}

/// Matching elements not yet claimed by a previous pass, marking each as
/// claimed on the way out.
fn unbound(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    let mut fresh = Vec::new();
    for index in 0..list.length() {
        let Some(element) = list
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        if element.has_attribute(BOUND_ATTR) {
            continue;
        }
        element.set_attribute(BOUND_ATTR, "true").ok();
        fresh.push(element);
    }
    fresh
}
