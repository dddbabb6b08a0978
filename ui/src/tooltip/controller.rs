//! Delegated DOM controller for the shared timestamp tooltip.
//!
//! One tooltip element serves the whole page. Listeners are installed once
//! at `document.body`, so trigger cells added by later content swaps are
//! covered without rebinding per element.

use std::cell::RefCell;

use dioxus::logger::tracing::warn;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, MouseEvent};

use crate::core::platform::{local_clock, spawn_future};
use crate::core::time_local::{localize, LocalizedTime};
use crate::tooltip::position::{self, BoxSize, TriggerRect, Viewport};
use crate::tooltip::tracker::TrackedTrigger;

/// Selector for table cells carrying a UTC timestamp.
const TRIGGER_SELECTOR: &str = ".timestamp";
/// Marker attribute guarding against duplicate listener installation.
const BOUND_ATTR: &str = "data-timestamp-tooltips";

const TOOLTIP_CSS: &str = "position: absolute; background: rgba(0, 0, 0, 0.9); \
    color: white; padding: 8px 12px; border-radius: 4px; font-size: 14px; \
    pointer-events: none; z-index: 1000; display: none; white-space: nowrap; \
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.3);";

thread_local! {
    static TOOLTIP: RefCell<Option<HtmlElement>> = const { RefCell::new(None) };
    static TRACKED: RefCell<TrackedTrigger<Element>> =
        const { RefCell::new(TrackedTrigger::none()) };
}

/// Installs the delegated mouseover/mouseout listeners at `document.body`.
/// Idempotent: calling it again after a content swap is a no-op.
pub fn install_delegation() {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if body.has_attribute(BOUND_ATTR) {
        return;
    }
    body.set_attribute(BOUND_ATTR, "true").ok();

    let over = Closure::wrap(Box::new(handle_mouseover) as Box<dyn FnMut(MouseEvent)>);
    body.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref())
        .ok();
    over.forget();

    let out = Closure::wrap(Box::new(handle_mouseout) as Box<dyn FnMut(MouseEvent)>);
    body.add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref())
        .ok();
    out.forget();
}

fn handle_mouseover(event: MouseEvent) {
    if let Some(trigger) = trigger_from(event.target()) {
        show_for(&trigger);
    }
}

fn handle_mouseout(event: MouseEvent) {
    let Some(trigger) = trigger_from(event.target()) else {
        return;
    };
    let moved_within = event
        .related_target()
        .and_then(|t: EventTarget| t.dyn_into::<Element>().ok())
        .map(|related| trigger.contains(Some(related.as_ref())))
        .unwrap_or(false);
    let should_hide =
        TRACKED.with(|tracked| tracked.borrow().should_hide_on_leave(&trigger, moved_within));
    if should_hide {
        hide();
    }
}

fn trigger_from(target: Option<EventTarget>) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(TRIGGER_SELECTOR)
        .ok()
        .flatten()
}

/// Shows the tooltip for `trigger`, replacing content and position if it is
/// already visible. A timestamp that fails to parse aborts the show silently.
pub fn show_for(trigger: &Element) {
    let text = trigger.text_content().unwrap_or_default();
    let clock = local_clock();
    let localized = match localize(text.trim(), clock.offset, &clock.zone_short, &clock.zone_name)
    {
        Ok(localized) => localized,
        Err(err) => {
            warn!("timestamp tooltip skipped ({err}): {text:?}");
            return;
        }
    };

    let Some(tooltip) = ensure_tooltip() else {
        return;
    };
    tooltip.set_inner_html(&render_content(&localized));

    let rect = trigger.get_bounding_client_rect();
    let trigger_rect = TriggerRect {
        left: rect.left(),
        top: rect.top(),
        bottom: rect.bottom(),
    };

    let first = position::initial(trigger_rect);
    let style = tooltip.style();
    style.set_property("left", &format!("{}px", first.left)).ok();
    style.set_property("top", &format!("{}px", first.top)).ok();
    style.set_property("display", "block").ok();

    TRACKED.with(|tracked| tracked.borrow_mut().show(trigger.clone()));

    // Width and height are unknown until the tooltip is laid out; measure on
    // the next tick and apply the viewport corrections.
    let element = tooltip.clone();
    spawn_future(async move {
        TimeoutFuture::new(0).await;
        let Some(viewport_width) = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
        else {
            return;
        };
        let measured = element.get_bounding_client_rect();
        let corrected = position::place(
            BoxSize {
                width: measured.width(),
                height: measured.height(),
            },
            trigger_rect,
            Viewport {
                width: viewport_width,
            },
        );
        let style = element.style();
        style
            .set_property("left", &format!("{}px", corrected.left))
            .ok();
        style
            .set_property("top", &format!("{}px", corrected.top))
            .ok();
    });
}

/// Hides the tooltip and clears the tracked trigger. No-op when hidden.
pub fn hide() {
    TRACKED.with(|tracked| tracked.borrow_mut().clear());
    TOOLTIP.with(|cell| {
        if let Some(element) = cell.borrow().as_ref() {
            element.style().set_property("display", "none").ok();
        }
    });
}

fn render_content(time: &LocalizedTime) -> String {
    format!(
        "<div style=\"margin-bottom: 4px;\"><strong>UTC:</strong> {}</div>\
         <div><strong>Local:</strong> {}</div>\
         <div style=\"font-size: 12px; opacity: 0.8; margin-top: 4px;\">Timezone: {}</div>",
        time.utc_text, time.local_text, time.zone_name
    )
}

/// The page-lifetime tooltip element, created on first use and hidden (never
/// removed) when idle.
fn ensure_tooltip() -> Option<HtmlElement> {
    TOOLTIP.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(element) = slot.as_ref() {
            return Some(element.clone());
        }
        let document = web_sys::window()?.document()?;
        let element = document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        element.set_class_name("time-tooltip");
        element.style().set_css_text(TOOLTIP_CSS);
        document.body()?.append_child(&element).ok()?;
        *slot = Some(element.clone());
        Some(element)
    })
}
