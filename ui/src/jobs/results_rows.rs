//! Expand/collapse and "load more" pagination for job result rows.
//!
//! Result rows arrive as server-rendered HTML. Expansion state is persisted
//! per job id and restored after every content swap; pagination pulls the
//! next fragment and splices it in before the sentinel "load more" row.

use dioxus::logger::tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use crate::core::platform::backend_url;
use crate::core::storage;

/// Toggles visibility of one job's result rows and records the new state.
pub fn toggle_job_results(job_id: &str) {
    let Some(document) = document() else {
        return;
    };
    let Some(toggle_btn) = query_toggle(&document, job_id) else {
        return;
    };

    let was_expanded = toggle_btn.class_list().contains("expanded");
    set_rows_visible(&document, job_id, !was_expanded);
    toggle_btn.class_list().toggle("expanded").ok();
    toggle_btn.set_text_content(Some(if was_expanded { "▶" } else { "▼" }));

    storage::set_expanded(job_id, !was_expanded);
}

/// Re-applies persisted expansion after a content swap replaced the rows
/// (freshly rendered rows always start collapsed).
pub fn restore_expanded() {
    let Some(document) = document() else {
        return;
    };
    for (job_id, expanded) in storage::load_expanded() {
        if !expanded {
            continue;
        }
        if let Some(toggle_btn) = query_toggle(&document, &job_id) {
            if !toggle_btn.class_list().contains("expanded") {
                toggle_job_results(&job_id);
            }
        }
    }
}

/// Loads the next page of result rows for the button's job, replacing the
/// sentinel row with the fetched fragment. A failed fetch permanently
/// disables the button until a full page reload.
pub async fn load_more(button: HtmlElement) {
    let (Some(job_id), Some(offset)) = (
        button.get_attribute("data-job-id"),
        button.get_attribute("data-offset"),
    ) else {
        return;
    };
    let Some(sentinel_row) = button.closest("tr").ok().flatten() else {
        return;
    };

    let url = backend_url(&format!("/jobs/results/{job_id}?offset={offset}"));
    match fetch_fragment(&url).await {
        Ok(html) => {
            sentinel_row.insert_adjacent_html("beforebegin", &html).ok();
            sentinel_row.remove();
            // Fresh rows arrive hidden; reveal them when the job is expanded.
            if let Some(document) = document() {
                let expanded = query_toggle(&document, &job_id)
                    .map(|btn| btn.class_list().contains("expanded"))
                    .unwrap_or(false);
                if expanded {
                    set_rows_visible(&document, &job_id, true);
                }
            }
        }
        Err(err) => {
            warn!("loading more results failed for {job_id}: {err}");
            button.set_text_content(Some("Error loading results"));
            if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
                button.set_disabled(true);
            }
        }
    }
}

async fn fetch_fragment(url: &str) -> Result<String, String> {
    let response = reqwest::get(url).await.map_err(|err| err.to_string())?;
    response.text().await.map_err(|err| err.to_string())
}

fn set_rows_visible(document: &Document, job_id: &str, visible: bool) {
    let selectors = [
        format!(".job-result-row[data-job-id=\"{job_id}\"]"),
        format!(".load-more-row.job-{job_id}"),
    ];
    for selector in selectors {
        let Ok(rows) = document.query_selector_all(&selector) else {
            continue;
        };
        for index in 0..rows.length() {
            let Some(row) = rows
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            if visible {
                row.style().remove_property("display").ok();
            } else {
                row.style().set_property("display", "none").ok();
            }
        }
    }
}

fn query_toggle(document: &Document, job_id: &str) -> Option<HtmlElement> {
    document
        .query_selector(&format!(".toggle-btn[data-job-id=\"{job_id}\"]"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}
