use dioxus::prelude::*;

/// Jobs dashboard page. The table itself is server-rendered HTML, injected
/// as a fragment; every swap is followed by a rebind pass that restores
/// tooltips, expansion state, pagination and chart hydration.
#[component]
pub fn Jobs() -> Element {
    let table_html = use_resource(|| async move { fetch_jobs_table().await });

    use_effect(move || {
        // Subscribe to swaps of the injected fragment.
        let _ = table_html.read();
        #[cfg(target_arch = "wasm32")]
        crate::jobs::bind::rebind();
    });

    let body = match &*table_html.read_unchecked() {
        Some(Ok(html)) => rsx! {
            div { class: "jobs-table", dangerous_inner_html: "{html}" }
        },
        Some(Err(err)) => rsx! {
            p { class: "jobs-table__error", "Couldn't load the jobs table: {err}" }
        },
        None => rsx! {
            p { class: "jobs-table__placeholder", "Loading jobs…" }
        },
    };

    rsx! {
        section { class: "page page-jobs",
            div { class: "page-jobs__header",
                h1 { "Jobs" }
                button {
                    r#type: "button",
                    class: "button",
                    onclick: move |_| {
                        let mut table_html = table_html;
                        table_html.restart();
                    },
                    "Refresh"
                }
            }
            {body}
        }
    }
}

async fn fetch_jobs_table() -> Result<String, String> {
    let response = reqwest::get(crate::core::platform::backend_url("/jobs/table"))
        .await
        .map_err(|err| err.to_string())?;
    response.text().await.map_err(|err| err.to_string())
}
