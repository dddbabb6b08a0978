use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Runboard" }
            p { "A live view over your periodic jobs: recent runs, durations, and failures at a glance." }

            ul { class: "page-home__features",
                li { "Per-job sparkline charts over the most recent runs" }
                li { "Success rates computed across the full run history" }
                li { "Hover any UTC timestamp for your local time" }
            }
        }
    }
}
