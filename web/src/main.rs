use dioxus::prelude::*;

use ui::components::Navbar;
use ui::views::{Home, Jobs};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/jobs")]
    Jobs {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

// External chart renderer; the jobs view hands it prepared series data.
const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: CHART_JS_CDN }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar__link", to: Route::Home {}, "Home" }
            Link { class: "navbar__link", to: Route::Jobs {}, "Jobs" }
        }
        Outlet::<Route> {}
    }
}
