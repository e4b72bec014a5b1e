use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::net;
use ui::dashboard::{use_notifier_provider, NotificationArea};
use ui::views::{Home, Stats};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/estadisticas")]
    Stats {},
}

// Embedded shared theme (ui/assets/theme/main.css); served inline so the
// web build needs no separate asset pipeline step.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_stats(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Stats {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        // Same-origin API: the dashboard is served by the Flask app itself.
        #[cfg(target_arch = "wasm32")]
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            net::set_api_base(origin);
        }
        #[cfg(not(target_arch = "wasm32"))]
        net::set_api_base("http://localhost:5000");

        register_nav(NavBuilder {
            home: nav_home,
            stats: nav_stats,
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    use_notifier_provider();

    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
        NotificationArea { }
    }
}
