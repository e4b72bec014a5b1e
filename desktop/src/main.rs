#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::net;
use ui::dashboard::{use_notifier_provider, NotificationArea};
use ui::views::{Home, Stats};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/estadisticas")]
    Stats {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// assets directory needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("EcoBalance – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    // Headless build (CI / tests): no window configuration available without
    // the desktop renderer. Run with `--features desktop` for the real window.
    dioxus::launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_stats(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Stats {}, "{label}" })
}

#[component]
fn App() -> Element {
    {
        // The desktop build talks to a remote (or locally running) EcoBalance
        // server; default is the Flask dev address.
        let base = std::env::var("ECOBALANCE_API")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        net::set_api_base(base);

        register_nav(NavBuilder {
            home: nav_home,
            stats: nav_stats,
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopShell() -> Element {
    use_notifier_provider();

    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
        NotificationArea { }
    }
}
