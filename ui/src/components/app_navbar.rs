use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::timing;

/// Platform crates register fully constructed `Link` elements so `ui` does
/// not need to know each platform's `Route` enum. The closures receive the
/// label and return a link that already contains it.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub stats: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform's nav builder. Call before rendering the root; later
/// calls are ignored.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let clock = use_signal(timing::clock_label);

    // Minute-resolution refresh, matching the clock's displayed precision.
    use_future(move || async move {
        let mut clock = clock;
        loop {
            timing::sleep_ms(60_000).await;
            clock.set(timing::clock_label());
        }
    });

    let internal_nav = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Sitios");
        let stats = (builder.stats)("Estadísticas");
        rsx! {
            nav { class: "navbar__links",
                {home}
                {stats}
            }
        }
    });

    rsx! {
        header { class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "🌿 EcoBalance" }
                    span { class: "navbar__brand-subtitle", "Índice de Salud Ecológica" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                }

                span { class: "navbar__clock", "{clock()}" }
            }
        }
    }
}
