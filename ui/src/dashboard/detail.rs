//! Detail panel for the currently selected site.

use dioxus::prelude::*;

use crate::core::{format, site::SiteRecord};
use crate::dashboard::classified;

#[component]
pub fn SiteDetailPanel(record: Option<SiteRecord>, on_close: EventHandler<()>) -> Element {
    rsx! {
        section { class: "site-detail",
            div { class: "site-detail__header",
                h2 { "Detalle" }
                if record.is_some() {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_close.call(()),
                        "Cerrar"
                    }
                }
            }

            match record {
                Some(record) => render_record(&record),
                None => rsx! {
                    p { class: "site-detail__placeholder",
                        "Selecciona un sitio para revisar sus índices."
                    }
                },
            }
        }
    }
}

fn render_record(record: &SiteRecord) -> Element {
    let (ehi_color, ehi_label) = classified(record.ehi);

    let sub_indices: Vec<(&str, String, &'static str)> =
        [("TFI", record.tfi), ("BI", record.bi), ("VSI", record.vsi)]
            .into_iter()
            .map(|(name, value)| {
                let (color, _) = classified(value);
                (name, format::format_subindex(value), color)
            })
            .collect();

    rsx! {
        div { class: "site-detail__summary",
            h3 { "{record.site_name}" }
            div {
                class: "ehi-value ehi-value--large",
                style: "color: {ehi_color};",
                {format::format_ehi(record.ehi)}
            }
            span {
                class: "ehi-category",
                style: "background: {ehi_color};",
                "{ehi_label}"
            }
        }

        ul { class: "site-detail__grid",
            for (name, display, color) in sub_indices.into_iter() {
                li {
                    span { class: "site-detail__metric-label", "{name}" }
                    span {
                        class: "site-detail__metric-value",
                        style: "color: {color};",
                        "{display}"
                    }
                }
            }
        }
    }
}
