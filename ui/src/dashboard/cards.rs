//! Filterable site card grid with comparison checkboxes.

use dioxus::prelude::*;

use crate::core::{format, site::SiteRecord};
use crate::dashboard::classified;
use crate::dashboard::compare::{ComparisonSelection, ToggleOutcome};
use crate::dashboard::filter::FilterCriteria;
use crate::dashboard::notify::{use_notifier, Notifier, Severity};

#[derive(Clone, PartialEq)]
struct CardEntry {
    site_id: String,
    site_name: String,
    ehi_display: String,
    ehi_color: &'static str,
    category_label: &'static str,
    visible: bool,
    checked: bool,
    active: bool,
}

#[component]
pub fn SiteCards(
    records: Signal<Vec<SiteRecord>>,
    criteria: Signal<FilterCriteria>,
    selection: Signal<ComparisonSelection>,
    selected_site: Signal<Option<String>>,
) -> Element {
    let notifier = use_notifier();

    let active_id = selected_site();
    let current_criteria = criteria();
    let current_selection = selection();

    let entries: Vec<CardEntry> = records()
        .iter()
        .map(|record| {
            let (color, label) = classified(record.ehi);
            CardEntry {
                site_id: record.site_id.clone(),
                site_name: record.site_name.clone(),
                ehi_display: format::format_ehi(record.ehi),
                ehi_color: color,
                category_label: label,
                // Hidden, not removed: the card stays mounted so the filter
                // only ever reflects the latest two inputs.
                visible: current_criteria.matches(&record.site_name, label),
                checked: current_selection.contains(&record.site_id),
                active: active_id.as_deref() == Some(record.site_id.as_str()),
            }
        })
        .collect();

    if entries.is_empty() {
        return rsx! {
            p { class: "site-cards__placeholder",
                "Los sitios monitoreados aparecerán aquí cuando el servidor entregue datos."
            }
        };
    }

    rsx! {
        div { class: "site-cards",
            for entry in entries.into_iter() {
                {render_card(entry, selection, selected_site, notifier)}
            }
        }
    }
}

fn render_card(
    entry: CardEntry,
    mut selection: Signal<ComparisonSelection>,
    mut selected_site: Signal<Option<String>>,
    notifier: Notifier,
) -> Element {
    let CardEntry {
        site_id,
        site_name,
        ehi_display,
        ehi_color,
        category_label,
        visible,
        checked,
        active,
    } = entry;

    let detail_id = site_id.clone();
    let toggle_id = site_id.clone();
    let card_class = format!("site-card{}", if active { " site-card--active" } else { "" });
    let card_style = if visible { "" } else { "display: none;" };

    rsx! {
        article {
            key: "{site_id}",
            class: "{card_class}",
            style: "{card_style}",
            onclick: move |_| selected_site.set(Some(detail_id.clone())),

            h3 { "{site_name}" }
            div {
                class: "ehi-value",
                style: "color: {ehi_color};",
                "{ehi_display}"
            }
            span {
                class: "ehi-category",
                style: "background: {ehi_color};",
                "{category_label}"
            }

            label {
                class: "site-card__compare",
                onclick: move |evt| evt.stop_propagation(),
                input {
                    r#type: "checkbox",
                    checked: checked,
                    oninput: move |_| {
                        let outcome = selection.with_mut(|sel| sel.toggle(&toggle_id));
                        if outcome == ToggleOutcome::Rejected {
                            notifier.notify("Máximo 5 sitios para comparar", Severity::Warning);
                        }
                    },
                }
                "Comparar"
            }
        }
    }
}
