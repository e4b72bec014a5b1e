//! Site comparison: bounded selection, fetch, and the result modal.

use dioxus::prelude::*;

use crate::core::classify::classify;
use crate::core::net::{self, ApiOutcome};
use crate::core::{format, site::SiteRecord};
use crate::dashboard::notify::{Notifier, Severity};

/// Selection capacity; the server rejects larger comparisons too.
pub const MAX_COMPARE_SITES: usize = 5;
/// Minimum selection for a meaningful comparison.
pub const MIN_COMPARE_SITES: usize = 2;

/// Outcome of toggling a site in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The selection was already at capacity; nothing changed.
    Rejected,
}

/// Ordered set of up to five unique site ids. Insertion order is display
/// order; it carries no comparison semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    /// Remove `id` if present, append it if there is room, reject otherwise.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if let Some(position) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(position);
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= MAX_COMPARE_SITES {
            return ToggleOutcome::Rejected;
        }
        self.ids.push(id.to_string());
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn can_compare(&self) -> bool {
        self.ids.len() >= MIN_COMPARE_SITES
    }

    /// Label for the trigger control, e.g. `Comparar (3)`.
    pub fn button_label(&self) -> String {
        format!("Comparar ({})", self.ids.len())
    }
}

/// Everything the comparison grid needs for one site, precomputed so the
/// markup stays trivial and the transformation is testable without a
/// rendering environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub site_name: String,
    pub ehi_display: String,
    pub ehi_color: &'static str,
    pub tfi_display: String,
    pub bi_display: String,
    pub vsi_display: String,
    pub category_label: &'static str,
    pub badge_color: &'static str,
}

/// Pure data-to-view-model step: classify and format each record. Same
/// records in, same entries out, in payload order.
pub fn comparison_entries(records: &[SiteRecord]) -> Vec<ComparisonEntry> {
    records
        .iter()
        .map(|record| {
            let classification = record.ehi.and_then(classify);
            let color = classification
                .map(|c| c.color)
                .unwrap_or(crate::core::classify::UNCLASSIFIED_COLOR);

            ComparisonEntry {
                site_name: record.site_name.clone(),
                ehi_display: format::format_ehi(record.ehi),
                ehi_color: color,
                tfi_display: format::format_subindex(record.tfi),
                bi_display: format::format_subindex(record.bi),
                vsi_display: format::format_subindex(record.vsi),
                category_label: classification
                    .map(|c| c.category.label())
                    .unwrap_or(format::SENTINEL),
                badge_color: color,
            }
        })
        .collect()
}

/// Fetch the comparison for `ids` and build the grid view-model. Failures
/// surface as one error toast and yield `None`; the caller's precondition
/// (at least two ids) is checked before any request is issued.
pub async fn run_compare(ids: Vec<String>, notifier: Notifier) -> Option<Vec<ComparisonEntry>> {
    debug_assert!(ids.len() >= MIN_COMPARE_SITES);

    let body = serde_json::json!({ "site_ids": ids });
    match net::post_json::<Vec<SiteRecord>, _>("/api/comparar", &body).await {
        ApiOutcome::Success { data } => Some(comparison_entries(&data)),
        ApiOutcome::Failure { error } => {
            net::trace_failure("/api/comparar", &error);
            notifier.notify("Error al comparar sitios", Severity::Error);
            None
        }
    }
}

/// Modal grid of classified comparison results. Closing is the caller's
/// state change; reopening with the same entries renders an equivalent tree.
#[component]
pub fn ComparisonModal(entries: Vec<ComparisonEntry>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal",
            tabindex: 0,
            onkeydown: move |evt| {
                if evt.key().to_string() == "Escape" {
                    on_close.call(());
                }
            },
            div { class: "modal-content modal-content--wide",
                span {
                    class: "close-modal",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h3 { "📊 Comparación de Sitios" }
                div { class: "comparison-grid",
                    for entry in entries.iter() {
                        div { class: "comparison-card",
                            h4 { "{entry.site_name}" }
                            div {
                                class: "ehi-value",
                                style: "color: {entry.ehi_color};",
                                "{entry.ehi_display}"
                            }
                            div { class: "comparison-indices",
                                div {
                                    strong { "TFI:" }
                                    " {entry.tfi_display}"
                                }
                                div {
                                    strong { "BI:" }
                                    " {entry.bi_display}"
                                }
                                div {
                                    strong { "VSI:" }
                                    " {entry.vsi_display}"
                                }
                            }
                            div {
                                class: "comparison-category",
                                style: "background: {entry.badge_color};",
                                "{entry.category_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
