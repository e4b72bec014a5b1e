//! Text and category filtering over the rendered site cards.

use dioxus::prelude::*;

use crate::core::classify::Category;

/// Sentinel select value matching every category.
pub const CATEGORY_ALL: &str = "all";

/// The two active filter inputs. Cards are matched against exactly this pair;
/// there is no filter history or stacking.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CATEGORY_ALL.to_string(),
        }
    }
}

impl FilterCriteria {
    /// True when a card with this name and displayed category label should
    /// stay visible. The name check is a case-insensitive substring match
    /// (empty search matches all); the category check is an exact label
    /// match unless the filter is `"all"`.
    pub fn matches(&self, site_name: &str, category_label: &str) -> bool {
        let name_matches = self.search.is_empty()
            || site_name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let category_matches = self.category == CATEGORY_ALL || category_label == self.category;
        name_matches && category_matches
    }
}

/// Search input, category select and reset control.
#[component]
pub fn FilterBar(criteria: Signal<FilterCriteria>) -> Element {
    let mut criteria = criteria;
    let snapshot = criteria();

    rsx! {
        div { class: "filter-bar",
            input {
                r#type: "search",
                class: "filter-bar__search",
                placeholder: "Buscar sitio…",
                value: "{snapshot.search}",
                oninput: move |evt| criteria.with_mut(|c| c.search = evt.value()),
            }
            select {
                class: "filter-bar__category",
                value: "{snapshot.category}",
                oninput: move |evt| criteria.with_mut(|c| c.category = evt.value()),
                option { value: CATEGORY_ALL, "Todas las categorías" }
                for category in Category::ALL {
                    option { value: "{category.label()}", "{category.label()}" }
                }
            }
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| criteria.set(FilterCriteria::default()),
                "Limpiar"
            }
        }
    }
}
