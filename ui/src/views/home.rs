use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::net::{self, ApiOutcome};
use crate::core::site::SiteRecord;
use crate::dashboard::{
    run_compare, use_notifier, ComparisonEntry, ComparisonModal, ComparisonSelection, ExportButton,
    FilterBar, FilterCriteria, Severity, SiteCards, SiteDetailPanel, MIN_COMPARE_SITES,
};

#[derive(Debug, Clone)]
enum DashboardEvent {
    Reload,
    Compare,
}

#[component]
pub fn Home() -> Element {
    let records = use_signal(Vec::<SiteRecord>::new);
    let load_error = use_signal(|| Option::<String>::None);
    let criteria = use_signal(FilterCriteria::default);
    let selection = use_signal(ComparisonSelection::default);
    let comparison = use_signal(|| Option::<Vec<ComparisonEntry>>::None);
    let selected_site = use_signal(|| Option::<String>::None);
    let comparing = use_signal(|| false);
    let notifier = use_notifier();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| {
        let records_signal = records;
        let error_signal = load_error;
        let mut comparison_signal = comparison;
        let mut comparing_signal = comparing;
        let selection_signal = selection;

        async move {
            load_sites(records_signal, error_signal).await;

            while let Some(event) = rx.next().await {
                match event {
                    DashboardEvent::Reload => {
                        load_sites(records_signal, error_signal).await;
                    }
                    DashboardEvent::Compare => {
                        let ids = selection_signal.with(|sel| sel.ids().to_vec());
                        if ids.len() < MIN_COMPARE_SITES {
                            notifier.notify("Selecciona al menos 2 sitios", Severity::Warning);
                            continue;
                        }
                        comparing_signal.set(true);
                        if let Some(entries) = run_compare(ids, notifier).await {
                            comparison_signal.set(Some(entries));
                        }
                        comparing_signal.set(false);
                    }
                }
            }
        }
    });

    let selection_snapshot = selection();
    let mut comparison_for_close = comparison;
    let mut selected_for_close = selected_site;

    let detail_record = selected_site().and_then(|id| {
        records()
            .iter()
            .find(|record| record.site_id == id)
            .cloned()
    });

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Sitios monitoreados" }
            p {
                "Explora el Índice de Salud Ecológica de cada sitio, filtra por nombre o categoría y compara hasta cinco sitios."
            }

            if let Some(message) = load_error() {
                div { class: "page-dashboard__error",
                    "⚠️ {message}"
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| coroutine.send(DashboardEvent::Reload),
                        "Reintentar"
                    }
                }
            }

            div { class: "page-dashboard__toolbar",
                FilterBar { criteria }
                div { class: "page-dashboard__actions",
                    ExportButton {}
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: !selection_snapshot.can_compare() || comparing(),
                        onclick: move |_| coroutine.send(DashboardEvent::Compare),
                        "{selection_snapshot.button_label()}"
                    }
                }
            }

            div { class: "page-dashboard__panels",
                SiteCards { records, criteria, selection, selected_site }
                SiteDetailPanel {
                    record: detail_record,
                    on_close: move |_| selected_for_close.set(None),
                }
            }

            if let Some(entries) = comparison() {
                ComparisonModal {
                    entries,
                    on_close: move |_| comparison_for_close.set(None),
                }
            }
        }
    }
}

async fn load_sites(mut records: Signal<Vec<SiteRecord>>, mut error: Signal<Option<String>>) {
    match net::get_json::<Vec<SiteRecord>>("/api/zonas").await {
        ApiOutcome::Success { data } => {
            error.set(None);
            records.set(data);
        }
        ApiOutcome::Failure { error: message } => {
            net::trace_failure("/api/zonas", &message);
            error.set(Some("No se pudo cargar el listado de sitios".to_string()));
        }
    }
}
