use dioxus::prelude::*;

use crate::core::classify::Category;
use crate::core::net::{self, ApiOutcome};
use crate::core::site::EcosystemStats;
use crate::core::format;
use crate::dashboard::EhiBarChart;

#[component]
pub fn Stats() -> Element {
    let stats = use_signal(|| Option::<EcosystemStats>::None);
    let load_error = use_signal(|| Option::<String>::None);
    let chart_values = use_signal(Vec::<f64>::new);
    let chart_labels = use_signal(|| {
        ["EHI", "TFI", "BI", "VSI"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    });

    use_future(move || async move {
        let mut stats = stats;
        let mut load_error = load_error;
        let mut chart_values = chart_values;

        match net::get_json::<EcosystemStats>("/api/estadisticas").await {
            ApiOutcome::Success { data } => {
                chart_values.set(vec![
                    data.ehi_promedio,
                    data.tfi_promedio,
                    data.bi_promedio,
                    data.vsi_promedio,
                ]);
                load_error.set(None);
                stats.set(Some(data));
            }
            ApiOutcome::Failure { error } => {
                net::trace_failure("/api/estadisticas", &error);
                load_error.set(Some("No hay estadísticas disponibles".to_string()));
            }
        }
    });

    rsx! {
        section { class: "page page-stats",
            h1 { "Estadísticas" }
            p { "Promedios del ecosistema y distribución de sitios por categoría." }

            if let Some(message) = load_error() {
                div { class: "page-stats__error", "⚠️ {message}" }
            }

            match stats() {
                Some(stats) => render_stats(&stats, chart_values, chart_labels),
                None => rsx! {
                    p { class: "page-stats__placeholder",
                        "Las estadísticas aparecerán cuando existan resultados calculados."
                    }
                },
            }
        }
    }
}

fn render_stats(
    stats: &EcosystemStats,
    chart_values: Signal<Vec<f64>>,
    chart_labels: Signal<Vec<String>>,
) -> Element {
    let ehi_promedio = format::format_subindex(Some(stats.ehi_promedio));
    let ehi_max = format::format_subindex(Some(stats.ehi_max));
    let ehi_min = format::format_subindex(Some(stats.ehi_min));

    let breakdown: Vec<(&'static str, &'static str, u32)> = Category::ALL
        .into_iter()
        .map(|category| {
            let count = stats
                .por_categoria
                .get(category.label())
                .copied()
                .unwrap_or(0);
            (category.label(), category.color(), count)
        })
        .collect();

    rsx! {
        div { class: "stats-highlights",
            div { class: "stats-highlight",
                span { class: "stats-highlight__label", "Sitios" }
                strong { class: "stats-highlight__value", "{stats.total_sitios}" }
            }
            div { class: "stats-highlight",
                span { class: "stats-highlight__label", "EHI promedio" }
                strong { class: "stats-highlight__value", "{ehi_promedio}" }
            }
            div { class: "stats-highlight",
                span { class: "stats-highlight__label", "EHI máximo" }
                strong { class: "stats-highlight__value", "{ehi_max}" }
            }
            div { class: "stats-highlight",
                span { class: "stats-highlight__label", "EHI mínimo" }
                strong { class: "stats-highlight__value", "{ehi_min}" }
            }
        }

        div { class: "stats-breakdown",
            h2 { "Sitios por categoría" }
            ul {
                for (label, color, count) in breakdown.into_iter() {
                    li { key: "{label}",
                        span {
                            class: "stats-breakdown__badge",
                            style: "background: {color};",
                            "{label}"
                        }
                        span { class: "stats-breakdown__count", "{count}" }
                    }
                }
            }
        }

        div { class: "stats-chart",
            h2 { "Promedios por índice" }
            EhiBarChart {
                canvas_id: "statsChart",
                values: chart_values,
                labels: chart_labels,
                width: 640,
                height: 320,
            }
        }
    }
}
