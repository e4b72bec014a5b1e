//! Simple bar chart colored through the classifier.
//!
//! Layout is pure and unit-tested; painting is a thin canvas pass on the
//! browser build and a textual list on native.

use dioxus::prelude::*;

use crate::core::classify::color_for;
use crate::core::format;

/// Pixels reserved under the bars for the optional labels.
const BASELINE_PX: f64 = 20.0;
/// Headroom above the tallest bar for the value overlay.
const HEADROOM_PX: f64 = 20.0;
/// Horizontal inset on each side of a bar slot.
const BAR_INSET_PX: f64 = 5.0;

/// One laid-out bar in canvas pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub value_label: String,
    pub label: Option<String>,
}

/// Scale `values` linearly against their maximum and produce one bar per
/// value.
///
/// When the maximum is not finite or ≤ 0 the scale collapses to zero: bars
/// sit on the baseline, labels still render, and no division by zero can
/// occur. Non-finite individual values get a zero-height bar and the
/// formatter's sentinel as their overlay.
pub fn layout_bars(values: &[f64], labels: &[String], width: f64, height: f64) -> Vec<Bar> {
    if values.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let slot = width / values.len() as f64;
    let max = values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    let usable = (height - BASELINE_PX - HEADROOM_PX).max(0.0);
    let scale = if max.is_finite() && max > 0.0 {
        usable / max
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let bar_height = if value.is_finite() {
                (value * scale).max(0.0)
            } else {
                0.0
            };
            let x = index as f64 * slot;
            let finite = value.is_finite().then_some(value);

            Bar {
                x: x + BAR_INSET_PX,
                y: height - bar_height - BASELINE_PX,
                width: (slot - 2.0 * BAR_INSET_PX).max(1.0),
                height: bar_height,
                color: color_for(finite),
                value_label: format::format_subindex(finite),
                label: labels.get(index).cloned(),
            }
        })
        .collect()
}

/// Canvas bar chart. Every invocation repaints from scratch; a missing
/// canvas target is skipped silently.
#[component]
pub fn EhiBarChart(
    canvas_id: String,
    values: Signal<Vec<f64>>,
    labels: Signal<Vec<String>>,
    width: u32,
    height: u32,
) -> Element {
    #[cfg(target_arch = "wasm32")]
    {
        let id = canvas_id.clone();
        use_effect(move || {
            let values = values();
            let labels = labels();
            paint(&id, &values, &labels, width as f64, height as f64);
        });
    }

    rsx! {
        div { class: "ehi-chart",
            canvas {
                id: "{canvas_id}",
                class: "ehi-chart__canvas",
                width: "{width}",
                height: "{height}",
            }
            // Canvas 2D is unavailable outside the browser; native builds
            // list the same data points instead.
            if cfg!(not(target_arch = "wasm32")) {
                ul { class: "ehi-chart__fallback",
                    for bar in layout_bars(&values(), &labels(), width as f64, height as f64) {
                        li {
                            span { class: "ehi-chart__label", {bar.label.clone().unwrap_or_default()} }
                            span {
                                class: "ehi-chart__value",
                                style: "color: {bar.color};",
                                "{bar.value_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn paint(canvas_id: &str, values: &[f64], labels: &[String], width: f64, height: f64) {
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(canvas_id) else {
        return;
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        return;
    };
    let context: CanvasRenderingContext2d = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into() {
            Ok(context) => context,
            Err(_) => return,
        },
        _ => return,
    };

    context.clear_rect(0.0, 0.0, width, height);
    context.set_font("12px Arial");
    context.set_text_align("center");

    for bar in layout_bars(values, labels, width, height) {
        context.set_fill_style_str(bar.color);
        context.fill_rect(bar.x, bar.y, bar.width, bar.height);

        context.set_fill_style_str("#000");
        let center = bar.x + bar.width / 2.0;
        let _ = context.fill_text(&bar.value_label, center, bar.y - 5.0);
        if let Some(label) = bar.label.as_ref() {
            let _ = context.fill_text(label, center, height - 5.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn tallest_bar_fills_the_usable_height() {
        let bars = layout_bars(&[0.4, 0.8], &labels(&["a", "b"]), 200.0, 140.0);
        assert_eq!(bars.len(), 2);
        // usable = 140 - 20 - 20 = 100
        assert!((bars[1].height - 100.0).abs() < 1e-9);
        assert!((bars[0].height - 50.0).abs() < 1e-9);
        assert!((bars[1].y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn all_zero_values_collapse_to_the_baseline() {
        let bars = layout_bars(&[0.0, 0.0, 0.0], &labels(&["a", "b", "c"]), 300.0, 150.0);
        for bar in &bars {
            assert_eq!(bar.height, 0.0);
            assert!(bar.y.is_finite());
        }
    }

    #[test]
    fn non_finite_values_get_sentinel_overlays() {
        let bars = layout_bars(&[f64::NAN, 0.5], &labels(&["a", "b"]), 200.0, 140.0);
        assert_eq!(bars[0].height, 0.0);
        assert_eq!(bars[0].value_label, "--");
        assert!(bars[1].height > 0.0);
    }

    #[test]
    fn negative_values_clamp_to_zero_height() {
        let bars = layout_bars(&[-0.5, 0.5], &labels(&[]), 200.0, 140.0);
        assert_eq!(bars[0].height, 0.0);
        assert!(bars[0].label.is_none());
    }

    #[test]
    fn bar_colors_come_from_the_classifier() {
        let bars = layout_bars(&[0.9, 0.05], &labels(&["a", "b"]), 200.0, 140.0);
        assert_eq!(bars[0].color, "#22c55e");
        assert_eq!(bars[1].color, "#000000");
    }

    #[test]
    fn empty_input_draws_nothing() {
        assert!(layout_bars(&[], &labels(&[]), 200.0, 140.0).is_empty());
    }
}
