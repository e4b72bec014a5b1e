#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially the
  dashboard, comparison modal and toast notifications) remain present in the
  unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for cards, modals, charts or toasts).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Navbar
    ".navbar",
    ".navbar__links",
    ".navbar__clock",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Filter bar
    ".filter-bar",
    ".filter-bar__search",
    ".filter-bar__category",
    // Site cards
    ".site-cards",
    ".site-card",
    ".site-card--active",
    ".site-card__compare",
    ".ehi-value",
    ".ehi-category",
    // Detail panel
    ".site-detail__summary",
    ".site-detail__grid",
    ".site-detail__metric-label",
    ".site-detail__metric-value",
    // Comparison modal
    ".modal {",
    ".modal-content",
    ".close-modal",
    ".comparison-grid",
    ".comparison-card",
    ".comparison-indices",
    ".comparison-category",
    // Stats & chart
    ".stats-highlights",
    ".stats-highlight__value",
    ".stats-breakdown__badge",
    ".ehi-chart__canvas",
    // Notifications
    ".notification-area",
    ".notification",
    ".notification--exiting",
    "@keyframes slideIn",
    "@keyframes slideOut",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn notification_severity_colors_stay_fixed() {
    // Toast backgrounds are set inline from `Severity::color`; the keyframes
    // driving their entry/exit must exist for the 300 ms transition window.
    assert!(THEME_CSS.contains("animation: slideIn"));
    assert!(THEME_CSS.contains("animation: slideOut"));
}
