//! CSV export of the full dataset.

use dioxus::prelude::*;

use crate::core::net::{self, ApiOutcome};
use crate::core::{platform, timing};
use crate::dashboard::notify::{use_notifier, Notifier, Severity};

/// One dataset row as served: an ordered column-to-value mapping. Consumed
/// immediately while building the CSV text, never persisted.
pub type ExportRow = serde_json::Map<String, serde_json::Value>;

/// Serialize `rows` to delimited text.
///
/// The header line is the key list of the first row; the schema is assumed
/// homogeneous and not re-validated per row. Rows are newline-joined with no
/// trailing newline; empty input yields an empty string.
pub fn to_delimited_text(rows: &[ExportRow]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|header| escape_field(header))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        let line = headers
            .iter()
            .map(|key| {
                let text = row.get(*key).map(field_text).unwrap_or_default();
                escape_field(&text)
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}

/// Strings render raw, null renders empty, everything else renders through
/// its JSON display (so numbers keep the server's precision).
fn field_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Quote fields containing the delimiter, a quote, or a newline; embedded
/// quotes are doubled.
fn escape_field(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Fetch the full dataset, serialize it, and deliver the download. One toast
/// per outcome; nothing escapes as an error.
pub async fn export_results(notifier: Notifier) {
    match net::get_json::<Vec<ExportRow>>("/api/zonas").await {
        ApiOutcome::Success { data } => {
            let csv = to_delimited_text(&data);
            let filename = format!("ecobalance_resultados_{}.csv", timing::date_slug());
            match download_bytes(&filename, "text/csv", csv.into_bytes()).await {
                Ok(Some(path)) => {
                    notifier.notify(format!("Archivo guardado en {path}"), Severity::Success)
                }
                Ok(None) => notifier.notify("Archivo descargado exitosamente", Severity::Success),
                Err(err) => {
                    net::trace_failure("descarga", &err);
                    notifier.notify("Error al exportar datos", Severity::Error);
                }
            }
        }
        ApiOutcome::Failure { error } => {
            net::trace_failure("/api/zonas", &error);
            notifier.notify("Error al exportar datos", Severity::Error);
        }
    }
}

/// Toolbar button wiring the export flow, busy-guarded against double clicks.
#[component]
pub fn ExportButton() -> Element {
    let notifier = use_notifier();
    let busy = use_signal(|| false);

    let handler = {
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            platform::spawn_future(async move {
                export_results(notifier).await;
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        button {
            r#type: "button",
            class: "button",
            disabled: busy(),
            onclick: handler,
            "Exportar CSV"
        }
    }
}

/// Deliver `bytes` as a download. The browser build clicks a temporary
/// object-URL anchor; native builds write into the app data directory and
/// report the path.
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = native_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("mx", "EcoBalance", "EcoBalance")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
