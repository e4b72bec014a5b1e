//! Generic request wrapper around the EcoBalance HTTP API.
//!
//! Every network failure mode (transport error, non-2xx status, undecodable
//! body) collapses into [`ApiOutcome::Failure`]. Nothing past this boundary
//! panics or bubbles a raw error into view code.

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;

static API_BASE: OnceCell<String> = OnceCell::new();

/// Fallback when no platform registered a base (the Flask dev server).
const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Register the API origin once at startup. The web build passes
/// `window.location.origin`; desktop passes a configured URL. Later calls
/// are ignored, mirroring the nav-builder registration.
pub fn set_api_base(base: impl Into<String>) {
    let base: String = base.into();
    let _ = API_BASE.set(base.trim_end_matches('/').to_string());
}

fn api_url(path: &str) -> String {
    let base = API_BASE
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_API_BASE);
    format!("{base}{path}")
}

/// Tagged request result consumed by view code.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success { data: T },
    Failure { error: String },
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success { .. })
    }
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> ApiOutcome<T> {
    send(reqwest::Client::new().get(api_url(path))).await
}

/// POST `body` as JSON to `path` and decode the JSON response.
pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
    path: &str,
    body: &B,
) -> ApiOutcome<T> {
    send(reqwest::Client::new().post(api_url(path)).json(body)).await
}

async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> ApiOutcome<T> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            return ApiOutcome::Failure {
                error: err.to_string(),
            }
        }
    };

    let status = response.status();
    if !status.is_success() {
        return ApiOutcome::Failure {
            error: format!("HTTP error! status: {status}"),
        };
    }

    match response.json::<T>().await {
        Ok(data) => ApiOutcome::Success { data },
        Err(err) => ApiOutcome::Failure {
            error: err.to_string(),
        },
    }
}

/// Debug-build trace for failed requests; release builds stay quiet because
/// every failure already surfaces as a user-facing notification.
pub fn trace_failure(endpoint: &str, error: &str) {
    #[cfg(debug_assertions)]
    println!("[net] {endpoint} failed: {error}");

    #[cfg(not(debug_assertions))]
    let _ = (endpoint, error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_tags_are_distinguishable() {
        let ok: ApiOutcome<u32> = ApiOutcome::Success { data: 7 };
        let err: ApiOutcome<u32> = ApiOutcome::Failure {
            error: "boom".into(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }

    #[test]
    fn api_url_joins_base_and_path() {
        // The OnceCell may or may not be set depending on test order; both
        // shapes must produce a well-formed URL.
        let url = api_url("/api/zonas");
        assert!(url.ends_with("/api/zonas"));
        assert!(url.starts_with("http"));
    }
}
