//! Page-embedded configuration.
//!
//! The host page serializes everything the frontend needs into a single
//! window global before the wasm bundle loads. The frontend reads it once at
//! mount and never writes back.

use contracts::ErrorOccurrence;
use leptos::logging::log;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the window global the host page assigns.
pub const GLOBAL_KEY: &str = "errorPageData";

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Absent ⇒ sharing is disabled and no share control is rendered.
    #[serde(rename = "shareEndpoint", default)]
    pub share_endpoint: Option<String>,
    #[serde(rename = "manageSharesUrl", default)]
    pub manage_shares_url: Option<String>,
    /// Documentation about sharing, linked from the dropdown header.
    #[serde(rename = "sharingDocsUrl", default)]
    pub sharing_docs_url: Option<String>,
    /// Pre-serialized snapshot of the full report, forwarded verbatim in
    /// share submissions.
    #[serde(rename = "shareableReport", default)]
    pub shareable_report: serde_json::Value,
    pub occurrence: ErrorOccurrence,
}

/// Read and decode the config global. `None` when the global is missing or
/// malformed; the page then renders a plain notice instead of crashing.
pub fn load() -> Option<PageConfig> {
    let window = web_sys::window()?;
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_KEY)).ok()?;
    if raw.is_undefined() || raw.is_null() {
        log!("window.{} is not set, nothing to render", GLOBAL_KEY);
        return None;
    }
    match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => Some(config),
        Err(e) => {
            log!("Failed to decode window.{}: {}", GLOBAL_KEY, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_share_settings_with_absent_ones_defaulting() {
        let config: PageConfig = serde_json::from_value(serde_json::json!({
            "shareEndpoint": "https://flare.test/share",
            "sharingDocsUrl": "https://flare.test/docs/sharing-errors",
            "occurrence": {
                "id": "3e9f1c3c-8a4b-4f6e-9d2a-1b5c7e8f9a01",
                "receivedAt": "2024-05-14T09:30:00Z",
                "exceptionClass": "RuntimeException",
                "exceptionMessage": "boom"
            }
        }))
        .expect("valid config");

        assert_eq!(config.share_endpoint.as_deref(), Some("https://flare.test/share"));
        assert_eq!(
            config.sharing_docs_url.as_deref(),
            Some("https://flare.test/docs/sharing-errors")
        );
        assert!(config.manage_shares_url.is_none());
        assert!(config.shareable_report.is_null());
    }
}
