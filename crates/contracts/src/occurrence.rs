//! Error-occurrence model: one captured exception with its stack, context
//! and debug payload. Field names follow the camelCase JSON the host page
//! embeds; the frontend never mutates any of this.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One frame of the captured stack trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackFrame {
    pub file: String,
    #[serde(rename = "lineNumber")]
    pub line_number: u32,
    pub method: String,
    #[serde(default)]
    pub class: Option<String>,
    /// True when the frame belongs to application code rather than a vendor
    /// dependency; the stack view highlights these.
    #[serde(rename = "applicationFrame", default)]
    pub application_frame: bool,
}

/// A breadcrumb-style debug event recorded before the exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub name: String,
    #[serde(rename = "messageLevel", default)]
    pub message_level: String,
    #[serde(rename = "metaData", default)]
    pub meta_data: serde_json::Value,
}

/// A dump() call captured during the failing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugDump {
    #[serde(rename = "htmlDump")]
    pub html_dump: String,
    pub file: String,
    #[serde(rename = "lineNumber")]
    pub line_number: u32,
}

/// Everything the page knows about a single error occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorOccurrence {
    pub id: Uuid,
    #[serde(rename = "receivedAt")]
    pub received_at: DateTime<Utc>,
    #[serde(rename = "exceptionClass")]
    pub exception_class: String,
    #[serde(rename = "exceptionMessage")]
    pub exception_message: String,
    /// Application root on disk; used to shorten displayed file paths.
    #[serde(rename = "applicationPath", default)]
    pub application_path: String,
    #[serde(rename = "documentationLinks", default)]
    pub documentation_links: Vec<String>,
    #[serde(default)]
    pub frames: Vec<StackFrame>,
    /// Context groups (request, headers, env, ...) keyed by group name.
    #[serde(rename = "contextItems", default)]
    pub context_items: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub glows: Vec<Glow>,
    #[serde(default)]
    pub dumps: Vec<DebugDump>,
}

impl ErrorOccurrence {
    pub fn has_context(&self) -> bool {
        !self.context_items.is_empty()
    }

    pub fn has_debug_info(&self) -> bool {
        !self.glows.is_empty() || !self.dumps.is_empty()
    }

    /// Number of debug entries, shown as a badge on the debug tab.
    pub fn debug_entry_count(&self) -> usize {
        self.glows.len() + self.dumps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence_json() -> serde_json::Value {
        serde_json::json!({
            "id": "3e9f1c3c-8a4b-4f6e-9d2a-1b5c7e8f9a01",
            "receivedAt": "2024-05-14T09:30:00Z",
            "exceptionClass": "App\\Exceptions\\InvariantViolation",
            "exceptionMessage": "Order total went negative",
            "applicationPath": "/srv/app",
            "frames": [{
                "file": "/srv/app/app/Services/Checkout.php",
                "lineNumber": 88,
                "method": "finalize",
                "class": "Checkout",
                "applicationFrame": true
            }]
        })
    }

    #[test]
    fn decodes_camel_case_payload() {
        let occurrence: ErrorOccurrence =
            serde_json::from_value(occurrence_json()).expect("valid payload");
        assert_eq!(occurrence.exception_message, "Order total went negative");
        assert_eq!(occurrence.frames[0].line_number, 88);
        assert!(occurrence.frames[0].application_frame);
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let occurrence: ErrorOccurrence =
            serde_json::from_value(occurrence_json()).expect("valid payload");
        assert!(!occurrence.has_context());
        assert!(!occurrence.has_debug_info());
        assert_eq!(occurrence.debug_entry_count(), 0);
    }

    #[test]
    fn debug_entries_are_counted_across_glows_and_dumps() {
        let mut occurrence: ErrorOccurrence =
            serde_json::from_value(occurrence_json()).expect("valid payload");
        occurrence.glows.push(Glow {
            name: "checkout.start".into(),
            message_level: "info".into(),
            meta_data: serde_json::Value::Null,
        });
        occurrence.dumps.push(DebugDump {
            html_dump: "<pre>null</pre>".into(),
            file: "/srv/app/app/Services/Checkout.php".into(),
            line_number: 80,
        });
        assert!(occurrence.has_debug_info());
        assert_eq!(occurrence.debug_entry_count(), 2);
    }
}
