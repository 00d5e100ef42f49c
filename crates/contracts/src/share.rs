//! Wire contract of the remote share endpoint.

use serde::{Deserialize, Serialize};

/// The report sections a viewer can include in a share. Closed set; the
/// serialized names are part of the endpoint contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionName {
    #[serde(rename = "stackTrace")]
    StackTrace,
    #[serde(rename = "context")]
    Context,
    #[serde(rename = "debug")]
    Debug,
}

impl SectionName {
    /// Declaration order doubles as display order in the share dropdown.
    pub const ALL: [SectionName; 3] = [Self::StackTrace, Self::Context, Self::Debug];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StackTrace => "stackTrace",
            Self::Context => "context",
            Self::Debug => "debug",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StackTrace => "Stack",
            Self::Context => "Context",
            Self::Debug => "Debug",
        }
    }
}

/// POST body sent to the share endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRequest {
    #[serde(rename = "selectedTabNames")]
    pub selected_tab_names: Vec<SectionName>,
    /// Duplicate of `selected_tab_names`; older consumers of the endpoint
    /// still read this field.
    pub tabs: Vec<SectionName>,
    /// Current URL fragment, preserves a line-selection anchor in the share.
    #[serde(rename = "lineSelection")]
    pub line_selection: String,
    /// Pre-serialized snapshot of the full report, passed through untouched.
    pub report: serde_json::Value,
}

impl ShareRequest {
    pub fn new(
        selected: Vec<SectionName>,
        line_selection: String,
        report: serde_json::Value,
    ) -> Self {
        Self {
            tabs: selected.clone(),
            selected_tab_names: selected,
            line_selection,
            report,
        }
    }
}

/// Response from the share endpoint. A share only counts as created when
/// both links are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareResponse {
    #[serde(default)]
    pub owner_url: Option<String>,
    #[serde(default)]
    pub public_url: Option<String>,
}

impl ShareResponse {
    /// `(owner_url, public_url)` when the share was fully created.
    pub fn into_links(self) -> Option<(String, String)> {
        match (self.owner_url, self.public_url) {
            (Some(owner), Some(public)) => Some((owner, public)),
            _ => None,
        }
    }
}
