//! Pure state of the share workflow.
//!
//! Everything that can be decided without touching the network lives here:
//! which sections are ticked, whether a submission may start, and how an
//! endpoint response maps onto the user-visible outcome. The dropdown
//! component is a thin shell over [`ShareMachine`].

use contracts::{SectionName, ShareRequest, ShareResponse};

/// The one message shown for every kind of share failure; the root cause
/// only goes to the console.
pub const SHARE_FAILED_MESSAGE: &str = "Something went wrong while sharing, please try again.";

/// The three known sections with their `selected` flags. Membership is
/// fixed; only the flags change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSelection {
    sections: Vec<(SectionName, bool)>,
}

impl Default for ShareSelection {
    fn default() -> Self {
        Self {
            sections: SectionName::ALL.iter().map(|&s| (s, true)).collect(),
        }
    }
}

impl ShareSelection {
    pub fn toggle(&mut self, name: SectionName) {
        for (section, selected) in &mut self.sections {
            if *section == name {
                *selected = !*selected;
            }
        }
    }

    pub fn is_selected(&self, name: SectionName) -> bool {
        self.sections
            .iter()
            .any(|&(section, selected)| section == name && selected)
    }

    /// Selected section names in declaration order.
    pub fn selected_names(&self) -> Vec<SectionName> {
        self.sections
            .iter()
            .filter(|&&(_, selected)| selected)
            .map(|&(section, _)| section)
            .collect()
    }
}

/// Result of the share workflow as one tagged union, so "links and error at
/// the same time" or "loading and done" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Idle,
    Pending,
    Succeeded {
        owner_url: String,
        public_url: String,
    },
    Failed {
        message: String,
    },
}

impl ShareOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Drives one submission at a time: `begin` yields at most one request per
/// accepted submission, `finish` is the only way back out of `Pending`.
/// There is no timeout, so a transport that never settles leaves the machine
/// `Pending` for good; see the tests pinning that down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMachine {
    pub selection: ShareSelection,
    outcome: ShareOutcome,
}

impl Default for ShareMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareMachine {
    pub fn new() -> Self {
        Self {
            selection: ShareSelection::default(),
            outcome: ShareOutcome::Idle,
        }
    }

    pub fn outcome(&self) -> &ShareOutcome {
        &self.outcome
    }

    pub fn toggle_section(&mut self, name: SectionName) {
        self.selection.toggle(name);
    }

    /// Try to start a submission. Returns the payload to send, or `None`
    /// without any state change when sharing is unconfigured or a submission
    /// is already in flight.
    pub fn begin(
        &mut self,
        endpoint: Option<&str>,
        line_selection: String,
        report: serde_json::Value,
    ) -> Option<ShareRequest> {
        if endpoint.is_none() || self.outcome.is_pending() {
            return None;
        }
        self.outcome = ShareOutcome::Pending;
        Some(ShareRequest::new(
            self.selection.selected_names(),
            line_selection,
            report,
        ))
    }

    /// Settle the in-flight submission. A transport error or a response
    /// missing either link both collapse into `Failed` with the fixed
    /// message.
    pub fn finish(&mut self, response: Result<ShareResponse, String>) {
        self.outcome = match response.ok().and_then(ShareResponse::into_links) {
            Some((owner_url, public_url)) => ShareOutcome::Succeeded {
                owner_url,
                public_url,
            },
            None => ShareOutcome::Failed {
                message: SHARE_FAILED_MESSAGE.to_string(),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(owner: Option<&str>, public: Option<&str>) -> ShareResponse {
        ShareResponse {
            owner_url: owner.map(str::to_string),
            public_url: public.map(str::to_string),
        }
    }

    #[test]
    fn all_sections_selected_by_default() {
        let machine = ShareMachine::new();
        assert_eq!(
            machine.selection.selected_names(),
            [
                SectionName::StackTrace,
                SectionName::Context,
                SectionName::Debug
            ]
        );
        assert_eq!(*machine.outcome(), ShareOutcome::Idle);
    }

    #[test]
    fn toggle_flips_only_the_named_section() {
        let mut machine = ShareMachine::new();
        machine.toggle_section(SectionName::Context);
        assert!(machine.selection.is_selected(SectionName::StackTrace));
        assert!(!machine.selection.is_selected(SectionName::Context));
        assert!(machine.selection.is_selected(SectionName::Debug));

        machine.toggle_section(SectionName::Context);
        assert!(machine.selection.is_selected(SectionName::Context));
    }

    #[test]
    fn begin_without_endpoint_is_a_no_op() {
        let mut machine = ShareMachine::new();
        let request = machine.begin(None, String::new(), serde_json::Value::Null);
        assert!(request.is_none());
        assert_eq!(*machine.outcome(), ShareOutcome::Idle);
    }

    #[test]
    fn begin_builds_the_payload_and_goes_pending() {
        let mut machine = ShareMachine::new();
        machine.toggle_section(SectionName::Debug);
        let request = machine
            .begin(
                Some("https://flare.test/share"),
                "#F3L12".to_string(),
                serde_json::json!({"snapshot": true}),
            )
            .expect("submission accepted");

        assert_eq!(
            request.selected_tab_names,
            [SectionName::StackTrace, SectionName::Context]
        );
        assert_eq!(request.tabs, request.selected_tab_names);
        assert_eq!(request.line_selection, "#F3L12");
        assert_eq!(request.report["snapshot"], true);
        assert!(machine.outcome().is_pending());
    }

    #[test]
    fn untouched_selection_submits_every_section_in_order() {
        let mut machine = ShareMachine::new();
        let request = machine
            .begin(Some("https://flare.test/share"), String::new(), serde_json::Value::Null)
            .expect("submission accepted");
        let value = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            value["selectedTabNames"],
            serde_json::json!(["stackTrace", "context", "debug"])
        );
    }

    #[test]
    fn at_most_one_submission_in_flight() {
        let mut machine = ShareMachine::new();
        let mut requests_sent = 0;
        for _ in 0..3 {
            if machine
                .begin(Some("https://flare.test/share"), String::new(), serde_json::Value::Null)
                .is_some()
            {
                requests_sent += 1;
            }
        }
        assert_eq!(requests_sent, 1);
        assert!(machine.outcome().is_pending());
    }

    #[test]
    fn finish_is_the_only_exit_from_pending() {
        let mut machine = ShareMachine::new();
        machine
            .begin(Some("https://flare.test/share"), String::new(), serde_json::Value::Null)
            .expect("submission accepted");

        // Toggling while pending touches only the selection.
        machine.toggle_section(SectionName::Context);
        assert!(machine.outcome().is_pending());

        machine.finish(Ok(response(Some("https://x/o"), Some("https://x/p"))));
        assert_eq!(
            *machine.outcome(),
            ShareOutcome::Succeeded {
                owner_url: "https://x/o".to_string(),
                public_url: "https://x/p".to_string(),
            }
        );
    }

    #[test]
    fn incomplete_response_fails_with_the_fixed_message() {
        let mut machine = ShareMachine::new();
        machine
            .begin(Some("https://flare.test/share"), String::new(), serde_json::Value::Null)
            .expect("submission accepted");
        machine.finish(Ok(response(None, Some("https://x/p"))));
        assert_eq!(
            *machine.outcome(),
            ShareOutcome::Failed {
                message: SHARE_FAILED_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn transport_error_fails_with_the_fixed_message() {
        let mut machine = ShareMachine::new();
        machine
            .begin(Some("https://flare.test/share"), String::new(), serde_json::Value::Null)
            .expect("submission accepted");
        machine.finish(Err("connection reset".to_string()));
        assert_eq!(
            *machine.outcome(),
            ShareOutcome::Failed {
                message: SHARE_FAILED_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn failed_submission_can_be_retried() {
        let mut machine = ShareMachine::new();
        machine
            .begin(Some("https://flare.test/share"), String::new(), serde_json::Value::Null)
            .expect("first submission");
        machine.finish(Err("connection reset".to_string()));

        let retry = machine.begin(
            Some("https://flare.test/share"),
            String::new(),
            serde_json::Value::Null,
        );
        assert!(retry.is_some());
        assert!(machine.outcome().is_pending());
    }
}
