//! Debug section: glow events and captured dumps.

use contracts::ErrorOccurrence;
use leptos::prelude::*;

use crate::navigator::tabs::TabDescriptor;
use crate::shared::path;

/// Only present when the occurrence carries debug info; the entry count
/// shows up as a badge on the tab.
pub fn tab(occurrence: &ErrorOccurrence) -> Option<TabDescriptor> {
    occurrence.has_debug_info().then(|| {
        TabDescriptor::new("Debug", |occurrence| {
            let occurrence = occurrence.clone();
            Ok(view! { <DebugView occurrence /> }.into_any())
        })
        .with_badge(occurrence.debug_entry_count())
    })
}

#[component]
fn DebugView(occurrence: ErrorOccurrence) -> impl IntoView {
    let application_path = occurrence.application_path.clone();

    view! {
        <div class="debug">
            <ul class="debug__glows">
                {occurrence
                    .glows
                    .iter()
                    .map(|glow| {
                        view! {
                            <li class="debug__glow">
                                <span class="debug__glow-level">{glow.message_level.clone()}</span>
                                <span class="debug__glow-name">{glow.name.clone()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ul class="debug__dumps">
                {occurrence
                    .dumps
                    .iter()
                    .map(|dump| {
                        let origin = format!(
                            "{}:{}",
                            path::relative_to_application(&dump.file, &application_path),
                            dump.line_number
                        );
                        view! {
                            <li class="debug__dump">
                                <span class="debug__dump-origin">{origin}</span>
                                <div class="debug__dump-value" inner_html=dump.html_dump.clone()></div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
