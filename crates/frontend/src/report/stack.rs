//! Stack trace section.

use contracts::ErrorOccurrence;
use leptos::prelude::*;

use crate::navigator::tabs::TabDescriptor;
use crate::shared::path;

/// The stack tab is always present.
pub fn tab() -> TabDescriptor {
    TabDescriptor::new("Stack", |occurrence| {
        let occurrence = occurrence.clone();
        Ok(view! { <StackTraceView occurrence /> }.into_any())
    })
}

#[component]
fn StackTraceView(occurrence: ErrorOccurrence) -> impl IntoView {
    let application_path = occurrence.application_path.clone();

    view! {
        <ol class="stack">
            {occurrence
                .frames
                .iter()
                .map(|frame| {
                    let shown = path::relative_to_application(&frame.file, &application_path);
                    let (directory, basename) = path::split_directory(shown);
                    let directory = directory.to_string();
                    let basename = basename.to_string();
                    let method = match &frame.class {
                        Some(class) => format!("{}::{}", class, frame.method),
                        None => frame.method.clone(),
                    };
                    view! {
                        <li
                            class="stack__frame"
                            class:stack__frame--application=frame.application_frame
                        >
                            <span class="stack__path">
                                {directory}
                                <strong>{basename}</strong>
                                {format!(":{}", frame.line_number)}
                            </span>
                            <span class="stack__method">{method}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
