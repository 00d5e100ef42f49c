//! Context section: request, headers, env and whatever else the host
//! captured, grouped by name.

use contracts::ErrorOccurrence;
use leptos::prelude::*;

use crate::navigator::tabs::{RenderError, TabDescriptor};

/// Only present when the occurrence captured any context at all.
pub fn tab(occurrence: &ErrorOccurrence) -> Option<TabDescriptor> {
    occurrence.has_context().then(|| {
        TabDescriptor::new("Context", |occurrence| {
            let groups = occurrence
                .context_items
                .iter()
                .map(|(name, value)| {
                    let pretty = serde_json::to_string_pretty(value).map_err(|e| {
                        RenderError::new(format!("context group '{}' is unrenderable: {}", name, e))
                    })?;
                    Ok((name.clone(), pretty))
                })
                .collect::<Result<Vec<_>, RenderError>>()?;
            Ok(view! { <ContextView groups /> }.into_any())
        })
    })
}

#[component]
fn ContextView(groups: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div class="context">
            {groups
                .into_iter()
                .map(|(name, pretty)| {
                    view! {
                        <section class="context__group">
                            <h3 class="context__name">{name}</h3>
                            <pre class="context__value">{pretty}</pre>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
