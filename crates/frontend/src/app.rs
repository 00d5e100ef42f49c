use leptos::prelude::*;

use crate::config::{self, PageConfig};
use crate::layout::NavBar;
use crate::navigator::tabs::{OccurrenceTabs, TabDescriptor};
use crate::report;

#[component]
pub fn App() -> impl IntoView {
    match config::load() {
        Some(config) => view! { <ErrorPage config /> }.into_any(),
        None => view! {
            <div class="error-page error-page--empty">
                "No error report data found on this page."
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ErrorPage(config: PageConfig) -> impl IntoView {
    let share_enabled = config.share_endpoint.is_some();
    let occurrence = config.occurrence.clone();

    // Provide the page config to the share workflow via context.
    provide_context(config);

    // Declaration order is display and shortcut order; absent sections are
    // compacted away so the navigator sees a contiguous list.
    let tabs: Vec<TabDescriptor> = [
        Some(report::stack::tab()),
        report::context::tab(&occurrence),
        report::debug::tab(&occurrence),
    ]
    .into_iter()
    .flatten()
    .collect();

    view! {
        <div class="error-page">
            <NavBar occurrence=occurrence.clone() />
            <OccurrenceTabs occurrence tabs share_enabled />
        </div>
    }
}
