//! The tab navigator: a strip of buttons over an ordered list of content
//! providers, exactly one of which is rendered at a time.

use std::fmt;
use std::sync::Arc;

use contracts::ErrorOccurrence;
use leptos::logging::log;
use leptos::prelude::*;

use super::state::{Direction, TabStrip};
use crate::share::share_button::ShareButton;
use crate::shared::components::ui::Alert;
use crate::shared::keyboard::use_keyboard_shortcut;

/// A content provider failed; carries the diagnostic for the console, the
/// user only ever sees the fixed fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError(String);

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type ContentProvider =
    Arc<dyn Fn(&ErrorOccurrence) -> Result<AnyView, RenderError> + Send + Sync>;

/// One declared tab: display label, optional count badge, and the renderer
/// for its section. Conditional tabs are handled by the caller declaring
/// `Option<TabDescriptor>`s and dropping the `None`s, so the navigator never
/// sees gaps or placeholders.
#[derive(Clone)]
pub struct TabDescriptor {
    pub label: &'static str,
    pub badge: Option<usize>,
    provider: ContentProvider,
}

impl TabDescriptor {
    pub fn new(
        label: &'static str,
        provider: impl Fn(&ErrorOccurrence) -> Result<AnyView, RenderError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            badge: None,
            provider: Arc::new(provider),
        }
    }

    pub fn with_badge(mut self, count: usize) -> Self {
        self.badge = Some(count);
        self
    }

    pub fn render(&self, occurrence: &ErrorOccurrence) -> Result<AnyView, RenderError> {
        (self.provider)(occurrence)
    }
}

/// Render the tab at `index`, substituting the fixed fallback when the
/// provider fails so the strip itself stays usable and the viewer can switch
/// away from the broken section.
fn active_content(tabs: &[TabDescriptor], index: usize, occurrence: &ErrorOccurrence) -> AnyView {
    match tabs[index].render(occurrence) {
        Ok(content) => content,
        Err(err) => {
            log!("Tab '{}' failed to render: {}", tabs[index].label, err);
            view! {
                <Alert kind="error".to_string() class="tabs__fallback".to_string()>
                    "Something went wrong"
                </Alert>
            }
            .into_any()
        }
    }
}

/// Tabbed view over the report sections.
///
/// Keyboard: `h` selects the previous tab, `l` the next, wrapping around at
/// both ends. The bindings live exactly as long as this component; they are
/// inactive while a text field has focus.
#[component]
pub fn OccurrenceTabs(
    occurrence: ErrorOccurrence,
    /// Already compacted: the page declares conditional tabs as `Option` and
    /// filters the absent ones out before handing the list over.
    tabs: Vec<TabDescriptor>,
    /// Renders the share control next to the strip when sharing is
    /// configured; independent of which tab is selected.
    #[prop(optional)]
    share_enabled: bool,
) -> impl IntoView {
    let strip = RwSignal::new(TabStrip::new(tabs.len()));
    let tabs = Arc::new(tabs);

    use_keyboard_shortcut("h", move || {
        strip.update(|s| s.advance(Direction::Previous));
    });
    use_keyboard_shortcut("l", move || {
        strip.update(|s| s.advance(Direction::Next));
    });

    let tabs_for_content = Arc::clone(&tabs);

    view! {
        <div class="tabs">
            <nav class="tabs__nav">
                <ul class="tabs__bar">
                    {tabs
                        .iter()
                        .enumerate()
                        .map(|(i, tab)| {
                            let label = tab.label;
                            let badge = tab.badge;
                            view! {
                                <li>
                                    <button
                                        class="tabs__tab"
                                        class:tabs__tab--active=move || strip.get().current() == i
                                        on:click=move |_| strip.update(|s| s.select(i))
                                    >
                                        {label}
                                        {badge
                                            .map(|count| {
                                                view! { <span class="tabs__badge">{count}</span> }
                                            })}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                {share_enabled
                    .then(|| {
                        view! {
                            <div class="tabs__delimiter"></div>
                            <ShareButton />
                        }
                    })}
            </nav>
            <div class="tabs__main">
                {move || active_content(&tabs_for_content, strip.get().current(), &occurrence)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn occurrence() -> ErrorOccurrence {
        serde_json::from_value(serde_json::json!({
            "id": "3e9f1c3c-8a4b-4f6e-9d2a-1b5c7e8f9a01",
            "receivedAt": "2024-05-14T09:30:00Z",
            "exceptionClass": "RuntimeException",
            "exceptionMessage": "boom"
        }))
        .expect("valid occurrence")
    }

    fn counting_tab(label: &'static str, calls: &'static AtomicUsize) -> TabDescriptor {
        TabDescriptor::new(label, move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(view! { <p>{label}</p> }.into_any())
        })
    }

    #[test]
    fn only_the_current_provider_runs() {
        static FIRST: AtomicUsize = AtomicUsize::new(0);
        static SECOND: AtomicUsize = AtomicUsize::new(0);
        static THIRD: AtomicUsize = AtomicUsize::new(0);

        let tabs = vec![
            counting_tab("Stack", &FIRST),
            counting_tab("Context", &SECOND),
            counting_tab("Debug", &THIRD),
        ];

        let _ = active_content(&tabs, 1, &occurrence());
        assert_eq!(FIRST.load(Ordering::SeqCst), 0);
        assert_eq!(SECOND.load(Ordering::SeqCst), 1);
        assert_eq!(THIRD.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failing_provider_is_replaced_by_the_fallback() {
        static OK_CALLS: AtomicUsize = AtomicUsize::new(0);
        let tabs = vec![
            counting_tab("Stack", &OK_CALLS),
            TabDescriptor::new("Context", |_| {
                Err(RenderError::new("context payload is unrenderable"))
            }),
        ];

        // Must not panic and must not touch the other provider.
        let _ = active_content(&tabs, 1, &occurrence());
        assert_eq!(OK_CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn conditional_tabs_compact_without_gaps() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let declared: Vec<Option<TabDescriptor>> = vec![
            Some(counting_tab("Stack", &CALLS)),
            None,
            Some(counting_tab("Context", &CALLS)),
            Some(counting_tab("Debug", &CALLS)),
        ];
        let tabs: Vec<TabDescriptor> = declared.into_iter().flatten().collect();
        assert_eq!(tabs.len(), 3);
        assert_eq!(
            tabs.iter().map(|t| t.label).collect::<Vec<_>>(),
            ["Stack", "Context", "Debug"]
        );
    }
}
