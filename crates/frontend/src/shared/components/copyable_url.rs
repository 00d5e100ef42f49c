//! A share link with copy and open affordances.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::ui::Button;

/// How long the "Copied!" feedback stays visible.
const COPIED_FEEDBACK_MS: u32 = 2_000;

#[component]
pub fn CopyableUrl(
    url: String,
    help_text: &'static str,
    open_text: &'static str,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    let url_for_copy = url.clone();
    let on_copy = Callback::new(move |_: leptos::ev::MouseEvent| {
        copy_to_clipboard(&url_for_copy, move || {
            copied.set(true);
            spawn_local(async move {
                TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                copied.set(false);
            });
        });
    });

    view! {
        <div class="copyable-url">
            <p class="copyable-url__help">{help_text}</p>
            <div class="copyable-url__row">
                <input class="copyable-url__value" type="text" readonly=true value=url.clone() />
                <Button variant="secondary".to_string() on_click=on_copy>
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </Button>
                <a class="copyable-url__open" href=url target="_blank" rel="noopener">
                    {open_text}
                </a>
            </div>
        </div>
    }
}
