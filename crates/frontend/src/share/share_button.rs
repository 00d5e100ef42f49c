//! Toggle button owning the share dropdown's open/close flag.

use leptos::prelude::*;

use super::dropdown::ShareDropdown;
use crate::shared::components::ui::Button;

#[component]
pub fn ShareButton() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="share">
            <Button
                variant="secondary".to_string()
                on_click=Callback::new(move |_| open.update(|o| *o = !*o))
            >
                "Share"
            </Button>
            <ShareDropdown is_open=open />
        </div>
    }
}
