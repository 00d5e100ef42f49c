//! Share dropdown: section checkboxes, the submit flow, and the resulting
//! links. State is created fresh on every mount and thrown away with it.

use contracts::SectionName;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::{ShareMachine, ShareOutcome};
use crate::config::PageConfig;
use crate::shared::components::copyable_url::CopyableUrl;
use crate::shared::components::ui::{Button, Checkbox};

/// Current URL fragment; carries a line-selection anchor into the share.
fn current_line_selection() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// The dropdown body. Stays mounted while its owner toggles `is_open`, so an
/// in-flight submission survives closing and reopening the dropdown; only a
/// remount of the owning component resets the workflow.
#[component]
pub fn ShareDropdown(#[prop(into)] is_open: Signal<bool>) -> impl IntoView {
    let config = use_context::<PageConfig>()
        .expect("PageConfig not provided in context (provide it in app root)");
    let machine = RwSignal::new(ShareMachine::new());

    let endpoint = config.share_endpoint.clone();
    let report = config.shareable_report.clone();
    let on_submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let accepted = machine
            .try_update(|m| m.begin(endpoint.as_deref(), current_line_selection(), report.clone()))
            .flatten();
        // `begin` only accepts when an endpoint is configured.
        let (Some(request), Some(endpoint)) = (accepted, endpoint.clone()) else {
            return;
        };
        spawn_local(async move {
            let result = api::create_share(&endpoint, &request).await;
            if let Err(err) = &result {
                log!("Share submission failed: {}", err);
            }
            machine.update(|m| m.finish(result));
        });
    });

    let sharing_docs_url = config.sharing_docs_url.clone();
    let manage_shares_url = config.manage_shares_url.clone();

    view! {
        <div class="share-dropdown" class:share-dropdown--closed=move || !is_open.get()>
            <div class="share-dropdown__header">
                <h4 class="share-dropdown__title">"Share this error"</h4>
                {sharing_docs_url
                    .map(|url| {
                        view! {
                            <a
                                class="share-dropdown__docs"
                                href=url
                                target="_blank"
                                rel="noopener"
                            >
                                "Docs"
                            </a>
                        }
                    })}
                {manage_shares_url
                    .map(|url| {
                        view! {
                            <a class="share-dropdown__manage" href=url>
                                "Manage shares"
                            </a>
                        }
                    })}
            </div>
            {move || match machine.get().outcome().clone() {
                ShareOutcome::Succeeded { owner_url, public_url } => {
                    view! {
                        <div class="share-dropdown__links">
                            <CopyableUrl
                                url=public_url
                                help_text="Share your error with others:"
                                open_text="Open public share"
                            />
                            <CopyableUrl
                                url=owner_url
                                help_text="Administer your shared error here:"
                                open_text="Open share admin"
                            />
                        </div>
                    }
                        .into_any()
                }
                outcome => {
                    let pending = outcome.is_pending();
                    let error = match outcome {
                        ShareOutcome::Failed { message } => Some(message),
                        _ => None,
                    };
                    view! {
                        <div class="share-dropdown__form">
                            <ul class="share-dropdown__sections">
                                {SectionName::ALL
                                    .iter()
                                    .map(|&section| {
                                        let checked = Signal::derive(move || {
                                            machine.with(|m| m.selection.is_selected(section))
                                        });
                                        view! {
                                            <li>
                                                <Checkbox
                                                    label=section.label().to_string()
                                                    checked
                                                    on_change=Callback::new(move |_| {
                                                        machine.update(|m| m.toggle_section(section))
                                                    })
                                                />
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <Button disabled=pending on_click=on_submit>
                                "Create share"
                            </Button>
                            {error
                                .map(|message| {
                                    view! { <p class="share-dropdown__error">{message}</p> }
                                })}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
