//! Navigation bar: exception summary and documentation links.

use contracts::ErrorOccurrence;
use leptos::prelude::*;

/// Label for a documentation link: the hostname, so several links stay
/// distinguishable. Falls back to the full URL when there is no host part.
fn link_label(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest.split('/').next().unwrap_or(rest);
    if host.is_empty() {
        url
    } else {
        host
    }
}

#[component]
pub fn NavBar(occurrence: ErrorOccurrence) -> impl IntoView {
    let received = occurrence
        .received_at
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();

    view! {
        <header class="navbar">
            <div class="navbar__summary">
                <span class="navbar__class">{occurrence.exception_class.clone()}</span>
                <h1 class="navbar__message">{occurrence.exception_message.clone()}</h1>
                <span class="navbar__received">{received}</span>
            </div>
            {(!occurrence.documentation_links.is_empty())
                .then(|| {
                    view! {
                        <nav class="navbar__docs">
                            {occurrence
                                .documentation_links
                                .iter()
                                .map(|link| {
                                    let label = link_label(link).to_string();
                                    view! {
                                        <a
                                            class="navbar__doc-link"
                                            href=link.clone()
                                            target="_blank"
                                            rel="noopener"
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    }
                })}
        </header>
    }
}
