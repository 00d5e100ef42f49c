use leptos::prelude::*;

/// Inline alert banner
#[component]
pub fn Alert(
    /// Alert kind: "info" (default) or "error"
    #[prop(optional, into)]
    kind: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Alert content
    children: Children,
) -> impl IntoView {
    let kind_class = move || {
        if kind.get().as_deref() == Some("error") {
            "alert--error"
        } else {
            "alert--info"
        }
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("alert {} {}", kind_class(), additional_class())>
            {children()}
        </div>
    }
}
