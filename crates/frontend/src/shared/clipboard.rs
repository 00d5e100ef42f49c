//! Clipboard copy via the Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copy `text` to the system clipboard, running `on_copied` once the write
/// succeeds. Failures are swallowed; the copy affordance just stays quiet.
pub fn copy_to_clipboard<F>(text: &str, on_copied: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_ok()
            {
                on_copied();
            }
        }
    });
}
