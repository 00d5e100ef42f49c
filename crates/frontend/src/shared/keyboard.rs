//! Scoped global keyboard shortcuts.
//!
//! One `keydown` listener per call, registered when the calling component
//! mounts and removed when it is cleaned up. The JS closure is parked in a
//! slot-keyed registry until then, so a remounted component never stacks a
//! second binding and nothing leaks across remounts.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use leptos::prelude::on_cleanup;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

thread_local! {
    static LISTENERS: RefCell<HashMap<u64, Closure<dyn FnMut(web_sys::Event)>>> =
        RefCell::new(HashMap::new());
    static NEXT_SLOT: Cell<u64> = const { Cell::new(1) };
}

/// Chords with a held modifier belong to the browser (Ctrl+H and friends),
/// never to a page shortcut.
fn is_modifier_chord(ctrl: bool, alt: bool, meta: bool) -> bool {
    ctrl || alt || meta
}

/// Tags whose focused element swallows plain keystrokes as typing.
fn is_text_entry_tag(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}

/// True while the viewer is typing somewhere; shortcuts stay inactive then.
fn typing_target_has_focus() -> bool {
    let Some(active) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
    else {
        return false;
    };
    if is_text_entry_tag(&active.tag_name()) {
        return true;
    }
    active
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.is_content_editable())
        .unwrap_or(false)
}

/// Run `on_press` whenever `key` is pressed anywhere on the page, until the
/// calling component is cleaned up.
pub fn use_keyboard_shortcut(key: &'static str, on_press: impl Fn() + 'static) {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if keyboard_event.key() != key || typing_target_has_focus() {
            return;
        }
        if is_modifier_chord(
            keyboard_event.ctrl_key(),
            keyboard_event.alt_key(),
            keyboard_event.meta_key(),
        ) {
            return;
        }
        on_press();
    }) as Box<dyn FnMut(_)>);

    let Some(window) = web_sys::window() else {
        return;
    };
    if window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }

    let slot = NEXT_SLOT.with(|next| {
        let slot = next.get();
        next.set(slot + 1);
        slot
    });
    LISTENERS.with(|listeners| listeners.borrow_mut().insert(slot, closure));

    on_cleanup(move || {
        let Some(closure) = LISTENERS.with(|listeners| listeners.borrow_mut().remove(&slot))
        else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
    });
}
