//! Browser helpers: focus management, the blocking confirmation prompt, and
//! the wall clock. Requires a browser environment.

use wasm_bindgen::{JsCast, JsValue};

/// Element id of the form's first input. Removal refocuses it by id, so it
/// must stay stable across the form markup.
pub const FIRST_NAME_INPUT_ID: &str = "required-first-name";

/// Current time in epoch milliseconds.
pub fn now_millis() -> f64 {
    js_sys::Date::now()
}

/// Local-time hours and minutes for an epoch-milliseconds timestamp.
pub fn local_hours_minutes(ts: f64) -> (u32, u32) {
    let date = js_sys::Date::new(&JsValue::from_f64(ts));
    (date.get_hours(), date.get_minutes())
}

/// Blocking yes/no prompt. Returns `false` when the prompt cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Move keyboard focus back to the form's first input.
pub fn focus_first_name() {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id(FIRST_NAME_INPUT_ID) {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
        }
    }
}
