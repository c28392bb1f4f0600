//! URL Fragment Carrier
//!
//! The fragment is the sole persistence medium. Reads are idempotent;
//! writes replace the fragment without adding a history entry, except for
//! the explicit reset which pushes one.

use wasm_bindgen::JsValue;

/// Current carrier token, without the leading `#`. Empty when absent.
pub fn read_token() -> String {
    match web_sys::window().map(|w| w.location().hash()) {
        Some(Ok(hash)) => hash.trim_start_matches('#').to_string(),
        _ => String::new(),
    }
}

/// Replace the fragment with a new token. No history entry.
pub fn write_token(token: &str) {
    if let Some(history) = history() {
        let url = format!("#{token}");
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
            web_sys::console::error_1(&e);
        }
    }
}

/// Clear the fragment, adding a history entry so the filled-out state
/// stays reachable via Back.
pub fn clear_token() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    if let Some(history) = history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
            web_sys::console::error_1(&e);
        }
    }
}

/// Full shareable address, including the fragment.
pub fn share_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}
