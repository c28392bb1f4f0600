//! Clipboard Glue
//!
//! Fire-and-forget clipboard writes; completion has no ordering dependency
//! on state mutation.

use wasm_bindgen_futures::JsFuture;

pub async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
