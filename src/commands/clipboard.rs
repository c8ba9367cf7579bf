//! Clipboard Commands
//!
//! Frontend wrappers for the async clipboard API.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Write text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let navigator = window.navigator();

    // Looked up dynamically so older engines without the API fail softly
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_err)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("clipboard API unavailable".to_string());
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_err)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "clipboard.writeText is not a function".to_string())?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_err)?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;

    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}
