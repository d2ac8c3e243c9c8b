//! Helpers callable from page scripts.

use wasm_bindgen::prelude::*;

use crate::util::{clipboard, device, phone};

/// Copy `text` to the clipboard. Rejects when the browser refuses.
#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard(text: String) -> Result<(), JsValue> {
    clipboard::copy_text(&text).await.map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = formatPhone)]
pub fn format_phone(number: &str) -> String {
    phone::format_phone(number)
}

#[wasm_bindgen(js_name = isMobile)]
pub fn is_mobile() -> bool {
    device::is_mobile()
}
