//! Clipboard writes for page scripts.
//!
//! ERROR HANDLING
//! ==============
//! Browsers without the async clipboard API, or that deny the write, yield
//! an error the caller can surface; nothing is retried.

#![allow(clippy::unused_async)]

use crate::error::EffectsError;

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`EffectsError::Js`] when the clipboard API is missing or the
/// browser rejects the write.
pub async fn copy_text(text: &str) -> Result<(), EffectsError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or_else(|| EffectsError::Js("no window".to_owned()))?;
        let navigator = window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|e| EffectsError::Js(format!("{e:?}")))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(EffectsError::Js("clipboard API unavailable".to_owned()));
        }
        let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|e| EffectsError::Js(format!("clipboard write rejected: {e:?}")))?;
        log::info!("Copiado al portapapeles: {text}");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(EffectsError::Js(format!("clipboard unavailable outside the browser ({} bytes)", text.len())))
    }
}
