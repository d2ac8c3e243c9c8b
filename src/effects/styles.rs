//! Keyframes the reveal and ripple effects animate with.

use super::PageContext;
use super::dom;
use crate::consts::{FADE_IN_UP_KEYFRAMES, RIPPLE_KEYFRAMES};
use crate::error::EffectsError;

pub fn register(ctx: &PageContext) -> Result<(), EffectsError> {
    let head = ctx.document.head().ok_or_else(|| EffectsError::MissingElement { selector: "head".to_owned() })?;
    for css in [FADE_IN_UP_KEYFRAMES, RIPPLE_KEYFRAMES] {
        let style = ctx.document.create_element("style").map_err(dom::js_err)?;
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(dom::js_err)?;
    }
    Ok(())
}
