//! Deferred image loading.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlImageElement};

use super::PageContext;
use super::dom;
use crate::consts::{DEFERRED_SRC_ATTR, LAZY_CLASS, LAZY_IMAGES};
use crate::error::EffectsError;
use crate::state::lazy::{Promotion, promote};

pub fn register(ctx: &PageContext) -> Result<(), EffectsError> {
    let images = dom::query_all(&ctx.document, LAZY_IMAGES)?;
    if images.is_empty() {
        return Ok(());
    }

    let supported = js_sys::Reflect::has(&ctx.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if !supported {
        log::info!("IntersectionObserver unavailable; loading {} images now", images.len());
        for image in &images {
            load(image);
        }
        return Ok(());
    }

    let observer = dom::intersection_observer(None, None, |image, observer| {
        load(&image);
        observer.unobserve(&image);
    })?;
    for image in &images {
        observer.observe(image);
    }
    Ok(())
}

fn load(image: &Element) {
    match promote(image.get_attribute(DEFERRED_SRC_ATTR).as_deref()) {
        Promotion::Load(src) => {
            match image.dyn_ref::<HtmlImageElement>() {
                Some(img) => img.set_src(&src),
                None => dom::warn_on_err(image.set_attribute("src", &src), "src"),
            }
            dom::warn_on_err(image.class_list().remove_1(LAZY_CLASS), LAZY_CLASS);
        }
        Promotion::Skip => log::warn!("lazy image without {DEFERRED_SRC_ATTR}; left deferred"),
    }
}
