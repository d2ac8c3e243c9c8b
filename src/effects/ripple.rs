//! Hover ripple on buttons.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use super::PageContext;
use super::dom;
use crate::consts::{RIPPLE_BUTTONS, RIPPLE_HOST_STYLE, RIPPLE_STYLE};
use crate::error::EffectsError;

pub fn register(ctx: &PageContext) -> Result<(), EffectsError> {
    if ctx.reduced_motion {
        return Ok(());
    }
    let lifetime_ms = ctx.config.ripple_lifetime_ms;
    for button in dom::query_all(&ctx.document, RIPPLE_BUTTONS)? {
        let document = ctx.document.clone();
        let host = button.clone();
        dom::listen(&button, "mouseenter", move |_| spawn_ripple(&document, &host, lifetime_ms))?;
    }
    Ok(())
}

fn spawn_ripple(document: &Document, host: &Element, lifetime_ms: u32) {
    let ripple = match document.create_element("span") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("could not create ripple: {e:?}");
            return;
        }
    };
    for (property, value) in RIPPLE_STYLE {
        dom::set_style(&ripple, property, value);
    }
    for (property, value) in RIPPLE_HOST_STYLE {
        dom::set_style(host, property, value);
    }
    if let Err(e) = host.append_child(&ripple) {
        log::warn!("could not attach ripple: {e:?}");
        return;
    }
    Timeout::new(lifetime_ms, move || ripple.remove()).forget();
}
