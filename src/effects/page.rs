//! Page-level hooks: theme preference and the load marker.

use super::PageContext;
use super::dom;
use crate::consts::{LOADED_CLASS, MSG_PAGE_LOADED, MSG_PREFERS_DARK};
use crate::error::EffectsError;
use crate::util::dark_mode;

pub fn register_theme(_ctx: &PageContext) -> Result<(), EffectsError> {
    let dark = dark_mode::prefers_dark();
    if dark {
        log::info!("{MSG_PREFERS_DARK}");
    }
    dark_mode::apply(dark);
    Ok(())
}

/// Mark `<body>` as loaded once every resource has arrived.
pub fn register_load(ctx: &PageContext) -> Result<(), EffectsError> {
    let document = ctx.document.clone();
    let mark_loaded = move || {
        let Some(body) = document.body() else {
            return;
        };
        dom::warn_on_err(body.class_list().add_1(LOADED_CLASS), LOADED_CLASS);
        log::info!("{MSG_PAGE_LOADED}");
    };

    if ctx.document.ready_state() == "complete" {
        mark_loaded();
        return Ok(());
    }
    dom::listen(&ctx.window, "load", move |_| mark_loaded())
}
