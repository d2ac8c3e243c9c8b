//! Mobile menu toggle and smooth fragment scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::PageContext;
use super::dom;
use crate::consts::{FRAGMENT_ANCHORS, MENU_OPEN_CLASS, MENU_TOGGLE_ID, NAV_LINKS, NAV_MENU_ID};
use crate::error::EffectsError;
use crate::state::nav::{MenuState, fragment_target};

pub fn register_menu(ctx: &PageContext) -> Result<(), EffectsError> {
    let toggle = dom::by_id(&ctx.document, MENU_TOGGLE_ID)?;
    let menu = dom::by_id(&ctx.document, NAV_MENU_ID)?;
    let state = Rc::new(RefCell::new(MenuState { open: menu.class_list().contains(MENU_OPEN_CLASS) }));

    {
        let menu = menu.clone();
        let state = Rc::clone(&state);
        dom::listen(&toggle, "click", move |_| {
            let open = state.borrow_mut().toggle();
            dom::set_class(&menu, MENU_OPEN_CLASS, open);
        })?;
    }

    for link in dom::query_all(&ctx.document, NAV_LINKS)? {
        let menu = menu.clone();
        let state = Rc::clone(&state);
        dom::listen(&link, "click", move |_| {
            state.borrow_mut().close();
            dom::set_class(&menu, MENU_OPEN_CLASS, false);
        })?;
    }
    Ok(())
}

/// Replace the jump to an in-page fragment with an animated scroll.
pub fn register_anchors(ctx: &PageContext) -> Result<(), EffectsError> {
    let behavior = if ctx.reduced_motion { ScrollBehavior::Auto } else { ScrollBehavior::Smooth };

    for anchor in dom::query_all(&ctx.document, FRAGMENT_ANCHORS)? {
        let document = ctx.document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            ev.prevent_default();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(behavior);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        })?;
    }
    Ok(())
}
