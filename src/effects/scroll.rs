//! Parallax project images and the navbar shadow.

use super::PageContext;
use super::dom;
use crate::consts::{NAVBAR, PARALLAX_IMAGES};
use crate::error::EffectsError;
use crate::state::scroll::ScrollTracker;

pub fn register(ctx: &PageContext) -> Result<(), EffectsError> {
    let navbar = dom::query_one(&ctx.document, NAVBAR)?;
    let images = if ctx.reduced_motion { Vec::new() } else { dom::query_all(&ctx.document, PARALLAX_IMAGES)? };
    let mut tracker = ScrollTracker::new(ctx.config.parallax_factor, ctx.config.navbar_shadow_threshold_px);
    let window = ctx.window.clone();

    let mut apply = move || {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let frame = tracker.on_scroll(scroll_y);
        for image in &images {
            dom::set_style(image, "transform", &frame.parallax_transform);
        }
        if let Some(shadow) = frame.shadow_change {
            dom::set_style(&navbar, "box-shadow", shadow.css());
        }
    };

    // Pages restored mid-scroll need the right shadow before the first event.
    apply();
    dom::listen(&ctx.window, "scroll", move |_| apply())
}
