//! One-shot fade-in of cards as they scroll into view.

use super::PageContext;
use super::dom;
use crate::consts::REVEAL_TARGETS;
use crate::error::EffectsError;
use crate::state::reveal::RevealRegistry;

pub fn register(ctx: &PageContext) -> Result<(), EffectsError> {
    let targets = dom::query_all(&ctx.document, REVEAL_TARGETS)?;
    if targets.is_empty() || ctx.reduced_motion {
        return Ok(());
    }

    let mut registry = RevealRegistry::new();
    for idx in 0..targets.len() {
        registry.register(idx);
    }

    let animation = ctx.config.reveal_animation.clone();
    let tracked = targets.clone();
    let observer = dom::intersection_observer(
        Some(ctx.config.reveal_threshold),
        Some(&ctx.config.reveal_root_margin),
        move |el, observer| {
            let Some(idx) = tracked.iter().position(|t| *t == el) else {
                return;
            };
            if registry.trigger(&idx) {
                dom::set_style(&el, "animation", &animation);
            }
            observer.unobserve(&el);
            if registry.is_exhausted() {
                observer.disconnect();
            }
        },
    )?;

    // Hide only once the observer exists, so a failed construction leaves cards visible.
    for target in &targets {
        dom::set_style(target, "opacity", "0");
        observer.observe(target);
    }
    log::debug!("observing {} reveal targets", targets.len());
    Ok(())
}
