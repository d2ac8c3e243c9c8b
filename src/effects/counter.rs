//! Statistics counters, started the first time the stats section is seen.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::Element;

use super::PageContext;
use super::dom;
use crate::consts::{COUNTER_SUFFIX_ATTR, STAT_NUMBERS, STATS_SECTION};
use crate::error::EffectsError;
use crate::state::counter::{CounterAnimation, CounterSpec};
use crate::state::reveal::RevealRegistry;

pub fn register(ctx: &PageContext) -> Result<(), EffectsError> {
    let Some(section) = ctx.document.query_selector(STATS_SECTION).map_err(dom::js_err)? else {
        log::debug!("no {STATS_SECTION} on this page");
        return Ok(());
    };

    // Specs are captured before any frame overwrites the text.
    let counters: Vec<(Element, CounterSpec)> = dom::query_all(&ctx.document, STAT_NUMBERS)?
        .into_iter()
        .filter_map(|el| {
            let text = el.text_content().unwrap_or_default();
            let declared = el.get_attribute(COUNTER_SUFFIX_ATTR);
            match CounterSpec::parse(&text, declared.as_deref()) {
                Some(spec) => Some((el, spec)),
                None => {
                    log::warn!("{STAT_NUMBERS} without a leading number: {text:?}");
                    None
                }
            }
        })
        .collect();

    let steps = ctx.config.counter_steps;
    let tick_ms = ctx.config.counter_tick_ms;
    let instant = ctx.reduced_motion;
    let mut fired = RevealRegistry::new();
    fired.register(());

    let observer = dom::intersection_observer(None, None, move |el, observer| {
        if fired.trigger(&()) {
            for (counter, spec) in &counters {
                start(counter.clone(), *spec, steps, tick_ms, instant);
            }
        }
        observer.unobserve(&el);
        observer.disconnect();
    })?;
    observer.observe(&section);
    Ok(())
}

fn start(el: Element, spec: CounterSpec, steps: u32, tick_ms: u32, instant: bool) {
    let mut anim = CounterAnimation::new(spec, steps);
    if instant {
        el.set_text_content(Some(&anim.final_text()));
        return;
    }

    let holder: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let holder_for_tick = Rc::clone(&holder);
    let interval = Interval::new(tick_ms, move || {
        let frame = anim.tick();
        el.set_text_content(Some(&frame.text));
        if frame.done {
            // Dropping the interval inside its own callback would free the running closure.
            if let Some(interval) = holder_for_tick.borrow_mut().take() {
                Timeout::new(0, move || drop(interval)).forget();
            }
        }
    });
    *holder.borrow_mut() = Some(interval);
}
