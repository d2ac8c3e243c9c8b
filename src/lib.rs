//! # portfolio-effects
//!
//! WASM behavior layer for the portfolio page. The markup and styles are
//! static; this crate attaches the page's interactive effects to them at
//! load: mobile menu, smooth fragment scrolling, parallax and navbar
//! shadow, scroll-triggered reveals, the statistics counter, the contact
//! form, button ripples and lazy images.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Selectors, element ids, timings, CSS snippets and user-visible messages |
//! | [`config`] | Tunable [`config::EffectsConfig`] read from the page |
//! | [`error`] | Crate error taxonomy |
//! | [`state`] | Pure per-effect state machines, testable without a browser |
//! | [`net`] | Contact form payload and delivery |
//! | [`util`] | Phone formatting, device detection, theme preference, clipboard, logging |
//! | `effects` | Browser wiring (`hydrate` only): the dispatcher and its registrars |
//!
//! Everything outside `effects` compiles on the host so the behavior can be
//! unit tested with plain `cargo test`.

pub mod config;
pub mod consts;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod effects;

/// WASM entry point. Installs logging and wires every page effect.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    effects::boot();
}
