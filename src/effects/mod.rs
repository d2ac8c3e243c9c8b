//! View-effect dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`boot`] builds one [`PageContext`] and hands it to each registrar in
//! turn. Registrars attach listeners/observers and return; from then on
//! every effect reacts to browser events on its own. Effects never call
//! each other and share no mutable state.
//!
//! ERROR HANDLING
//! ==============
//! A registrar that cannot find its markup returns an error; boot logs it
//! and carries on, so one missing element disables one effect only.

mod counter;
mod dom;
mod exports;
mod form;
mod lazy;
mod nav;
mod page;
mod reveal;
mod ripple;
mod scroll;
mod styles;

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::EffectsConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::error::{ConfigError, EffectsError};
use crate::util::{dark_mode, logging};

/// Everything a registrar may read. Built once at boot.
#[derive(Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: Rc<EffectsConfig>,
    /// Visitor asked for reduced motion and the config honors it.
    pub reduced_motion: bool,
}

type Registrar = fn(&PageContext) -> Result<(), EffectsError>;

const REGISTRARS: [(&str, Registrar); 11] = [
    ("keyframes", styles::register),
    ("theme", page::register_theme),
    ("menu", nav::register_menu),
    ("anchors", nav::register_anchors),
    ("scroll", scroll::register),
    ("reveal", reveal::register),
    ("counters", counter::register),
    ("contact form", form::register),
    ("ripple", ripple::register),
    ("lazy images", lazy::register),
    ("page load", page::register_load),
];

/// Wire every effect, deferring to `DOMContentLoaded` while the document
/// is still parsing.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() != "loading" {
        wire(window, document);
        return;
    }

    let target = document.clone();
    let mut pending = Some((window, document));
    let deferred = dom::listen(&target, "DOMContentLoaded", move |_| {
        if let Some((window, document)) = pending.take() {
            wire(window, document);
        }
    });
    if let Err(e) = deferred {
        web_sys::console::error_1(&format!("could not defer effects: {e}").into());
    }
}

fn wire(window: Window, document: Document) {
    let (config, config_err) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(e) => (EffectsConfig::default(), Some(e)),
    };
    logging::init(config.log_level());
    if let Some(e) = config_err {
        log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {e}");
    }

    let reduced_motion = config.respect_reduced_motion && dark_mode::prefers_reduced_motion();
    if reduced_motion {
        log::info!("reduced motion requested; animations disabled");
    }
    let ctx = PageContext { window, document, config: Rc::new(config), reduced_motion };

    for (name, register) in REGISTRARS {
        match register(&ctx) {
            Ok(()) => log::debug!("{name} effect ready"),
            Err(e) => log::warn!("{name} effect disabled: {e}"),
        }
    }

    logging::welcome_banner();
}

fn read_config(document: &Document) -> Result<EffectsConfig, ConfigError> {
    match document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) {
        Some(raw) => EffectsConfig::from_json(&raw),
        None => Ok(EffectsConfig::default()),
    }
}
