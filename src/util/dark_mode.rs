//! Color-scheme and motion preferences.
//!
//! Reads `prefers-color-scheme` and mirrors it into a `data-theme`
//! attribute on the `<html>` element so stylesheets can key off it. Also
//! exposes `prefers-reduced-motion` for the animation effects. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preferences are read once at boot; a visitor switching their OS theme
//! mid-visit keeps the initial theme until reload.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
use crate::consts::{PREFERS_DARK_QUERY, PREFERS_REDUCED_MOTION_QUERY, THEME_ATTR};

/// Attribute value for a theme.
#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Whether the system prefers a dark color scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        media_matches(PREFERS_DARK_QUERY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Whether the visitor asked the system to minimize motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        media_matches(PREFERS_REDUCED_MOTION_QUERY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    let theme = theme_name(dark);
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(e) = el.set_attribute(THEME_ATTR, theme) {
            log::warn!("could not set {THEME_ATTR}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("theme {theme} not applied outside the browser");
    }
}

#[cfg(feature = "hydrate")]
fn media_matches(query: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.match_media(query) {
        Ok(Some(mq)) => mq.matches(),
        _ => false,
    }
}
