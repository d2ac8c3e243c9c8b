//! Scroll-driven presentation: parallax offset and navbar shadow.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{NAVBAR_SHADOW_RAISED, NAVBAR_SHADOW_RESTING};

/// Navbar elevation, raised once the page scrolls past the threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavbarShadow {
    #[default]
    Resting,
    Raised,
}

impl NavbarShadow {
    /// Shadow for a scroll offset; strictly greater than the threshold raises it.
    #[must_use]
    pub fn for_offset(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px { Self::Raised } else { Self::Resting }
    }

    /// CSS `box-shadow` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Resting => NAVBAR_SHADOW_RESTING,
            Self::Raised => NAVBAR_SHADOW_RAISED,
        }
    }
}

/// What a single scroll event should change on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// CSS `transform` for every parallax image.
    pub parallax_transform: String,
    /// New navbar shadow, only when it differs from the last one applied.
    pub shadow_change: Option<NavbarShadow>,
}

/// Tracks the last applied navbar shadow so the style is written on flips only.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    parallax_factor: f64,
    shadow_threshold_px: f64,
    shadow: Option<NavbarShadow>,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(parallax_factor: f64, shadow_threshold_px: f64) -> Self {
        Self { parallax_factor, shadow_threshold_px, shadow: None }
    }

    /// Compute the frame for a scroll offset and remember it.
    pub fn on_scroll(&mut self, scroll_y: f64) -> ScrollFrame {
        let shadow = NavbarShadow::for_offset(scroll_y, self.shadow_threshold_px);
        let shadow_change = (self.shadow != Some(shadow)).then_some(shadow);
        self.shadow = Some(shadow);
        ScrollFrame { parallax_transform: parallax_transform(scroll_y, self.parallax_factor), shadow_change }
    }
}

/// `translateY` proportional to the scroll offset.
#[must_use]
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}
