//! Mobile menu state and in-page anchor resolution.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the collapsible navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the panel. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the panel after a navigation link is followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// The element id an in-page anchor points at.
///
/// Returns `None` for a bare `#`, for hrefs that leave the page, and for
/// fragments containing whitespace (never a valid id).
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return None;
    }
    Some(id)
}
