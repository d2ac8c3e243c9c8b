//! Deferred image source promotion.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

/// What to do with a lazy image once it is visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Promotion {
    /// Set `src` to this value and drop the lazy marker.
    Load(String),
    /// No usable deferred source; keep the marker so the gap stays visible in markup.
    Skip,
}

/// Decide the promotion for an image's deferred source attribute.
///
/// A usable source is passed through verbatim so `src` ends equal to it.
#[must_use]
pub fn promote(deferred_src: Option<&str>) -> Promotion {
    match deferred_src {
        Some(src) if !src.is_empty() => Promotion::Load(src.to_owned()),
        _ => Promotion::Skip,
    }
}
