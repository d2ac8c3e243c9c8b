use super::*;

#[test]
fn parallax_moves_at_half_speed() {
    assert_eq!(parallax_transform(0.0, 0.5), "translateY(0px)");
    assert_eq!(parallax_transform(240.0, 0.5), "translateY(120px)");
    assert_eq!(parallax_transform(75.0, 0.5), "translateY(37.5px)");
}

#[test]
fn shadow_raises_strictly_above_threshold() {
    assert_eq!(NavbarShadow::for_offset(100.0, 100.0), NavbarShadow::Resting);
    assert_eq!(NavbarShadow::for_offset(100.5, 100.0), NavbarShadow::Raised);
    assert_eq!(NavbarShadow::Raised.css(), "0 2px 20px rgba(0, 0, 0, 0.15)");
    assert_eq!(NavbarShadow::Resting.css(), "0 2px 10px rgba(0, 0, 0, 0.1)");
}

#[test]
fn first_scroll_always_applies_shadow() {
    let mut tracker = ScrollTracker::new(0.5, 100.0);
    let frame = tracker.on_scroll(0.0);
    assert_eq!(frame.shadow_change, Some(NavbarShadow::Resting));
}

#[test]
fn shadow_change_reported_only_on_flip() {
    let mut tracker = ScrollTracker::new(0.5, 100.0);
    tracker.on_scroll(10.0);
    assert_eq!(tracker.on_scroll(50.0).shadow_change, None);
    assert_eq!(tracker.on_scroll(150.0).shadow_change, Some(NavbarShadow::Raised));
    assert_eq!(tracker.on_scroll(300.0).shadow_change, None);
    assert_eq!(tracker.on_scroll(20.0).shadow_change, Some(NavbarShadow::Resting));
}

#[test]
fn parallax_is_reported_on_every_scroll() {
    let mut tracker = ScrollTracker::new(0.5, 100.0);
    tracker.on_scroll(40.0);
    let frame = tracker.on_scroll(40.0);
    assert_eq!(frame.parallax_transform, "translateY(20px)");
}
