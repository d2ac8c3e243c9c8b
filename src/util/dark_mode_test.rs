#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn theme_name_maps_preference() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn preferences_are_false_outside_browser() {
    assert!(!prefers_dark());
    assert!(!prefers_reduced_motion());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
