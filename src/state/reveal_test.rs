use super::*;

#[test]
fn trigger_fires_once_per_key() {
    let mut reg = RevealRegistry::new();
    reg.register(1_usize);
    reg.register(2_usize);
    assert!(reg.trigger(&1));
    assert!(!reg.trigger(&1));
    assert_eq!(reg.status(&1), Some(RevealStatus::Animated));
    assert_eq!(reg.status(&2), Some(RevealStatus::Pending));
}

#[test]
fn unknown_key_never_fires() {
    let mut reg: RevealRegistry<usize> = RevealRegistry::new();
    assert!(!reg.trigger(&7));
    assert_eq!(reg.status(&7), None);
}

#[test]
fn reregistering_does_not_rearm() {
    let mut reg = RevealRegistry::new();
    reg.register("stats");
    assert!(reg.trigger(&"stats"));
    reg.register("stats");
    assert!(!reg.trigger(&"stats"));
}

#[test]
fn exhausted_after_every_key_animates() {
    let mut reg = RevealRegistry::new();
    for key in 0..3_usize {
        reg.register(key);
    }
    assert_eq!(reg.pending_count(), 3);
    reg.trigger(&0);
    reg.trigger(&2);
    assert!(!reg.is_exhausted());
    reg.trigger(&1);
    assert!(reg.is_exhausted());
}
