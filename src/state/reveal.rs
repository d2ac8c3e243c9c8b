//! Fire-once bookkeeping for visibility-triggered animations.
//!
//! The dispatcher owns one registry per observer. Each observed element is
//! registered under a key; the first intersection flips it to `Animated`
//! and every later intersection is ignored. The markup never carries the
//! flag.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStatus {
    Pending,
    Animated,
}

#[derive(Clone, Debug)]
pub struct RevealRegistry<K> {
    entries: HashMap<K, RevealStatus>,
}

impl<K> Default for RevealRegistry<K> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<K: Eq + Hash> RevealRegistry<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `key`. Re-registering an animated key does not reset it.
    pub fn register(&mut self, key: K) {
        self.entries.entry(key).or_insert(RevealStatus::Pending);
    }

    /// Record an intersection. Returns `true` only the first time a
    /// registered key is seen; unknown keys never fire.
    pub fn trigger(&mut self, key: &K) -> bool {
        match self.entries.get_mut(key) {
            Some(status @ RevealStatus::Pending) => {
                *status = RevealStatus::Animated;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn status(&self, key: &K) -> Option<RevealStatus> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.values().filter(|s| **s == RevealStatus::Pending).count()
    }

    /// Every registered key has animated; the observer can be disconnected.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pending_count() == 0
    }
}
