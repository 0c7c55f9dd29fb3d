use std::{collections::BTreeSet, time::Duration};

use crate::config::TrackerConfig;

/// One-shot visibility tracking for a rendered list.
///
/// Each index moves from unseen to seen the first time it intersects the
/// viewport and never moves back.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    len: usize,
    threshold: f64,
    stagger: Duration,
    seen: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new(len: usize, config: &TrackerConfig) -> Self {
        Self {
            len,
            threshold: config.reveal_threshold.clamp(0.0, 1.0),
            stagger: config.reveal_stagger(),
            seen: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns true only when this event revealed the index.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        if !intersecting || index >= self.len {
            return false;
        }
        let inserted = self.seen.insert(index);
        if inserted {
            log::trace!("revealed item {index}");
        }
        inserted
    }

    /// Applies one intersection observer entry. Counts as visible only while
    /// intersecting with at least `threshold` of the item on screen.
    pub fn observe_entry(&mut self, index: usize, intersecting: bool, ratio: f64) -> bool {
        self.observe(index, intersecting && ratio >= self.threshold)
    }

    pub fn is_seen(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn stagger_delay(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(len: usize) -> RevealTracker {
        RevealTracker::new(len, &TrackerConfig::default())
    }

    #[test]
    fn test_seen_is_terminal() {
        let mut t = tracker(5);
        assert!(t.observe(3, true));
        assert!(!t.observe(3, false));
        assert!(t.is_seen(3));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut t = tracker(5);
        assert!(t.observe(1, true));
        assert!(!t.observe(1, true));
        assert!(t.is_seen(1));
        assert!(!t.is_seen(0));
    }

    #[test]
    fn test_not_intersecting_never_reveals() {
        let mut t = tracker(2);
        assert!(!t.observe(0, false));
        assert!(!t.is_seen(0));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut t = tracker(2);
        assert!(!t.observe(2, true));
        assert!(!t.is_seen(2));
    }

    #[test]
    fn test_entry_threshold() {
        let mut t = tracker(3);
        assert!(!t.observe_entry(0, true, 0.05));
        assert!(t.observe_entry(0, true, 0.1));
        assert!(t.observe_entry(2, true, 1.0));
        assert!(!t.is_seen(1));
    }

    #[test]
    fn test_entry_not_intersecting_at_zero_threshold() {
        let cfg = TrackerConfig {
            reveal_threshold: 0.0,
            ..TrackerConfig::default()
        };
        let mut t = RevealTracker::new(2, &cfg);
        // leaving the viewport reports a ratio of 0.0
        assert!(!t.observe_entry(0, false, 0.0));
        assert!(t.observe_entry(0, true, 0.0));
        assert!(!t.observe_entry(0, false, 0.0));
        assert!(t.is_seen(0));
    }

    #[test]
    fn test_stagger_delay() {
        let t = tracker(8);
        assert_eq!(t.stagger_delay(0), Duration::ZERO);
        assert_eq!(t.stagger_delay(3), Duration::from_millis(300));
    }
}
