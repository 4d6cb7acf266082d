//! RevealTracker: Once-Only Fade-In Latch
//!
//! Each tagged element transitions to its visible state the first time
//! its intersection ratio reaches the threshold; re-entering the
//! viewport later never fires again for the page's lifetime.

use std::collections::HashSet;

/// Intersection ratio at which an element counts as visible
pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an observation for an element handle. Returns `true`
    /// exactly once per handle: the first time the ratio reaches the
    /// threshold.
    pub fn observe(&mut self, handle: usize, ratio: f64) -> bool {
        if ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed.insert(handle)
    }

    pub fn is_revealed(&self, handle: usize) -> bool {
        self.revealed.contains(&handle)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
