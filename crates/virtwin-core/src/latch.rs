#![forbid(unsafe_code)]

//! End-of-content detector.
//!
//! A two-state latch that converts "the visible range is at the tail"
//! into a single edge-triggered event per approach, gated by an
//! externally owned loading flag. While pinned at the tail the latch
//! stays `Reached` and scroll ticks cannot re-fire; it re-arms only
//! when the range regresses below the threshold (content grew or the
//! user scrolled away).

use serde::{Deserialize, Serialize};

/// Latch state. `Pending` is armed; `Reached` has already fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EndLatch {
    /// Armed: the next qualifying tail approach fires.
    #[default]
    Pending,
    /// Fired for the current dwell at the tail.
    Reached,
}

/// Edge-triggers a reach-end signal once per approach to the tail.
#[derive(Debug, Clone)]
pub struct EndDetector {
    latch: EndLatch,
    overscan: usize,
}

impl EndDetector {
    /// Create an armed detector with the given overscan threshold.
    #[must_use]
    pub fn new(overscan: usize) -> Self {
        Self {
            latch: EndLatch::Pending,
            overscan,
        }
    }

    /// Current latch state.
    #[must_use]
    pub fn latch(&self) -> EndLatch {
        self.latch
    }

    /// Tail threshold for `count` indices: `count - 1 - overscan`,
    /// clamped at zero. With `overscan >= count` any visible index is
    /// at the tail, which fires immediately (once).
    #[must_use]
    pub fn threshold(&self, count: usize) -> usize {
        count.saturating_sub(1).saturating_sub(self.overscan)
    }

    /// Run one transition step against the latest computed range.
    ///
    /// `last_visible` is the inclusive end of the visible range, or
    /// `None` when nothing is materialized. Returns `true` exactly on
    /// the `Pending -> Reached` edge; the caller emits its reach-end
    /// event then and only then.
    ///
    /// `loading = true` suppresses new `Pending -> Reached` edges but
    /// never blocks re-arming.
    pub fn observe(&mut self, last_visible: Option<usize>, count: usize, loading: bool) -> bool {
        let Some(last) = last_visible else {
            // Nothing materialized (count = 0): never fire, re-arm.
            self.latch = EndLatch::Pending;
            return false;
        };
        if count == 0 {
            self.latch = EndLatch::Pending;
            return false;
        }

        if last >= self.threshold(count) {
            if self.latch == EndLatch::Pending && !loading {
                self.latch = EndLatch::Reached;
                return true;
            }
            false
        } else {
            self.latch = EndLatch::Pending;
            false
        }
    }
}
