#![forbid(unsafe_code)]

//! Scroll boundary state: can the user scroll backward / forward?
//!
//! Recomputed from scratch on every scroll event and once on mount so
//! navigation affordances are correct before any user interaction.

use serde::{Deserialize, Serialize};

/// Tolerance (in layout units) absorbing float and rounding noise at
/// the scroll boundaries.
pub const SCROLL_EDGE_TOLERANCE: f64 = 1.0;

/// Boundary flags for the active scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    /// There is content behind the current position.
    pub can_scroll_back: bool,
    /// There is content ahead of the current position.
    pub can_scroll_forward: bool,
}

/// Derive boundary flags from raw scroll geometry.
///
/// `can_scroll_back` once the position clears the tolerance;
/// `can_scroll_forward` until the position is within tolerance of
/// `content_extent - viewport_extent`.
#[must_use]
pub fn compute_scroll_state(
    scroll_pos: f64,
    content_extent: f64,
    viewport_extent: f64,
) -> ScrollState {
    let max_scroll = content_extent - viewport_extent;
    ScrollState {
        can_scroll_back: scroll_pos > SCROLL_EDGE_TOLERANCE,
        can_scroll_forward: scroll_pos < max_scroll - SCROLL_EDGE_TOLERANCE,
    }
}
