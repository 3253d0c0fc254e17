#![forbid(unsafe_code)]

//! Host container abstraction.
//!
//! The controller never touches a concrete host element; it reads
//! scroll geometry and issues scroll requests through this trait. A
//! browser host maps the getters to `scrollTop`/`clientHeight`/
//! `scrollHeight` (or their horizontal twins); a TUI host maps them to
//! row geometry.

use serde::{Deserialize, Serialize};

/// Active scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Scroll along the x axis.
    Horizontal,
    /// Scroll along the y axis.
    #[default]
    Vertical,
}

/// Direction for programmatic page-wise scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Toward the start of content.
    Backward,
    /// Toward the end of content.
    Forward,
}

/// How a requested scroll should be animated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Jump immediately.
    #[default]
    Auto,
    /// Animate toward the target.
    Smooth,
}

/// Handle to the scrollable host element.
///
/// Exclusively owned by one controller instance; nested virtualized
/// regions each get their own handle.
pub trait ScrollContainer {
    /// Current scroll position along `axis`.
    fn scroll_position(&self, axis: Axis) -> f64;

    /// Visible extent of the viewport along `axis`.
    fn viewport_extent(&self, axis: Axis) -> f64;

    /// Full extent of the scrollable content along `axis`.
    fn content_extent(&self, axis: Axis) -> f64;

    /// Request a scroll to `target` along `axis`.
    ///
    /// The target is not clamped here; hosts clamp to their own
    /// scrollable bounds.
    fn scroll_to(&mut self, axis: Axis, target: f64, behavior: ScrollBehavior);
}
