#![forbid(unsafe_code)]

//! Controller configuration.
//!
//! Layout constants are injected here rather than baked into the
//! engine, so call sites with different item shapes reuse the same
//! core: the axis picks only the default size estimate, and overscan
//! is a single configurable value.

use serde::{Deserialize, Serialize};

use crate::container::Axis;

/// Default per-index extent for vertical lists (layout units).
pub const DEFAULT_VERTICAL_ESTIMATE: f64 = 250.0;

/// Default per-index extent for horizontal lists (layout units).
pub const DEFAULT_HORIZONTAL_ESTIMATE: f64 = 270.0;

/// Default overscan margin, in indices beyond each viewport edge.
pub const DEFAULT_OVERSCAN: usize = 8;

/// Construction configuration for a [`VirtualController`].
///
/// [`VirtualController`]: crate::controller::VirtualController
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerOptions {
    /// Active scroll axis.
    pub axis: Axis,
    /// Total item (or group) count.
    pub count: usize,
    /// Default per-index size along the scroll axis; `None` selects
    /// the axis default. Non-positive values are clamped downstream.
    pub estimate_size: Option<f64>,
    /// Extra indices materialized beyond each viewport edge. Also the
    /// tail threshold margin for the end-of-content detector.
    pub overscan: usize,
    /// Initial state of the externally owned loading flag.
    pub is_loading: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            count: 0,
            estimate_size: None,
            overscan: DEFAULT_OVERSCAN,
            is_loading: false,
        }
    }
}

impl ControllerOptions {
    /// Options for the given axis with all defaults.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Set the item (or group) count.
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the default per-index size estimate.
    #[must_use]
    pub fn estimate_size(mut self, size: f64) -> Self {
        self.estimate_size = Some(size);
        self
    }

    /// Set the overscan margin.
    #[must_use]
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Set the initial loading flag.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.is_loading = loading;
        self
    }

    /// The estimate to seed the engine with: the explicit value if
    /// given, otherwise the axis default.
    #[must_use]
    pub fn resolved_estimate(&self) -> f64 {
        self.estimate_size.unwrap_or(match self.axis {
            Axis::Horizontal => DEFAULT_HORIZONTAL_ESTIMATE,
            Axis::Vertical => DEFAULT_VERTICAL_ESTIMATE,
        })
    }
}
