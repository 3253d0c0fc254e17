#![forbid(unsafe_code)]

//! Per-index size estimates along the scroll axis.
//!
//! Every index starts at a configured default estimate and is refined
//! once the host reports an actual rendered size. Estimates live in a
//! [`FenwickTree`] so a remeasure is O(log n) and offsets for all
//! subsequent indices stay consistent without a rescan.

use crate::fenwick::FenwickTree;

/// Smallest admissible per-index extent.
///
/// Non-positive or non-finite sizes would produce degenerate or
/// infinite layouts, so everything is clamped to at least this.
pub const MIN_ITEM_EXTENT: f64 = 1.0;

/// Clamp a configured or observed extent into the valid range.
#[must_use]
pub fn clamp_extent(extent: f64) -> f64 {
    if extent.is_finite() {
        extent.max(MIN_ITEM_EXTENT)
    } else {
        MIN_ITEM_EXTENT
    }
}

/// Tracks estimated sizes for `count` indices along one axis.
#[derive(Debug, Clone)]
pub struct SizeEstimates {
    tree: FenwickTree,
    default_size: f64,
}

impl SizeEstimates {
    /// Create a tracker with every index at the (clamped) default.
    #[must_use]
    pub fn new(count: usize, default_size: f64) -> Self {
        let default_size = clamp_extent(default_size);
        Self {
            tree: FenwickTree::from_values(&vec![default_size; count]),
            default_size,
        }
    }

    /// Number of indices tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether any index is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Default estimate for unmeasured indices.
    #[must_use]
    pub fn default_size(&self) -> f64 {
        self.default_size
    }

    /// Current estimate for `idx` (default when out of range).
    #[must_use]
    pub fn size_of(&self, idx: usize) -> f64 {
        if idx < self.tree.len() {
            self.tree.get(idx)
        } else {
            self.default_size
        }
    }

    /// Record an observed size for `idx`. O(log n).
    ///
    /// Out-of-range indices are ignored; the observed size is clamped.
    pub fn measure(&mut self, idx: usize, observed: f64) {
        if idx >= self.tree.len() {
            return;
        }
        self.tree.set(idx, clamp_extent(observed));
    }

    /// Offset of the leading edge of `idx`: the sum of all sizes
    /// before it. O(log n).
    #[must_use]
    pub fn offset_of(&self, idx: usize) -> f64 {
        if idx == 0 || self.tree.is_empty() {
            return 0.0;
        }
        self.tree.prefix(idx.min(self.tree.len()) - 1)
    }

    /// Index whose span contains `offset`. O(log n).
    ///
    /// Index `i` occupies `[offset_of(i), offset_of(i) + size_of(i))`.
    /// Offsets past the end return `len()`; callers clamp as needed.
    #[must_use]
    pub fn index_at_offset(&self, offset: f64) -> usize {
        if self.tree.is_empty() || offset <= 0.0 {
            return 0;
        }
        match self.tree.find_prefix(offset) {
            // prefix(i) <= offset means offset is at or past the end of
            // index i, so it falls in index i + 1.
            Some(i) => (i + 1).min(self.tree.len()),
            None => 0,
        }
    }

    /// Sum of all per-index estimates. O(log n).
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        self.tree.total()
    }

    /// Resize to `count` indices.
    ///
    /// Surviving indices keep their measurements; new indices take the
    /// default estimate. O(n), acceptable since count changes are rare
    /// next to scroll events.
    pub fn set_count(&mut self, count: usize) {
        if count == self.tree.len() {
            return;
        }
        let mut values: Vec<f64> = (0..count.min(self.tree.len()))
            .map(|i| self.tree.get(i))
            .collect();
        values.resize(count, self.default_size);
        self.tree = FenwickTree::from_values(&values);
    }
}
