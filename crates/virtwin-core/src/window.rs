#![forbid(unsafe_code)]

//! Windowing engine: scroll offset + viewport extent → visible range.
//!
//! The engine owns the per-index size estimates and an overscan margin
//! (extra indices materialized beyond each viewport edge to mask
//! pop-in during fast scrolling). Range computation is O(log n) via
//! the estimate tracker's offset search.

use serde::{Deserialize, Serialize};

use crate::extent::SizeEstimates;

/// The materialized index interval, inclusive on both ends.
///
/// Both endpoints lie in `[0, count)`; an empty collection has no
/// range at all (callers hold `Option<VirtualRange>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualRange {
    /// First materialized index.
    pub start: usize,
    /// Last materialized index (inclusive).
    pub end: usize,
}

impl VirtualRange {
    /// Number of indices in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Inclusive ranges are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the contained indices.
    #[must_use]
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Whether `idx` falls inside the range.
    #[must_use]
    pub fn contains(&self, idx: usize) -> bool {
        idx >= self.start && idx <= self.end
    }
}

/// Placement record for one materialized index.
///
/// `start` values are non-decreasing in index order; the host positions
/// each rendered unit at `start` along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualItem {
    /// Item (or group) index.
    pub index: usize,
    /// Offset of the leading edge along the scroll axis.
    pub start: f64,
    /// Estimated or measured extent along the scroll axis.
    pub size: f64,
}

/// Maps scroll position and viewport extent to the index window that
/// must be materialized.
#[derive(Debug, Clone)]
pub struct WindowEngine {
    sizes: SizeEstimates,
    overscan: usize,
}

impl WindowEngine {
    /// Create an engine for `count` indices with a default estimate
    /// and an overscan margin.
    #[must_use]
    pub fn new(count: usize, estimate_size: f64, overscan: usize) -> Self {
        Self {
            sizes: SizeEstimates::new(count, estimate_size),
            overscan,
        }
    }

    /// Total index count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Overscan margin in indices.
    #[must_use]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Resize to a new index count, preserving surviving measurements.
    pub fn set_count(&mut self, count: usize) {
        self.sizes.set_count(count);
    }

    /// Record an observed size for `idx`; subsequent offsets shift
    /// accordingly. Out-of-range indices are ignored.
    pub fn measure_item(&mut self, idx: usize, observed: f64) {
        self.sizes.measure(idx, observed);
    }

    /// Minimal contiguous range whose spans intersect the viewport,
    /// with no overscan applied. `None` when the collection is empty.
    ///
    /// This is the range the end-of-content detector observes; the
    /// overscan margin is a rendering concern and must not move the
    /// tail threshold.
    #[must_use]
    pub fn visible_range(&self, scroll_offset: f64, viewport_extent: f64) -> Option<VirtualRange> {
        let count = self.sizes.len();
        if count == 0 {
            return None;
        }
        let leading = scroll_offset.max(0.0);
        let trailing = leading + viewport_extent.max(0.0);

        let first = self.sizes.index_at_offset(leading).min(count - 1);
        let last = self.sizes.index_at_offset(trailing).min(count - 1).max(first);

        Some(VirtualRange { start: first, end: last })
    }

    /// Extend a visible range by `overscan` indices at each edge,
    /// clamped to valid indices. This is the range to materialize.
    #[must_use]
    pub fn materialize(&self, visible: VirtualRange) -> VirtualRange {
        let count = self.sizes.len();
        VirtualRange {
            start: visible.start.saturating_sub(self.overscan),
            end: (visible.end + self.overscan).min(count.saturating_sub(1)),
        }
    }

    /// [`visible_range`](Self::visible_range) extended by the overscan
    /// margin. `None` when the collection is empty.
    #[must_use]
    pub fn compute_range(&self, scroll_offset: f64, viewport_extent: f64) -> Option<VirtualRange> {
        self.visible_range(scroll_offset, viewport_extent)
            .map(|visible| self.materialize(visible))
    }

    /// Leading-edge offset of `idx` along the scroll axis.
    #[must_use]
    pub fn item_offset(&self, idx: usize) -> f64 {
        self.sizes.offset_of(idx)
    }

    /// Current size estimate for `idx`.
    #[must_use]
    pub fn item_size(&self, idx: usize) -> f64 {
        self.sizes.size_of(idx)
    }

    /// Extent of the whole content area: the sum of all estimates.
    ///
    /// Hosts size the scrollable content box with this so native
    /// scrollbars and scroll behavior stay correct.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        self.sizes.total_extent()
    }

    /// Placement records for every index in `range`, in index order.
    #[must_use]
    pub fn items_in(&self, range: VirtualRange) -> Vec<VirtualItem> {
        let mut items = Vec::with_capacity(range.len());
        let mut start = self.sizes.offset_of(range.start);
        for index in range.indices() {
            let size = self.sizes.size_of(index);
            items.push(VirtualItem { index, start, size });
            start += size;
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_count_has_no_range() {
        let engine = WindowEngine::new(0, 100.0, 8);
        assert_eq!(engine.compute_range(0.0, 500.0), None);
        assert_eq!(engine.total_extent(), 0.0);
    }

    #[test]
    fn test_range_at_origin() {
        let engine = WindowEngine::new(100, 10.0, 0);
        let range = engine.compute_range(0.0, 50.0).unwrap();
        // Viewport [0, 50) spans indices 0..=5 (index 5 starts at 50).
        assert_eq!(range, VirtualRange { start: 0, end: 5 });
    }

    #[test]
    fn test_visible_range_excludes_overscan() {
        let engine = WindowEngine::new(100, 10.0, 8);
        // Viewport [750, 850): indices 75..=85 are actually visible.
        assert_eq!(
            engine.visible_range(750.0, 100.0),
            Some(VirtualRange { start: 75, end: 85 })
        );
        // The materialized window carries the margin on both edges.
        assert_eq!(
            engine.compute_range(750.0, 100.0),
            Some(VirtualRange { start: 67, end: 93 })
        );
    }

    #[test]
    fn test_materialize_clamps_at_both_edges() {
        let engine = WindowEngine::new(10, 10.0, 4);
        assert_eq!(
            engine.materialize(VirtualRange { start: 2, end: 7 }),
            VirtualRange { start: 0, end: 9 }
        );
    }

    #[test]
    fn test_range_mid_scroll_with_overscan() {
        let engine = WindowEngine::new(100, 10.0, 2);
        let range = engine.compute_range(200.0, 50.0).unwrap();
        assert_eq!(range, VirtualRange { start: 18, end: 27 });
    }

    #[test]
    fn test_range_clamps_at_tail() {
        let engine = WindowEngine::new(10, 10.0, 3);
        let range = engine.compute_range(95.0, 50.0).unwrap();
        assert_eq!(range.end, 9);
        assert_eq!(range.start, 6);
    }

    #[test]
    fn test_overscan_larger_than_count() {
        let engine = WindowEngine::new(3, 10.0, 8);
        let range = engine.compute_range(0.0, 10.0).unwrap();
        assert_eq!(range, VirtualRange { start: 0, end: 2 });
    }

    #[test]
    fn test_negative_scroll_clamps_to_origin() {
        let engine = WindowEngine::new(10, 10.0, 0);
        let range = engine.compute_range(-50.0, 20.0).unwrap();
        assert_eq!(range.start, 0);
    }

    #[test]
    fn test_measure_shifts_window() {
        let mut engine = WindowEngine::new(10, 10.0, 0);
        assert_eq!(
            engine.compute_range(30.0, 10.0),
            Some(VirtualRange { start: 3, end: 4 })
        );
        // Grow index 0; the same scroll offset now lands earlier.
        engine.measure_item(0, 40.0);
        assert_eq!(
            engine.compute_range(30.0, 10.0),
            Some(VirtualRange { start: 0, end: 1 })
        );
        assert_eq!(engine.total_extent(), 130.0);
    }

    #[test]
    fn test_items_in_offsets_monotonic() {
        let mut engine = WindowEngine::new(6, 10.0, 0);
        engine.measure_item(2, 25.0);
        let range = VirtualRange { start: 1, end: 4 };
        let items = engine.items_in(range);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].index, 1);
        assert_eq!(items[0].start, 10.0);
        assert_eq!(items[2].index, 3);
        assert_eq!(items[2].start, 45.0);
        for pair in items.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert_eq!(pair[1].start, pair[0].start + pair[0].size);
        }
    }

    #[test]
    fn test_set_count_shrink_keeps_range_in_bounds() {
        let mut engine = WindowEngine::new(100, 10.0, 4);
        engine.set_count(5);
        let range = engine.compute_range(900.0, 50.0).unwrap();
        assert!(range.end < 5);
    }

    #[test]
    fn test_placement_serde_round_trip() {
        let range = VirtualRange { start: 3, end: 9 };
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":3,"end":9}"#);
        assert_eq!(serde_json::from_str::<VirtualRange>(&json).unwrap(), range);

        let item = VirtualItem {
            index: 4,
            start: 1000.0,
            size: 250.0,
        };
        let back: VirtualItem =
            serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_zero_viewport_single_index() {
        let engine = WindowEngine::new(10, 10.0, 0);
        let range = engine.compute_range(35.0, 0.0).unwrap();
        assert_eq!(range, VirtualRange { start: 3, end: 3 });
    }
}
