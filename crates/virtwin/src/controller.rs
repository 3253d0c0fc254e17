#![forbid(unsafe_code)]

//! The virtualized windowing controller.
//!
//! Wires the windowing engine, the scroll-state tracker, and the
//! end-of-content latch to a host container handle and user callbacks.
//! Everything runs synchronously inside the host's scroll/resize
//! handlers; each event costs O(log n) in the item count.

use std::fmt;

use tracing::{debug, trace};
use virtwin_core::{
    EndDetector, ScrollState, VirtualItem, VirtualRange, WindowEngine, compute_scroll_state,
};

use crate::container::{Axis, ScrollBehavior, ScrollContainer, ScrollDirection};
use crate::options::ControllerOptions;

/// Reach-end callback: wired to the owning data layer's "fetch next
/// page" handler.
type ReachEndFn = Box<dyn FnMut()>;

/// Boundary-flip callback: `(can_scroll_back, can_scroll_forward)`.
type ScrollStateFn = Box<dyn FnMut(bool, bool)>;

/// Controller for one virtualized scroll region.
///
/// Owns its container handle exclusively once attached; nested
/// virtualized regions each construct their own controller. Before a
/// container is attached every scroll-dependent operation is a no-op,
/// never an error.
pub struct VirtualController<C: ScrollContainer> {
    axis: Axis,
    engine: WindowEngine,
    detector: EndDetector,
    is_loading: bool,
    container: Option<C>,
    last_range: Option<VirtualRange>,
    last_scroll_state: Option<ScrollState>,
    on_reach_end: Option<ReachEndFn>,
    on_scroll_state_change: Option<ScrollStateFn>,
}

impl<C: ScrollContainer> fmt::Debug for VirtualController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualController")
            .field("axis", &self.axis)
            .field("count", &self.engine.count())
            .field("overscan", &self.engine.overscan())
            .field("is_loading", &self.is_loading)
            .field("attached", &self.container.is_some())
            .field("last_range", &self.last_range)
            .field("last_scroll_state", &self.last_scroll_state)
            .finish_non_exhaustive()
    }
}

impl<C: ScrollContainer> VirtualController<C> {
    /// Create an unattached controller from configuration.
    #[must_use]
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            axis: options.axis,
            engine: WindowEngine::new(options.count, options.resolved_estimate(), options.overscan),
            detector: EndDetector::new(options.overscan),
            is_loading: options.is_loading,
            container: None,
            last_range: None,
            last_scroll_state: None,
            on_reach_end: None,
            on_scroll_state_change: None,
        }
    }

    /// Set the reach-end callback.
    #[must_use]
    pub fn with_on_reach_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_reach_end = Some(Box::new(f));
        self
    }

    /// Set the boundary-flip callback.
    #[must_use]
    pub fn with_on_scroll_state_change(mut self, f: impl FnMut(bool, bool) + 'static) -> Self {
        self.on_scroll_state_change = Some(Box::new(f));
        self
    }

    /// Attach the host container and seed initial state.
    ///
    /// Runs a full recompute and emits the boundary flags immediately,
    /// so the UI reflects correct affordances before any user
    /// interaction.
    pub fn attach(&mut self, container: C) {
        self.container = Some(container);
        self.recompute(true);
    }

    /// Detach and return the container handle, if any.
    pub fn detach(&mut self) -> Option<C> {
        self.last_range = None;
        self.last_scroll_state = None;
        self.container.take()
    }

    /// Whether a container is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.container.is_some()
    }

    /// Active scroll axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Total item (or group) count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.engine.count()
    }

    /// Update the item (or group) count and recompute.
    ///
    /// Surviving per-index measurements are preserved.
    pub fn set_count(&mut self, count: usize) {
        self.engine.set_count(count);
        self.recompute(false);
    }

    /// Current value of the externally owned loading flag.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Record the externally owned loading flag and recompute.
    ///
    /// Clearing the flag while still pinned at the tail lets the latch
    /// fire on this call rather than waiting for the next scroll tick.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.recompute(false);
    }

    /// Handle a native scroll event on the attached container.
    pub fn handle_scroll_event(&mut self) {
        self.recompute(false);
    }

    /// Handle a resize of the attached container.
    pub fn handle_resize_event(&mut self) {
        self.recompute(false);
    }

    /// Record an observed rendered size for `index`.
    ///
    /// Offsets of subsequent indices and the total extent shift in
    /// O(log n); the range and boundary flags are refreshed so the
    /// host re-renders against consistent placement.
    pub fn measure_item(&mut self, index: usize, observed_size: f64) {
        self.engine.measure_item(index, observed_size);
        self.recompute(false);
    }

    /// Last computed visible range, `None` before attach or when the
    /// collection is empty.
    #[must_use]
    pub fn visible_range(&self) -> Option<VirtualRange> {
        self.last_range
    }

    /// Placement records for the last computed range, in index order.
    #[must_use]
    pub fn virtual_items(&self) -> Vec<VirtualItem> {
        self.last_range
            .map(|range| self.engine.items_in(range))
            .unwrap_or_default()
    }

    /// Leading-edge offset of `index` along the scroll axis.
    #[must_use]
    pub fn item_offset(&self, index: usize) -> f64 {
        self.engine.item_offset(index)
    }

    /// Extent the host should give the scrollable content box.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        self.engine.total_extent()
    }

    /// Last emitted boundary flags, `None` before attach.
    #[must_use]
    pub fn scroll_state(&self) -> Option<ScrollState> {
        self.last_scroll_state
    }

    /// Request a smooth scroll by one viewport extent.
    ///
    /// The target is exactly `position ± viewport`; hosts clamp.
    /// No-op while unattached.
    pub fn scroll_by_page(&mut self, direction: ScrollDirection) {
        let axis = self.axis;
        let Some(container) = self.container.as_mut() else {
            return;
        };
        let position = container.scroll_position(axis);
        let page = container.viewport_extent(axis);
        let target = match direction {
            ScrollDirection::Backward => position - page,
            ScrollDirection::Forward => position + page,
        };
        trace!(?direction, position, target, "scroll_by_page");
        container.scroll_to(axis, target, ScrollBehavior::Smooth);
    }

    /// Recompute range, latch, and boundary flags from the container's
    /// current geometry. `seed` forces a boundary emission even when
    /// the flags did not change (mount-time seeding).
    fn recompute(&mut self, seed: bool) {
        let Some(container) = self.container.as_ref() else {
            return;
        };
        let position = container.scroll_position(self.axis);
        let viewport = container.viewport_extent(self.axis);
        let content = container.content_extent(self.axis);

        // The detector watches the truly visible end; the overscan
        // margin only widens what gets materialized, never the tail
        // threshold.
        let visible = self.engine.visible_range(position, viewport);
        let range = visible.map(|v| self.engine.materialize(v));
        self.last_range = range;
        trace!(position, viewport, ?visible, ?range, "recompute window");

        let fired =
            self.detector
                .observe(visible.map(|r| r.end), self.engine.count(), self.is_loading);

        let state = compute_scroll_state(position, content, viewport);
        let changed = self.last_scroll_state != Some(state);
        self.last_scroll_state = Some(state);
        if (seed || changed) && let Some(cb) = self.on_scroll_state_change.as_mut() {
            debug!(
                back = state.can_scroll_back,
                forward = state.can_scroll_forward,
                "scroll state"
            );
            cb(state.can_scroll_back, state.can_scroll_forward);
        }

        if fired {
            debug!(count = self.engine.count(), "reached end of content");
            if let Some(cb) = self.on_reach_end.as_mut() {
                cb();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal fixed-geometry container for unit tests; the richer
    /// recording fake lives in the integration tests.
    struct StaticContainer {
        position: f64,
        viewport: f64,
        content: f64,
    }

    impl ScrollContainer for StaticContainer {
        fn scroll_position(&self, _axis: Axis) -> f64 {
            self.position
        }
        fn viewport_extent(&self, _axis: Axis) -> f64 {
            self.viewport
        }
        fn content_extent(&self, _axis: Axis) -> f64 {
            self.content
        }
        fn scroll_to(&mut self, _axis: Axis, target: f64, _behavior: ScrollBehavior) {
            self.position = target;
        }
    }

    #[test]
    fn test_unattached_operations_are_noops() {
        let mut ctl: VirtualController<StaticContainer> =
            VirtualController::new(ControllerOptions::new(Axis::Vertical).count(100));
        ctl.handle_scroll_event();
        ctl.scroll_by_page(ScrollDirection::Forward);
        assert_eq!(ctl.visible_range(), None);
        assert_eq!(ctl.scroll_state(), None);
        assert!(!ctl.is_attached());
    }

    #[test]
    fn test_attach_computes_range_and_state() {
        let mut ctl = VirtualController::new(
            ControllerOptions::new(Axis::Vertical)
                .count(100)
                .estimate_size(10.0)
                .overscan(0),
        );
        ctl.attach(StaticContainer {
            position: 0.0,
            viewport: 50.0,
            content: 1000.0,
        });
        assert_eq!(
            ctl.visible_range(),
            Some(VirtualRange { start: 0, end: 5 })
        );
        assert_eq!(
            ctl.scroll_state(),
            Some(ScrollState {
                can_scroll_back: false,
                can_scroll_forward: true,
            })
        );
        assert!(ctl.is_attached());
    }

    #[test]
    fn test_empty_collection_has_zero_extent_and_no_range() {
        let mut ctl =
            VirtualController::new(ControllerOptions::new(Axis::Vertical).count(0));
        ctl.attach(StaticContainer {
            position: 0.0,
            viewport: 100.0,
            content: 0.0,
        });
        assert_eq!(ctl.visible_range(), None);
        assert_eq!(ctl.total_extent(), 0.0);
        assert!(ctl.virtual_items().is_empty());
    }

    #[test]
    fn test_detach_returns_handle_and_clears_state() {
        let mut ctl = VirtualController::new(
            ControllerOptions::new(Axis::Vertical)
                .count(10)
                .estimate_size(10.0),
        );
        ctl.attach(StaticContainer {
            position: 0.0,
            viewport: 50.0,
            content: 100.0,
        });
        assert!(ctl.visible_range().is_some());
        let handle = ctl.detach();
        assert!(handle.is_some());
        assert_eq!(ctl.visible_range(), None);
        assert_eq!(ctl.scroll_state(), None);
        ctl.handle_scroll_event();
    }

    #[test]
    fn test_measure_updates_total_extent() {
        let mut ctl = VirtualController::new(
            ControllerOptions::new(Axis::Vertical)
                .count(4)
                .estimate_size(10.0),
        );
        ctl.attach(StaticContainer {
            position: 0.0,
            viewport: 100.0,
            content: 40.0,
        });
        assert_eq!(ctl.total_extent(), 40.0);
        ctl.measure_item(1, 35.0);
        assert_eq!(ctl.total_extent(), 65.0);
        assert_eq!(ctl.item_offset(2), 45.0);
    }
}
