#![forbid(unsafe_code)]

//! Core: host-agnostic windowing math for virtualized scrolling.
//!
//! # Role in virtwin
//! `virtwin-core` is the pure layer. It owns range computation, size
//! estimates, boundary flags, and the end-of-content latch, with no
//! notion of a host element, callbacks, or an event loop.
//!
//! # Primary responsibilities
//! - **WindowEngine**: scroll offset + viewport extent → the inclusive
//!   index window to materialize, with overscan.
//! - **SizeEstimates / FenwickTree**: per-index extents with O(log n)
//!   remeasure, prefix offsets, and offset→index search.
//! - **compute_scroll_state**: can-scroll-back / can-scroll-forward.
//! - **EndDetector**: the single-fire reach-end latch.
//! - **group**: fixed-arity partitioning for multi-axis layouts.
//!
//! # How it fits in the system
//! The controller crate (`virtwin`) consumes these pieces, reading
//! scroll geometry from a host container handle and forwarding latch
//! fires and boundary flips to user callbacks. Everything here is
//! synchronous and allocation-light so it can run on every native
//! scroll event.

pub mod extent;
pub mod fenwick;
pub mod group;
pub mod latch;
pub mod scroll_state;
pub mod window;

pub use extent::{MIN_ITEM_EXTENT, SizeEstimates, clamp_extent};
pub use fenwick::FenwickTree;
pub use group::{fit_count, group_count, group_items};
pub use latch::{EndDetector, EndLatch};
pub use scroll_state::{SCROLL_EDGE_TOLERANCE, ScrollState, compute_scroll_state};
pub use window::{VirtualItem, VirtualRange, WindowEngine};
