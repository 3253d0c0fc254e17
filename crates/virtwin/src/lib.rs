#![forbid(unsafe_code)]

//! Virtualized windowing controller.
//!
//! # Role in virtwin
//! This crate is the host-facing layer. It composes the pure math in
//! `virtwin-core` into a [`VirtualController`] that reads geometry
//! from a [`ScrollContainer`] handle and drives two user callbacks:
//! a single-fire reach-end signal and boundary-flag changes.
//!
//! # Primary responsibilities
//! - **ControllerOptions**: injected layout configuration (axis,
//!   count, size estimate, overscan, loading flag).
//! - **ScrollContainer**: the host element abstraction.
//! - **VirtualController**: per-event recompute, latch transitions,
//!   mount-time state seeding, page-wise manual scrolling, and
//!   measurement feedback.
//!
//! # How it fits in the system
//! The hosting view owns the item sequence and a per-item render
//! callback; it renders exactly the indices in `visible_range()`,
//! positions them with `virtual_items()`, sizes the content box with
//! `total_extent()`, and wires its data layer's fetch handler to the
//! reach-end callback. The controller never fetches and never mutates
//! the loading flag it reads.

pub mod container;
pub mod controller;
pub mod options;

pub use container::{Axis, ScrollBehavior, ScrollContainer, ScrollDirection};
pub use controller::VirtualController;
pub use options::{
    ControllerOptions, DEFAULT_HORIZONTAL_ESTIMATE, DEFAULT_OVERSCAN, DEFAULT_VERTICAL_ESTIMATE,
};

// Core types consumed through the controller's public surface.
pub use virtwin_core::{
    EndLatch, MIN_ITEM_EXTENT, ScrollState, VirtualItem, VirtualRange, compute_scroll_state,
    fit_count, group_count, group_items,
};
