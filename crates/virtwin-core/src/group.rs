#![forbid(unsafe_code)]

//! Grouping adapter for multi-axis layouts.
//!
//! Partitions a flat item sequence into fixed-arity groups (rows for a
//! vertical grid, columns for a horizontal one). The group count, not
//! the item count, is what feeds the windowing engine.

/// Partition `items` into contiguous groups of at most `arity` items.
///
/// Order is preserved; the final group may be short. Arity 0 is
/// clamped to 1. Pure and cheap enough to call on every render.
#[must_use]
pub fn group_items<T>(items: &[T], arity: usize) -> Vec<&[T]> {
    items.chunks(arity.max(1)).collect()
}

/// Number of groups `group_items` would produce: `ceil(len / arity)`.
#[must_use]
pub fn group_count(len: usize, arity: usize) -> usize {
    len.div_ceil(arity.max(1))
}

/// How many items of at least `min_item_extent` fit across a container
/// of `container_extent` (never less than one).
///
/// This is the arity rule for the cross axis: a vertical grid derives
/// its row width from the observed container width and a configured
/// minimum card width.
#[must_use]
pub fn fit_count(container_extent: f64, min_item_extent: f64) -> usize {
    let min_item = if min_item_extent.is_finite() && min_item_extent > 0.0 {
        min_item_extent
    } else {
        1.0
    };
    if !container_extent.is_finite() || container_extent <= min_item {
        return 1;
    }
    (container_extent / min_item).floor() as usize
}
