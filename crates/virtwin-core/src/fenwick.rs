#![forbid(unsafe_code)]

//! Fenwick (binary indexed) tree over `f64` values.
//!
//! Backs the size-estimate tracker: point update, prefix sum, and
//! prefix search are all O(log n), which keeps per-scroll-event
//! recomputation cheap even when remeasurement happens on most renders.

/// Fenwick tree storing per-index values with O(log n) prefix sums.
///
/// # Invariants
///
/// 1. `prefix(i)` == sum of values `[0..=i]`.
/// 2. `find_prefix(target)` returns the largest `i` where
///    `prefix(i) <= target`, or `None` if `target < prefix(0)`.
#[derive(Debug, Clone, Default)]
pub struct FenwickTree {
    /// 1-based partial sums.
    tree: Vec<f64>,
    /// Raw values, kept for O(1) reads and delta updates.
    values: Vec<f64>,
}

impl FenwickTree {
    /// Create a tree of `len` zero values.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![0.0; len + 1],
            values: vec![0.0; len],
        }
    }

    /// Build from a slice of values in O(n).
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let mut tree = vec![0.0; values.len() + 1];
        for (i, &v) in values.iter().enumerate() {
            let idx = i + 1;
            tree[idx] += v;
            let parent = idx + (idx & idx.wrapping_neg());
            if parent < tree.len() {
                let child = tree[idx];
                tree[parent] += child;
            }
        }
        Self {
            tree,
            values: values.to_vec(),
        }
    }

    /// Number of values tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `idx`, or `0.0` when out of range.
    #[must_use]
    pub fn get(&self, idx: usize) -> f64 {
        self.values.get(idx).copied().unwrap_or(0.0)
    }

    /// Set the value at `idx`. O(log n).
    pub fn set(&mut self, idx: usize, value: f64) {
        if idx >= self.values.len() {
            return;
        }
        let delta = value - self.values[idx];
        self.values[idx] = value;
        let mut i = idx + 1;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += i & i.wrapping_neg();
        }
    }

    /// Sum of values `[0..=idx]`. O(log n).
    ///
    /// `idx` past the end clamps to the last value.
    #[must_use]
    pub fn prefix(&self, idx: usize) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mut i = idx.min(self.values.len() - 1) + 1;
        let mut sum = 0.0;
        while i > 0 {
            sum += self.tree[i];
            i -= i & i.wrapping_neg();
        }
        sum
    }

    /// Sum of all values. O(log n).
    #[must_use]
    pub fn total(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.prefix(self.values.len() - 1)
        }
    }

    /// Largest `i` with `prefix(i) <= target`, or `None` when `target`
    /// falls inside the first value. O(log n).
    #[must_use]
    pub fn find_prefix(&self, target: f64) -> Option<usize> {
        let len = self.values.len();
        if len == 0 {
            return None;
        }
        let mut pos = 0usize;
        let mut remaining = target;
        let mut mask = len.next_power_of_two();
        while mask > 0 {
            let next = pos + mask;
            if next < self.tree.len() && self.tree[next] <= remaining {
                pos = next;
                remaining -= self.tree[next];
            }
            mask >>= 1;
        }
        // `pos` values have cumulative sum <= target, so prefix(pos - 1)
        // is the largest inclusive prefix under the target.
        if pos == 0 { None } else { Some(pos - 1) }
    }
}
