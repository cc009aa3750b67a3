#![forbid(unsafe_code)]

//! Row and column pinning.
//!
//! Pinning is a two-way stable partition: pinned entries move to the front,
//! and both halves keep their original relative order. It is not a sort on
//! a key.
//!
//! Pinned columns are positioned with a static left offset. Offsets are
//! cumulative widths of the columns before them in render order.

use crate::sizing::ColumnSizing;
use crate::tree::LeafMeta;

/// Move every row satisfying `is_pinned` to the front, preserving order
/// within both partitions.
///
/// ```
/// use tabsift_layout::pin::pin_rows;
///
/// let rows = pin_rows([1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(rows, [2, 4, 1, 3]);
/// ```
#[must_use]
pub fn pin_rows<T>(rows: impl IntoIterator<Item = T>, mut is_pinned: impl FnMut(&T) -> bool) -> Vec<T> {
    let (mut pinned, rest): (Vec<T>, Vec<T>) = rows.into_iter().partition(|row| is_pinned(row));
    pinned.extend(rest);
    pinned
}

/// Leaf columns in render order: pinned leaves first, each half in
/// declaration order.
#[must_use]
pub fn pinned_first(leaves: &[LeafMeta]) -> Vec<&LeafMeta> {
    pin_rows(leaves, |leaf| leaf.pinned)
}

/// Cumulative left offsets: `offset[0] = 0`, `offset[i] = offset[i-1] + size[i-1]`.
///
/// Sums saturate at `u32::MAX`.
#[must_use]
pub fn column_offsets(sizes: &[u32]) -> Vec<u32> {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut left = 0u32;
    for &size in sizes {
        offsets.push(left);
        left = left.saturating_add(size);
    }
    offsets
}

/// Sticky offsets for `order`: `Some(left)` for pinned columns, `None` for
/// columns that scroll.
///
/// `order` is expected to list pinned columns first (see [`pinned_first`]).
#[must_use]
pub fn sticky_offsets(order: &[&LeafMeta], sizing: &ColumnSizing) -> Vec<Option<u32>> {
    let sizes = sizing.sizes_for(order.iter().map(|leaf| leaf.id.as_str()));
    column_offsets(&sizes)
        .into_iter()
        .zip(order)
        .map(|(left, leaf)| leaf.pinned.then_some(left))
        .collect()
}
