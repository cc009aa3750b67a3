#![forbid(unsafe_code)]

//! Column layout for tabsift grids.
//!
//! This crate provides:
//! - [`Column`] trees of [`LeafColumn`]s and [`GroupColumn`]s
//! - [`ColumnTree`] for flattening, name resolution, and pinned ids
//! - [`ColumnSizing`] for resize-bounded widths
//! - [`pin_rows`] and [`sticky_offsets`] for pinned rows and columns

pub mod column;
pub mod pin;
pub mod sizing;
pub mod tree;

pub use column::{Column, GroupColumn, LeafColumn, TextExtractor};
pub use pin::{column_offsets, pin_rows, pinned_first, sticky_offsets};
pub use sizing::{
    ColumnSizing, DEFAULT_COLUMN_SIZE, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, clamp_size,
};
pub use tree::{ColumnTree, ColumnTreeError, LeafMeta, NameIndex};
