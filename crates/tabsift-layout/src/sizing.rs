#![forbid(unsafe_code)]

//! Column widths and resize bounds.
//!
//! Widths are unitless. A leaf without a declared size gets
//! [`DEFAULT_COLUMN_SIZE`]; every width is clamped into
//! `[min_size, max_size]`, with the maximum winning when the bounds cross.

use rustc_hash::FxHashMap;

use crate::tree::LeafMeta;

/// Width of a leaf column that declares none.
pub const DEFAULT_COLUMN_SIZE: u32 = 256;

/// Lower bound applied when a leaf declares none.
pub const DEFAULT_MIN_SIZE: u32 = 20;

/// Upper bound applied when a leaf declares none.
pub const DEFAULT_MAX_SIZE: u32 = u32::MAX;

/// Clamp `size` into `[min, max]`; `max` wins if `min > max`.
#[must_use]
pub fn clamp_size(size: u32, min: u32, max: u32) -> u32 {
    size.max(min).min(max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SizeRule {
    declared: u32,
    current: u32,
    min: u32,
    max: u32,
    resizable: bool,
}

/// Current widths of every leaf column, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ColumnSizing {
    rules: FxHashMap<String, SizeRule>,
}

impl ColumnSizing {
    /// Start every leaf at its resolved declared size.
    #[must_use]
    pub fn new<'a>(leaves: impl IntoIterator<Item = &'a LeafMeta>) -> Self {
        let rules = leaves
            .into_iter()
            .map(|leaf| {
                let rule = SizeRule {
                    declared: leaf.size,
                    current: leaf.size,
                    min: leaf.min_size,
                    max: leaf.max_size,
                    resizable: leaf.resizable,
                };
                (leaf.id.clone(), rule)
            })
            .collect();
        Self { rules }
    }

    /// Current width of `id`.
    #[must_use]
    pub fn size_of(&self, id: &str) -> Option<u32> {
        self.rules.get(id).map(|rule| rule.current)
    }

    /// Widths for `ids` in order. Unknown ids count as zero width.
    #[must_use]
    pub fn sizes_for<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Vec<u32> {
        ids.into_iter()
            .map(|id| self.size_of(id).unwrap_or(0))
            .collect()
    }

    /// Resize `id` to `width`, clamped to its bounds.
    ///
    /// Returns `false` for unknown or non-resizable columns and when the
    /// clamped width equals the current one.
    pub fn resize(&mut self, id: &str, width: u32) -> bool {
        let Some(rule) = self.rules.get_mut(id) else {
            return false;
        };
        if !rule.resizable {
            return false;
        }
        let next = clamp_size(width, rule.min, rule.max);
        if next == rule.current {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(column = id, from = rule.current, to = next, "column resized");
        rule.current = next;
        true
    }

    /// Restore `id` to its declared width.
    pub fn reset(&mut self, id: &str) {
        if let Some(rule) = self.rules.get_mut(id) {
            rule.current = rule.declared;
        }
    }

    /// Restore every column to its declared width.
    pub fn reset_all(&mut self) {
        for rule in self.rules.values_mut() {
            rule.current = rule.declared;
        }
    }

    /// Number of tracked columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no columns are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
