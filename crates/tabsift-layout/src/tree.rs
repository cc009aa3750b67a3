#![forbid(unsafe_code)]

//! Column tree flattening and name resolution.
//!
//! [`ColumnTree::flatten`] walks a column definition tree depth-first and
//! produces:
//!
//! - the leaf columns in display order, with names and sizes resolved,
//! - a case-insensitive index from display name to every leaf id showing
//!   that name,
//! - the ids of pinned top-level columns in declaration order.
//!
//! # Invariants
//!
//! 1. Leaf order equals a left-to-right depth-first traversal.
//! 2. Ids are unique across the tree (leaves and groups). A duplicate is
//!    rejected with [`ColumnTreeError::DuplicateId`].
//! 3. A name index entry lists ids in traversal order.
//! 4. Pin flags below the top level are ignored.
//!
//! # Example
//!
//! ```
//! use tabsift_layout::column::{Column, GroupColumn, LeafColumn};
//! use tabsift_layout::tree::ColumnTree;
//!
//! struct Person { name: String, email: String }
//!
//! let columns: Vec<Column<Person>> = vec![
//!     GroupColumn::new("person")
//!         .child(LeafColumn::new("name").text(|p: &Person| p.name.clone()))
//!         .child(LeafColumn::new("email").text(|p: &Person| p.email.clone()))
//!         .into(),
//! ];
//! let tree = ColumnTree::flatten(&columns).unwrap();
//! let ids: Vec<&str> = tree.leaves().iter().map(|l| l.id.as_str()).collect();
//! assert_eq!(ids, ["name", "email"]);
//! assert_eq!(tree.resolve("EMAIL"), ["email"]);
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::column::{Column, LeafColumn, TextExtractor};
use crate::sizing::{DEFAULT_COLUMN_SIZE, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, clamp_size};

/// Errors from building a column tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnTreeError {
    /// Two columns in the tree share an id.
    #[error("duplicate column id '{0}'")]
    DuplicateId(String),
}

/// Resolved metadata for one leaf column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafMeta {
    /// Column id.
    pub id: String,
    /// Display name (`name`, else `id`).
    pub name: String,
    /// Declared size clamped into bounds.
    pub size: u32,
    /// Lower resize bound.
    pub min_size: u32,
    /// Upper resize bound.
    pub max_size: u32,
    /// Whether the user may resize this column.
    pub resizable: bool,
    /// Whether the enclosing top-level column is pinned.
    pub pinned: bool,
    /// Id of the top-level column this leaf belongs to (its own id at depth 0).
    pub top_level_id: String,
    /// Nesting depth, `0` for top-level leaves.
    pub depth: usize,
    /// Whether the leaf has a text extractor and so takes part in
    /// filtering and sorting.
    pub filterable: bool,
}

/// Case-insensitive display name → leaf ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    map: FxHashMap<String, SmallVec<[String; 1]>>,
}

impl NameIndex {
    fn insert(&mut self, name: &str, id: &str) {
        self.map
            .entry(name.to_lowercase())
            .or_default()
            .push(id.to_owned());
    }

    /// Leaf ids displaying `name`, compared case-insensitively. Unknown
    /// names yield an empty slice.
    #[must_use]
    pub fn get(&self, name: &str) -> &[String] {
        self.map
            .get(&name.to_lowercase())
            .map_or(&[][..], |ids| ids.as_slice())
    }

    /// Number of distinct (lowercased) names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no names are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate `(lowercased name, ids)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map
            .iter()
            .map(|(name, ids)| (name.as_str(), ids.as_slice()))
    }
}

/// A flattened column tree for row type `R`.
pub struct ColumnTree<R> {
    leaves: Vec<LeafMeta>,
    extractors: Vec<Option<TextExtractor<R>>>,
    positions: FxHashMap<String, usize>,
    name_index: NameIndex,
    pinned_top_level_ids: Vec<String>,
}

impl<R> ColumnTree<R> {
    /// Flatten `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnTreeError::DuplicateId`] when two columns anywhere in
    /// the tree share an id.
    pub fn flatten(columns: &[Column<R>]) -> Result<Self, ColumnTreeError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("column_tree_flatten", top_level = columns.len()).entered();

        let mut builder = Builder {
            tree: Self {
                leaves: Vec::new(),
                extractors: Vec::new(),
                positions: FxHashMap::default(),
                name_index: NameIndex::default(),
                pinned_top_level_ids: Vec::new(),
            },
            seen: FxHashSet::default(),
        };

        for column in columns {
            let pinned = column.is_pin_requested();
            if pinned {
                builder.tree.pinned_top_level_ids.push(column.id().to_owned());
            }
            builder.walk(column, column.id(), pinned, 0)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            leaves = builder.tree.leaves.len(),
            pinned = builder.tree.pinned_top_level_ids.len(),
            "flattened column tree"
        );
        Ok(builder.tree)
    }

    /// Leaf columns in display order.
    #[must_use]
    pub fn leaves(&self) -> &[LeafMeta] {
        &self.leaves
    }

    /// Name → ids index.
    #[must_use]
    pub fn name_index(&self) -> &NameIndex {
        &self.name_index
    }

    /// Ids of pinned top-level columns in declaration order.
    #[must_use]
    pub fn pinned_top_level_ids(&self) -> &[String] {
        &self.pinned_top_level_ids
    }

    /// Leaf ids displaying `name`, case-insensitively.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &[String] {
        self.name_index.get(name)
    }

    /// Metadata for leaf `id`.
    #[must_use]
    pub fn leaf(&self, id: &str) -> Option<&LeafMeta> {
        self.positions.get(id).map(|&i| &self.leaves[i])
    }

    /// Position of leaf `id` in display order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Extract the filter/sort text of `row` for leaf `id`.
    ///
    /// `None` when the leaf is unknown or has no extractor.
    #[must_use]
    pub fn text(&self, id: &str, row: &R) -> Option<String> {
        let position = self.position(id)?;
        self.text_at(position, row)
    }

    /// Extract the text of `row` for the leaf at `position`.
    #[must_use]
    pub fn text_at(&self, position: usize, row: &R) -> Option<String> {
        self.extractors
            .get(position)?
            .as_ref()
            .map(|extract| extract(row))
    }

    /// Number of leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Whether the tree has no leaves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

impl<R> Clone for ColumnTree<R> {
    fn clone(&self) -> Self {
        Self {
            leaves: self.leaves.clone(),
            extractors: self.extractors.clone(),
            positions: self.positions.clone(),
            name_index: self.name_index.clone(),
            pinned_top_level_ids: self.pinned_top_level_ids.clone(),
        }
    }
}

impl<R> std::fmt::Debug for ColumnTree<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnTree")
            .field("leaves", &self.leaves)
            .field("name_index", &self.name_index)
            .field("pinned_top_level_ids", &self.pinned_top_level_ids)
            .finish_non_exhaustive()
    }
}

struct Builder<R> {
    tree: ColumnTree<R>,
    seen: FxHashSet<String>,
}

impl<R> Builder<R> {
    fn claim(&mut self, id: &str) -> Result<(), ColumnTreeError> {
        if self.seen.insert(id.to_owned()) {
            Ok(())
        } else {
            Err(ColumnTreeError::DuplicateId(id.to_owned()))
        }
    }

    fn walk(
        &mut self,
        column: &Column<R>,
        top_level_id: &str,
        pinned: bool,
        depth: usize,
    ) -> Result<(), ColumnTreeError> {
        self.claim(column.id())?;
        match column {
            Column::Leaf(leaf) => {
                self.push_leaf(leaf, top_level_id, pinned, depth);
                Ok(())
            }
            Column::Group(group) => group
                .children
                .iter()
                .try_for_each(|child| self.walk(child, top_level_id, pinned, depth + 1)),
        }
    }

    fn push_leaf(&mut self, leaf: &LeafColumn<R>, top_level_id: &str, pinned: bool, depth: usize) {
        let min_size = leaf.min_size.unwrap_or(DEFAULT_MIN_SIZE);
        let max_size = leaf.max_size.unwrap_or(DEFAULT_MAX_SIZE);
        let size = clamp_size(leaf.size.unwrap_or(DEFAULT_COLUMN_SIZE), min_size, max_size);
        let meta = LeafMeta {
            id: leaf.id.clone(),
            name: leaf.display_name().to_owned(),
            size,
            min_size,
            max_size,
            resizable: leaf.enable_resizing.unwrap_or(true),
            pinned,
            top_level_id: top_level_id.to_owned(),
            depth,
            filterable: leaf.text.is_some(),
        };

        let tree = &mut self.tree;
        tree.name_index.insert(&meta.name, &meta.id);
        tree.positions.insert(meta.id.clone(), tree.leaves.len());
        tree.leaves.push(meta);
        tree.extractors.push(leaf.text.clone());
    }
}
