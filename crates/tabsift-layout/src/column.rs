#![forbid(unsafe_code)]

//! Column definitions.
//!
//! A grid is described by a tree of [`Column`]s. Leaves are addressable,
//! displayable, and filterable; groups only nest headers. The variant is
//! explicit, so flattening is a plain recursive match.
//!
//! Only top-level columns may be pinned. A pin flag on a nested column is
//! kept in the definition but has no effect.
//!
//! ```
//! use tabsift_layout::column::{Column, GroupColumn, LeafColumn};
//!
//! struct Person { name: String, email: String }
//!
//! let columns: Vec<Column<Person>> = vec![
//!     GroupColumn::new("person")
//!         .child(LeafColumn::new("name").text(|p: &Person| p.name.clone()).pin())
//!         .child(LeafColumn::new("email").text(|p: &Person| p.email.clone()))
//!         .pin()
//!         .into(),
//! ];
//! assert_eq!(columns[0].id(), "person");
//! ```

use std::fmt;
use std::sync::Arc;

/// Derives the text used to filter and sort a row by one column.
pub type TextExtractor<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// A node of the column tree.
pub enum Column<R> {
    /// Addressable column with no children.
    Leaf(LeafColumn<R>),
    /// Header grouping over child columns.
    Group(GroupColumn<R>),
}

impl<R> Column<R> {
    /// Column id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.id,
            Self::Group(group) => &group.id,
        }
    }

    /// Display name, falling back to the id.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(leaf) => leaf.display_name(),
            Self::Group(group) => group.display_name(),
        }
    }

    /// Pin flag as declared. Only honored on top-level columns.
    #[must_use]
    pub fn is_pin_requested(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.pin,
            Self::Group(group) => group.pin,
        }
    }

    /// Whether this is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(leaf) => Self::Leaf(leaf.clone()),
            Self::Group(group) => Self::Group(group.clone()),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => fmt::Debug::fmt(leaf, f),
            Self::Group(group) => fmt::Debug::fmt(group, f),
        }
    }
}

impl<R> From<LeafColumn<R>> for Column<R> {
    fn from(leaf: LeafColumn<R>) -> Self {
        Self::Leaf(leaf)
    }
}

impl<R> From<GroupColumn<R>> for Column<R> {
    fn from(group: GroupColumn<R>) -> Self {
        Self::Group(group)
    }
}

/// A displayable, filterable column.
pub struct LeafColumn<R> {
    /// Unique across the whole tree.
    pub id: String,
    /// Display name; the id is used when absent.
    pub name: Option<String>,
    /// Text used for filtering and sorting. Columns without one are
    /// displayed but never filtered or sorted.
    pub text: Option<TextExtractor<R>>,
    /// Declared width. Defaults to [`DEFAULT_COLUMN_SIZE`](crate::sizing::DEFAULT_COLUMN_SIZE).
    pub size: Option<u32>,
    /// Lower resize bound.
    pub min_size: Option<u32>,
    /// Upper resize bound.
    pub max_size: Option<u32>,
    /// Whether the user may resize. Defaults to `true`.
    pub enable_resizing: Option<bool>,
    /// Pin to the left edge (top-level only).
    pub pin: bool,
}

impl<R> LeafColumn<R> {
    /// Create a leaf with only an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            text: None,
            size: None,
            min_size: None,
            max_size: None,
            enable_resizing: None,
            pin: false,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the text extractor.
    #[must_use]
    pub fn text(mut self, extract: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.text = Some(Arc::new(extract));
        self
    }

    /// Set the declared width.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_size(mut self, min: u32) -> Self {
        self.min_size = Some(min);
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn max_size(mut self, max: u32) -> Self {
        self.max_size = Some(max);
        self
    }

    /// Allow or forbid resizing.
    #[must_use]
    pub fn resizable(mut self, enabled: bool) -> Self {
        self.enable_resizing = Some(enabled);
        self
    }

    /// Request pinning.
    #[must_use]
    pub fn pin(mut self) -> Self {
        self.pin = true;
        self
    }

    /// Display name, falling back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

impl<R> Clone for LeafColumn<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            text: self.text.clone(),
            size: self.size,
            min_size: self.min_size,
            max_size: self.max_size,
            enable_resizing: self.enable_resizing,
            pin: self.pin,
        }
    }
}

impl<R> fmt::Debug for LeafColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafColumn")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("text", &self.text.is_some())
            .field("size", &self.size)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("enable_resizing", &self.enable_resizing)
            .field("pin", &self.pin)
            .finish()
    }
}

/// A header grouping over child columns.
pub struct GroupColumn<R> {
    /// Unique across the whole tree.
    pub id: String,
    /// Display name; the id is used when absent.
    pub name: Option<String>,
    /// Text for the group header. Groups are never matched by filters.
    pub text: Option<TextExtractor<R>>,
    /// Whether the group header may be resized.
    pub enable_resizing: Option<bool>,
    /// Pin the whole group to the left edge (top-level only).
    pub pin: bool,
    /// Nested columns in display order.
    pub children: Vec<Column<R>>,
}

impl<R> GroupColumn<R> {
    /// Create an empty group.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            text: None,
            enable_resizing: None,
            pin: false,
            children: Vec::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the header text extractor.
    #[must_use]
    pub fn text(mut self, extract: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.text = Some(Arc::new(extract));
        self
    }

    /// Allow or forbid resizing the group header.
    #[must_use]
    pub fn resizable(mut self, enabled: bool) -> Self {
        self.enable_resizing = Some(enabled);
        self
    }

    /// Request pinning.
    #[must_use]
    pub fn pin(mut self) -> Self {
        self.pin = true;
        self
    }

    /// Append a child column.
    #[must_use]
    pub fn child(mut self, column: impl Into<Column<R>>) -> Self {
        self.children.push(column.into());
        self
    }

    /// Replace the children.
    #[must_use]
    pub fn children(mut self, columns: impl IntoIterator<Item = Column<R>>) -> Self {
        self.children = columns.into_iter().collect();
        self
    }

    /// Display name, falling back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Header text for `row`, if the group has an extractor.
    #[must_use]
    pub fn header_text(&self, row: &R) -> Option<String> {
        self.text.as_ref().map(|extract| extract(row))
    }
}

impl<R> Clone for GroupColumn<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            text: self.text.clone(),
            enable_resizing: self.enable_resizing,
            pin: self.pin,
            children: self.children.clone(),
        }
    }
}

impl<R> fmt::Debug for GroupColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupColumn")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("text", &self.text.is_some())
            .field("enable_resizing", &self.enable_resizing)
            .field("pin", &self.pin)
            .field("children", &self.children)
            .finish()
    }
}
