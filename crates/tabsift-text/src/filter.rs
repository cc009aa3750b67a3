#![forbid(unsafe_code)]

//! Filter query language.
//!
//! A raw filter string is split on `;` into groups. Each group is either a
//! column constraint or free text:
//!
//! ```text
//! <TERM>
//! <COLUMN>:<TERM>
//! <COLUMN>:<TERM>;<COLUMN>:<TERM>;...
//! <TERM>;<COLUMN>:<TERM>
//! ```
//!
//! # Grammar rules
//!
//! - A group containing `:` is split at the **first** colon. Both sides are
//!   trimmed; when both are non-empty the group becomes a
//!   [`ColumnConstraint`]. Later colons belong to the term.
//! - A group containing `:` with an empty side is ignored.
//! - A group without `:` becomes the global term if it is non-empty after
//!   trimming and no global term has been seen yet. Later free-text groups
//!   are discarded (first wins).
//! - Empty groups are ignored.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | `""` | Empty state |
//! | `"name:"` | Group ignored |
//! | `":foo"` | Group ignored |
//! | `"foo;bar"` | Global term `"foo"`, `"bar"` discarded |
//!
//! The parser never fails; malformed groups simply drop out.

use std::fmt;

/// A term scoped to every column displaying `column`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnConstraint {
    /// Column display name as typed by the user (trimmed, case preserved).
    pub column: String,
    /// Term to match within that column.
    pub term: String,
}

impl ColumnConstraint {
    /// Create a constraint.
    #[must_use]
    pub fn new(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            term: term.into(),
        }
    }
}

impl fmt::Display for ColumnConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.term)
    }
}

/// Parsed filter: one global term plus ordered column constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    /// Term checked against every filterable column. Empty when absent.
    pub global_term: String,
    /// Constraints in left-to-right order.
    pub constraints: Vec<ColumnConstraint>,
}

impl FilterState {
    /// The global term, if one was given.
    #[must_use]
    pub fn global_term(&self) -> Option<&str> {
        (!self.global_term.is_empty()).then_some(self.global_term.as_str())
    }

    /// Column constraints in input order.
    #[must_use]
    pub fn constraints(&self) -> &[ColumnConstraint] {
        &self.constraints
    }

    /// Whether the filter constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global_term.is_empty() && self.constraints.is_empty()
    }
}

/// Parse a raw filter string.
///
/// ```
/// use tabsift_text::filter::{ColumnConstraint, parse_filter};
///
/// let state = parse_filter("bar; name: foo ;kind:a:b");
/// assert_eq!(state.global_term, "bar");
/// assert_eq!(
///     state.constraints,
///     [ColumnConstraint::new("name", "foo"), ColumnConstraint::new("kind", "a:b")]
/// );
/// ```
#[must_use]
pub fn parse_filter(raw: &str) -> FilterState {
    let mut state = FilterState::default();

    for (position, group) in raw.split(';').enumerate() {
        if let Some((column, term)) = group.split_once(':') {
            let column = column.trim();
            let term = term.trim();
            if column.is_empty() || term.is_empty() {
                tracing::trace!(position, group, "ignoring incomplete column filter");
                continue;
            }
            state.constraints.push(ColumnConstraint::new(column, term));
            continue;
        }

        let term = group.trim();
        if term.is_empty() {
            continue;
        }
        if state.global_term.is_empty() {
            state.global_term = term.to_owned();
        } else {
            tracing::debug!(position, term, "discarding extra free-text group");
        }
    }

    tracing::trace!(
        global = %state.global_term,
        constraints = state.constraints.len(),
        "parsed filter"
    );
    state
}
