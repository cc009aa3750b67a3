#![forbid(unsafe_code)]

//! Row matching for grid filtering.
//!
//! A [`RowFilter`] is a parsed [`FilterState`] whose column names have been
//! resolved against a [`ColumnTree`]. Evaluating it against one row yields a
//! [`RowMatch`]:
//!
//! - the global term must match the text of at least one filterable column,
//! - every column filter must match the text of its own column.
//!
//! # Failure Modes
//!
//! | Situation | Behavior |
//! |-----------|----------|
//! | Constraint names an unknown column | Dropped at resolution |
//! | Constraint names a column without an extractor | Dropped at resolution |
//! | Name shared by several leaves | One filter per leaf, all must pass |
//! | Global term but no filterable column | Global term ignored |

use tabsift_layout::ColumnTree;
use tabsift_text::{FilterState, MatchScore, score_match};

/// Outcome of matching one cell value against one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMatch {
    /// Whether the value matched at all.
    pub passed: bool,
    /// Strength of the match.
    pub rank: MatchScore,
}

/// Match a single cell value against `term`.
///
/// ```
/// use tabsift_text::MatchScore;
/// use tabsift_widgets::matcher::match_cell;
///
/// let m = match_cell("jhon@gmail.com", "gmail");
/// assert!(m.passed);
/// assert_eq!(m.rank, MatchScore::PartialMatch);
/// ```
#[must_use]
pub fn match_cell(value: &str, term: &str) -> CellMatch {
    let rank = score_match(value, term);
    CellMatch {
        passed: rank.is_match(),
        rank,
    }
}

/// A term bound to one resolved leaf column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    /// Leaf column id.
    pub column_id: String,
    /// Term to match within that column.
    pub term: String,
    position: usize,
}

/// Outcome of matching one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMatch {
    /// Whether the row survives filtering.
    pub passed: bool,
    /// Best global-term score across filterable columns; `None` without a
    /// global term.
    pub rank: Option<MatchScore>,
}

/// A filter whose column names are resolved to leaf columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    global_term: Option<String>,
    global_positions: Vec<usize>,
    column_filters: Vec<ColumnFilter>,
}

impl RowFilter {
    /// Resolve `state` against `tree`.
    #[must_use]
    pub fn resolve<R>(state: &FilterState, tree: &ColumnTree<R>) -> Self {
        let global_positions: Vec<usize> = tree
            .leaves()
            .iter()
            .enumerate()
            .filter(|(_, leaf)| leaf.filterable)
            .map(|(position, _)| position)
            .collect();

        let global_term = state
            .global_term()
            .filter(|_| !global_positions.is_empty())
            .map(str::to_owned);

        let mut column_filters = Vec::new();
        for constraint in state.constraints() {
            let ids = tree.resolve(&constraint.column);
            let before = column_filters.len();
            for id in ids {
                let Some(position) = tree.position(id) else {
                    continue;
                };
                if !tree.leaves()[position].filterable {
                    continue;
                }
                column_filters.push(ColumnFilter {
                    column_id: id.clone(),
                    term: constraint.term.clone(),
                    position,
                });
            }
            if column_filters.len() == before {
                #[cfg(feature = "tracing")]
                tracing::debug!(column = %constraint.column, "dropping unresolved column filter");
            }
        }

        Self {
            global_term,
            global_positions,
            column_filters,
        }
    }

    /// Global term applied across filterable columns, if any.
    #[must_use]
    pub fn global_term(&self) -> Option<&str> {
        self.global_term.as_deref()
    }

    /// Resolved column filters in constraint order.
    #[must_use]
    pub fn column_filters(&self) -> &[ColumnFilter] {
        &self.column_filters
    }

    /// Whether every row passes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global_term.is_none() && self.column_filters.is_empty()
    }

    /// Match `row`.
    pub fn evaluate<R>(&self, tree: &ColumnTree<R>, row: &R) -> RowMatch {
        let columns_pass = self.column_filters.iter().all(|filter| {
            tree.text_at(filter.position, row)
                .is_some_and(|text| match_cell(&text, &filter.term).passed)
        });

        let Some(term) = self.global_term.as_deref() else {
            return RowMatch {
                passed: columns_pass,
                rank: None,
            };
        };

        let best = self
            .global_positions
            .iter()
            .filter_map(|&position| tree.text_at(position, row))
            .map(|text| match_cell(&text, term).rank)
            .max()
            .unwrap_or_default();

        RowMatch {
            passed: columns_pass && best.is_match(),
            rank: Some(best),
        }
    }
}
