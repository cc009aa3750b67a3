#![forbid(unsafe_code)]

//! Selector state: a checklist dropdown and a horizontal tag list.
//!
//! Both selectors rank their candidates with the shared item ranker, so a
//! query of `"set"` lists an item named `set` before `Set` before
//! `DaemonSet`. Neither tracks focus, open/closed state, or pointer events;
//! those stay with the presentation layer.
//!
//! - [`ChecklistState`]: one dropdown listing every item with a checked
//!   flag, plus a closed-button summary.
//! - [`TagSelectState`]: selected items shown as tags, each with its own
//!   dropdown, collapsing to `max_visible` tags.

mod checklist;
mod tags;

pub use checklist::ChecklistState;
pub use tags::{TagSelectMode, TagSelectState};

use tabsift_text::{Item, MatchScore, rank_scored};

use crate::selection::Selection;

/// Default number of selected names shown inline.
pub const DEFAULT_MAX_DISPLAYED: usize = 3;

/// Default label when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select";

/// Selector configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptions {
    /// Selected names shown inline before collapsing into `+N more`.
    pub max_displayed: usize,
    /// Label shown when nothing is selected.
    pub placeholder: String,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            max_displayed: DEFAULT_MAX_DISPLAYED,
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

impl SelectOptions {
    /// Set `max_displayed`.
    #[must_use]
    pub fn max_displayed(mut self, max: usize) -> Self {
        self.max_displayed = max;
        self
    }

    /// Set the placeholder label.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// One entry of a selector dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// The item offered.
    pub item: &'a Item,
    /// How well its name matched the query.
    pub score: MatchScore,
    /// Whether the item is currently selected.
    pub checked: bool,
}

/// Rank `items` by `query` and flag the selected ones.
pub(crate) fn candidates<'a, 'i>(
    items: &'i [&'a Item],
    query: &str,
    selection: &Selection,
) -> Vec<Candidate<'a>> {
    rank_scored(items, query)
        .into_iter()
        .map(|ranked| Candidate {
            item: *ranked.item,
            score: ranked.score,
            checked: selection.contains(&ranked.item.id),
        })
        .collect()
}
