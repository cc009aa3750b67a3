#![forbid(unsafe_code)]

use tabsift_text::Item;

use super::{Candidate, SelectOptions, candidates};
use crate::selection::{Selection, SelectionSummary, resolve};

/// A dropdown listing every item with a toggle.
///
/// Toggling a switch flips membership; choosing a row replaces the whole
/// selection with that single item.
///
/// ```
/// use tabsift_text::Item;
/// use tabsift_widgets::select::{ChecklistState, SelectOptions};
///
/// let items = vec![Item::new("pod", "Pod"), Item::new("svc", "Service")];
/// let mut state = ChecklistState::new(SelectOptions::default());
/// state.toggle("svc");
/// state.set_query("s");
///
/// let candidates = state.candidates(&items);
/// assert_eq!(candidates.len(), 1);
/// assert!(candidates[0].checked);
/// assert_eq!(state.summary(&items).label("Select"), "Service");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    options: SelectOptions,
    selection: Selection,
    query: String,
}

impl ChecklistState {
    /// Empty selection and query.
    #[must_use]
    pub fn new(options: SelectOptions) -> Self {
        Self {
            options,
            selection: Selection::new(),
            query: String::new(),
        }
    }

    /// Start from an existing selection.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current dropdown query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the dropdown query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Items ranked by the query, each flagged if selected.
    #[must_use]
    pub fn candidates<'a>(&self, items: &'a [Item]) -> Vec<Candidate<'a>> {
        let all: Vec<&Item> = items.iter().collect();
        candidates(&all, &self.query, &self.selection)
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Select only `id`.
    pub fn choose(&mut self, id: &str) {
        self.selection.set_single(id);
    }

    /// Summary for the closed button.
    #[must_use]
    pub fn summary<'a>(&self, items: &'a [Item]) -> SelectionSummary<'a> {
        SelectionSummary::new(&resolve(items, &self.selection), self.options.max_displayed)
    }

    /// Closed-button label using the configured placeholder.
    #[must_use]
    pub fn label(&self, items: &[Item]) -> String {
        self.summary(items).label(&self.options.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsift_text::MatchScore;

    fn items() -> Vec<Item> {
        vec![
            Item::new("1", "DaemonSet"),
            Item::new("2", "set"),
            Item::new("3", "Set"),
            Item::new("4", "Pod"),
        ]
    }

    #[test]
    fn candidates_ranked_and_filtered() {
        let items = items();
        let mut state = ChecklistState::default();
        state.set_query("set");
        let ids: Vec<&str> = state
            .candidates(&items)
            .iter()
            .map(|c| c.item.id.as_str())
            .collect();
        assert_eq!(ids, ["2", "3", "1"]);
    }

    #[test]
    fn candidates_report_scores() {
        let items = items();
        let mut state = ChecklistState::default();
        state.set_query("Set");
        let candidates = state.candidates(&items);
        assert_eq!(candidates[0].score, MatchScore::Equal);
        assert_eq!(candidates[0].item.id, "3");
    }

    #[test]
    fn empty_query_lists_everything() {
        let items = items();
        let state = ChecklistState::default();
        assert_eq!(state.candidates(&items).len(), 4);
    }

    #[test]
    fn toggle_flags_candidates() {
        let items = items();
        let mut state = ChecklistState::default();
        assert!(state.toggle("4"));
        let checked: Vec<&str> = state
            .candidates(&items)
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.item.id.as_str())
            .collect();
        assert_eq!(checked, ["4"]);
        assert!(!state.toggle("4"));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn choose_replaces_selection() {
        let mut state =
            ChecklistState::default().with_selection(["1", "2"].into_iter().collect());
        state.choose("4");
        assert_eq!(state.selection().ids(), ["4"]);
    }

    #[test]
    fn label_uses_placeholder_and_overflow() {
        let items = items();
        let mut state = ChecklistState::new(
            SelectOptions::default()
                .max_displayed(2)
                .placeholder("Select kinds"),
        );
        assert_eq!(state.label(&items), "Select kinds");
        for id in ["4", "1", "2"] {
            state.toggle(id);
        }
        let summary = state.summary(&items);
        assert_eq!(summary.label("unused"), "Pod, DaemonSet");
        assert_eq!(summary.overflow_label().as_deref(), Some("+1 more"));
    }
}
