#![forbid(unsafe_code)]

use tabsift_text::Item;

use super::{Candidate, DEFAULT_MAX_DISPLAYED, candidates};
use crate::selection::{Selection, join_names, resolve, unselected};

/// How picks from a tag's dropdown change the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagSelectMode {
    /// Dropdowns offer only unselected items. Picking from a tag's dropdown
    /// swaps that tag in place; picking from the add button appends.
    #[default]
    Replace,
    /// Dropdowns offer every item with a checked flag; picking toggles.
    Checklist,
}

/// Selected items rendered as a row of tags.
///
/// At most `max_visible` tags are shown until the user expands the row.
/// The row collapses again automatically once fewer than `max_visible`
/// tags remain (see [`sync`](Self::sync)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelectState {
    mode: TagSelectMode,
    max_visible: usize,
    selection: Selection,
    show_all: bool,
    query: String,
}

impl Default for TagSelectState {
    fn default() -> Self {
        Self::new(TagSelectMode::default())
    }
}

impl TagSelectState {
    /// Empty tag row.
    #[must_use]
    pub fn new(mode: TagSelectMode) -> Self {
        Self {
            mode,
            max_visible: DEFAULT_MAX_DISPLAYED,
            selection: Selection::new(),
            show_all: false,
            query: String::new(),
        }
    }

    /// Set how many tags show while collapsed.
    #[must_use]
    pub fn max_visible(mut self, max: usize) -> Self {
        self.max_visible = max;
        self
    }

    /// Start from an existing selection.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Pick semantics.
    #[must_use]
    pub fn mode(&self) -> TagSelectMode {
        self.mode
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

    /// Whether every tag is shown.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.show_all
    }

    /// Show every tag.
    pub fn expand(&mut self) {
        self.show_all = true;
    }

    /// Show at most `max_visible` tags.
    pub fn collapse(&mut self) {
        self.show_all = false;
    }

    /// Collapse when fewer than `max_visible` tags remain. Call after the
    /// item list or selection changes.
    pub fn sync(&mut self, items: &[Item]) {
        if resolve(items, &self.selection).len() < self.max_visible {
            self.show_all = false;
        }
    }

    /// Tags to render, in selection order.
    #[must_use]
    pub fn visible_tags<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut tags = resolve(items, &self.selection);
        if !self.show_all {
            tags.truncate(self.max_visible);
        }
        tags
    }

    /// Number of tags hidden behind the expand button.
    #[must_use]
    pub fn hidden_count(&self, items: &[Item]) -> usize {
        if self.show_all {
            return 0;
        }
        resolve(items, &self.selection)
            .len()
            .saturating_sub(self.max_visible)
    }

    /// Names of hidden tags joined with `",\n"`, for the expand button.
    #[must_use]
    pub fn hidden_tooltip(&self, items: &[Item]) -> Option<String> {
        if self.show_all {
            return None;
        }
        let tags = resolve(items, &self.selection);
        let hidden = tags.get(self.max_visible..).filter(|rest| !rest.is_empty())?;
        Some(join_names(hidden, ",\n"))
    }

    /// Whether a "show less" control applies.
    #[must_use]
    pub fn can_collapse(&self, items: &[Item]) -> bool {
        self.show_all && resolve(items, &self.selection).len() > self.max_visible
    }

    /// Whether the add button has anything to offer.
    #[must_use]
    pub fn can_add(&self, items: &[Item]) -> bool {
        !unselected(items, &self.selection).is_empty()
    }

    /// Dropdown entries ranked by the query.
    ///
    /// In [`Replace`](TagSelectMode::Replace) mode only unselected items
    /// are offered; in [`Checklist`](TagSelectMode::Checklist) mode every
    /// item is offered with its checked flag.
    #[must_use]
    pub fn candidates<'a>(&self, items: &'a [Item]) -> Vec<Candidate<'a>> {
        let pool = match self.mode {
            TagSelectMode::Replace => unselected(items, &self.selection),
            TagSelectMode::Checklist => items.iter().collect(),
        };
        candidates(&pool, &self.query, &self.selection)
    }

    /// Pick `id` from the dropdown attached to tag `tag_id`.
    pub fn pick_for_tag(&mut self, tag_id: &str, id: &str) {
        match self.mode {
            TagSelectMode::Replace => self.selection.replace(tag_id, id),
            TagSelectMode::Checklist => {
                self.selection.toggle(id);
            }
        }
    }

    /// Pick `id` from the add-button dropdown.
    pub fn pick_new(&mut self, id: &str) {
        match self.mode {
            TagSelectMode::Replace => self.selection.push(id),
            TagSelectMode::Checklist => {
                self.selection.toggle(id);
            }
        }
    }

    /// Remove tag `id` via its close button.
    pub fn remove(&mut self, id: &str) {
        self.selection.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        (1..=6)
            .map(|i| Item::new(i.to_string(), format!("Kind {i}")))
            .collect()
    }

    fn ids(tags: &[&Item]) -> Vec<String> {
        tags.iter().map(|t| t.id.clone()).collect()
    }

    fn selected(ids: &[&str]) -> Selection {
        ids.iter().copied().collect()
    }

    // ── Visibility ──────────────────────────────────────────────────

    #[test]
    fn collapsed_shows_max_visible() {
        let items = items();
        let state = TagSelectState::default().with_selection(selected(&["1", "2", "3", "4", "5"]));
        assert_eq!(ids(&state.visible_tags(&items)), ["1", "2", "3"]);
        assert_eq!(state.hidden_count(&items), 2);
        assert_eq!(
            state.hidden_tooltip(&items).as_deref(),
            Some("Kind 4,\nKind 5")
        );
    }

    #[test]
    fn expanded_shows_everything() {
        let items = items();
        let mut state =
            TagSelectState::default().with_selection(selected(&["1", "2", "3", "4", "5"]));
        state.expand();
        assert_eq!(state.visible_tags(&items).len(), 5);
        assert_eq!(state.hidden_count(&items), 0);
        assert_eq!(state.hidden_tooltip(&items), None);
        assert!(state.can_collapse(&items));
    }

    #[test]
    fn no_tooltip_without_overflow() {
        let items = items();
        let state = TagSelectState::default().with_selection(selected(&["1", "2"]));
        assert_eq!(state.hidden_tooltip(&items), None);
    }

    #[test]
    fn sync_collapses_below_threshold() {
        let items = items();
        let mut state = TagSelectState::default().with_selection(selected(&["1", "2", "3", "4"]));
        state.expand();
        state.sync(&items);
        assert!(state.is_expanded());

        state.remove("4");
        state.remove("3");
        state.sync(&items);
        assert!(!state.is_expanded());
    }

    #[test]
    fn sync_keeps_expanded_at_threshold() {
        let items = items();
        let mut state = TagSelectState::default().with_selection(selected(&["1", "2", "3"]));
        state.expand();
        state.sync(&items);
        assert!(state.is_expanded());
        assert!(!state.can_collapse(&items));
    }

    // ── Replace mode ────────────────────────────────────────────────

    #[test]
    fn replace_mode_offers_unselected_only() {
        let items = items();
        let state = TagSelectState::new(TagSelectMode::Replace).with_selection(selected(&["2"]));
        let offered: Vec<&str> = state
            .candidates(&items)
            .iter()
            .map(|c| c.item.id.as_str())
            .collect();
        assert_eq!(offered, ["1", "3", "4", "5", "6"]);
    }

    #[test]
    fn replace_mode_swaps_in_place() {
        let mut state =
            TagSelectState::new(TagSelectMode::Replace).with_selection(selected(&["1", "2", "3"]));
        state.pick_for_tag("2", "6");
        assert_eq!(state.selection().ids(), ["1", "6", "3"]);
        state.pick_new("4");
        assert_eq!(state.selection().ids(), ["1", "6", "3", "4"]);
    }

    #[test]
    fn cannot_add_when_everything_selected() {
        let items = items();
        let state = TagSelectState::default()
            .with_selection(selected(&["1", "2", "3", "4", "5", "6"]));
        assert!(!state.can_add(&items));
        assert!(state.candidates(&items).is_empty());
    }

    #[test]
    fn query_filters_candidates() {
        let items = items();
        let mut state = TagSelectState::default();
        state.set_query("kind 5");
        let offered: Vec<&str> = state
            .candidates(&items)
            .iter()
            .map(|c| c.item.id.as_str())
            .collect();
        assert_eq!(offered, ["5"]);
    }

    // ── Checklist mode ──────────────────────────────────────────────

    #[test]
    fn checklist_mode_offers_all_with_flags() {
        let items = items();
        let state = TagSelectState::new(TagSelectMode::Checklist).with_selection(selected(&["2"]));
        let candidates = state.candidates(&items);
        assert_eq!(candidates.len(), 6);
        assert!(candidates[1].checked);
        assert!(!candidates[0].checked);
    }

    #[test]
    fn checklist_mode_toggles() {
        let mut state =
            TagSelectState::new(TagSelectMode::Checklist).with_selection(selected(&["1", "2"]));
        state.pick_for_tag("1", "2");
        assert_eq!(state.selection().ids(), ["1"]);
        state.pick_new("5");
        assert_eq!(state.selection().ids(), ["1", "5"]);
    }
}
