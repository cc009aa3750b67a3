#![forbid(unsafe_code)]

//! Ordered multi-selection over [`Item`]s.
//!
//! A [`Selection`] is a list of item ids in insertion order. It does not
//! own items; [`resolve`] and [`unselected`] join it against whatever item
//! list the caller currently holds.
//!
//! # Failure Modes
//!
//! | Situation | Behavior |
//! |-----------|----------|
//! | Selected id missing from items | Skipped by [`resolve`] |
//! | Two items share an id | Last one wins in [`resolve`] |
//! | Id pushed twice | Kept twice; callers avoid duplicates |

use ahash::{AHashMap, AHashSet};
use tabsift_text::Item;

/// Selected item ids in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids in order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Append `id`.
    pub fn push(&mut self, id: impl Into<String>) {
        self.ids.push(id.into());
    }

    /// Drop every occurrence of `id`.
    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|selected| selected != id);
    }

    /// Substitute `with` for every occurrence of `id`, keeping positions.
    pub fn replace(&mut self, id: &str, with: &str) {
        for selected in &mut self.ids {
            if selected == id {
                with.clone_into(selected);
            }
        }
    }

    /// Remove `id` if selected, otherwise append it. Returns whether `id`
    /// is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.push(id);
            true
        }
    }

    /// Replace the whole selection with `[id]`.
    pub fn set_single(&mut self, id: impl Into<String>) {
        self.ids.clear();
        self.ids.push(id.into());
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl From<Vec<String>> for Selection {
    fn from(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Selected items in selection order.
#[must_use]
pub fn resolve<'a>(items: &'a [Item], selection: &Selection) -> Vec<&'a Item> {
    let by_id: AHashMap<&str, &Item> = items.iter().map(|item| (item.id.as_str(), item)).collect();
    selection
        .ids()
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .collect()
}

/// Items not in `selection`, in item order.
#[must_use]
pub fn unselected<'a>(items: &'a [Item], selection: &Selection) -> Vec<&'a Item> {
    let selected: AHashSet<&str> = selection.ids().iter().map(String::as_str).collect();
    items
        .iter()
        .filter(|item| !selected.contains(item.id.as_str()))
        .collect()
}

/// Compact description of a selection for a closed selector button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary<'a> {
    /// Items shown inline, at most `max_displayed`.
    pub visible: Vec<&'a Item>,
    /// Items left out of `visible`.
    pub hidden: usize,
    /// Every selected name joined with `",\n"`; `None` when empty.
    pub tooltip: Option<String>,
}

impl<'a> SelectionSummary<'a> {
    /// Summarize already-resolved `selected` items.
    #[must_use]
    pub fn new(selected: &[&'a Item], max_displayed: usize) -> Self {
        let tooltip = (!selected.is_empty()).then(|| join_names(selected, ",\n"));
        Self {
            visible: selected.iter().take(max_displayed).copied().collect(),
            hidden: selected.len().saturating_sub(max_displayed),
            tooltip,
        }
    }

    /// Inline label: visible names joined with `", "`, or `placeholder`
    /// when nothing is selected.
    #[must_use]
    pub fn label(&self, placeholder: &str) -> String {
        if self.visible.is_empty() && self.hidden == 0 {
            placeholder.to_owned()
        } else {
            join_names(&self.visible, ", ")
        }
    }

    /// `"+N more"` when items are hidden.
    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

pub(crate) fn join_names(items: &[&Item], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
