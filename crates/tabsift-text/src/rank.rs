#![forbid(unsafe_code)]

//! Ranking and filtering of named items.
//!
//! Every item is scored with [`score_match`]; items scoring
//! [`MatchScore::NoMatch`] are dropped and the rest are ordered by score,
//! strongest first. Ties keep their input order.
//!
//! # Example
//!
//! ```
//! use tabsift_text::rank::{Item, rank_items};
//!
//! let items = vec![
//!     Item::new("svc", "Service"),
//!     Item::new("ds", "DaemonSet"),
//!     Item::new("set", "set"),
//! ];
//! let ranked = rank_items(&items, "set");
//! let ids: Vec<&str> = ranked.iter().map(|i| i.id.as_str()).collect();
//! assert_eq!(ids, ["set", "ds"]);
//! ```

use crate::score::{MatchScore, score_match};

/// Anything that exposes the text a probe is matched against.
pub trait MatchText {
    /// The text to score.
    fn match_text(&self) -> &str;
}

impl MatchText for str {
    fn match_text(&self) -> &str {
        self
    }
}

impl MatchText for String {
    fn match_text(&self) -> &str {
        self
    }
}

impl<T: MatchText + ?Sized> MatchText for &T {
    fn match_text(&self) -> &str {
        (**self).match_text()
    }
}

/// A selectable entry: identity is `id`, `name` is displayed and matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique within one item list.
    pub id: String,
    /// Display text.
    pub name: String,
}

impl Item {
    /// Create an item.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl MatchText for Item {
    fn match_text(&self) -> &str {
        &self.name
    }
}

/// One surviving item with its score and original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<'a, T> {
    /// The matched item.
    pub item: &'a T,
    /// Its score against the probe.
    pub score: MatchScore,
    /// Index in the input slice.
    pub index: usize,
}

/// Score, filter, and order `items` against `probe`, keeping the scores.
///
/// The sort is stable, so items with equal scores retain input order.
#[must_use]
pub fn rank_scored<'a, T: MatchText>(items: &'a [T], probe: &str) -> Vec<Ranked<'a, T>> {
    let mut ranked: Vec<Ranked<'a, T>> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let score = score_match(item.match_text(), probe);
            score.is_match().then_some(Ranked { item, score, index })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::trace!(
        probe,
        total = items.len(),
        kept = ranked.len(),
        "ranked items"
    );
    ranked
}

/// Score, filter, and order `items` against `probe`.
///
/// An empty probe keeps every item in input order, except that items with
/// an empty text score [`MatchScore::Equal`] and float to the front.
#[must_use]
pub fn rank_items<'a, T: MatchText>(items: &'a [T], probe: &str) -> Vec<&'a T> {
    rank_scored(items, probe)
        .into_iter()
        .map(|ranked| ranked.item)
        .collect()
}
