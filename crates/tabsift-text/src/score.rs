#![forbid(unsafe_code)]

//! Ordinal match scoring.
//!
//! [`score_match`] compares one text field against one probe and classifies
//! the result into a fixed, totally ordered set of [`MatchScore`] tiers:
//!
//! | Tier | Score | Example (probe `"foo"`) |
//! |------|-------|--------------------------|
//! | [`Equal`](MatchScore::Equal) | 4 | `"foo"` |
//! | [`EqualCaseInsensitive`](MatchScore::EqualCaseInsensitive) | 3 | `"FOO"` |
//! | [`PartialMatch`](MatchScore::PartialMatch) | 2 | `"food"` |
//! | [`PartialMatchCaseInsensitive`](MatchScore::PartialMatchCaseInsensitive) | 1 | `"Foody"` |
//! | [`NoMatch`](MatchScore::NoMatch) | 0 | `"bar"` |
//!
//! The score is an ordering key, not a similarity metric. Two texts in the
//! same tier are indistinguishable to the ranker.
//!
//! # Invariants
//!
//! 1. `score_match(t, p) == Equal` iff `t == p`.
//! 2. `score_match(t, p) >= EqualCaseInsensitive` iff the lowercased forms
//!    are equal (and `t` is not shorter than `p`).
//! 3. `score_match(t, p) == NoMatch` whenever `t` has fewer characters
//!    than `p`.
//! 4. Every input yields a value; the function never panics.

use std::borrow::Cow;
use std::fmt;

/// How well a text matched a probe.
///
/// Variants are declared weakest to strongest so the derived [`Ord`]
/// agrees with the numeric tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MatchScore {
    /// The probe does not occur in the text.
    #[default]
    NoMatch = 0,
    /// The lowercased probe occurs in the lowercased text.
    PartialMatchCaseInsensitive = 1,
    /// The probe occurs verbatim in the text.
    PartialMatch = 2,
    /// Text and probe are equal after lowercasing.
    EqualCaseInsensitive = 3,
    /// Text and probe are identical.
    Equal = 4,
}

impl MatchScore {
    /// Numeric tier, `0` for [`NoMatch`](Self::NoMatch) up to `4`.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this score passes a filter (anything above `NoMatch`).
    #[must_use]
    pub const fn is_match(self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::EqualCaseInsensitive => write!(f, "equal (case-insensitive)"),
            Self::PartialMatch => write!(f, "partial"),
            Self::PartialMatchCaseInsensitive => write!(f, "partial (case-insensitive)"),
            Self::NoMatch => write!(f, "no match"),
        }
    }
}

/// Escape a probe before substring matching.
///
/// Only the first literal `//` is doubled to `////`. No other character is
/// touched, so probes containing `//` behave exactly as they always have.
#[must_use]
pub fn escape_probe(probe: &str) -> Cow<'_, str> {
    if probe.contains("//") {
        Cow::Owned(probe.replacen("//", "////", 1))
    } else {
        Cow::Borrowed(probe)
    }
}

/// Score `text` against `probe`.
///
/// Lengths are compared in Unicode scalar values. Case folding uses
/// [`str::to_lowercase`]; no locale-aware comparison is performed.
///
/// ```
/// use tabsift_text::score::{MatchScore, score_match};
///
/// assert_eq!(score_match("Apple", "Apple"), MatchScore::Equal);
/// assert_eq!(score_match("Apple", "apple"), MatchScore::EqualCaseInsensitive);
/// assert_eq!(score_match("Pineapple", "apple"), MatchScore::PartialMatch);
/// assert_eq!(score_match("APPLES", "apple"), MatchScore::PartialMatchCaseInsensitive);
/// assert_eq!(score_match("app", "apple"), MatchScore::NoMatch);
/// ```
#[must_use]
pub fn score_match(text: &str, probe: &str) -> MatchScore {
    if text.chars().count() < probe.chars().count() {
        return MatchScore::NoMatch;
    }
    if text == probe {
        return MatchScore::Equal;
    }

    let text_lower = text.to_lowercase();
    if text_lower == probe.to_lowercase() {
        return MatchScore::EqualCaseInsensitive;
    }

    let escaped = escape_probe(probe);
    if text.contains(escaped.as_ref()) {
        return MatchScore::PartialMatch;
    }
    if text_lower.contains(&escaped.to_lowercase()) {
        return MatchScore::PartialMatchCaseInsensitive;
    }
    MatchScore::NoMatch
}
