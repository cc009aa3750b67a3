#![forbid(unsafe_code)]

//! Text matching for tabsift.
//!
//! This crate provides:
//! - [`score_match`] for ordinal match scoring of one text against one probe
//! - [`rank_items`] / [`rank_scored`] for filtering and ranking item lists
//! - [`parse_filter`] for the `term;column:term` filter query language

pub mod filter;
pub mod rank;
pub mod score;

pub use filter::{ColumnConstraint, FilterState, parse_filter};
pub use rank::{Item, MatchText, Ranked, rank_items, rank_scored};
pub use score::{MatchScore, escape_probe, score_match};
