#![forbid(unsafe_code)]

//! tabsift public facade.
//!
//! Re-exports the text, layout, and widget crates under one name, plus a
//! [`prelude`] with the types most callers touch.
//!
//! ```
//! use tabsift::prelude::*;
//!
//! let items = vec![Item::new("1", "DaemonSet"), Item::new("2", "set")];
//! let ranked = rank_items(&items, "set");
//! assert_eq!(ranked[0].id, "2");
//!
//! let state = parse_filter("web;namespace:prod");
//! assert_eq!(state.global_term(), Some("web"));
//! ```

pub use tabsift_layout as layout;
pub use tabsift_text as text;
pub use tabsift_widgets as widgets;

pub mod prelude {
    //! Common imports.

    pub use tabsift_layout::{
        Column, ColumnSizing, ColumnTree, ColumnTreeError, GroupColumn, LeafColumn, LeafMeta,
        pin_rows,
    };
    pub use tabsift_text::{
        ColumnConstraint, FilterState, Item, MatchScore, MatchText, parse_filter, rank_items,
        rank_scored, score_match,
    };
    pub use tabsift_widgets::{
        ChecklistState, DataGrid, GridOptions, GridView, Selection, SelectOptions, SortDirection,
        TagSelectMode, TagSelectState,
    };
}
