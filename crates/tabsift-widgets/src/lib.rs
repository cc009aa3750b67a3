#![forbid(unsafe_code)]

//! Selector and data grid state for tabsift.
//!
//! Nothing here renders. Each type holds the state a widget needs and
//! exposes the data to draw: ranked candidates, selection summaries, and
//! grid pages with pinned rows and sticky column offsets.
//!
//! - [`selection`]: ordered multi-selection over items
//! - [`select`]: checklist and tag selector state
//! - [`matcher`]: per-row filter evaluation
//! - [`grid`]: filterable, sortable, paginated table model

pub mod grid;
pub mod matcher;
pub mod select;
pub mod selection;

pub use grid::{
    DEFAULT_PAGE_SIZE, DataGrid, GridOptions, GridView, PageInfo, RowPredicate, RowView,
    SortDirection, SortState,
};
pub use matcher::{CellMatch, ColumnFilter, RowFilter, RowMatch, match_cell};
pub use select::{
    Candidate, ChecklistState, DEFAULT_MAX_DISPLAYED, DEFAULT_PLACEHOLDER, SelectOptions,
    TagSelectMode, TagSelectState,
};
pub use selection::{Selection, SelectionSummary, resolve, unselected};
