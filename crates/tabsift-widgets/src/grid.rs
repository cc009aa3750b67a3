#![forbid(unsafe_code)]

//! Data grid model.
//!
//! [`DataGrid`] owns rows of type `R`, a flattened column tree, and the
//! user-facing state a table widget needs: the raw filter string, sort,
//! pinned-row predicate, column widths and current page. [`DataGrid::view`]
//! turns that state into the rows and columns to render.
//!
//! # Pipeline
//!
//! ```text
//! rows ─► filter ─► sort ─► pin ─► page
//! ```
//!
//! Pinning runs after sorting, so pinned rows stay on top of every page
//! order. Pagination slices the pinned order.
//!
//! # Invariants
//!
//! 1. Filtering never reorders rows.
//! 2. Sorting is stable; rows with equal keys keep their filtered order.
//! 3. Pinned rows precede unpinned rows, each half in sorted order.
//! 4. `page.index < page.count` and `page.count >= 1`.
//!
//! # Example
//!
//! ```
//! use tabsift_layout::{Column, LeafColumn};
//! use tabsift_widgets::grid::{DataGrid, GridOptions};
//!
//! struct Person { name: &'static str, email: &'static str }
//!
//! let columns: Vec<Column<Person>> = vec![
//!     LeafColumn::new("name").text(|p: &Person| p.name.to_owned()).into(),
//!     LeafColumn::new("email").text(|p: &Person| p.email.to_owned()).into(),
//! ];
//! let mut grid = DataGrid::new(&columns, GridOptions::default()).unwrap();
//! grid.set_rows(vec![
//!     Person { name: "Jhon", email: "jhon@gmail.com" },
//!     Person { name: "Foo", email: "foo@yahoo.com" },
//! ]);
//! grid.set_filter("email:gmail");
//!
//! let view = grid.view();
//! assert_eq!(view.filtered, 1);
//! assert_eq!(grid.row(view.rows[0].index).map(|p| p.name), Some("Jhon"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use tabsift_layout::{
    Column, ColumnSizing, ColumnTree, ColumnTreeError, LeafMeta, pin_rows, pinned_first,
    sticky_offsets,
};
use tabsift_text::{FilterState, MatchScore, parse_filter};

use crate::matcher::RowFilter;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Predicate selecting rows that float to the top.
pub type RowPredicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// Grid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    /// Rows per page. Zero is treated as one.
    pub page_size: usize,
    /// Return to the first page when rows, filter or sort change.
    pub auto_reset_page_index: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            auto_reset_page_index: true,
        }
    }
}

impl GridOptions {
    /// Set the page size.
    #[must_use]
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Set whether state changes reset the page index.
    #[must_use]
    pub fn auto_reset_page_index(mut self, reset: bool) -> Self {
        self.auto_reset_page_index = reset;
        self
    }
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    /// A → Z.
    Ascending,
    /// Z → A.
    Descending,
}

/// Active sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Leaf column id.
    pub column_id: String,
    /// Order.
    pub direction: SortDirection,
}

/// Current page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based page index.
    pub index: usize,
    /// Rows per page.
    pub size: usize,
    /// Number of pages, at least one.
    pub count: usize,
}

impl PageInfo {
    /// Whether a previous page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Whether a next page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }
}

/// One rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView {
    /// Index into [`DataGrid::rows`].
    pub index: usize,
    /// Whether the pin predicate selected this row.
    pub pinned: bool,
    /// Best global-filter score; `None` without a global term.
    pub rank: Option<MatchScore>,
}

/// Everything needed to render one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView<'g> {
    /// Rows on the current page in display order.
    pub rows: Vec<RowView>,
    /// Rows surviving the filter, across all pages.
    pub filtered: usize,
    /// Page position.
    pub page: PageInfo,
    /// Leaf columns in render order, pinned first.
    pub columns: Vec<&'g LeafMeta>,
    /// Sticky left offset per entry of `columns`.
    pub sticky_offsets: Vec<Option<u32>>,
}

/// Filterable, sortable, paginated table state over rows of type `R`.
pub struct DataGrid<R> {
    tree: ColumnTree<R>,
    sizing: ColumnSizing,
    options: GridOptions,
    rows: Vec<R>,
    filter: FilterState,
    row_filter: RowFilter,
    sort: Option<SortState>,
    pin_row: Option<RowPredicate<R>>,
    page_index: usize,
}

impl<R> DataGrid<R> {
    /// Build an empty grid over `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnTreeError::DuplicateId`] when two columns share an id.
    pub fn new(columns: &[Column<R>], options: GridOptions) -> Result<Self, ColumnTreeError> {
        let tree = ColumnTree::flatten(columns)?;
        let sizing = ColumnSizing::new(tree.leaves());
        Ok(Self {
            tree,
            sizing,
            options,
            rows: Vec::new(),
            filter: FilterState::default(),
            row_filter: RowFilter::default(),
            sort: None,
            pin_row: None,
            page_index: 0,
        })
    }

    /// Flattened columns.
    #[must_use]
    pub fn columns(&self) -> &ColumnTree<R> {
        &self.tree
    }

    /// Current column widths.
    #[must_use]
    pub fn sizing(&self) -> &ColumnSizing {
        &self.sizing
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// All rows, unfiltered.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Row at `index` in [`rows`](Self::rows).
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&R> {
        self.rows.get(index)
    }

    /// Parsed filter.
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Filter with column names resolved.
    #[must_use]
    pub fn row_filter(&self) -> &RowFilter {
        &self.row_filter
    }

    /// Active sort.
    #[must_use]
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Current page index, before clamping to the filtered row count.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Replace every row.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.auto_reset();
    }

    /// Parse and apply a raw filter string.
    pub fn set_filter(&mut self, raw: &str) {
        self.filter = parse_filter(raw);
        self.row_filter = RowFilter::resolve(&self.filter, &self.tree);
        self.auto_reset();
    }

    /// Float rows matching `predicate` to the top.
    pub fn set_pin_row(&mut self, predicate: impl Fn(&R) -> bool + Send + Sync + 'static) {
        self.pin_row = Some(Arc::new(predicate));
    }

    /// Stop pinning rows.
    pub fn clear_pin_row(&mut self) {
        self.pin_row = None;
    }

    /// Sort by `column_id`.
    ///
    /// Returns `false`, leaving the sort unchanged, when the column is
    /// unknown or has no text extractor.
    pub fn set_sort(&mut self, column_id: &str, direction: SortDirection) -> bool {
        if !self.is_sortable(column_id) {
            return false;
        }
        self.sort = Some(SortState {
            column_id: column_id.to_owned(),
            direction,
        });
        self.auto_reset();
        true
    }

    /// Drop the sort.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.auto_reset();
        }
    }

    /// Cycle the sort on `column_id`: ascending, descending, unsorted.
    ///
    /// Returns the new direction for that column.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<SortDirection> {
        let current = self
            .sort
            .as_ref()
            .filter(|sort| sort.column_id == column_id)
            .map(|sort| sort.direction);
        match current {
            None => self
                .set_sort(column_id, SortDirection::Ascending)
                .then_some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => {
                self.set_sort(column_id, SortDirection::Descending);
                Some(SortDirection::Descending)
            }
            Some(SortDirection::Descending) => {
                self.clear_sort();
                None
            }
        }
    }

    /// Whether `column_id` can be sorted.
    #[must_use]
    pub fn is_sortable(&self, column_id: &str) -> bool {
        self.tree.leaf(column_id).is_some_and(|leaf| leaf.filterable)
    }

    /// Change the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, size: usize) {
        let size = size.max(1);
        let top_row = self.page_index.saturating_mul(self.page_size());
        self.options.page_size = size;
        self.page_index = top_row / size;
    }

    /// Jump to `index`, clamped to the last page.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index.min(self.page_count() - 1);
    }

    /// Advance one page. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        let current = self.page_index.min(self.page_count() - 1);
        if current + 1 < self.page_count() {
            self.page_index = current + 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        let current = self.page_index.min(self.page_count() - 1);
        if current > 0 {
            self.page_index = current - 1;
            true
        } else {
            false
        }
    }

    /// Number of pages for the current filter, at least one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        let filtered = self
            .rows
            .iter()
            .filter(|row| self.row_filter.evaluate(&self.tree, row).passed)
            .count();
        page_count(filtered, self.page_size())
    }

    /// Resize leaf `column_id`. See [`ColumnSizing::resize`].
    pub fn resize_column(&mut self, column_id: &str, width: u32) -> bool {
        self.sizing.resize(column_id, width)
    }

    /// Restore every column to its declared width.
    pub fn reset_column_sizes(&mut self) {
        self.sizing.reset_all();
    }

    /// Compute the current page.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("grid_view", rows = self.rows.len()).entered();

        let mut ordered: Vec<RowView> = self
            .rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| {
                let matched = self.row_filter.evaluate(&self.tree, row);
                matched.passed.then(|| RowView {
                    index,
                    pinned: self.pin_row.as_ref().is_some_and(|pin| pin(row)),
                    rank: matched.rank,
                })
            })
            .collect();
        let filtered = ordered.len();

        if let Some(sort) = &self.sort {
            self.sort_rows(&mut ordered, sort);
        }
        let ordered = pin_rows(ordered, |row| row.pinned);

        let size = self.page_size();
        let count = page_count(filtered, size);
        let index = self.page_index.min(count - 1);
        let rows: Vec<RowView> = ordered.into_iter().skip(index * size).take(size).collect();

        let columns = pinned_first(self.tree.leaves());
        let sticky_offsets = sticky_offsets(&columns, &self.sizing);

        #[cfg(feature = "tracing")]
        tracing::debug!(filtered, page = index, shown = rows.len(), "computed grid view");

        GridView {
            rows,
            filtered,
            page: PageInfo { index, size, count },
            columns,
            sticky_offsets,
        }
    }

    fn page_size(&self) -> usize {
        self.options.page_size.max(1)
    }

    fn auto_reset(&mut self) {
        if self.options.auto_reset_page_index {
            self.page_index = 0;
        }
    }

    fn sort_rows(&self, ordered: &mut [RowView], sort: &SortState) {
        let Some(position) = self.tree.position(&sort.column_id) else {
            return;
        };
        let mut keyed: Vec<(Option<String>, RowView)> = ordered
            .iter()
            .map(|view| {
                let key = self
                    .tree
                    .text_at(position, &self.rows[view.index])
                    .map(|text| text.to_lowercase());
                (key, *view)
            })
            .collect();
        keyed.sort_by(|(a, _), (b, _)| {
            let ord: Ordering = a.cmp(b);
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        for (slot, (_, view)) in ordered.iter_mut().zip(keyed) {
            *slot = view;
        }
    }
}

impl<R> fmt::Debug for DataGrid<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGrid")
            .field("tree", &self.tree)
            .field("options", &self.options)
            .field("rows", &self.rows.len())
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .field("pin_row", &self.pin_row.is_some())
            .field("page_index", &self.page_index)
            .finish_non_exhaustive()
    }
}

fn page_count(rows: usize, size: usize) -> usize {
    rows.div_ceil(size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsift_layout::{GroupColumn, LeafColumn};

    #[derive(Debug, Clone)]
    struct Pod {
        name: String,
        namespace: String,
    }

    fn pod(name: &str, namespace: &str) -> Pod {
        Pod {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
        }
    }

    fn columns() -> Vec<Column<Pod>> {
        vec![
            LeafColumn::new("select").size(32).pin().into(),
            GroupColumn::new("meta")
                .child(
                    LeafColumn::new("name")
                        .name("Name")
                        .size(200)
                        .text(|p: &Pod| p.name.clone()),
                )
                .child(
                    LeafColumn::new("namespace")
                        .name("Namespace")
                        .size(120)
                        .text(|p: &Pod| p.namespace.clone()),
                )
                .into(),
        ]
    }

    fn grid() -> DataGrid<Pod> {
        let mut grid = DataGrid::new(&columns(), GridOptions::default()).unwrap();
        grid.set_rows(vec![
            pod("web", "prod"),
            pod("api", "prod"),
            pod("Cache", "dev"),
            pod("batch", "dev"),
        ]);
        grid
    }

    fn names(grid: &DataGrid<Pod>) -> Vec<String> {
        grid.view()
            .rows
            .iter()
            .map(|r| grid.rows()[r.index].name.clone())
            .collect()
    }

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn duplicate_ids_fail() {
        let columns: Vec<Column<Pod>> =
            vec![LeafColumn::new("a").into(), LeafColumn::new("a").into()];
        let err = DataGrid::new(&columns, GridOptions::default()).unwrap_err();
        assert_eq!(err, ColumnTreeError::DuplicateId("a".into()));
    }

    #[test]
    fn empty_grid_has_one_page() {
        let grid = DataGrid::new(&columns(), GridOptions::default()).unwrap();
        let view = grid.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.page, PageInfo { index: 0, size: 10, count: 1 });
    }

    // ── Filtering ───────────────────────────────────────────────────

    #[test]
    fn no_filter_keeps_row_order() {
        assert_eq!(names(&grid()), ["web", "api", "Cache", "batch"]);
    }

    #[test]
    fn global_filter_matches_any_column() {
        let mut grid = grid();
        grid.set_filter("dev");
        assert_eq!(names(&grid), ["Cache", "batch"]);
    }

    #[test]
    fn column_filter_by_display_name() {
        let mut grid = grid();
        grid.set_filter("namespace:prod");
        assert_eq!(names(&grid), ["web", "api"]);
    }

    #[test]
    fn unknown_column_filter_ignored() {
        let mut grid = grid();
        grid.set_filter("owner:me");
        assert_eq!(grid.view().filtered, 4);
    }

    #[test]
    fn view_reports_rank() {
        let mut grid = grid();
        grid.set_filter("cache");
        let view = grid.view();
        assert_eq!(view.rows[0].rank, Some(MatchScore::EqualCaseInsensitive));
    }

    // ── Sorting ─────────────────────────────────────────────────────

    #[test]
    fn sort_ascending_is_case_insensitive() {
        let mut grid = grid();
        assert!(grid.set_sort("name", SortDirection::Ascending));
        assert_eq!(names(&grid), ["api", "batch", "Cache", "web"]);
    }

    #[test]
    fn sort_is_stable() {
        let mut grid = grid();
        grid.set_sort("namespace", SortDirection::Ascending);
        assert_eq!(names(&grid), ["Cache", "batch", "web", "api"]);
        grid.set_sort("namespace", SortDirection::Descending);
        assert_eq!(names(&grid), ["web", "api", "Cache", "batch"]);
    }

    #[test]
    fn sort_refused_without_extractor() {
        let mut grid = grid();
        assert!(!grid.set_sort("select", SortDirection::Ascending));
        assert!(!grid.set_sort("missing", SortDirection::Ascending));
        assert!(grid.sort().is_none());
    }

    #[test]
    fn toggle_cycles() {
        let mut grid = grid();
        assert_eq!(grid.toggle_sort("name"), Some(SortDirection::Ascending));
        assert_eq!(grid.toggle_sort("name"), Some(SortDirection::Descending));
        assert_eq!(grid.toggle_sort("name"), None);
        assert!(grid.sort().is_none());
        assert_eq!(grid.toggle_sort("select"), None);
    }

    // ── Pinning ─────────────────────────────────────────────────────

    #[test]
    fn pinned_rows_first_after_sort() {
        let mut grid = grid();
        grid.set_sort("name", SortDirection::Ascending);
        grid.set_pin_row(|p: &Pod| p.namespace == "dev");
        assert_eq!(names(&grid), ["batch", "Cache", "api", "web"]);
        assert!(grid.view().rows[0].pinned);
        assert!(!grid.view().rows[2].pinned);
    }

    #[test]
    fn pinned_rows_respect_filter() {
        let mut grid = grid();
        grid.set_pin_row(|p: &Pod| p.name == "batch");
        grid.set_filter("prod");
        assert_eq!(names(&grid), ["web", "api"]);
        grid.clear_pin_row();
        grid.set_filter("");
        assert_eq!(names(&grid), ["web", "api", "Cache", "batch"]);
    }

    // ── Pagination ──────────────────────────────────────────────────

    fn many(n: usize) -> DataGrid<Pod> {
        let mut grid =
            DataGrid::new(&columns(), GridOptions::default().page_size(3)).unwrap();
        grid.set_rows((0..n).map(|i| pod(&format!("p{i:02}"), "ns")).collect());
        grid
    }

    #[test]
    fn pages_slice_rows() {
        let mut grid = many(7);
        assert_eq!(grid.page_count(), 3);
        assert!(grid.next_page());
        assert_eq!(names(&grid), ["p03", "p04", "p05"]);
        assert!(grid.next_page());
        assert_eq!(names(&grid), ["p06"]);
        assert!(!grid.next_page());
        assert!(grid.view().page.has_previous());
        assert!(!grid.view().page.has_next());
    }

    #[test]
    fn previous_stops_at_first() {
        let mut grid = many(4);
        assert!(!grid.previous_page());
        grid.set_page(1);
        assert!(grid.previous_page());
        assert_eq!(grid.page_index(), 0);
    }

    #[test]
    fn set_page_clamps() {
        let mut grid = many(7);
        grid.set_page(99);
        assert_eq!(grid.page_index(), 2);
    }

    #[test]
    fn filter_resets_page() {
        let mut grid = many(7);
        grid.set_page(2);
        grid.set_filter("p0");
        assert_eq!(grid.page_index(), 0);
    }

    #[test]
    fn filter_keeps_page_without_auto_reset() {
        let mut grid = DataGrid::new(
            &columns(),
            GridOptions::default().page_size(3).auto_reset_page_index(false),
        )
        .unwrap();
        grid.set_rows((0..7).map(|i| pod(&format!("p{i:02}"), "ns")).collect());
        grid.set_page(2);
        grid.set_filter("p00");
        assert_eq!(grid.page_index(), 2);
        // The view clamps to the single remaining page.
        let view = grid.view();
        assert_eq!(view.page.index, 0);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn page_size_change_keeps_top_row() {
        let mut grid = many(10);
        grid.set_page(2);
        grid.set_page_size(2);
        assert_eq!(grid.page_index(), 3);
        assert_eq!(names(&grid), ["p06", "p07"]);
    }

    #[test]
    fn zero_page_size_acts_as_one() {
        let mut grid = many(3);
        grid.set_page_size(0);
        assert_eq!(grid.view().page.size, 1);
        assert_eq!(grid.page_count(), 3);
    }

    // ── Columns ─────────────────────────────────────────────────────

    #[test]
    fn view_columns_pinned_first_with_offsets() {
        let grid = grid();
        let view = grid.view();
        let ids: Vec<&str> = view.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["select", "name", "namespace"]);
        assert_eq!(view.sticky_offsets, [Some(0), None, None]);
    }

    #[test]
    fn pinned_group_offsets_follow_resize() {
        let columns: Vec<Column<Pod>> = vec![
            LeafColumn::new("name").text(|p: &Pod| p.name.clone()).into(),
            GroupColumn::new("fixed")
                .pin()
                .child(LeafColumn::new("a").size(40))
                .child(LeafColumn::new("b").size(60))
                .into(),
        ];
        let mut grid = DataGrid::new(&columns, GridOptions::default()).unwrap();
        assert_eq!(grid.view().sticky_offsets, [Some(0), Some(40), None]);
        assert!(grid.resize_column("a", 90));
        assert_eq!(grid.view().sticky_offsets, [Some(0), Some(90), None]);
        grid.reset_column_sizes();
        assert_eq!(grid.sizing().size_of("a"), Some(40));
    }
}
