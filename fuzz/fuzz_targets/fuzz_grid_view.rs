#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabsift_layout::{Column, LeafColumn};
use tabsift_widgets::grid::{DataGrid, GridOptions, SortDirection};

#[derive(Arbitrary, Debug)]
struct Input {
    rows: Vec<(String, String)>,
    filter: String,
    page_size: u8,
    page: u8,
    sort_desc: Option<bool>,
}

fuzz_target!(|input: Input| {
    let columns: Vec<Column<(String, String)>> = vec![
        LeafColumn::new("a").text(|r: &(String, String)| r.0.clone()).into(),
        LeafColumn::new("b").text(|r: &(String, String)| r.1.clone()).pin().into(),
    ];
    let Ok(mut grid) = DataGrid::new(
        &columns,
        GridOptions::default().page_size(usize::from(input.page_size)),
    ) else {
        return;
    };
    grid.set_rows(input.rows);
    grid.set_filter(&input.filter);
    if let Some(desc) = input.sort_desc {
        let direction = if desc { SortDirection::Descending } else { SortDirection::Ascending };
        grid.set_sort("a", direction);
    }
    grid.set_pin_row(|r: &(String, String)| r.0.len() % 2 == 0);
    grid.set_page(usize::from(input.page));

    let view = grid.view();
    assert!(view.page.index < view.page.count);
    assert!(view.rows.len() <= view.page.size);
    assert!(view.rows.iter().all(|r| r.index < grid.rows().len()));
});
