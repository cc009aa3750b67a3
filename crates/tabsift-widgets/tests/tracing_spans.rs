#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use tabsift_layout::{Column, LeafColumn};
use tabsift_widgets::grid::{DataGrid, GridOptions};
use tracing::span::{Attributes, Id};
use tracing::{Subscriber, subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

impl<S: Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name());
    }
}

#[test]
fn grid_view_opens_span() {
    let names = SpanNames::default();
    let subscriber = Registry::default().with(names.clone());

    subscriber::with_default(subscriber, || {
        let columns: Vec<Column<String>> =
            vec![LeafColumn::new("value").text(|s: &String| s.clone()).into()];
        let mut grid = DataGrid::new(&columns, GridOptions::default()).unwrap();
        grid.set_rows(vec!["a".to_owned(), "b".to_owned()]);
        grid.set_filter("a");
        assert_eq!(grid.view().filtered, 1);
    });

    let recorded = names.0.lock().unwrap();
    assert!(recorded.contains(&"column_tree_flatten"));
    assert!(recorded.contains(&"grid_view"));
}
