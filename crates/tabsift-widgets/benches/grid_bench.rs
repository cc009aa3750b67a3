//! Benchmarks for grid filtering, sorting, and paging.
//!
//! Run with: `cargo bench --package tabsift-widgets --bench grid_bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tabsift_layout::{Column, GroupColumn, LeafColumn};
use tabsift_widgets::grid::{DataGrid, GridOptions, SortDirection};

// ============================================================================
// Test Data Generation
// ============================================================================

#[derive(Clone)]
struct Workload {
    name: String,
    namespace: String,
    kind: &'static str,
}

const KINDS: &[&str] = &["Pod", "Deployment", "StatefulSet", "DaemonSet", "Job"];
const NAMESPACES: &[&str] = &["default", "kube-system", "prod", "staging"];

fn generate_rows(count: usize) -> Vec<Workload> {
    (0..count)
        .map(|i| Workload {
            name: format!("workload-{i:05}"),
            namespace: NAMESPACES[i % NAMESPACES.len()].to_owned(),
            kind: KINDS[i % KINDS.len()],
        })
        .collect()
}

fn columns() -> Vec<Column<Workload>> {
    vec![
        LeafColumn::new("select").size(32).pin().into(),
        GroupColumn::new("meta")
            .child(LeafColumn::new("name").text(|w: &Workload| w.name.clone()))
            .child(LeafColumn::new("namespace").text(|w: &Workload| w.namespace.clone()))
            .into(),
        LeafColumn::new("kind")
            .text(|w: &Workload| w.kind.to_owned())
            .into(),
    ]
}

fn grid(count: usize) -> DataGrid<Workload> {
    let mut grid = DataGrid::new(&columns(), GridOptions::default().page_size(50))
        .unwrap_or_else(|err| panic!("bench columns: {err}"));
    grid.set_rows(generate_rows(count));
    grid
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_view");
    for size in [1_000usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let plain = grid(size);
        group.bench_with_input(BenchmarkId::new("unfiltered", size), &plain, |b, grid| {
            b.iter(|| black_box(grid.view()))
        });

        let mut filtered = grid(size);
        filtered.set_filter("prod;kind:set");
        group.bench_with_input(BenchmarkId::new("filtered", size), &filtered, |b, grid| {
            b.iter(|| black_box(grid.view()))
        });

        let mut sorted = grid(size);
        sorted.set_sort("namespace", SortDirection::Descending);
        sorted.set_pin_row(|w: &Workload| w.kind == "Job");
        group.bench_with_input(BenchmarkId::new("sorted_pinned", size), &sorted, |b, grid| {
            b.iter(|| black_box(grid.view()))
        });
    }
    group.finish();
}

fn bench_set_filter(c: &mut Criterion) {
    let mut grid = grid(100);
    c.bench_function("set_filter", |b| {
        b.iter(|| grid.set_filter(black_box("web;name:workload;namespace:prod")))
    });
}

criterion_group!(benches, bench_view, bench_set_filter);
criterion_main!(benches);
