//! Benchmarks for the grid build pipeline.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use semaforo::{
    build_grid, ColumnDataType, ColumnDescriptor, ColumnSelection, MemoryDataset, MemoryRecord,
    RawValue,
};

fn create_dataset(rows: usize) -> MemoryDataset {
    let mut dataset = MemoryDataset::new(vec![
        ColumnDescriptor::new("name", "Name", ColumnDataType::Text),
        ColumnDescriptor::new("score", "Score", ColumnDataType::Decimal),
        ColumnDescriptor::new("margin", "Margin", ColumnDataType::Decimal),
    ]);
    for i in 0..rows {
        #[allow(clippy::cast_precision_loss)]
        let score = (i % 100) as f64;
        dataset.push_record(
            format!("r{i}"),
            MemoryRecord::new()
                .with_value("name", RawValue::Text(format!("item_{i}")))
                .with_formatted("name", format!("item_{i}"))
                .with_value("score", RawValue::Number(score))
                .with_formatted("score", format!("{score}"))
                .with_value("margin", RawValue::Number(score / 2.0))
                .with_formatted("margin", format!("{}", score / 2.0)),
        );
    }
    dataset
}

fn bench_grid_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");
    for rows in [100usize, 1_000, 10_000] {
        let dataset = create_dataset(rows);
        let selection = ColumnSelection::parse(Some("score,margin"));
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| build_grid(black_box(Some(&dataset)), black_box(&selection)));
        });
    }
    group.finish();
}

fn bench_selection_parse(c: &mut Criterion) {
    c.bench_function("selection_parse", |b| {
        b.iter(|| ColumnSelection::parse(black_box(Some(" Revenue ,, Margin,Revenue,score "))));
    });
}

criterion_group!(benches, bench_grid_build, bench_selection_parse);
criterion_main!(benches);
