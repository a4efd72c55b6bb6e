//! Snapshot tests for text-surface rendering.
//!
//! Captures rendered line output and verifies it against expectations.

use std::sync::Arc;

use arrow::array::{Float64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use semaforo::{
    build_grid, ArrowTable, ColumnDataType, ColumnDescriptor, ColumnSelection, MemoryDataset,
    MemoryRecord, RawValue, RenderTarget, TextSurface,
};

fn banded_dataset() -> MemoryDataset {
    let mut dataset = MemoryDataset::new(vec![
        ColumnDescriptor::new("Region", "Region", ColumnDataType::Text),
        ColumnDescriptor::new("Util", "Util", ColumnDataType::Decimal),
    ]);
    for (id, region, util) in [
        ("r1", "North", 12.0),
        ("r2", "South", 50.5),
        ("r3", "West", 91.2),
    ] {
        dataset.push_record(
            id,
            MemoryRecord::new()
                .with_value("Region", RawValue::Text(region.into()))
                .with_formatted("Region", region)
                .with_value("Util", RawValue::Number(util))
                .with_formatted("Util", format!("{util}")),
        );
    }
    dataset
}

#[test]
fn test_snapshot_banded_grid() {
    let dataset = banded_dataset();
    let output = build_grid(Some(&dataset), &ColumnSelection::parse(Some("Util")));
    let mut surface = TextSurface::new();
    surface.present(&output);

    let expected = vec![
        "Region  Util",
        "North   12%",
        "South   51%",
        "West    91%",
    ];
    assert_eq!(surface.lines(), expected);
}

#[test]
fn test_snapshot_unbanded_grid() {
    let dataset = banded_dataset();
    let output = build_grid(Some(&dataset), &ColumnSelection::empty());
    let mut surface = TextSurface::new();
    surface.present(&output);

    let expected = vec![
        "Region  Util",
        "North   12",
        "South   50.5",
        "West    91.2",
    ];
    assert_eq!(surface.lines(), expected);
}

#[test]
fn test_snapshot_placeholder_states() {
    let mut surface = TextSurface::new();

    surface.present(&build_grid(None, &ColumnSelection::empty()));
    assert_eq!(surface.lines(), ["dataset not available"]);

    let no_columns = MemoryDataset::without_columns();
    surface.present(&build_grid(Some(&no_columns), &ColumnSelection::empty()));
    assert_eq!(surface.lines(), ["no columns defined"]);

    let no_rows = MemoryDataset::new(vec![ColumnDescriptor::new(
        "a",
        "A",
        ColumnDataType::Text,
    )]);
    surface.present(&build_grid(Some(&no_rows), &ColumnSelection::empty()));
    assert_eq!(surface.lines(), ["no data available"]);
}

#[test]
fn test_snapshot_arrow_backed_grid() {
    let schema = Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("pct", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(vec!["alpha", "beta"])),
            Arc::new(Float64Array::from(vec![20.0, 75.0])),
        ],
    )
    .unwrap();
    let table = ArrowTable::try_new(vec![batch], schema).unwrap();

    let output = build_grid(Some(&table), &ColumnSelection::parse(Some("pct")));
    let mut surface = TextSurface::new();
    surface.present(&output);

    let expected = vec!["name   pct", "alpha  20%", "beta   75%"];
    assert_eq!(surface.lines(), expected);
}
