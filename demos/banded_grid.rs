//! Renders a small dataset with one banded column to stdout.
//!
//! Run with: `cargo run --example banded_grid`

use semaforo::{
    ColumnDataType, ColumnDescriptor, Dataset, GridControl, Host, MemoryDataset, MemoryRecord,
    RawValue, TextSurface,
};

struct DemoHost {
    dataset: MemoryDataset,
}

impl Host for DemoHost {
    fn dataset(&self) -> Option<&dyn Dataset> {
        Some(&self.dataset)
    }
    fn columns_to_color(&self) -> Option<&str> {
        Some("Utilization")
    }
}

fn main() {
    let mut dataset = MemoryDataset::new(vec![
        ColumnDescriptor::new("Region", "Region", ColumnDataType::Text),
        ColumnDescriptor::new("Utilization", "Utilization", ColumnDataType::Decimal),
    ]);
    for (id, region, pct) in [
        ("r1", "North", 12.3),
        ("r2", "South", 48.9),
        ("r3", "East", 75.0),
        ("r4", "West", 93.4),
    ] {
        dataset.push_record(
            id,
            MemoryRecord::new()
                .with_value("Region", RawValue::Text(region.into()))
                .with_formatted("Region", region)
                .with_value("Utilization", RawValue::Number(pct))
                .with_formatted("Utilization", format!("{pct}%")),
        );
    }

    let host = DemoHost { dataset };
    let mut surface = TextSurface::new();
    let _control = GridControl::initialize(&host, None, &mut surface);

    for line in surface.lines() {
        println!("{line}");
    }
}
