//! semaforo - Traffic-light value banding for tabular dataset views
//!
//! Renders a host-supplied record set as a grid in which designated
//! numeric columns are classified into value bands (Low/Medium/High)
//! instead of showing their raw formatted text. The host owns the data
//! and the rendering surface; this crate owns presentation and
//! classification logic only.
//!
//! # Pipeline
//!
//! ```text
//! columns_to_color ──parse──▶ ColumnSelection
//! dataset ──build_grid──▶ GridOutput (header + banded cells, or placeholder)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use semaforo::{build_grid, ColumnSelection, MemoryDataset, MemoryRecord};
//! use semaforo::{ColumnDataType, ColumnDescriptor, RawValue};
//!
//! let columns = vec![
//!     ColumnDescriptor::new("Name", "Name", ColumnDataType::Text),
//!     ColumnDescriptor::new("ScorePct", "Score", ColumnDataType::Decimal),
//! ];
//! let mut dataset = MemoryDataset::new(columns);
//! dataset.push_record(
//!     "rec1",
//!     MemoryRecord::new()
//!         .with_value("Name", RawValue::Text("Acme".into()))
//!         .with_formatted("Name", "Acme")
//!         .with_value("ScorePct", RawValue::Number(42.7))
//!         .with_formatted("ScorePct", "42.7%"),
//! );
//!
//! let selection = ColumnSelection::parse(Some("ScorePct"));
//! let output = build_grid(Some(&dataset), &selection);
//! let grid = output.as_grid().unwrap();
//! assert_eq!(grid.rows[0].cells[1].text, "43%");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::redundant_clone
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod adapter;
pub mod band;
pub mod cell;
pub mod control;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod selection;
pub mod text;

pub use adapter::ArrowTable;
pub use band::ValueBand;
pub use cell::{render_cell, RenderedCell};
pub use control::{GridControl, Host, OutputNotifier, Outputs, RenderTarget};
pub use dataset::{
    ColumnDataType, ColumnDescriptor, Dataset, MemoryDataset, MemoryRecord, RawValue, Record,
};
pub use error::{Error, Result};
pub use grid::{build_grid, EmptyReason, Grid, GridOutput, GridRow, HeaderCell};
pub use selection::ColumnSelection;
pub use text::TextSurface;
