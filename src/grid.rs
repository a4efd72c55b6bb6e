//! Grid assembly.
//!
//! Builds the full tabular structure (header plus body) from a dataset
//! snapshot and a column selection, or resolves to one of three
//! placeholder states when the dataset cannot be shown as a grid. The
//! placeholder states are terminal render outcomes, not errors; the
//! next update notification re-evaluates from scratch.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::cell::{render_cell, RenderedCell};
use crate::dataset::{ColumnDataType, Dataset};
use crate::selection::ColumnSelection;

/// Reason a grid could not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyReason {
    /// The dataset handle is absent.
    DatasetUnavailable,
    /// The dataset has no column descriptor list.
    NoColumns,
    /// The dataset has zero record identifiers.
    NoRows,
}

impl EmptyReason {
    /// The fixed user-visible reason string.
    pub fn message(self) -> &'static str {
        match self {
            Self::DatasetUnavailable => "dataset not available",
            Self::NoColumns => "no columns defined",
            Self::NoRows => "no data available",
        }
    }
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One header cell: display label plus inspection metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Label shown to the user.
    pub label: String,
    /// Column identifier.
    pub name: String,
    /// Declared column data type.
    pub data_type: ColumnDataType,
}

impl HeaderCell {
    /// Inspection tooltip naming the identifier and declared type.
    pub fn tooltip(&self) -> String {
        format!("Name: {} | Type: {}", self.name, self.data_type)
    }
}

/// One body row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    /// The host's record identifier.
    pub record_id: String,
    /// One cell per column, in declared column order.
    pub cells: Vec<RenderedCell>,
}

/// The assembled tabular structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    /// One header cell per column, in declared column order.
    pub header: Vec<HeaderCell>,
    /// One row per record identifier, in host order.
    pub rows: Vec<GridRow>,
}

/// The render-target-agnostic result of one grid build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GridOutput {
    /// A renderable grid.
    Grid(Grid),
    /// A single informational placeholder with a fixed reason.
    Placeholder(EmptyReason),
}

impl GridOutput {
    /// The grid, if one was built.
    pub fn as_grid(&self) -> Option<&Grid> {
        match self {
            Self::Grid(grid) => Some(grid),
            Self::Placeholder(_) => None,
        }
    }

    /// The placeholder reason, if the dataset could not be shown.
    pub fn placeholder_reason(&self) -> Option<EmptyReason> {
        match self {
            Self::Grid(_) => None,
            Self::Placeholder(reason) => Some(*reason),
        }
    }
}

/// Build a grid from a dataset snapshot and a column selection.
///
/// The validity checks run in a fixed precedence order: absent dataset,
/// then absent columns, then zero records. Column and row ordering are
/// taken from the host verbatim; a record identifier whose lookup fails
/// renders as a row of empty cells.
///
/// Deterministic: identical inputs yield structurally identical
/// outputs, with no state carried between builds.
pub fn build_grid(dataset: Option<&dyn Dataset>, selection: &ColumnSelection) -> GridOutput {
    let Some(dataset) = dataset else {
        debug!("grid build: dataset handle absent");
        return GridOutput::Placeholder(EmptyReason::DatasetUnavailable);
    };
    let Some(columns) = dataset.columns() else {
        debug!("grid build: no column descriptors");
        return GridOutput::Placeholder(EmptyReason::NoColumns);
    };
    let record_ids = dataset.record_ids();
    if record_ids.is_empty() {
        debug!("grid build: zero records");
        return GridOutput::Placeholder(EmptyReason::NoRows);
    }

    let header: Vec<HeaderCell> = columns
        .iter()
        .map(|column| HeaderCell {
            label: column.display_name.clone(),
            name: column.name.clone(),
            data_type: column.data_type,
        })
        .collect();

    let rows: Vec<GridRow> = record_ids
        .iter()
        .map(|id| {
            let cells = match dataset.record(id) {
                Some(record) => columns
                    .iter()
                    .map(|column| render_cell(record, column, selection))
                    .collect(),
                None => vec![RenderedCell::default(); columns.len()],
            };
            GridRow {
                record_id: id.clone(),
                cells,
            }
        })
        .collect();

    debug!(
        columns = header.len(),
        rows = rows.len(),
        banded = selection.len(),
        "grid built"
    );
    GridOutput::Grid(Grid { header, rows })
}
