//! Text rendering surface.
//!
//! Adapts grid outputs to padded text lines: one header line followed
//! by one line per row, columns padded to their widest cell using
//! visual width. Placeholder outputs render as a single reason line.
//! Suitable for terminals, logs, and snapshot tests.

use unicode_width::UnicodeWidthStr;

use crate::control::RenderTarget;
use crate::grid::{Grid, GridOutput};

/// A [`RenderTarget`] that keeps the latest output as text lines.
///
/// # Example
///
/// ```
/// use semaforo::{build_grid, ColumnSelection, TextSurface};
/// use semaforo::control::RenderTarget;
///
/// let output = build_grid(None, &ColumnSelection::empty());
/// let mut surface = TextSurface::new();
/// surface.present(&output);
/// assert_eq!(surface.lines(), ["dataset not available"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    lines: Vec<String>,
}

impl TextSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines of the most recently presented output.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn layout(grid: &Grid) -> Vec<String> {
        let widths = Self::column_widths(grid);

        let mut lines = Vec::with_capacity(grid.rows.len() + 1);
        let header: Vec<String> = grid
            .header
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(&cell.label, widths[i]))
            .collect();
        lines.push(header.join("  ").trim_end().to_string());

        for row in &grid.rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .enumerate()
                .map(|(i, cell)| pad(&cell.text, widths[i]))
                .collect();
            lines.push(cells.join("  ").trim_end().to_string());
        }
        lines
    }

    fn column_widths(grid: &Grid) -> Vec<usize> {
        let mut widths: Vec<usize> = grid
            .header
            .iter()
            .map(|cell| cell.label.width())
            .collect();
        for row in &grid.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.text.width());
                }
            }
        }
        widths
    }
}

impl RenderTarget for TextSurface {
    fn present(&mut self, output: &GridOutput) {
        self.lines = match output {
            GridOutput::Grid(grid) => Self::layout(grid),
            GridOutput::Placeholder(reason) => vec![reason.message().to_string()],
        };
    }
}

fn pad(text: &str, width: usize) -> String {
    let current = text.width();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(current));
    padded.push_str(text);
    for _ in current..width {
        padded.push(' ');
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ColumnDataType, ColumnDescriptor, MemoryDataset, MemoryRecord, RawValue};
    use crate::grid::build_grid;
    use crate::selection::ColumnSelection;

    fn sample_output() -> GridOutput {
        let mut dataset = MemoryDataset::new(vec![
            ColumnDescriptor::new("Name", "Name", ColumnDataType::Text),
            ColumnDescriptor::new("ScorePct", "ScorePct", ColumnDataType::Decimal),
        ]);
        dataset.push_record(
            "r1",
            MemoryRecord::new()
                .with_value("Name", RawValue::Text("Acme".into()))
                .with_formatted("Name", "Acme")
                .with_value("ScorePct", RawValue::Number(42.7))
                .with_formatted("ScorePct", "42.7%"),
        );
        build_grid(Some(&dataset), &ColumnSelection::parse(Some("ScorePct")))
    }

    #[test]
    fn f_surface_renders_header_and_rows() {
        let mut surface = TextSurface::new();
        surface.present(&sample_output());
        assert_eq!(surface.lines().len(), 2);
        assert_eq!(surface.lines()[0], "Name  ScorePct");
        assert_eq!(surface.lines()[1], "Acme  43%");
    }

    #[test]
    fn f_surface_renders_placeholder_line() {
        let mut surface = TextSurface::new();
        surface.present(&build_grid(None, &ColumnSelection::empty()));
        assert_eq!(surface.lines(), ["dataset not available"]);
    }

    #[test]
    fn f_surface_discards_previous_output() {
        let mut surface = TextSurface::new();
        surface.present(&sample_output());
        surface.present(&build_grid(None, &ColumnSelection::empty()));
        assert_eq!(surface.lines().len(), 1);
    }

    #[test]
    fn f_pad_is_width_aware() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcd", 2), "abcd");
        // CJK characters occupy two cells
        assert_eq!(pad("日本", 6), "日本  ");
    }

    #[test]
    fn f_columns_pad_to_widest_cell() {
        let mut dataset = MemoryDataset::new(vec![ColumnDescriptor::new(
            "c",
            "C",
            ColumnDataType::Text,
        )]);
        dataset.push_record(
            "r1",
            MemoryRecord::new().with_formatted("c", "a long cell value"),
        );
        let output = build_grid(Some(&dataset), &ColumnSelection::empty());
        let mut surface = TextSurface::new();
        surface.present(&output);
        // Header line padded to the body width, then trailing pad trimmed
        assert_eq!(surface.lines()[0], "C");
        assert_eq!(surface.lines()[1], "a long cell value");
    }
}
