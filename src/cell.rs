//! Per-cell rendering.
//!
//! Decides whether a cell shows a classified band or the host's
//! formatted text, and produces the display content plus inspection
//! metadata. Banding applies if and only if the column is selected AND
//! the raw value is numeric; every other case, including numeric values
//! that classify to nothing (NaN), falls back to the formatted text.

use serde::Serialize;
use tracing::trace;

use crate::band::ValueBand;
use crate::dataset::{ColumnDescriptor, RawValue, Record};
use crate::selection::ColumnSelection;

/// One rendered cell: display text, an optional band tag, and the
/// original raw value retained for inspection when banded.
///
/// Produced fresh on every render; never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedCell {
    /// Display text: rounded-integer percent for banded cells, the
    /// host-formatted value otherwise (empty when the host supplied
    /// none).
    pub text: String,
    /// The band tag, or `None` for unclassified cells.
    pub band: Option<ValueBand>,
    /// The original raw value, kept for banded cells only.
    pub original: Option<RawValue>,
}

impl RenderedCell {
    /// A plain unclassified text cell.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            band: None,
            original: None,
        }
    }

    /// Whether this cell carries a band tag.
    #[inline]
    pub fn is_banded(&self) -> bool {
        self.band.is_some()
    }

    /// Inspection tooltip for banded cells, naming the original value.
    pub fn tooltip(&self) -> Option<String> {
        self.original
            .as_ref()
            .map(|raw| format!("Original value: {raw}"))
    }
}

/// Render one (record, column) pair.
///
/// # Example
///
/// ```
/// use semaforo::{render_cell, ColumnDataType, ColumnDescriptor, ColumnSelection};
/// use semaforo::{MemoryRecord, RawValue, ValueBand};
///
/// let column = ColumnDescriptor::new("ScorePct", "Score", ColumnDataType::Decimal);
/// let record = MemoryRecord::new()
///     .with_value("ScorePct", RawValue::Number(42.7))
///     .with_formatted("ScorePct", "42.7%");
/// let selection = ColumnSelection::parse(Some("ScorePct"));
///
/// let cell = render_cell(&record, &column, &selection);
/// assert_eq!(cell.text, "43%");
/// assert_eq!(cell.band, Some(ValueBand::Medium));
/// ```
pub fn render_cell(
    record: &dyn Record,
    column: &ColumnDescriptor,
    selection: &ColumnSelection,
) -> RenderedCell {
    if selection.contains(&column.name) {
        if let RawValue::Number(value) = record.raw_value(&column.name) {
            if let Some(band) = ValueBand::classify(value) {
                trace!(column = %column.name, value, band = %band, "cell banded");
                return RenderedCell {
                    text: format!("{:.0}%", value.round()),
                    band: Some(band),
                    original: Some(RawValue::Number(value)),
                };
            }
            // NaN classifies to nothing; fall through to formatted text.
        }
    }

    let text = record
        .formatted_value(&column.name)
        .unwrap_or_default()
        .to_owned();
    RenderedCell::plain(text)
}
