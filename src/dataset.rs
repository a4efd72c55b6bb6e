//! Host-facing data model.
//!
//! The host application owns the data: an ordered column list, an
//! ordered sequence of record identifiers, and a lookup from identifier
//! to record. Each record yields, per column, a dynamically typed raw
//! value and a host-pre-formatted display string. Everything here is
//! read-only to the render pipeline.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A dynamically typed raw cell value supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RawValue {
    /// A decimal number.
    Number(f64),
    /// A text value.
    Text(String),
    /// A boolean value.
    Bool(bool),
    /// A date as milliseconds since the Unix epoch.
    Date(i64),
    /// No value present for this column.
    Absent,
}

impl RawValue {
    /// Returns the numeric value if this is a number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns true if no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(ms) => write!(f, "date64:{ms}"),
            Self::Absent => Ok(()),
        }
    }
}

/// Declared data type of a column.
///
/// Inert metadata: classification keys off the dynamic type of the raw
/// value, never the declared type. Surfaced in header inspection
/// metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnDataType {
    /// Single-line text.
    Text,
    /// Decimal number.
    Decimal,
    /// Whole number.
    Whole,
    /// Boolean (two options).
    Boolean,
    /// Date or date-and-time.
    Date,
    /// Anything the host did not map to a known type.
    Unknown,
}

impl ColumnDataType {
    /// Human-readable type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Decimal => "decimal",
            Self::Whole => "whole",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one dataset column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    /// Stable column identifier, used for selection membership and
    /// record lookups.
    pub name: String,
    /// Label shown in the grid header.
    pub display_name: String,
    /// Declared data type.
    pub data_type: ColumnDataType,
}

impl ColumnDescriptor {
    /// Create a column descriptor.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        data_type: ColumnDataType,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            data_type,
        }
    }
}

/// One dataset row, accessed by column identifier.
pub trait Record {
    /// The raw value for a column. Unknown columns yield
    /// [`RawValue::Absent`].
    fn raw_value(&self, column: &str) -> RawValue;

    /// The host-pre-formatted display string for a column, if any.
    fn formatted_value(&self, column: &str) -> Option<&str>;
}

/// A host-supplied tabular data source.
///
/// Ordering is owned by the host: the grid renders columns in the
/// declared column order and rows in record-identifier order, with no
/// reordering.
pub trait Dataset {
    /// Ordered column descriptors, or `None` when the host has not
    /// defined any columns.
    fn columns(&self) -> Option<&[ColumnDescriptor]>;

    /// Ordered record identifiers.
    fn record_ids(&self) -> &[String];

    /// Look up a record by identifier.
    fn record(&self, id: &str) -> Option<&dyn Record>;
}

/// An in-memory record keyed by column identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRecord {
    values: HashMap<String, RawValue>,
    formatted: HashMap<String, String>,
}

impl MemoryRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw value for a column.
    #[must_use]
    pub fn with_value(mut self, column: impl Into<String>, value: RawValue) -> Self {
        self.values.insert(column.into(), value);
        self
    }

    /// Set the host-formatted display string for a column.
    #[must_use]
    pub fn with_formatted(mut self, column: impl Into<String>, text: impl Into<String>) -> Self {
        self.formatted.insert(column.into(), text.into());
        self
    }
}

impl Record for MemoryRecord {
    fn raw_value(&self, column: &str) -> RawValue {
        self.values.get(column).cloned().unwrap_or(RawValue::Absent)
    }

    fn formatted_value(&self, column: &str) -> Option<&str> {
        self.formatted.get(column).map(String::as_str)
    }
}

/// An in-memory dataset with host-declared column and row order.
///
/// The primary [`Dataset`] implementation for hosts that already hold
/// their records in memory, and the backing store for the Arrow
/// adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDataset {
    columns: Option<Vec<ColumnDescriptor>>,
    record_ids: Vec<String>,
    records: HashMap<String, MemoryRecord>,
}

impl MemoryDataset {
    /// Create a dataset with the given column order and no records.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns: Some(columns),
            record_ids: Vec::new(),
            records: HashMap::new(),
        }
    }

    /// Create a dataset whose column list is absent.
    ///
    /// Hosts in a partially initialized state report no column
    /// metadata; the grid renders a placeholder for such datasets.
    pub fn without_columns() -> Self {
        Self::default()
    }

    /// Append a record, preserving insertion order.
    pub fn push_record(&mut self, id: impl Into<String>, record: MemoryRecord) {
        let id = id.into();
        self.record_ids.push(id.clone());
        self.records.insert(id, record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.record_ids.len()
    }

    /// Returns true if the dataset contains no records.
    pub fn is_empty(&self) -> bool {
        self.record_ids.is_empty()
    }
}

impl Dataset for MemoryDataset {
    fn columns(&self) -> Option<&[ColumnDescriptor]> {
        self.columns.as_deref()
    }

    fn record_ids(&self) -> &[String] {
        &self.record_ids
    }

    fn record(&self, id: &str) -> Option<&dyn Record> {
        self.records.get(id).map(|r| r as &dyn Record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_raw_value_as_number() {
        assert_eq!(RawValue::Number(42.5).as_number(), Some(42.5));
        assert_eq!(RawValue::Text("42.5".into()).as_number(), None);
        assert_eq!(RawValue::Bool(true).as_number(), None);
        assert_eq!(RawValue::Absent.as_number(), None);
    }

    #[test]
    fn f_raw_value_display() {
        assert_eq!(RawValue::Number(42.7).to_string(), "42.7");
        assert_eq!(RawValue::Text("hi".into()).to_string(), "hi");
        assert_eq!(RawValue::Bool(false).to_string(), "false");
        assert_eq!(RawValue::Date(1_640_000_000_000).to_string(), "date64:1640000000000");
        assert_eq!(RawValue::Absent.to_string(), "");
    }

    #[test]
    fn f_column_data_type_names() {
        assert_eq!(ColumnDataType::Decimal.to_string(), "decimal");
        assert_eq!(ColumnDataType::Text.to_string(), "text");
        assert_eq!(ColumnDataType::Unknown.to_string(), "unknown");
    }

    #[test]
    fn f_memory_record_lookup() {
        let record = MemoryRecord::new()
            .with_value("a", RawValue::Number(1.0))
            .with_formatted("a", "1.0");
        assert_eq!(record.raw_value("a"), RawValue::Number(1.0));
        assert_eq!(record.formatted_value("a"), Some("1.0"));
    }

    #[test]
    fn f_memory_record_unknown_column_is_absent() {
        let record = MemoryRecord::new();
        assert!(record.raw_value("missing").is_absent());
        assert_eq!(record.formatted_value("missing"), None);
    }

    #[test]
    fn f_memory_dataset_preserves_record_order() {
        let mut dataset = MemoryDataset::new(vec![ColumnDescriptor::new(
            "a",
            "A",
            ColumnDataType::Text,
        )]);
        dataset.push_record("r2", MemoryRecord::new());
        dataset.push_record("r1", MemoryRecord::new());
        assert_eq!(dataset.record_ids(), &["r2".to_string(), "r1".to_string()]);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn f_memory_dataset_without_columns() {
        let dataset = MemoryDataset::without_columns();
        assert!(dataset.columns().is_none());
        assert!(dataset.is_empty());
    }

    #[test]
    fn f_memory_dataset_record_lookup() {
        let mut dataset = MemoryDataset::new(vec![]);
        dataset.push_record(
            "r1",
            MemoryRecord::new().with_value("x", RawValue::Bool(true)),
        );
        let record = dataset.record("r1").unwrap();
        assert_eq!(record.raw_value("x"), RawValue::Bool(true));
        assert!(dataset.record("r9").is_none());
    }
}
