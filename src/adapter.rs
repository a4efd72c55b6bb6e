//! Arrow-backed dataset provider.
//!
//! Adapts Arrow record batches to the [`Dataset`] contract: schema
//! fields become column descriptors, rows become records addressed by
//! their global row index, and array values are materialized into raw
//! values plus display strings at construction time. Row order follows
//! batch order; no reordering.

use arrow::array::{
    Array, BooleanArray, Date32Array, Date64Array, Float32Array, Float64Array, Int16Array,
    Int32Array, Int64Array, Int8Array, LargeStringArray, RecordBatch, StringArray,
    TimestampMicrosecondArray, TimestampMillisecondArray, TimestampNanosecondArray,
    TimestampSecondArray, UInt16Array, UInt32Array, UInt64Array, UInt8Array,
};
use arrow::datatypes::{DataType, SchemaRef, TimeUnit};

use crate::dataset::{ColumnDataType, ColumnDescriptor, Dataset, MemoryDataset, MemoryRecord, RawValue, Record};
use crate::error::{Error, Result};

const MS_PER_DAY: i64 = 86_400_000;

/// A [`Dataset`] over Arrow record batches.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use arrow::array::{Float64Array, RecordBatch, StringArray};
/// use arrow::datatypes::{DataType, Field, Schema};
/// use semaforo::{build_grid, ArrowTable, ColumnSelection};
///
/// let schema = Arc::new(Schema::new(vec![
///     Field::new("name", DataType::Utf8, false),
///     Field::new("score", DataType::Float64, false),
/// ]));
/// let batch = RecordBatch::try_new(
///     schema.clone(),
///     vec![
///         Arc::new(StringArray::from(vec!["a"])),
///         Arc::new(Float64Array::from(vec![80.0])),
///     ],
/// )
/// .unwrap();
///
/// let table = ArrowTable::try_new(vec![batch], schema).unwrap();
/// let output = build_grid(Some(&table), &ColumnSelection::parse(Some("score")));
/// assert!(output.as_grid().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ArrowTable {
    schema: SchemaRef,
    inner: MemoryDataset,
}

impl ArrowTable {
    /// Build a table from record batches sharing one schema.
    ///
    /// # Errors
    /// Returns [`Error::SchemaMismatch`] when a batch disagrees with
    /// the given schema.
    pub fn try_new(batches: Vec<RecordBatch>, schema: SchemaRef) -> Result<Self> {
        for (i, batch) in batches.iter().enumerate() {
            if batch.schema().fields() != schema.fields() {
                return Err(Error::schema_mismatch(format!(
                    "batch {i} schema differs from table schema"
                )));
            }
        }

        let columns: Vec<ColumnDescriptor> = schema
            .fields()
            .iter()
            .map(|field| {
                ColumnDescriptor::new(
                    field.name().clone(),
                    field.name().clone(),
                    map_data_type(field.data_type()),
                )
            })
            .collect();

        let mut inner = MemoryDataset::new(columns);
        let mut global_row = 0usize;
        for batch in &batches {
            for row in 0..batch.num_rows() {
                let mut record = MemoryRecord::new();
                for (col, field) in schema.fields().iter().enumerate() {
                    let (raw, formatted) = cell_value(batch.column(col).as_ref(), row);
                    record = record.with_value(field.name().clone(), raw);
                    if let Some(text) = formatted {
                        record = record.with_formatted(field.name().clone(), text);
                    }
                }
                inner.push_record(global_row.to_string(), record);
                global_row += 1;
            }
        }

        Ok(Self { schema, inner })
    }

    /// Build a table from a single batch.
    pub fn from_batch(batch: RecordBatch) -> Result<Self> {
        let schema = batch.schema();
        Self::try_new(vec![batch], schema)
    }

    /// The underlying Arrow schema.
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Total row count.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Dataset for ArrowTable {
    fn columns(&self) -> Option<&[ColumnDescriptor]> {
        self.inner.columns()
    }

    fn record_ids(&self) -> &[String] {
        self.inner.record_ids()
    }

    fn record(&self, id: &str) -> Option<&dyn Record> {
        self.inner.record(id)
    }
}

fn map_data_type(dt: &DataType) -> ColumnDataType {
    match dt {
        DataType::Utf8 | DataType::LargeUtf8 => ColumnDataType::Text,
        DataType::Float32 | DataType::Float64 => ColumnDataType::Decimal,
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => ColumnDataType::Whole,
        DataType::Boolean => ColumnDataType::Boolean,
        DataType::Date32 | DataType::Date64 | DataType::Timestamp(_, _) => ColumnDataType::Date,
        _ => ColumnDataType::Unknown,
    }
}

/// Materialize one array slot into a raw value and display string.
#[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
fn cell_value(array: &dyn Array, row: usize) -> (RawValue, Option<String>) {
    if row >= array.len() || array.is_null(row) {
        return (RawValue::Absent, None);
    }

    let extracted: Option<(RawValue, Option<String>)> = match array.data_type() {
        DataType::Utf8 => array.as_any().downcast_ref::<StringArray>().map(|a| {
            let s = a.value(row).to_string();
            (RawValue::Text(s.clone()), Some(s))
        }),
        DataType::LargeUtf8 => array.as_any().downcast_ref::<LargeStringArray>().map(|a| {
            let s = a.value(row).to_string();
            (RawValue::Text(s.clone()), Some(s))
        }),
        DataType::Int8 => array
            .as_any()
            .downcast_ref::<Int8Array>()
            .map(|a| number(f64::from(a.value(row)), a.value(row).to_string())),
        DataType::Int16 => array
            .as_any()
            .downcast_ref::<Int16Array>()
            .map(|a| number(f64::from(a.value(row)), a.value(row).to_string())),
        DataType::Int32 => array
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| number(f64::from(a.value(row)), a.value(row).to_string())),
        DataType::Int64 => array
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| number(a.value(row) as f64, a.value(row).to_string())),
        DataType::UInt8 => array
            .as_any()
            .downcast_ref::<UInt8Array>()
            .map(|a| number(f64::from(a.value(row)), a.value(row).to_string())),
        DataType::UInt16 => array
            .as_any()
            .downcast_ref::<UInt16Array>()
            .map(|a| number(f64::from(a.value(row)), a.value(row).to_string())),
        DataType::UInt32 => array
            .as_any()
            .downcast_ref::<UInt32Array>()
            .map(|a| number(f64::from(a.value(row)), a.value(row).to_string())),
        DataType::UInt64 => array
            .as_any()
            .downcast_ref::<UInt64Array>()
            .map(|a| number(a.value(row) as f64, a.value(row).to_string())),
        DataType::Float32 => array
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| number(f64::from(a.value(row)), format!("{:.2}", a.value(row)))),
        DataType::Float64 => array
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| number(a.value(row), format!("{:.4}", a.value(row)))),
        DataType::Boolean => array.as_any().downcast_ref::<BooleanArray>().map(|a| {
            let b = a.value(row);
            (RawValue::Bool(b), Some(b.to_string()))
        }),
        DataType::Date32 => array.as_any().downcast_ref::<Date32Array>().map(|a| {
            let days = i64::from(a.value(row));
            (RawValue::Date(days * MS_PER_DAY), Some(format!("date:{days}")))
        }),
        DataType::Date64 => array.as_any().downcast_ref::<Date64Array>().map(|a| {
            let ms = a.value(row);
            (RawValue::Date(ms), Some(format!("date64:{ms}")))
        }),
        DataType::Timestamp(unit, _) => timestamp_value(array, row, *unit),
        // Unsupported types render a type placeholder, never a band
        other => Some((RawValue::Absent, Some(format!("<{other}>")))),
    };

    extracted.unwrap_or((RawValue::Absent, None))
}

fn number(value: f64, formatted: String) -> (RawValue, Option<String>) {
    (RawValue::Number(value), Some(formatted))
}

fn timestamp_value(
    array: &dyn Array,
    row: usize,
    unit: TimeUnit,
) -> Option<(RawValue, Option<String>)> {
    let (raw, ms) = match unit {
        TimeUnit::Second => {
            let v = array
                .as_any()
                .downcast_ref::<TimestampSecondArray>()?
                .value(row);
            (v, v.saturating_mul(1000))
        }
        TimeUnit::Millisecond => {
            let v = array
                .as_any()
                .downcast_ref::<TimestampMillisecondArray>()?
                .value(row);
            (v, v)
        }
        TimeUnit::Microsecond => {
            let v = array
                .as_any()
                .downcast_ref::<TimestampMicrosecondArray>()?
                .value(row);
            (v, v / 1000)
        }
        TimeUnit::Nanosecond => {
            let v = array
                .as_any()
                .downcast_ref::<TimestampNanosecondArray>()?
                .value(row);
            (v, v / 1_000_000)
        }
    };
    Some((RawValue::Date(ms), Some(format!("ts:{raw}"))))
}
