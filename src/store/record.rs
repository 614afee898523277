//! Conversion between typed records and table rows.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

use super::schema::{Row, TableSchema};
use super::traits::TableStore;

/// A value that is stored as one row of a fixed table.
pub trait TableRecord: Sized {
    /// The table this record lives in.
    const SCHEMA: TableSchema;

    /// Encodes the record as one cell per schema column.
    fn to_row(&self) -> Row;

    /// Decodes a stored row. `index` is the zero-based data row, for errors.
    fn from_row(row: &[String], index: usize) -> LedgerResult<Self>;
}

/// Loads and decodes every record of `T`'s table, in storage order.
pub fn load_records<T, S>(store: &S) -> LedgerResult<Vec<T>>
where
    T: TableRecord,
    S: TableStore + ?Sized,
{
    store
        .load_all(&T::SCHEMA)?
        .iter()
        .enumerate()
        .map(|(index, row)| T::from_row(row, index))
        .collect()
}

/// Encodes and appends one record to `T`'s table.
pub fn append_record<T, S>(store: &S, record: &T) -> LedgerResult<()>
where
    T: TableRecord,
    S: TableStore + ?Sized,
{
    store.append_row(&T::SCHEMA, record.to_row())
}

/// Reads a text cell by column name.
pub(crate) fn text_cell(
    schema: &TableSchema,
    row: &[String],
    index: usize,
    column: &str,
) -> LedgerResult<String> {
    let position = schema
        .column_index(column)
        .ok_or_else(|| LedgerError::RowShape {
            table: schema.name.to_string(),
            row: index,
            message: format!("unknown column '{}'", column),
        })?;

    row.get(position)
        .cloned()
        .ok_or_else(|| LedgerError::RowShape {
            table: schema.name.to_string(),
            row: index,
            message: format!("missing column '{}'", column),
        })
}

/// Reads a decimal cell by column name.
///
/// Accepts plain (`1000.0`) and scientific (`1e3`) notation.
pub(crate) fn decimal_cell(
    schema: &TableSchema,
    row: &[String],
    index: usize,
    column: &str,
) -> LedgerResult<Decimal> {
    let raw = text_cell(schema, row, index, column)?;
    parse_decimal(&raw).ok_or_else(|| LedgerError::RowShape {
        table: schema.name.to_string(),
        row: index,
        message: format!("column '{}' is not a number: '{}'", column, raw),
    })
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
