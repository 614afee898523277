//! The [`TableStore`] trait.

use std::sync::Arc;

use crate::error::LedgerResult;

use super::schema::{Row, TableSchema};

/// Persistence backend for named, schema-fixed, append-only tables.
///
/// Implementations must keep rows in the order they were appended and must
/// never rewrite or drop existing rows.
pub trait TableStore: Send + Sync {
    /// Returns every row of the table in storage order.
    ///
    /// A table that does not exist yet is created with its header and no rows.
    fn load_all(&self, schema: &TableSchema) -> LedgerResult<Vec<Row>>;

    /// Persists one more row at the end of the table.
    ///
    /// Returns `Err` if the row does not have one cell per column or if the
    /// write fails. A failed append leaves the existing rows untouched.
    fn append_row(&self, schema: &TableSchema, row: Row) -> LedgerResult<()>;

    /// Pushes any buffered state to durable storage.
    fn flush(&self) -> LedgerResult<()> {
        Ok(())
    }
}

impl<T: TableStore + ?Sized> TableStore for Arc<T> {
    fn load_all(&self, schema: &TableSchema) -> LedgerResult<Vec<Row>> {
        (**self).load_all(schema)
    }

    fn append_row(&self, schema: &TableSchema, row: Row) -> LedgerResult<()> {
        (**self).append_row(schema, row)
    }

    fn flush(&self) -> LedgerResult<()> {
        (**self).flush()
    }
}
