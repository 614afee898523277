use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

use super::schema::{Row, TableSchema};
use super::traits::TableStore;

/// In-memory table store.
///
/// Intended for tests and embedding. Tables live in a `HashMap` behind a
/// `RwLock`; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    tables: RwLock<HashMap<&'static str, Vec<Row>>>,
}

impl InMemoryTableStore {
    /// Create a new store with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently in `table`, or zero if it was never touched.
    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .read()
            .map(|tables| tables.get(table).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    /// Returns true if `table` has been created by a load or an append.
    pub fn has_table(&self, table: &str) -> bool {
        self.tables
            .read()
            .map(|tables| tables.contains_key(table))
            .unwrap_or(false)
    }
}

fn poisoned(schema: &TableSchema) -> LedgerError {
    LedgerError::storage(schema.name, "table lock poisoned")
}

impl TableStore for InMemoryTableStore {
    fn load_all(&self, schema: &TableSchema) -> LedgerResult<Vec<Row>> {
        let mut tables = self.tables.write().map_err(|_| poisoned(schema))?;
        let rows = tables.entry(schema.name).or_default();
        Ok(rows.clone())
    }

    fn append_row(&self, schema: &TableSchema, row: Row) -> LedgerResult<()> {
        schema.check_arity(&row)?;
        let mut tables = self.tables.write().map_err(|_| poisoned(schema))?;
        let rows = tables.entry(schema.name).or_default();
        rows.push(row);
        debug!(table = schema.name, rows = rows.len(), "Row appended");
        Ok(())
    }
}
