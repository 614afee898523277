//! Table schemas.
//!
//! Every table has a fixed name and column list. The column text is what
//! ends up in the CSV header row.

use crate::error::{LedgerError, LedgerResult};

/// One row of a table, one cell per schema column.
pub type Row = Vec<String>;

/// The fixed shape of a named table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableSchema {
    /// The table name (e.g. "employees").
    pub name: &'static str,
    /// The column headers in storage order.
    pub columns: &'static [&'static str],
}

impl TableSchema {
    /// Creates a schema from a name and its columns.
    pub const fn new(name: &'static str, columns: &'static [&'static str]) -> Self {
        Self { name, columns }
    }

    /// Number of cells every row of this table must have.
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// The header as a comma separated string, used in error messages.
    pub fn header_text(&self) -> String {
        self.columns.join(",")
    }

    /// Returns the position of a column by header text.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }

    /// Checks that a row has exactly one cell per column.
    pub fn check_arity(&self, row: &[String]) -> LedgerResult<()> {
        if row.len() == self.arity() {
            Ok(())
        } else {
            Err(LedgerError::storage(
                self.name,
                format!("row has {} cells, expected {}", row.len(), self.arity()),
            ))
        }
    }

    /// Returns true if `header` names exactly this schema's columns, in order.
    pub fn matches_header<'a, I>(&self, header: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found = header.into_iter();
        for expected in self.columns {
            match found.next() {
                Some(cell) if cell.trim() == *expected => {}
                _ => return false,
            }
        }
        found.next().is_none()
    }
}

/// The employee directory table.
pub const EMPLOYEES: TableSchema =
    TableSchema::new("employees", &["ID", "Name", "Department", "Position", "Email"]);

/// The payroll ledger table.
///
/// Header text matches the files the first version of the application wrote,
/// so existing `payroll.csv` files load unchanged.
pub const PAYROLL: TableSchema = TableSchema::new(
    "payroll",
    &[
        "ID",
        "Month",
        "Basic",
        "Allowance",
        "Overtime Hours",
        "Overtime Rate",
        "Deductions",
        "Net Salary",
    ],
);
