//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] stored in the `employees` table.

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::store::{EMPLOYEES, Row, TableRecord, TableSchema, text_cell};

/// One employee in the directory.
///
/// The ID is supplied by the user and is never regenerated. Records are
/// created once and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Job title.
    pub position: String,
    /// Contact email address.
    pub email: String,
}

impl EmployeeRecord {
    /// Creates a record from its five fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::EmployeeRecord;
    ///
    /// let ann = EmployeeRecord::new("E1", "Ann", "HR", "Clerk", "a@x.com");
    /// assert_eq!(ann.id, "E1");
    /// assert_eq!(ann.department, "HR");
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            position: position.into(),
            email: email.into(),
        }
    }
}

impl TableRecord for EmployeeRecord {
    const SCHEMA: TableSchema = EMPLOYEES;

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.department.clone(),
            self.position.clone(),
            self.email.clone(),
        ]
    }

    fn from_row(row: &[String], index: usize) -> LedgerResult<Self> {
        let cell = |column: &str| text_cell(&EMPLOYEES, row, index, column);
        Ok(Self {
            id: cell("ID")?,
            name: cell("Name")?,
            department: cell("Department")?,
            position: cell("Position")?,
            email: cell("Email")?,
        })
    }
}
