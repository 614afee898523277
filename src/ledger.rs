//! The payroll ledger.
//!
//! Owns the append-only `payroll` table. Each submitted calculation becomes
//! exactly one entry; entries are never edited or removed.

use tracing::info;

pub use crate::calculation::compute_net;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{PayrollEntry, PayrollInput};
use crate::store::{TableStore, append_record, load_records};

/// Append-only sequence of computed payroll entries.
///
/// The ledger does not consult the employee directory: an entry may name any
/// employee ID.
///
/// # Example
///
/// ```
/// use payroll_ledger::ledger::PayrollLedger;
/// use payroll_ledger::models::PayrollInput;
/// use payroll_ledger::store::InMemoryTableStore;
/// use rust_decimal::Decimal;
///
/// let mut ledger = PayrollLedger::new(InMemoryTableStore::new());
/// let input = PayrollInput {
///     basic: Decimal::new(1000, 0),
///     allowance: Decimal::new(100, 0),
///     overtime_hours: Decimal::new(10, 0),
///     overtime_rate: Decimal::new(5, 0),
///     deductions: Decimal::new(50, 0),
/// };
///
/// let entry = ledger.add_entry("E1", "August 2025", input)?;
/// assert_eq!(entry.net_salary, Decimal::new(1100, 0));
/// assert_eq!(ledger.list()?, vec![entry]);
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
#[derive(Debug)]
pub struct PayrollLedger<S> {
    store: S,
}

impl<S: TableStore> PayrollLedger<S> {
    /// Creates a ledger over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Computes and records one payroll entry, returning it.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidInput`] if the employee ID is blank, any numeric
    ///   field is negative, or the net salary does not fit in a `Decimal`;
    ///   nothing is written
    /// - a storage error if the row cannot be appended
    pub fn add_entry(
        &mut self,
        employee_id: impl Into<String>,
        month: impl Into<String>,
        input: PayrollInput,
    ) -> LedgerResult<PayrollEntry> {
        let employee_id = employee_id.into();
        if employee_id.trim().is_empty() {
            return Err(LedgerError::invalid_input("employee_id", "must not be empty"));
        }
        input.validate()?;

        let entry = PayrollEntry::compute(employee_id, month, input)?;
        append_record(&self.store, &entry)?;

        info!(
            employee_id = %entry.employee_id,
            month = %entry.month,
            net_salary = %entry.net_salary,
            "Payroll entry recorded"
        );
        Ok(entry)
    }

    /// Returns every entry in the order it was recorded.
    pub fn list(&self) -> LedgerResult<Vec<PayrollEntry>> {
        load_records(&self.store)
    }

    /// Returns the entries recorded for one employee, oldest first.
    pub fn entries_for(&self, employee_id: &str) -> LedgerResult<Vec<PayrollEntry>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|entry| entry.employee_id == employee_id)
            .collect())
    }
}
