//! The employee directory.
//!
//! Owns the `employees` table. Records can be added and listed; there is no
//! edit or delete.

use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::EmployeeRecord;
use crate::store::{EMPLOYEES, TableStore, append_record, load_records};

/// The set of known employees, keyed by user-supplied ID.
///
/// The uniqueness check in [`EmployeeDirectory::add`] reads the table and then
/// appends to it. Exclusive access through `&mut self` keeps that sequence
/// atomic within one process; two processes sharing the same files can still
/// race.
///
/// # Example
///
/// ```
/// use payroll_ledger::directory::EmployeeDirectory;
/// use payroll_ledger::models::EmployeeRecord;
/// use payroll_ledger::store::InMemoryTableStore;
///
/// let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
/// directory.add(EmployeeRecord::new("E1", "Ann", "HR", "Clerk", "a@x.com"))?;
///
/// assert!(directory.exists("E1")?);
/// assert_eq!(directory.list()?.len(), 1);
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
#[derive(Debug)]
pub struct EmployeeDirectory<S> {
    store: S,
}

impl<S: TableStore> EmployeeDirectory<S> {
    /// Creates a directory over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns true if a record with exactly this ID is stored.
    pub fn exists(&self, id: &str) -> LedgerResult<bool> {
        Ok(self.list()?.iter().any(|record| record.id == id))
    }

    /// Adds a new employee.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidInput`] if the ID is empty or only whitespace
    /// - [`LedgerError::DuplicateKey`] if the ID is already taken; nothing is written
    /// - a storage error if the table cannot be read or written
    pub fn add(&mut self, record: EmployeeRecord) -> LedgerResult<()> {
        if record.id.trim().is_empty() {
            return Err(LedgerError::invalid_input("id", "must not be empty"));
        }

        if self.exists(&record.id)? {
            debug!(employee_id = %record.id, "Rejected duplicate employee ID");
            return Err(LedgerError::DuplicateKey { id: record.id });
        }

        append_record(&self.store, &record)?;
        info!(employee_id = %record.id, "Employee added");
        Ok(())
    }

    /// Returns every employee in the order they were added.
    pub fn list(&self) -> LedgerResult<Vec<EmployeeRecord>> {
        load_records(&self.store)
    }

    /// Returns the distinct employee IDs in the order they were added.
    ///
    /// These are the choices offered when recording a payroll entry.
    pub fn ids(&self) -> LedgerResult<Vec<String>> {
        let mut ids: Vec<String> = Vec::new();
        for record in self.list()? {
            if !ids.contains(&record.id) {
                ids.push(record.id);
            }
        }
        Ok(ids)
    }

    /// Returns true if no employee has been added yet.
    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.store.load_all(&EMPLOYEES)?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EMPLOYEES, InMemoryTableStore, TableRecord};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn ann() -> EmployeeRecord {
        EmployeeRecord::new("E1", "Ann", "HR", "Clerk", "a@x.com")
    }

    fn employee(id: &str) -> EmployeeRecord {
        EmployeeRecord::new(id, format!("Name {id}"), "Ops", "Staff", format!("{id}@x.com"))
    }

    #[test]
    fn test_add_to_empty_directory() {
        let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
        assert!(directory.is_empty().unwrap());

        directory.add(ann()).unwrap();

        assert_eq!(directory.list().unwrap(), vec![ann()]);
        assert!(!directory.is_empty().unwrap());
    }

    #[test]
    fn test_duplicate_id_is_rejected_and_nothing_changes() {
        let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
        directory.add(ann()).unwrap();

        let other = EmployeeRecord::new("E1", "Someone Else", "IT", "Dev", "s@x.com");
        let err = directory.add(other).unwrap_err();

        assert!(matches!(err, LedgerError::DuplicateKey { ref id } if id == "E1"));
        assert_eq!(directory.list().unwrap(), vec![ann()]);
    }

    #[test]
    fn test_exists() {
        let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
        assert!(!directory.exists("E1").unwrap());

        directory.add(ann()).unwrap();

        assert!(directory.exists("E1").unwrap());
        assert!(!directory.exists("E2").unwrap());
    }

    #[test]
    fn test_exists_is_exact_match() {
        let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
        directory.add(ann()).unwrap();

        assert!(!directory.exists("e1").unwrap());
        assert!(!directory.exists("E1 ").unwrap());
    }

    #[test]
    fn test_blank_id_is_invalid() {
        let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
        let err = directory
            .add(EmployeeRecord::new("  ", "Ann", "HR", "Clerk", "a@x.com"))
            .unwrap_err();

        assert!(matches!(err, LedgerError::InvalidInput { ref field, .. } if field == "id"));
        assert!(directory.is_empty().unwrap());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
        for id in ["E9", "E2", "E5"] {
            directory.add(employee(id)).unwrap();
        }

        let ids: Vec<String> = directory.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["E9", "E2", "E5"]);
        assert_eq!(directory.ids().unwrap(), vec!["E9", "E2", "E5"]);
    }

    #[test]
    fn test_ids_collapses_duplicates_already_on_file() {
        // Files written by another process may already hold a repeated ID
        let store = InMemoryTableStore::new();
        for id in ["E1", "E2", "E1"] {
            store.append_row(&EMPLOYEES, employee(id).to_row()).unwrap();
        }
        let directory = EmployeeDirectory::new(store);

        assert_eq!(directory.list().unwrap().len(), 3);
        assert_eq!(directory.ids().unwrap(), vec!["E1", "E2"]);
    }

    #[test]
    fn test_list_twice_is_identical() {
        let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
        directory.add(ann()).unwrap();
        directory.add(employee("E2")).unwrap();

        assert_eq!(directory.list().unwrap(), directory.list().unwrap());
    }

    #[test]
    fn test_shared_store_sees_same_rows() {
        let store = Arc::new(InMemoryTableStore::new());
        let mut writer = EmployeeDirectory::new(Arc::clone(&store));
        let reader = EmployeeDirectory::new(Arc::clone(&store));

        writer.add(ann()).unwrap();

        assert!(reader.exists("E1").unwrap());
        assert_eq!(store.row_count("employees"), 1);
    }

    proptest! {
        #[test]
        fn prop_each_id_stored_at_most_once(ids in prop::collection::vec("E[0-9]", 0..30)) {
            let mut directory = EmployeeDirectory::new(InMemoryTableStore::new());
            let mut expected: Vec<String> = Vec::new();

            for id in &ids {
                let before = directory.list().unwrap();
                match directory.add(employee(id)) {
                    Ok(()) => {
                        prop_assert!(!expected.contains(id));
                        expected.push(id.clone());
                    }
                    Err(LedgerError::DuplicateKey { .. }) => {
                        prop_assert!(expected.contains(id));
                        prop_assert_eq!(directory.list().unwrap(), before);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {}", other),
                }
            }

            let stored: Vec<String> = directory.list().unwrap().into_iter().map(|r| r.id).collect();
            prop_assert_eq!(stored, expected);
        }
    }
}
