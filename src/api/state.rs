//! Application state for the payroll ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::directory::EmployeeDirectory;
use crate::error::LedgerResult;
use crate::ledger::PayrollLedger;
use crate::store::{InMemoryTableStore, TableStore};

/// Store handle shared by the directory and the ledger.
pub type SharedStore = Arc<dyn TableStore>;

/// Shared application state.
///
/// The directory and the ledger are each behind a mutex that is held for a
/// whole request, so the read-check-append sequence of an employee add is
/// never interleaved with another request. When both are needed, the
/// directory is locked first.
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
    directory: Arc<Mutex<EmployeeDirectory<SharedStore>>>,
    ledger: Arc<Mutex<PayrollLedger<SharedStore>>>,
}

impl AppState {
    /// Creates the state over a table store.
    pub fn new(store: SharedStore) -> Self {
        Self {
            directory: Arc::new(Mutex::new(EmployeeDirectory::new(Arc::clone(&store)))),
            ledger: Arc::new(Mutex::new(PayrollLedger::new(Arc::clone(&store)))),
            store,
        }
    }

    /// Creates a state backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTableStore::new()))
    }

    /// The employee directory.
    pub fn directory(&self) -> &Mutex<EmployeeDirectory<SharedStore>> {
        &self.directory
    }

    /// The payroll ledger.
    pub fn ledger(&self) -> &Mutex<PayrollLedger<SharedStore>> {
        &self.ledger
    }

    /// Flushes the backing store. Called once on shutdown.
    pub async fn flush(&self) -> LedgerResult<()> {
        // Take both locks so no append is in flight
        let _directory = self.directory.lock().await;
        let _ledger = self.ledger.lock().await;
        self.store.flush()
    }
}
