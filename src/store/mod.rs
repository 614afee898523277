//! Table persistence for the payroll ledger.
//!
//! The directory and the ledger never touch files directly; they go through
//! the [`TableStore`] trait, which knows only named tables of string rows.
//!
//! # Backends
//!
//! - [`InMemoryTableStore`]: `HashMap`-based store for tests and embedding
//! - [`CsvTableStore`]: one CSV file per table, appended in place
//!
//! Typed records are mapped to rows through [`TableRecord`].

mod csv_file;
mod memory;
mod record;
mod schema;
mod traits;

pub use csv_file::CsvTableStore;
pub use memory::InMemoryTableStore;
pub use record::{TableRecord, append_record, load_records};
pub(crate) use record::{decimal_cell, text_cell};
pub use schema::{EMPLOYEES, PAYROLL, Row, TableSchema};
pub use traits::TableStore;
