//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the directory, the ledger and the table stores can report.

use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// All operations in the crate return this error type, making it easy
/// to handle errors consistently from the store up to the HTTP layer.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::LedgerError;
///
/// let error = LedgerError::DuplicateKey {
///     id: "E1".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee ID already exists: E1");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An employee with the same ID is already in the directory.
    #[error("Employee ID already exists: {id}")]
    DuplicateKey {
        /// The ID that was submitted twice.
        id: String,
    },

    /// A field was missing, blank or outside its allowed range.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A table could not be read or written.
    #[error("Storage error on table '{table}': {message}")]
    Storage {
        /// The table being accessed.
        table: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// A table file exists but its header does not match the expected columns.
    #[error("Table '{table}' has columns [{found}], expected [{expected}]")]
    SchemaMismatch {
        /// The table name.
        table: String,
        /// The expected header, comma separated.
        expected: String,
        /// The header found on disk, comma separated.
        found: String,
    },

    /// A stored row could not be decoded into a record.
    #[error("Malformed row {row} in table '{table}': {message}")]
    RowShape {
        /// The table name.
        table: String,
        /// Zero-based data row index (the header is not counted).
        row: usize,
        /// What could not be decoded.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl LedgerError {
    /// Shorthand for an [`LedgerError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`LedgerError::Storage`] built from any displayable cause.
    pub fn storage(table: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Storage {
            table: table.into(),
            message: cause.to_string(),
        }
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
