//! Core data models for the payroll ledger.
//!
//! This module contains the two record types stored in the tables and the
//! numeric input to a payroll calculation.

mod employee;
mod payroll_entry;

pub use employee::EmployeeRecord;
pub use payroll_entry::{PayrollEntry, PayrollInput};
