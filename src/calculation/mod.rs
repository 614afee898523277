//! Payroll calculation logic.
//!
//! This module contains the arithmetic behind a payroll entry. It is pure:
//! no I/O, no rounding.

mod net_salary;

pub use net_salary::{compute_net, overtime_pay};
