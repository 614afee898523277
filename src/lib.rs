//! Payroll Ledger
//!
//! This crate keeps an employee directory and a monthly payroll ledger in two
//! flat tables, computes net salary for each payroll entry, and serves both
//! over a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod models;
pub mod store;
pub mod telemetry;
