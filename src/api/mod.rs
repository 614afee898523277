//! HTTP API module for the payroll ledger.
//!
//! This module exposes the four user-facing operations over JSON:
//! add an employee, list employees, record a payroll entry, and list payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NewEmployeeRequest, NewPayrollRequest};
pub use response::{
    ApiError, ApiErrorResponse, EmployeeCreatedResponse, EmployeeIdsResponse,
    EmployeeListResponse, PayrollListResponse, PayrollSavedResponse, display_amount,
};
pub use state::{AppState, SharedStore};
