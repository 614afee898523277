//! Response types for the payroll ledger API.
//!
//! This module defines the success bodies, the error body, and the mapping
//! from [`LedgerError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::{EmployeeRecord, PayrollEntry};

/// Message shown after an employee is added.
pub const EMPLOYEE_ADDED_MESSAGE: &str = "Employee added successfully!";

/// Message shown when an employee ID is already taken.
pub const DUPLICATE_ID_MESSAGE: &str = "Employee ID already exists.";

/// Message shown when payroll is submitted before any employee exists.
pub const NO_EMPLOYEES_MESSAGE: &str = "No employees found. Please add employees first.";

/// Formats an amount for display, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_ledger::api::display_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(display_amount(Decimal::new(1100, 0)), "1100.00");
/// assert_eq!(display_amount(Decimal::new(-5, 0)), "-5.00");
/// assert_eq!(display_amount(Decimal::new(499995, 4)), "50.00");
/// ```
pub fn display_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Response body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreatedResponse {
    /// Confirmation text.
    pub message: String,
    /// The stored record.
    pub employee: EmployeeRecord,
}

/// Response body for `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    /// Number of records.
    pub count: usize,
    /// Records in insertion order.
    pub employees: Vec<EmployeeRecord>,
}

/// Response body for `GET /employees/ids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeIdsResponse {
    /// Distinct employee IDs in insertion order.
    pub ids: Vec<String>,
}

/// Response body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollSavedResponse {
    /// Correlation ID of the request, also present in the logs.
    pub correlation_id: Uuid,
    /// When the entry was recorded.
    pub processed_at: DateTime<Utc>,
    /// Confirmation text including the net salary.
    pub message: String,
    /// Net salary rounded to two decimal places.
    pub net_salary_display: String,
    /// The stored entry, unrounded.
    pub entry: PayrollEntry,
}

impl PayrollSavedResponse {
    /// Builds the response for a freshly recorded entry.
    pub fn new(correlation_id: Uuid, entry: PayrollEntry) -> Self {
        let net_salary_display = display_amount(entry.net_salary);
        Self {
            correlation_id,
            processed_at: Utc::now(),
            message: format!("Payroll saved. Net Salary: ${}", net_salary_display),
            net_salary_display,
            entry,
        }
    }
}

/// Response body for `GET /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollListResponse {
    /// Number of entries.
    pub count: usize,
    /// Entries in insertion order.
    pub entries: Vec<PayrollEntry>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error for a payroll submission naming an unknown employee.
    pub fn employee_not_found(id: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", id),
            "Payroll can only be recorded for an employee in the directory",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs a status code with an error body.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// 409 returned when payroll is submitted before any employee exists.
    pub fn no_employees() -> Self {
        Self::new(
            StatusCode::CONFLICT,
            ApiError::new("NO_EMPLOYEES", NO_EMPLOYEES_MESSAGE),
        )
    }

    /// 404 returned when payroll names an employee not in the directory.
    pub fn employee_not_found(id: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::employee_not_found(id))
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::DuplicateKey { id } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "DUPLICATE_EMPLOYEE_ID",
                    DUPLICATE_ID_MESSAGE,
                    format!("An employee with ID '{}' is already in the directory", id),
                ),
            ),
            LedgerError::InvalidInput { field, message } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input for '{}': {}", field, message),
                    field,
                ),
            ),
            err @ (LedgerError::Storage { .. }
            | LedgerError::SchemaMismatch { .. }
            | LedgerError::RowShape { .. }) => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("STORAGE_ERROR", "Storage error", err.to_string()),
            ),
            err @ (LedgerError::ConfigNotFound { .. } | LedgerError::ConfigParseError { .. }) => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", err.to_string()),
                )
            }
        }
    }
}
