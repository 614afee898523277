//! Request types for the payroll ledger API.
//!
//! These are the two forms a user can submit: a new employee and a new
//! payroll calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{EmployeeRecord, PayrollInput};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployeeRequest {
    /// Employee ID chosen by the user.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Job title.
    pub position: String,
    /// Contact email address.
    pub email: String,
}

impl NewEmployeeRequest {
    /// Checks that every text field is filled in.
    pub fn validate(&self) -> LedgerResult<()> {
        require_text("id", &self.id)?;
        require_text("name", &self.name)?;
        require_text("department", &self.department)?;
        require_text("position", &self.position)?;
        require_text("email", &self.email)
    }
}

impl From<NewEmployeeRequest> for EmployeeRecord {
    fn from(req: NewEmployeeRequest) -> Self {
        EmployeeRecord {
            id: req.id,
            name: req.name,
            department: req.department,
            position: req.position,
            email: req.email,
        }
    }
}

/// Request body for `POST /payroll`.
///
/// Numeric fields default to zero when omitted, like an untouched form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayrollRequest {
    /// ID of an existing employee.
    pub employee_id: String,
    /// Month label, e.g. "August 2025".
    pub month: String,
    /// Basic salary.
    #[serde(default)]
    pub basic: Decimal,
    /// Allowances.
    #[serde(default)]
    pub allowance: Decimal,
    /// Overtime hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Overtime rate per hour.
    #[serde(default)]
    pub overtime_rate: Decimal,
    /// Deductions.
    #[serde(default)]
    pub deductions: Decimal,
}

impl NewPayrollRequest {
    /// Checks the text fields and that no amount is negative.
    pub fn validate(&self) -> LedgerResult<()> {
        require_text("employee_id", &self.employee_id)?;
        require_text("month", &self.month)?;
        self.input().validate()
    }

    /// The numeric part of the request.
    pub fn input(&self) -> PayrollInput {
        PayrollInput {
            basic: self.basic,
            allowance: self.allowance,
            overtime_hours: self.overtime_hours,
            overtime_rate: self.overtime_rate,
            deductions: self.deductions,
        }
    }
}

fn require_text(field: &str, value: &str) -> LedgerResult<()> {
    if value.trim().is_empty() {
        Err(LedgerError::invalid_input(field, "is required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_request() -> NewEmployeeRequest {
        NewEmployeeRequest {
            id: "E1".to_string(),
            name: "Ann".to_string(),
            department: "HR".to_string(),
            position: "Clerk".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_complete_employee_request_is_valid() {
        assert!(employee_request().validate().is_ok());
    }

    #[test]
    fn test_blank_employee_field_is_reported_by_name() {
        let mut req = employee_request();
        req.position = "   ".to_string();

        match req.validate().unwrap_err() {
            LedgerError::InvalidInput { field, .. } => assert_eq!(field, "position"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_employee_request_into_record() {
        let record: EmployeeRecord = employee_request().into();
        assert_eq!(record, EmployeeRecord::new("E1", "Ann", "HR", "Clerk", "a@x.com"));
    }

    #[test]
    fn test_payroll_amounts_default_to_zero() {
        let json = r#"{"employee_id": "E1", "month": "August 2025", "basic": "1000"}"#;
        let req: NewPayrollRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.basic, Decimal::new(1000, 0));
        assert_eq!(req.deductions, Decimal::ZERO);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_payroll_request_rejects_negative_amount() {
        let json = r#"{"employee_id": "E1", "month": "August 2025", "deductions": "-5"}"#;
        let req: NewPayrollRequest = serde_json::from_str(json).unwrap();

        assert!(matches!(
            req.validate(),
            Err(LedgerError::InvalidInput { ref field, .. }) if field == "deductions"
        ));
    }

    #[test]
    fn test_payroll_request_requires_month() {
        let json = r#"{"employee_id": "E1", "month": ""}"#;
        let req: NewPayrollRequest = serde_json::from_str(json).unwrap();

        assert!(matches!(
            req.validate(),
            Err(LedgerError::InvalidInput { ref field, .. }) if field == "month"
        ));
    }
}
