//! Payroll entry model and its inputs.
//!
//! A [`PayrollEntry`] is one row of the `payroll` table. Its net salary is
//! computed from a [`PayrollInput`] when the entry is created and stored
//! alongside the inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{compute_net, overtime_pay};
use crate::error::{LedgerError, LedgerResult};
use crate::store::{PAYROLL, Row, TableRecord, TableSchema, decimal_cell, text_cell};

/// The five numeric inputs of a payroll calculation.
///
/// Every field must be zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Basic salary for the month.
    pub basic: Decimal,
    /// Allowances paid on top of the basic salary.
    pub allowance: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Pay per overtime hour.
    pub overtime_rate: Decimal,
    /// Total deductions.
    pub deductions: Decimal,
}

impl PayrollInput {
    /// Returns the overtime component of the pay.
    pub fn overtime_pay(&self) -> LedgerResult<Decimal> {
        overtime_pay(self.overtime_hours, self.overtime_rate)
    }

    /// Returns the net salary these inputs produce, or
    /// [`LedgerError::InvalidInput`] if it does not fit in a `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::PayrollInput;
    /// use rust_decimal::Decimal;
    ///
    /// let input = PayrollInput {
    ///     basic: Decimal::new(1000, 0),
    ///     allowance: Decimal::new(100, 0),
    ///     overtime_hours: Decimal::new(10, 0),
    ///     overtime_rate: Decimal::new(5, 0),
    ///     deductions: Decimal::new(50, 0),
    /// };
    /// assert_eq!(input.net_salary()?, Decimal::new(1100, 0));
    /// # Ok::<(), payroll_ledger::error::LedgerError>(())
    /// ```
    pub fn net_salary(&self) -> LedgerResult<Decimal> {
        compute_net(
            self.basic,
            self.allowance,
            self.overtime_hours,
            self.overtime_rate,
            self.deductions,
        )
    }

    /// Named fields, in table column order.
    fn fields(&self) -> [(&'static str, Decimal); 5] {
        [
            ("basic", self.basic),
            ("allowance", self.allowance),
            ("overtime_hours", self.overtime_hours),
            ("overtime_rate", self.overtime_rate),
            ("deductions", self.deductions),
        ]
    }

    /// Rejects any negative field with [`LedgerError::InvalidInput`].
    pub fn validate(&self) -> LedgerResult<()> {
        match self.fields().into_iter().find(|(_, v)| v.is_sign_negative() && !v.is_zero()) {
            Some((field, value)) => Err(LedgerError::invalid_input(
                field,
                format!("must not be negative, got {}", value),
            )),
            None => Ok(()),
        }
    }
}

/// One computed payroll entry.
///
/// `net_salary` is fixed at creation time; loading an entry never recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// ID of the employee this entry was recorded for. Not checked against the directory.
    pub employee_id: String,
    /// Free-form month label, e.g. "August 2025".
    pub month: String,
    /// Basic salary for the month.
    pub basic: Decimal,
    /// Allowances paid on top of the basic salary.
    pub allowance: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Pay per overtime hour.
    pub overtime_rate: Decimal,
    /// Total deductions.
    pub deductions: Decimal,
    /// Computed net salary.
    pub net_salary: Decimal,
}

impl PayrollEntry {
    /// Builds an entry, computing its net salary from `input`.
    pub fn compute(
        employee_id: impl Into<String>,
        month: impl Into<String>,
        input: PayrollInput,
    ) -> LedgerResult<Self> {
        let net_salary = input.net_salary()?;
        Ok(Self {
            employee_id: employee_id.into(),
            month: month.into(),
            basic: input.basic,
            allowance: input.allowance,
            overtime_hours: input.overtime_hours,
            overtime_rate: input.overtime_rate,
            deductions: input.deductions,
            net_salary,
        })
    }

    /// The numeric inputs this entry was computed from.
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

impl TableRecord for PayrollEntry {
    const SCHEMA: TableSchema = PAYROLL;

    fn to_row(&self) -> Row {
        vec![
            self.employee_id.clone(),
            self.month.clone(),
            self.basic.to_string(),
            self.allowance.to_string(),
            self.overtime_hours.to_string(),
            self.overtime_rate.to_string(),
            self.deductions.to_string(),
            self.net_salary.to_string(),
        ]
    }

    fn from_row(row: &[String], index: usize) -> LedgerResult<Self> {
        let text = |column: &str| text_cell(&PAYROLL, row, index, column);
        let number = |column: &str| decimal_cell(&PAYROLL, row, index, column);
        Ok(Self {
            employee_id: text("ID")?,
            month: text("Month")?,
            basic: number("Basic")?,
            allowance: number("Allowance")?,
            overtime_hours: number("Overtime Hours")?,
            overtime_rate: number("Overtime Rate")?,
            deductions: number("Deductions")?,
            net_salary: number("Net Salary")?,
        })
    }
}
