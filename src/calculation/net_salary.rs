//! Net salary computation.
//!
//! Net salary is basic pay plus allowances plus overtime pay, less deductions.
//! The arithmetic is exact decimal arithmetic; nothing is rounded here.
//! Results that do not fit in a `Decimal` are rejected, never wrapped.

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

fn out_of_range(field: &str) -> LedgerError {
    LedgerError::invalid_input(field, "amount is out of range")
}

/// Calculates overtime pay as hours multiplied by the hourly overtime rate.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::overtime_pay;
/// use rust_decimal::Decimal;
///
/// let pay = overtime_pay(Decimal::new(10, 0), Decimal::new(5, 0))?;
/// assert_eq!(pay, Decimal::new(50, 0));
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
///
/// # Errors
///
/// Returns [`LedgerError::InvalidInput`] for `overtime_pay` when the product
/// overflows.
pub fn overtime_pay(overtime_hours: Decimal, overtime_rate: Decimal) -> LedgerResult<Decimal> {
    overtime_hours
        .checked_mul(overtime_rate)
        .ok_or_else(|| out_of_range("overtime_pay"))
}

/// Computes the net salary for one payroll entry.
///
/// `net = basic + allowance + overtime_hours * overtime_rate - deductions`
///
/// The result is negative when deductions exceed earnings; that is a valid
/// outcome and is not clamped.
///
/// # Examples
///
/// ## Typical month
///
/// ```
/// use payroll_ledger::calculation::compute_net;
/// use rust_decimal::Decimal;
///
/// let net = compute_net(
///     Decimal::new(1000, 0),
///     Decimal::new(100, 0),
///     Decimal::new(10, 0),
///     Decimal::new(5, 0),
///     Decimal::new(50, 0),
/// )?;
/// assert_eq!(net, Decimal::new(1100, 0));
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
///
/// ## Deductions only
///
/// ```
/// use payroll_ledger::calculation::compute_net;
/// use rust_decimal::Decimal;
///
/// let zero = Decimal::ZERO;
/// let net = compute_net(zero, zero, zero, zero, Decimal::new(500, 0))?;
/// assert_eq!(net, Decimal::new(-500, 0));
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
///
/// # Errors
///
/// Returns [`LedgerError::InvalidInput`] when an intermediate sum or the
/// overtime product does not fit in a `Decimal`.
pub fn compute_net(
    basic: Decimal,
    allowance: Decimal,
    overtime_hours: Decimal,
    overtime_rate: Decimal,
    deductions: Decimal,
) -> LedgerResult<Decimal> {
    let overtime = overtime_pay(overtime_hours, overtime_rate)?;
    basic
        .checked_add(allowance)
        .and_then(|gross| gross.checked_add(overtime))
        .and_then(|gross| gross.checked_sub(deductions))
        .ok_or_else(|| out_of_range("net_salary"))
}
