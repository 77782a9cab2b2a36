use chrono::NaiveDate;

use super::balance::LeaveBalance;
use super::models::LeaveForm;
use super::types::LeaveType;
use crate::error::{FormField, LeaveError};

/// A form whose required fields are present and whose range is ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedForm {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Field presence and range order. Needs no backend data, so it runs before
/// anything is fetched.
pub fn check_form(form: &LeaveForm) -> Result<CheckedForm, LeaveError> {
    let leave_type = form
        .leave_type
        .ok_or(LeaveError::MissingField(FormField::LeaveType))?;
    let start_date = form
        .start_date
        .ok_or(LeaveError::MissingField(FormField::StartDate))?;
    let end_date = form
        .end_date
        .ok_or(LeaveError::MissingField(FormField::EndDate))?;

    let reason = form.reason.trim();
    if reason.is_empty() {
        return Err(LeaveError::MissingField(FormField::Reason));
    }

    if end_date < start_date {
        return Err(LeaveError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }

    Ok(CheckedForm {
        leave_type,
        start_date,
        end_date,
        reason: reason.to_string(),
    })
}

/// Exempt types always pass; the rest need `duration` days on the ledger.
pub fn check_balance(
    leave_type: LeaveType,
    duration: u32,
    balance: &LeaveBalance,
) -> Result<(), LeaveError> {
    if leave_type.is_balance_exempt() {
        return Ok(());
    }

    let available = balance.available(leave_type);
    if available < f64::from(duration) {
        return Err(LeaveError::InsufficientBalance {
            leave_type,
            available,
            requested: duration,
        });
    }

    Ok(())
}

/// Full pre-submission decision over already fetched data. `submit` runs the
/// two halves separately so field errors surface before any lookup; callers
/// that already hold the duration and balance use this in one step.
pub fn validate(
    form: &LeaveForm,
    duration: u32,
    balance: &LeaveBalance,
) -> Result<CheckedForm, LeaveError> {
    let checked = check_form(form)?;
    check_balance(checked.leave_type, duration, balance)?;
    Ok(checked)
}
