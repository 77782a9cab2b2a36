use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::LeaveType;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {leave_type} balance {days}: must be a non-negative multiple of 0.5")]
pub struct InvalidBalance {
    pub leave_type: LeaveType,
    pub days: f64,
}

/// Remaining entitlement per leave type, in half-day steps.
///
/// A type with no entry has nothing available. The ledger is only ever
/// changed by the approval process; the submission path reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<LeaveType, f64>",
    into = "HashMap<LeaveType, f64>"
)]
pub struct LeaveBalance {
    entries: HashMap<LeaveType, f64>,
}

fn is_half_day_step(days: f64) -> bool {
    days.is_finite() && days >= 0.0 && (days * 2.0).fract() == 0.0
}

impl LeaveBalance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Result<Self, InvalidBalance>
    where
        I: IntoIterator<Item = (LeaveType, f64)>,
    {
        let mut balance = Self::new();
        for (leave_type, days) in entries {
            balance.set(leave_type, days)?;
        }
        Ok(balance)
    }

    pub fn set(&mut self, leave_type: LeaveType, days: f64) -> Result<(), InvalidBalance> {
        if !is_half_day_step(days) {
            return Err(InvalidBalance { leave_type, days });
        }
        self.entries.insert(leave_type, days);
        Ok(())
    }

    pub fn get(&self, leave_type: LeaveType) -> Option<f64> {
        self.entries.get(&leave_type).copied()
    }

    /// Days available for `leave_type`, 0 when the ledger has no entry.
    pub fn available(&self, leave_type: LeaveType) -> f64 {
        self.get(leave_type).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<HashMap<LeaveType, f64>> for LeaveBalance {
    type Error = InvalidBalance;

    fn try_from(entries: HashMap<LeaveType, f64>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<LeaveBalance> for HashMap<LeaveType, f64> {
    fn from(balance: LeaveBalance) -> Self {
        balance.entries
    }
}
