use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::types::{Gender, LeaveStatus, LeaveType};

pub type LeaveRequestId = Uuid;

/// Leave form state as the client holds it. Any field may still be blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub leave_type: Option<LeaveType>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub reason: String,
}

/// Form controls post an unset select or date picker as `""`. Treat that like
/// an absent key so the field checks report it.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl EmployeeProfile {
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Placeholder used when the directory has no record for the identity.
    pub fn unknown(employee_id: &str) -> Self {
        Self {
            name: Self::UNKNOWN_NAME.to_string(),
            code: employee_id.to_string(),
            gender: None,
        }
    }
}

/// A request ready to be written; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    pub employee_id: String,
    pub employee_name: String,
    pub employee_code: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: u32,
    pub reason: String,
    pub status: LeaveStatus,
    pub is_paid: bool,
    pub approver_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub employee_id: String,
    pub employee_name: String,
    pub employee_code: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: u32,
    pub reason: String,
    pub status: LeaveStatus,
    pub is_paid: bool,
    pub approver_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn from_new(id: LeaveRequestId, record: NewLeaveRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            employee_id: record.employee_id,
            employee_name: record.employee_name,
            employee_code: record.employee_code,
            leave_type: record.leave_type,
            start_date: record.start_date,
            end_date: record.end_date,
            duration: record.duration,
            reason: record.reason,
            status: record.status,
            is_paid: record.is_paid,
            approver_ids: record.approver_ids,
            created_at,
        }
    }

    pub fn awaits(&self, approver_id: &str) -> bool {
        self.status == LeaveStatus::Pending && self.approver_ids.iter().any(|id| id == approver_id)
    }
}
