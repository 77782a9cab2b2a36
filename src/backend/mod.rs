//! Seams to the hosted backend that owns holidays, employees, roles and the
//! leave request collection.

use async_trait::async_trait;
use thiserror::Error;

use crate::calendar::HolidaySet;
use crate::leave::{EmployeeProfile, LeaveBalance, LeaveRequest, LeaveRequestId, NewLeaveRequest, Role};

pub mod memory;

pub use memory::{InMemoryBackend, SeedData, SeedEmployee};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("write rejected: {0}")]
    WriteRejected(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait HolidayProvider: Send + Sync {
    async fn fetch_holidays(&self, tenant_id: &str) -> Result<HolidaySet, BackendError>;
}

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn fetch_employee_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<EmployeeProfile>, BackendError>;

    /// Unknown employees have an empty ledger.
    async fn fetch_leave_balance(&self, user_id: &str) -> Result<LeaveBalance, BackendError>;
}

#[async_trait]
pub trait RoleDirectory: Send + Sync {
    async fn fetch_user_ids_by_role(
        &self,
        tenant_id: &str,
        role: Role,
    ) -> Result<Vec<String>, BackendError>;
}

#[async_trait]
pub trait LeaveStore: Send + Sync {
    /// Writes the record and returns the generated id.
    async fn create_leave_request(
        &self,
        record: NewLeaveRequest,
    ) -> Result<LeaveRequestId, BackendError>;

    /// Newest first.
    async fn list_by_employee(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, BackendError>;

    /// Pending requests naming `approver_id`, oldest first.
    async fn list_pending_for_approver(
        &self,
        approver_id: &str,
    ) -> Result<Vec<LeaveRequest>, BackendError>;
}
