use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BackendError, EmployeeDirectory, HolidayProvider, LeaveStore, RoleDirectory};
use crate::calendar::HolidaySet;
use crate::leave::{EmployeeProfile, LeaveBalance, LeaveRequest, LeaveRequestId, NewLeaveRequest, Role};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedEmployee {
    pub user_id: String,
    pub tenant_id: String,
    /// Absent when the directory has an account but no HR profile yet.
    #[serde(default)]
    pub profile: Option<EmployeeProfile>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub balance: LeaveBalance,
}

/// Initial contents for [`InMemoryBackend`], usually read from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    /// Holiday keys per tenant.
    #[serde(default)]
    pub holidays: HashMap<String, HolidaySet>,
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
}

#[derive(Default)]
struct Collections {
    holidays: RwLock<HashMap<String, HolidaySet>>,
    employees: RwLock<HashMap<String, SeedEmployee>>,
    leave_requests: RwLock<Vec<LeaveRequest>>,
}

/// Process-local stand-in for the hosted document store.
///
/// Each collection sits behind its own lock, held for a single read or write.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    inner: Arc<Collections>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let employees = seed
            .employees
            .into_iter()
            .map(|employee| (employee.user_id.clone(), employee))
            .collect();

        Self {
            inner: Arc::new(Collections {
                holidays: RwLock::new(seed.holidays),
                employees: RwLock::new(employees),
                leave_requests: RwLock::new(Vec::new()),
            }),
        }
    }

    pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed: SeedData = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        log::info!(
            "Loaded seed data: {} employees, {} holiday calendars",
            seed.employees.len(),
            seed.holidays.len()
        );

        Ok(Self::from_seed(seed))
    }

    pub async fn set_holidays(&self, tenant_id: &str, holidays: HolidaySet) {
        self.inner
            .holidays
            .write()
            .await
            .insert(tenant_id.to_string(), holidays);
    }

    pub async fn upsert_employee(&self, employee: SeedEmployee) {
        self.inner
            .employees
            .write()
            .await
            .insert(employee.user_id.clone(), employee);
    }

    /// Snapshot of every stored request in write order.
    pub async fn leave_requests(&self) -> Vec<LeaveRequest> {
        self.inner.leave_requests.read().await.clone()
    }
}

#[async_trait]
impl HolidayProvider for InMemoryBackend {
    async fn fetch_holidays(&self, tenant_id: &str) -> Result<HolidaySet, BackendError> {
        Ok(self
            .inner
            .holidays
            .read()
            .await
            .get(tenant_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryBackend {
    async fn fetch_employee_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<EmployeeProfile>, BackendError> {
        Ok(self
            .inner
            .employees
            .read()
            .await
            .get(user_id)
            .and_then(|employee| employee.profile.clone()))
    }

    async fn fetch_leave_balance(&self, user_id: &str) -> Result<LeaveBalance, BackendError> {
        Ok(self
            .inner
            .employees
            .read()
            .await
            .get(user_id)
            .map(|employee| employee.balance.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl RoleDirectory for InMemoryBackend {
    async fn fetch_user_ids_by_role(
        &self,
        tenant_id: &str,
        role: Role,
    ) -> Result<Vec<String>, BackendError> {
        let employees = self.inner.employees.read().await;
        let mut user_ids: Vec<String> = employees
            .values()
            .filter(|employee| employee.tenant_id == tenant_id && employee.roles.contains(&role))
            .map(|employee| employee.user_id.clone())
            .collect();
        user_ids.sort();
        Ok(user_ids)
    }
}

#[async_trait]
impl LeaveStore for InMemoryBackend {
    async fn create_leave_request(
        &self,
        record: NewLeaveRequest,
    ) -> Result<LeaveRequestId, BackendError> {
        let id = Uuid::new_v4();
        let request = LeaveRequest::from_new(id, record, Utc::now());
        self.inner.leave_requests.write().await.push(request);
        Ok(id)
    }

    async fn list_by_employee(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, BackendError> {
        Ok(self
            .inner
            .leave_requests
            .read()
            .await
            .iter()
            .rev()
            .filter(|request| request.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list_pending_for_approver(
        &self,
        approver_id: &str,
    ) -> Result<Vec<LeaveRequest>, BackendError> {
        Ok(self
            .inner
            .leave_requests
            .read()
            .await
            .iter()
            .filter(|request| request.awaits(approver_id))
            .cloned()
            .collect())
    }
}
