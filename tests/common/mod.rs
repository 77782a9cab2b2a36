#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use fake::faker::name::en::Name;
use fake::Fake;

use leave_desk::backend::{
    BackendError, EmployeeDirectory, HolidayProvider, InMemoryBackend, LeaveStore, RoleDirectory,
    SeedData, SeedEmployee,
};
use leave_desk::calendar::HolidaySet;
use leave_desk::leave::{
    EmployeeProfile, Gender, LeaveBalance, LeaveForm, LeaveRequest, LeaveRequestId, LeaveType,
    NewLeaveRequest, Role,
};
use leave_desk::{Config, HolidayCalendar, LeaveSubmissionService};

pub const TENANT: &str = "acme";

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        tenant_id: TENANT.to_string(),
        holiday_cache_ttl_secs: 60,
        seed_file: None,
        client_base_url: "http://localhost:3000".to_string(),
    }
}

pub fn form(leave_type: LeaveType, start: NaiveDate, end: NaiveDate, reason: &str) -> LeaveForm {
    LeaveForm {
        leave_type: Some(leave_type),
        start_date: Some(start),
        end_date: Some(end),
        reason: reason.to_string(),
    }
}

pub fn employee(user_id: &str, roles: Vec<Role>, balance: &[(LeaveType, f64)]) -> SeedEmployee {
    SeedEmployee {
        user_id: user_id.to_string(),
        tenant_id: TENANT.to_string(),
        profile: Some(EmployeeProfile {
            name: Name().fake(),
            code: format!("EMP-{}", user_id.to_uppercase()),
            gender: None,
        }),
        roles,
        balance: LeaveBalance::from_entries(balance.iter().copied()).unwrap(),
    }
}

/// One employee with sick and privilege leave, one HR and one HOD holder,
/// and 2024-01-26 as a company holiday.
pub fn seeded_backend() -> InMemoryBackend {
    let mut holidays = std::collections::HashMap::new();
    holidays.insert(
        TENANT.to_string(),
        HolidaySet::from_keys(["2024-01-26"]).unwrap(),
    );

    let mut asha = employee(
        "asha",
        vec![Role::Employee],
        &[(LeaveType::Sl, 2.0), (LeaveType::Pl, 10.0)],
    );
    if let Some(profile) = asha.profile.as_mut() {
        profile.gender = Some(Gender::Female);
    }

    InMemoryBackend::from_seed(SeedData {
        holidays,
        employees: vec![
            asha,
            employee("hr-1", vec![Role::Hr], &[]),
            employee("hod-1", vec![Role::Hod], &[]),
        ],
    })
}

pub fn service_for(backend: InMemoryBackend) -> LeaveSubmissionService {
    leave_desk::leave_service(&test_config(), backend)
}

/// Role directory returning fixed lists and counting lookups.
pub struct StaticRoles {
    pub hr: Vec<String>,
    pub hod: Vec<String>,
    pub calls: AtomicUsize,
}

impl StaticRoles {
    pub fn new(hr: &[&str], hod: &[&str]) -> Self {
        Self {
            hr: hr.iter().map(|id| id.to_string()).collect(),
            hod: hod.iter().map(|id| id.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RoleDirectory for StaticRoles {
    async fn fetch_user_ids_by_role(
        &self,
        _tenant_id: &str,
        role: Role,
    ) -> Result<Vec<String>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(match role {
            Role::Hr => self.hr.clone(),
            Role::Hod => self.hod.clone(),
            Role::Employee => Vec::new(),
        })
    }
}

/// Store that records writes, or rejects them when `fail_with` is set.
#[derive(Default)]
pub struct RecordingStore {
    pub writes: Mutex<Vec<NewLeaveRequest>>,
    pub fail_with: Option<String>,
}

impl RecordingStore {
    pub fn failing(message: &str) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn last_write(&self) -> Option<NewLeaveRequest> {
        self.writes.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LeaveStore for RecordingStore {
    async fn create_leave_request(
        &self,
        record: NewLeaveRequest,
    ) -> Result<LeaveRequestId, BackendError> {
        if let Some(message) = &self.fail_with {
            return Err(BackendError::WriteRejected(message.clone()));
        }
        self.writes.lock().unwrap().push(record);
        Ok(uuid::Uuid::new_v4())
    }

    async fn list_by_employee(&self, _employee_id: &str) -> Result<Vec<LeaveRequest>, BackendError> {
        Ok(Vec::new())
    }

    async fn list_pending_for_approver(
        &self,
        _approver_id: &str,
    ) -> Result<Vec<LeaveRequest>, BackendError> {
        Ok(Vec::new())
    }
}

/// Holiday provider and employee directory that count every lookup.
#[derive(Default)]
pub struct CountingDirectory {
    pub inner: InMemoryBackend,
    pub calls: AtomicUsize,
}

impl CountingDirectory {
    pub fn over(inner: InMemoryBackend) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidayProvider for CountingDirectory {
    async fn fetch_holidays(&self, tenant_id: &str) -> Result<HolidaySet, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_holidays(tenant_id).await
    }
}

#[async_trait]
impl EmployeeDirectory for CountingDirectory {
    async fn fetch_employee_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<EmployeeProfile>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_employee_by_user_id(user_id).await
    }

    async fn fetch_leave_balance(&self, user_id: &str) -> Result<LeaveBalance, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_leave_balance(user_id).await
    }
}

/// Service over explicit doubles instead of a single backend.
pub fn service_with(
    directory: Arc<CountingDirectory>,
    roles: Arc<StaticRoles>,
    store: Arc<RecordingStore>,
) -> LeaveSubmissionService {
    let calendar = HolidayCalendar::new(directory.clone(), Duration::from_secs(60));
    LeaveSubmissionService::new(TENANT, calendar, directory, roles, store)
}
