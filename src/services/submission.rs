use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::backend::{BackendError, EmployeeDirectory, LeaveStore, RoleDirectory};
use crate::calendar::{excluded_dates_in, DurationSummary};
use crate::error::LeaveError;
use crate::leave::{
    check_balance, check_form, EmployeeProfile, LeaveForm, LeaveRequest, LeaveRequestId,
    LeaveStatus, NewLeaveRequest, Role,
};
use crate::services::HolidayCalendar;

/// Files leave requests for one tenant.
///
/// Nothing is written unless every check and lookup before the write passes.
/// There is no retry and no duplicate suppression: a failed submit is
/// reported and the employee submits again.
#[derive(Clone)]
pub struct LeaveSubmissionService {
    tenant_id: String,
    calendar: HolidayCalendar,
    employees: Arc<dyn EmployeeDirectory>,
    roles: Arc<dyn RoleDirectory>,
    store: Arc<dyn LeaveStore>,
}

impl LeaveSubmissionService {
    pub fn new(
        tenant_id: impl Into<String>,
        calendar: HolidayCalendar,
        employees: Arc<dyn EmployeeDirectory>,
        roles: Arc<dyn RoleDirectory>,
        store: Arc<dyn LeaveStore>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            calendar,
            employees,
            roles,
            store,
        }
    }

    pub async fn submit(
        &self,
        employee_id: &str,
        form: &LeaveForm,
    ) -> Result<LeaveRequestId, LeaveError> {
        let checked = check_form(form)?;

        let holidays = self.calendar.holidays(&self.tenant_id).await?;
        let summary = DurationSummary::compute(checked.start_date, checked.end_date, &holidays);
        if !summary.has_working_days() {
            return Err(LeaveError::NoWorkingDays);
        }
        let duration = summary.working_days;

        let balance = self.employees.fetch_leave_balance(employee_id).await?;
        check_balance(checked.leave_type, duration, &balance)?;

        let profile = self.employee_profile(employee_id).await?;
        let approver_ids = self.approver_ids().await?;
        if approver_ids.is_empty() {
            log::warn!(
                "Leave request from {} blocked: tenant {} has no hr/hod holders",
                employee_id,
                self.tenant_id
            );
            return Err(LeaveError::NoApprovers);
        }

        let record = NewLeaveRequest {
            employee_id: employee_id.to_string(),
            employee_name: profile.name,
            employee_code: profile.code,
            leave_type: checked.leave_type,
            start_date: checked.start_date,
            end_date: checked.end_date,
            duration,
            reason: checked.reason,
            status: LeaveStatus::Pending,
            is_paid: checked.leave_type.is_paid(),
            approver_ids,
        };

        let id = self.store.create_leave_request(record).await.map_err(|err| {
            log::error!("Failed to store leave request for {}: {}", employee_id, err);
            LeaveError::PersistenceFailure(err.to_string())
        })?;

        log::info!(
            "Leave request {} filed by {}: {} x{} day(s) from {} to {}",
            id,
            employee_id,
            checked.leave_type,
            duration,
            checked.start_date,
            checked.end_date
        );

        Ok(id)
    }

    /// Counts shown under the date pickers before the form is submitted.
    pub async fn preview(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DurationSummary, BackendError> {
        let holidays = self.calendar.holidays(&self.tenant_id).await?;
        Ok(DurationSummary::compute(start, end, &holidays))
    }

    pub async fn excluded_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, BackendError> {
        let holidays = self.calendar.holidays(&self.tenant_id).await?;
        Ok(excluded_dates_in(start, end, &holidays))
    }

    pub async fn employee_profile(&self, employee_id: &str) -> Result<EmployeeProfile, BackendError> {
        let profile = self.employees.fetch_employee_by_user_id(employee_id).await?;
        Ok(profile.unwrap_or_else(|| {
            log::debug!("No profile for {}, filing under placeholder", employee_id);
            EmployeeProfile::unknown(employee_id)
        }))
    }

    pub async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, BackendError> {
        self.store.list_by_employee(employee_id).await
    }

    pub async fn pending_for_approver(
        &self,
        approver_id: &str,
    ) -> Result<Vec<LeaveRequest>, BackendError> {
        self.store.list_pending_for_approver(approver_id).await
    }

    /// Holders of every approver role, de-duplicated in first-seen order.
    async fn approver_ids(&self) -> Result<Vec<String>, BackendError> {
        let [hr_role, hod_role] = Role::APPROVERS;
        let (hr, hod) = futures::try_join!(
            self.roles.fetch_user_ids_by_role(&self.tenant_id, hr_role),
            self.roles.fetch_user_ids_by_role(&self.tenant_id, hod_role),
        )?;
        Ok(merge_approvers([hr, hod]))
    }
}

fn merge_approvers<I>(groups: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut seen = HashSet::new();
    groups
        .into_iter()
        .flatten()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
