use actix_web::{web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::calendar::{date_key, total_calendar_days};
use crate::error::{AppError, LeaveError};
use crate::handlers::identity::EmployeeIdentity;
use crate::handlers::shared::ApiResponse;
use crate::leave::{Gender, LeaveForm, LeaveType};
use crate::middleware::CorrelationIdExt;
use crate::services::LeaveSubmissionService;

#[derive(Debug, Deserialize)]
pub struct LeaveTypesQuery {
    pub gender: Option<String>,
}

/// Longest range the preview endpoints will walk.
pub const MAX_RANGE_DAYS: u32 = 366;

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRangeQuery {
    fn ordered(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        if self.end_date < self.start_date {
            return Err(LeaveError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            }
            .into());
        }
        if total_calendar_days(self.start_date, self.end_date) > MAX_RANGE_DAYS {
            return Err(AppError::BadRequest(format!(
                "Date range may span at most {} days",
                MAX_RANGE_DAYS
            )));
        }
        Ok((self.start_date, self.end_date))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeOption {
    pub code: LeaveType,
    pub label: &'static str,
    pub is_paid: bool,
    pub balance_exempt: bool,
}

impl From<LeaveType> for LeaveTypeOption {
    fn from(leave_type: LeaveType) -> Self {
        Self {
            code: leave_type,
            label: leave_type.label(),
            is_paid: leave_type.is_paid(),
            balance_exempt: leave_type.is_balance_exempt(),
        }
    }
}

/// Leave types the form should offer.
///
/// An explicit `gender` wins; otherwise the caller's profile decides. With
/// neither, gender-restricted types are left out.
pub async fn list_leave_types(
    service: web::Data<LeaveSubmissionService>,
    identity: Option<EmployeeIdentity>,
    query: web::Query<LeaveTypesQuery>,
) -> Result<HttpResponse, AppError> {
    let gender = match query.gender.as_deref() {
        Some(raw) => raw.parse::<Gender>().map_err(AppError::BadRequest)?,
        None => match identity {
            Some(identity) => service
                .employee_profile(identity.as_str())
                .await?
                .gender
                .unwrap_or(Gender::Other),
            None => Gender::Other,
        },
    };

    let options: Vec<LeaveTypeOption> = LeaveType::selectable_for(gender)
        .into_iter()
        .map(LeaveTypeOption::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(options)))
}

pub async fn preview_duration(
    service: web::Data<LeaveSubmissionService>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let (start, end) = query.ordered()?;
    let summary = service.preview(start, end).await?;
    let message = summary.to_string();

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(summary, &message)))
}

pub async fn list_excluded_dates(
    service: web::Data<LeaveSubmissionService>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let (start, end) = query.ordered()?;
    let dates: Vec<String> = service
        .excluded_dates(start, end)
        .await?
        .into_iter()
        .map(date_key)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(dates)))
}

pub async fn submit_leave_request(
    req: HttpRequest,
    service: web::Data<LeaveSubmissionService>,
    identity: EmployeeIdentity,
    form: web::Json<LeaveForm>,
) -> Result<HttpResponse, AppError> {
    let correlation_id = req.correlation_id().unwrap_or_default();

    match service.submit(identity.as_str(), &form).await {
        Ok(id) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            json!({ "id": id }),
            "Leave request submitted",
        ))),
        Err(err) => {
            log::warn!(
                "Leave submission by {} rejected ({:?}) correlation_id={}",
                identity.as_str(),
                err.kind(),
                correlation_id
            );
            Err(err.into())
        }
    }
}

pub async fn list_my_leave_requests(
    service: web::Data<LeaveSubmissionService>,
    identity: EmployeeIdentity,
) -> Result<HttpResponse, AppError> {
    let requests = service.list_for_employee(identity.as_str()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(requests)))
}

pub async fn list_pending_approvals(
    service: web::Data<LeaveSubmissionService>,
    identity: EmployeeIdentity,
) -> Result<HttpResponse, AppError> {
    let requests = service.pending_for_approver(identity.as_str()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(requests)))
}
