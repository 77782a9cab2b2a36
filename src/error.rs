use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::backend::BackendError;
use crate::handlers::shared::ApiResponse;
use crate::leave::LeaveType;

/// Form inputs that must be filled before a request can be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    LeaveType,
    StartDate,
    EndDate,
    Reason,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FormField::LeaveType => "leave type",
            FormField::StartDate => "start date",
            FormField::EndDate => "end date",
            FormField::Reason => "reason",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    MissingField,
    InvalidRange,
    InsufficientBalance,
    NoWorkingDays,
    NoApprovers,
    PersistenceFailure,
}

/// Everything that can stop a leave request. `Display` is the message shown
/// to the employee.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeaveError {
    #[error("Please fill in the {0}")]
    MissingField(FormField),

    #[error("End date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Insufficient {leave_type} balance: {requested} day(s) requested, {available} available")]
    InsufficientBalance {
        leave_type: LeaveType,
        available: f64,
        requested: u32,
    },

    #[error("No working days in the selected range")]
    NoWorkingDays,

    #[error("No HR or HOD approvers are configured")]
    NoApprovers,

    #[error("Failed to submit leave request: {0}")]
    PersistenceFailure(String),
}

impl LeaveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeaveError::MissingField(_) => ErrorKind::MissingField,
            LeaveError::InvalidRange { .. } => ErrorKind::InvalidRange,
            LeaveError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            LeaveError::NoWorkingDays => ErrorKind::NoWorkingDays,
            LeaveError::NoApprovers => ErrorKind::NoApprovers,
            LeaveError::PersistenceFailure(_) => ErrorKind::PersistenceFailure,
        }
    }

    /// Rejections raised before any write was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MissingField
                | ErrorKind::InvalidRange
                | ErrorKind::InsufficientBalance
                | ErrorKind::NoWorkingDays
        )
    }
}

impl From<BackendError> for LeaveError {
    fn from(error: BackendError) -> Self {
        LeaveError::PersistenceFailure(error.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Leave(#[from] LeaveError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized access")]
    Unauthorized,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Leave(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            AppError::Leave(LeaveError::NoApprovers) => StatusCode::CONFLICT,
            AppError::Leave(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        if status_code.is_server_error() {
            log::error!("Request failed with status {}: {}", status_code, error_message);
        } else {
            log::warn!("Request rejected with status {}: {}", status_code, error_message);
        }

        match self {
            AppError::Leave(err) => {
                let mut detail = json!({ "kind": err.kind() });
                if let LeaveError::InsufficientBalance { available, .. } = err {
                    detail["available"] = json!(available);
                }
                HttpResponse::build(status_code)
                    .json(ApiResponse::error_with_data(detail, &error_message))
            }
            _ => HttpResponse::build(status_code).json(ApiResponse::<()>::error(&error_message)),
        }
    }
}
