use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::error::AppError;

pub const EMPLOYEE_HEADER: &str = "x-employee-id";

/// The caller's employee id, taken from `X-Employee-Id`.
///
/// Authentication happens in front of this service; handlers only need the
/// identity it resolved, passed along explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeIdentity(pub String);

impl EmployeeIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for EmployeeIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req
            .headers()
            .get(EMPLOYEE_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| EmployeeIdentity(id.to_string()));

        ready(identity.ok_or(AppError::Unauthorized))
    }
}
