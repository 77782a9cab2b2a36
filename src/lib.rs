pub mod backend;
pub mod calendar;
pub mod config;
pub mod error;
pub mod handlers;
pub mod leave;
pub mod middleware;
pub mod routes;
pub mod services;

use std::sync::Arc;

pub use backend::InMemoryBackend;
pub use config::Config;
pub use error::{AppError, ErrorKind, LeaveError};
pub use services::{HolidayCalendar, LeaveSubmissionService};

/// Wires every collaborator of the submission service to one backend.
pub fn leave_service(config: &Config, backend: InMemoryBackend) -> LeaveSubmissionService {
    let backend = Arc::new(backend);
    let calendar = HolidayCalendar::new(backend.clone(), config.holiday_cache_ttl());
    LeaveSubmissionService::new(
        config.tenant_id.clone(),
        calendar,
        backend.clone(),
        backend.clone(),
        backend,
    )
}
