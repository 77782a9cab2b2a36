pub mod identity;
pub mod leave;
pub mod shared;

pub use identity::{EmployeeIdentity, EMPLOYEE_HEADER};
pub use shared::ApiResponse;
