pub mod balance;
mod macros;
pub mod models;
pub mod types;
pub mod validator;

pub use balance::{InvalidBalance, LeaveBalance};
pub use models::{EmployeeProfile, LeaveForm, LeaveRequest, LeaveRequestId, NewLeaveRequest};
pub use types::{Gender, LeaveStatus, LeaveType, Role};
pub use validator::{check_balance, check_form, validate, CheckedForm};
