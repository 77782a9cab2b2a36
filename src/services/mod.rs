pub mod holiday_calendar;
pub mod submission;

pub use holiday_calendar::HolidayCalendar;
pub use submission::LeaveSubmissionService;
