use std::io::Write;

use leave_desk::backend::{EmployeeDirectory, HolidayProvider, InMemoryBackend, RoleDirectory};
use leave_desk::leave::{Gender, LeaveType, Role};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

mod common;

const SEED: &str = r#"{
  "holidays": { "acme": ["2024-01-26", "2024-08-15"] },
  "employees": [
    {
      "userId": "asha",
      "tenantId": "acme",
      "profile": { "name": "Asha Rao", "code": "E-104", "gender": "FEMALE" },
      "roles": ["employee"],
      "balance": { "SL": 2, "PL": 10.5 }
    },
    { "userId": "meera", "tenantId": "acme", "roles": ["hr", "hod"] }
  ]
}"#;

fn seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_load_seed_file() {
    common::setup_test_env();
    let file = seed_file(SEED);

    let backend = InMemoryBackend::load_seed_file(file.path()).unwrap();

    let holidays = backend.fetch_holidays("acme").await.unwrap();
    assert_eq!(holidays.keys(), vec!["2024-01-26", "2024-08-15"]);

    let profile = backend.fetch_employee_by_user_id("asha").await.unwrap().unwrap();
    assert_eq!(profile.code, "E-104");
    assert_eq!(profile.gender, Some(Gender::Female));

    let balance = backend.fetch_leave_balance("asha").await.unwrap();
    assert_eq!(balance.available(LeaveType::Pl), 10.5);

    assert_eq!(backend.fetch_employee_by_user_id("meera").await.unwrap(), None);
    assert_eq!(
        backend.fetch_user_ids_by_role("acme", Role::Hod).await.unwrap(),
        vec!["meera"]
    );
}

#[test]
fn test_seed_with_bad_holiday_is_rejected() {
    let file = seed_file(r#"{ "holidays": { "acme": ["15/08/2024"] } }"#);

    let err = InMemoryBackend::load_seed_file(file.path()).err().unwrap();
    assert!(err.to_string().contains("Failed to parse seed file"));
}

#[test]
fn test_seed_with_quarter_day_balance_is_rejected() {
    let file = seed_file(
        r#"{ "employees": [{ "userId": "x", "tenantId": "acme", "balance": { "CL": 0.25 } }] }"#,
    );

    assert!(InMemoryBackend::load_seed_file(file.path()).is_err());
}

#[test]
fn test_missing_seed_file_is_an_error() {
    let err = InMemoryBackend::load_seed_file("/definitely/not/here.json").err().unwrap();
    assert!(err.to_string().contains("Failed to read seed file"));
}
