//! Integration tests for the personnel record store.
//!
//! This test suite covers:
//! - Loading all four fixture files through the data source
//! - Employee line repair (quoted, unquoted, corrupted position)
//! - Full-replace reload semantics
//! - Fail-soft behaviour when files are missing
//! - The HTTP query API

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use personnel_records::api::{AppState, create_router};
use personnel_records::config::{ConfigLoader, DataSourceConfig};
use personnel_records::models::{RecordKind, YearMonth, field};
use personnel_records::store::{DataSource, Dataset, load_employees};

// =============================================================================
// Test Helpers
// =============================================================================

fn fixture_source() -> DataSource {
    let mut source = DataSource::new(DataSourceConfig::default());
    source.set_base_directory("tests/fixtures");
    source
}

fn fixture_dataset() -> Dataset {
    Dataset::load(&fixture_source()).expect("Failed to load fixtures")
}

fn june() -> YearMonth {
    YearMonth::new(2024, 6).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_router_for_test() -> Router {
    create_router(AppState::new(fixture_dataset()))
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_loads_every_fixture() {
    let dataset = fixture_dataset();
    assert_eq!(dataset.len(RecordKind::Employee), 5);
    assert_eq!(dataset.len(RecordKind::Attendance), 7);
    assert_eq!(dataset.len(RecordKind::LeaveRequest), 3);
    assert_eq!(dataset.len(RecordKind::Credential), 3);
    assert_eq!(dataset.reports().len(), 4);
}

#[test]
fn test_every_record_has_full_schema_width() {
    let dataset = fixture_dataset();
    for kind in RecordKind::ALL {
        for record in dataset.all(kind) {
            assert_eq!(record.values().len(), kind.schema().len());
        }
    }
}

#[test]
fn test_quoted_employee_line() {
    let employee = fixture_dataset().employee_by_id("10001").unwrap();
    assert_eq!(
        employee.text("Address"),
        Some("Valero Carpark Building Valero Street 1227, Makati City")
    );
    assert_eq!(employee.text(field::BASIC_SALARY), Some("90,000"));
    assert_eq!(employee.text("Gross Semi-monthly Rate"), Some("45,000"));
    assert_eq!(employee.text("Hourly Rate"), Some("535.71"));
}

#[test]
fn test_unquoted_employee_line_is_repaired() {
    let employee = fixture_dataset().employee_by_id("10002").unwrap();
    assert_eq!(
        employee.text("Address"),
        Some("San Antonio De Padua 2, Block 1 Lot 8 and 2, Dasmarinas, Cavite")
    );
    assert_eq!(employee.text("Phone Number"), Some("171-867-411"));
    assert_eq!(employee.text(field::POSITION), Some("Chief Operating Officer"));
    assert_eq!(
        employee.text(field::IMMEDIATE_SUPERVISOR),
        Some("Garcia, Manuel III")
    );
    assert_eq!(employee.text(field::BASIC_SALARY), Some("60,000"));
    assert_eq!(employee.text("Rice Subsidy"), Some("1,500"));
    assert_eq!(employee.text("Hourly Rate"), Some("357.14"));
}

#[test]
fn test_numeric_position_inferred_from_supervisor() {
    let employee = fixture_dataset().employee_by_id("10005").unwrap();
    assert_eq!(
        employee.text(field::POSITION),
        Some("IT Operations and Systems")
    );
    assert_eq!(employee.text(field::BASIC_SALARY), Some("52,670"));
}

#[test]
fn test_empty_position_inferred_from_salary_band() {
    let employee = fixture_dataset().employee_by_id("10020").unwrap();
    assert_eq!(employee.text(field::POSITION), Some("Team Leader"));
    assert_eq!(employee.text(field::BASIC_SALARY), Some("45,000"));
}

#[test]
fn test_employee_without_status_marker_uses_tokenizer() {
    let employee = fixture_dataset().employee_by_id("10021").unwrap();
    assert_eq!(employee.text("Address"), Some("Pasig City, Metro Manila"));
    assert_eq!(
        employee.text(field::IMMEDIATE_SUPERVISOR),
        Some("Reyes, Isabella")
    );
    assert_eq!(employee.text(field::BASIC_SALARY), Some("20000"));
}

#[test]
fn test_reports_count_blank_and_short_lines() {
    let dataset = fixture_dataset();
    let employees = dataset
        .reports()
        .iter()
        .find(|r| r.kind == RecordKind::Employee)
        .unwrap();
    assert_eq!(employees.lines_read, 6);
    assert_eq!(employees.loaded, 5);

    let leave = dataset
        .reports()
        .iter()
        .find(|r| r.kind == RecordKind::LeaveRequest)
        .unwrap();
    assert_eq!(leave.misaligned, 1);
}

#[test]
fn test_reload_replaces_instead_of_merging() {
    let source = fixture_source();
    let first = fixture_dataset();
    let second = first.reload_kind(&source, RecordKind::Employee).unwrap();
    let third = second.reload_kind(&source, RecordKind::Employee).unwrap();

    assert_eq!(first.all_employees(), second.all_employees());
    assert_eq!(second.all_employees(), third.all_employees());
    assert_eq!(third.len(RecordKind::Employee), 5);
    assert_eq!(third.reports().len(), 4);
}

#[test]
fn test_standalone_load_twice_is_identical() {
    let source = fixture_source();
    let first = load_employees(&source).unwrap();
    let second = load_employees(&source).unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(first.report, second.report);
}

#[test]
fn test_missing_directory_yields_empty_dataset() {
    let mut config = DataSourceConfig::default();
    config.files.employees = "absent_employees.csv".to_string();
    config.files.attendance = "absent_attendance.csv".to_string();
    config.files.leave_requests = "absent_leave.csv".to_string();
    config.files.credentials = "absent_credentials.csv".to_string();
    let mut source = DataSource::new(config);
    source.set_base_directory("/nonexistent/personnel");

    let dataset = Dataset::load(&source).unwrap();
    for kind in RecordKind::ALL {
        assert_eq!(dataset.len(kind), 0);
    }
    assert!(dataset.reports().iter().all(|r| r.source.is_none()));
}

#[test]
fn test_configured_supervisor_table_is_used_for_inference() {
    let loader = ConfigLoader::from_yaml_str(
        "base_dir: tests/fixtures\nsupervisor_positions:\n  \"Lim, Antonio\": Systems Lead\n",
    )
    .unwrap();
    let repair = std::sync::Arc::new(loader.repair());
    let source = DataSource::new(loader.into_config());

    let dataset = Dataset::load_with(&source, repair).unwrap();
    let employee = dataset.employee_by_id("10005").unwrap();
    assert_eq!(employee.text(field::POSITION), Some("Systems Lead"));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_attendance_by_id_and_range() {
    let dataset = fixture_dataset();
    assert_eq!(dataset.attendance_by_id("10001").len(), 5);

    let rows = dataset.attendance_by_id_and_range("10001", date(2024, 6, 3), date(2024, 6, 4));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date(field::DATE), Some(date(2024, 6, 3)));
}

#[test]
fn test_total_late_hours_for_june() {
    let dataset = fixture_dataset();
    // 9:10 -> 1h, 8:10 -> 0, 08:40 -> 0.5h; July and the undated row are excluded.
    assert_eq!(dataset.total_late_hours("10001", june()), Decimal::new(15, 1));
    // 10:10 -> 2h; the row without a login is ignored.
    assert_eq!(dataset.total_late_hours("10002", june()), Decimal::from(2));
    assert_eq!(dataset.total_late_hours("99999", june()), Decimal::ZERO);
}

#[test]
fn test_leave_and_credential_lookups() {
    let dataset = fixture_dataset();
    let requests = dataset.leave_requests_by_id("10001");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].text("Reason"), Some("Family trip, Cebu"));
    assert_eq!(requests[0].text("Approved By"), Some("Lim, Antonio"));

    let credential = dataset.credential_by_username("ehernandez").unwrap();
    assert_eq!(credential.text("Password"), Some("pa,ss"));
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_lists_employees() {
    let (status, json) = get_json(create_router_for_test(), "/employees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 5);
    assert_eq!(json[0]["Employee #"], "10001");
}

#[tokio::test]
async fn test_api_get_employee() {
    let (status, json) = get_json(create_router_for_test(), "/employees/10005").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Position"], "IT Operations and Systems");
    assert_eq!(json["Immediate Supervisor"], "Lim, Antonio");
}

#[tokio::test]
async fn test_api_unknown_employee_is_404() {
    let (status, json) = get_json(create_router_for_test(), "/employees/99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_api_attendance_with_range() {
    let (status, json) = get_json(
        create_router_for_test(),
        "/employees/10001/attendance?start=2024-06-01&end=2024-06-30",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["Date"], "2024-06-03");
    assert_eq!(json[0]["Log In"], "09:10:00");
}

#[tokio::test]
async fn test_api_attendance_with_half_range_is_400() {
    let (status, json) = get_json(
        create_router_for_test(),
        "/employees/10001/attendance?start=2024-06-01",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_api_late_hours() {
    let (status, json) = get_json(
        create_router_for_test(),
        "/employees/10001/late-hours?month=2024-06",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["employee_id"], "10001");
    assert_eq!(json["month"], "2024-06");
    assert_eq!(json["late_hours"], "1.5");
}

#[tokio::test]
async fn test_api_late_hours_bad_month_is_400() {
    let (status, json) = get_json(
        create_router_for_test(),
        "/employees/10001/late-hours?month=June",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_api_status_reports_each_kind() {
    let (status, json) = get_json(create_router_for_test(), "/status").await;
    assert_eq!(status, StatusCode::OK);
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 4);
    assert!(reports.iter().any(|r| r["kind"] == "leave_request"));
}

#[tokio::test]
async fn test_api_employee_leave_requests() {
    let (status, json) =
        get_json(create_router_for_test(), "/employees/10005/leave-requests").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["Leave Type"], "Sick");
}
