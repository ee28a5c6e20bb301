//! The closed set of record kinds the store understands.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::schema::{
    ATTENDANCE_FIELDS, CREDENTIAL_FIELDS, EMPLOYEE_FIELDS, LEAVE_REQUEST_FIELDS, Schema,
};

static EMPLOYEE_SCHEMA: Lazy<Schema> = Lazy::new(|| Schema::new(&EMPLOYEE_FIELDS));
static ATTENDANCE_SCHEMA: Lazy<Schema> = Lazy::new(|| Schema::new(&ATTENDANCE_FIELDS));
static LEAVE_REQUEST_SCHEMA: Lazy<Schema> = Lazy::new(|| Schema::new(&LEAVE_REQUEST_FIELDS));
static CREDENTIAL_SCHEMA: Lazy<Schema> = Lazy::new(|| Schema::new(&CREDENTIAL_FIELDS));

/// One of the four CSV-backed record kinds.
///
/// Every kind carries its own schema and default file name; the loader is a
/// single function dispatched on this value.
///
/// # Example
///
/// ```
/// use personnel_records::models::RecordKind;
///
/// assert_eq!(RecordKind::Employee.schema().len(), 19);
/// assert_eq!(RecordKind::Attendance.default_file_name(), "attendance.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Employee master data.
    Employee,
    /// Daily login/logout rows.
    Attendance,
    /// Leave applications.
    LeaveRequest,
    /// Login credentials.
    Credential,
}

impl RecordKind {
    /// All kinds, in load order.
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Employee,
        RecordKind::Attendance,
        RecordKind::LeaveRequest,
        RecordKind::Credential,
    ];

    /// Returns the schema for this kind.
    pub fn schema(self) -> &'static Schema {
        match self {
            RecordKind::Employee => &EMPLOYEE_SCHEMA,
            RecordKind::Attendance => &ATTENDANCE_SCHEMA,
            RecordKind::LeaveRequest => &LEAVE_REQUEST_SCHEMA,
            RecordKind::Credential => &CREDENTIAL_SCHEMA,
        }
    }

    /// Returns the file name used when the configuration does not override it.
    pub fn default_file_name(self) -> &'static str {
        match self {
            RecordKind::Employee => "employees.csv",
            RecordKind::Attendance => "attendance.csv",
            RecordKind::LeaveRequest => "leave_requests.csv",
            RecordKind::Credential => "credentials.csv",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Employee => write!(f, "employee"),
            RecordKind::Attendance => write!(f, "attendance"),
            RecordKind::LeaveRequest => write!(f, "leave request"),
            RecordKind::Credential => write!(f, "credential"),
        }
    }
}
