//! Loading and querying the personnel CSV files.
//!
//! [`DataSource`] decides where files are read from, [`load`] turns one file
//! into a collection of records, and [`Dataset`] holds an immutable snapshot
//! of all four collections with the read-only query surface.

mod dataset;
mod loader;
mod resource;

pub use dataset::{Dataset, GRACE_CUTOFF};
pub use loader::{
    LoadReport, Loaded, ParsedLine, load, load_from_reader, parse_line, repair_position,
};
pub use resource::{DataSource, Resolution};

use crate::error::StoreResult;
use crate::models::RecordKind;
use crate::parsing::DefaultRepair;

/// Loads the employee file with the stock repair heuristics.
pub fn load_employees(source: &DataSource) -> StoreResult<Loaded> {
    load(source, RecordKind::Employee, &DefaultRepair::default())
}

/// Loads the attendance file.
pub fn load_attendance(source: &DataSource) -> StoreResult<Loaded> {
    load(source, RecordKind::Attendance, &DefaultRepair::default())
}

/// Loads the leave request file.
pub fn load_leave_requests(source: &DataSource) -> StoreResult<Loaded> {
    load(source, RecordKind::LeaveRequest, &DefaultRepair::default())
}

/// Loads the credential file.
pub fn load_credentials(source: &DataSource) -> StoreResult<Loaded> {
    load(source, RecordKind::Credential, &DefaultRepair::default())
}
