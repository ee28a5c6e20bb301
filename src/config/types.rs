//! Configuration types for the data source.
//!
//! These are deserialized from a YAML file; every field has a default so a
//! partial file (or no file at all) still yields a usable configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::RecordKind;

/// File names for each record kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNames {
    /// Employee master file.
    pub employees: String,
    /// Attendance file.
    pub attendance: String,
    /// Leave request file.
    pub leave_requests: String,
    /// Credential file.
    pub credentials: String,
}

impl FileNames {
    /// Returns the configured file name for a kind.
    pub fn for_kind(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Employee => &self.employees,
            RecordKind::Attendance => &self.attendance,
            RecordKind::LeaveRequest => &self.leave_requests,
            RecordKind::Credential => &self.credentials,
        }
    }
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            employees: RecordKind::Employee.default_file_name().to_string(),
            attendance: RecordKind::Attendance.default_file_name().to_string(),
            leave_requests: RecordKind::LeaveRequest.default_file_name().to_string(),
            credentials: RecordKind::Credential.default_file_name().to_string(),
        }
    }
}

/// Where and how to find the CSV files.
///
/// # Example
///
/// ```
/// use personnel_records::config::DataSourceConfig;
///
/// let config: DataSourceConfig = serde_yaml::from_str("base_dir: /srv/hr").unwrap();
/// assert_eq!(config.base_dir.to_str(), Some("/srv/hr"));
/// assert_eq!(config.files.employees, "employees.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// Directory probed first for every file.
    pub base_dir: PathBuf,
    /// Fixed resource root probed after the executable's directory.
    pub resource_root: PathBuf,
    /// Sub-directory of the executable's directory probed after the resource root.
    pub resource_prefix: PathBuf,
    /// File names per record kind.
    pub files: FileNames,
    /// Overrides the built-in supervisor → position table when present.
    pub supervisor_positions: Option<BTreeMap<String, String>>,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("data"),
            resource_root: PathBuf::from("resources"),
            resource_prefix: PathBuf::from("data"),
            files: FileNames::default(),
            supervisor_positions: None,
        }
    }
}
