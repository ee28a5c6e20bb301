//! Column schemas for the four record kinds.
//!
//! Each schema is the authoritative, ordered list of field names for one
//! kind of CSV file, together with a derived name → position map.

use std::collections::HashMap;

/// Field names shared by more than one record kind, or read by the query layer.
pub mod field {
    /// Employee ID, the join key across all four kinds.
    pub const EMPLOYEE_ID: &str = "Employee #";
    /// Employee surname.
    pub const LAST_NAME: &str = "Last Name";
    /// Employee given name.
    pub const FIRST_NAME: &str = "First Name";
    /// Job title.
    pub const POSITION: &str = "Position";
    /// Supervisor name, usually "Surname, Given".
    pub const IMMEDIATE_SUPERVISOR: &str = "Immediate Supervisor";
    /// Monthly basic salary, possibly with a thousands separator.
    pub const BASIC_SALARY: &str = "Basic Salary";
    /// Attendance date (`MM/dd/yyyy`).
    pub const DATE: &str = "Date";
    /// Attendance login time (`H:mm`).
    pub const LOG_IN: &str = "Log In";
    /// Attendance logout time (`H:mm`).
    pub const LOG_OUT: &str = "Log Out";
    /// Credential username.
    pub const USERNAME: &str = "Username";
}

/// Employee file columns, in file order.
pub const EMPLOYEE_FIELDS: [&str; 19] = [
    field::EMPLOYEE_ID,
    field::LAST_NAME,
    field::FIRST_NAME,
    "Birthday",
    "Address",
    "Phone Number",
    "SSS #",
    "Philhealth #",
    "TIN #",
    "Pag-ibig #",
    "Status",
    field::POSITION,
    field::IMMEDIATE_SUPERVISOR,
    field::BASIC_SALARY,
    "Rice Subsidy",
    "Phone Allowance",
    "Clothing Allowance",
    "Gross Semi-monthly Rate",
    "Hourly Rate",
];

/// Attendance file columns, in file order.
pub const ATTENDANCE_FIELDS: [&str; 6] = [
    field::EMPLOYEE_ID,
    field::LAST_NAME,
    field::FIRST_NAME,
    field::DATE,
    field::LOG_IN,
    field::LOG_OUT,
];

/// Leave request file columns, in file order.
pub const LEAVE_REQUEST_FIELDS: [&str; 14] = [
    "Request ID",
    field::EMPLOYEE_ID,
    field::LAST_NAME,
    field::FIRST_NAME,
    field::POSITION,
    "Leave Type",
    "Start Date",
    "End Date",
    "Number of Days",
    "Reason",
    "Status",
    "Date Filed",
    "Approved By",
    "Remarks",
];

/// Credential file columns, in file order.
pub const CREDENTIAL_FIELDS: [&str; 5] = [
    field::EMPLOYEE_ID,
    field::USERNAME,
    "Password",
    "Role",
    "Status",
];

/// Ordered field names for one record kind plus the derived name → index map.
///
/// # Example
///
/// ```
/// use personnel_records::models::{Schema, ATTENDANCE_FIELDS};
///
/// let schema = Schema::new(&ATTENDANCE_FIELDS);
/// assert_eq!(schema.len(), 6);
/// assert_eq!(schema.index_of("Log In"), Some(4));
/// assert_eq!(schema.index_of("Salary"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<&'static str>,
    index: HashMap<&'static str, usize>,
}

impl Schema {
    /// Creates a schema from an ordered field list and builds its index.
    pub fn new(fields: &[&'static str]) -> Self {
        let mut schema = Self {
            fields: fields.to_vec(),
            index: HashMap::with_capacity(fields.len()),
        };
        schema.rebuild();
        schema
    }

    /// Rebuilds the name → index map from the field list.
    ///
    /// The previous map is cleared first, so rebuilding is idempotent.
    pub fn rebuild(&mut self) {
        self.index.clear();
        for (position, name) in self.fields.iter().enumerate() {
            self.index.insert(*name, position);
        }
    }

    /// Returns the field names in file order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the position of a field, if the schema defines it.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the name → index map.
    pub fn index_map(&self) -> &HashMap<&'static str, usize> {
        &self.index
    }
}
