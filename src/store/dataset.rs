//! Immutable snapshot of all four collections and the read-only query surface.
//!
//! A [`Dataset`] is produced by a load and never changes afterwards;
//! reloading builds a new snapshot. Every query returns owned copies, so
//! callers may mutate results freely. All lookups are linear scans, which is
//! fine at single-company scale.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::StoreResult;
use crate::models::{Record, RecordKind, YearMonth, field};
use crate::parsing::{DefaultRepair, EmployeeRepair};

use super::loader::{LoadReport, load, repair_position};
use super::resource::DataSource;

/// Logins after this time of day count as late.
pub const GRACE_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(8, 10, 0) {
    Some(t) => t,
    None => panic!("invalid grace cutoff"),
};

/// A loaded, read-only set of personnel records.
///
/// # Example
///
/// ```no_run
/// use personnel_records::config::ConfigLoader;
/// use personnel_records::store::{DataSource, Dataset};
///
/// let config = ConfigLoader::load("./config/datastore.yaml")?.into_config();
/// let dataset = Dataset::load(&DataSource::new(config))?;
/// if let Some(employee) = dataset.employee_by_id("10001") {
///     println!("{:?}", employee.text("Position"));
/// }
/// # Ok::<(), personnel_records::error::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    employees: Vec<Record>,
    attendance: Vec<Record>,
    leave_requests: Vec<Record>,
    credentials: Vec<Record>,
    reports: Vec<LoadReport>,
    repair: Arc<dyn EmployeeRepair>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty(Arc::new(DefaultRepair::default()))
    }
}

impl Dataset {
    /// Creates a dataset with no records.
    pub fn empty(repair: Arc<dyn EmployeeRepair>) -> Self {
        Self {
            employees: Vec::new(),
            attendance: Vec::new(),
            leave_requests: Vec::new(),
            credentials: Vec::new(),
            reports: Vec::new(),
            repair,
        }
    }

    /// Loads all four kinds with the stock repair heuristics.
    pub fn load(source: &DataSource) -> StoreResult<Self> {
        Self::load_with(source, Arc::new(DefaultRepair::default()))
    }

    /// Loads all four kinds with the given repair heuristics.
    pub fn load_with(source: &DataSource, repair: Arc<dyn EmployeeRepair>) -> StoreResult<Self> {
        RecordKind::ALL
            .into_iter()
            .try_fold(Self::empty(repair), |dataset, kind| {
                dataset.reload_kind(source, kind)
            })
    }

    /// Returns a new snapshot with one kind reloaded from the source.
    ///
    /// The previous collection for that kind is replaced, never merged.
    pub fn reload_kind(&self, source: &DataSource, kind: RecordKind) -> StoreResult<Self> {
        let loaded = load(source, kind, self.repair.as_ref())?;
        let mut next = self.clone().with_records(kind, loaded.records);
        next.reports.retain(|r| r.kind != kind);
        next.reports.push(loaded.report);
        Ok(next)
    }

    /// Replaces the collection for a kind.
    ///
    /// Records of other kinds are ignored.
    pub fn with_records(mut self, kind: RecordKind, records: Vec<Record>) -> Self {
        let records = records.into_iter().filter(|r| r.kind() == kind).collect();
        *self.collection_mut(kind) = records;
        self
    }

    fn collection(&self, kind: RecordKind) -> &Vec<Record> {
        match kind {
            RecordKind::Employee => &self.employees,
            RecordKind::Attendance => &self.attendance,
            RecordKind::LeaveRequest => &self.leave_requests,
            RecordKind::Credential => &self.credentials,
        }
    }

    fn collection_mut(&mut self, kind: RecordKind) -> &mut Vec<Record> {
        match kind {
            RecordKind::Employee => &mut self.employees,
            RecordKind::Attendance => &mut self.attendance,
            RecordKind::LeaveRequest => &mut self.leave_requests,
            RecordKind::Credential => &mut self.credentials,
        }
    }

    /// Returns the load reports, one per kind loaded.
    pub fn reports(&self) -> &[LoadReport] {
        &self.reports
    }

    /// Returns the number of records of a kind.
    pub fn len(&self, kind: RecordKind) -> usize {
        self.collection(kind).len()
    }

    /// Returns a copy of every record of a kind, in file order.
    pub fn all(&self, kind: RecordKind) -> Vec<Record> {
        self.collection(kind).clone()
    }

    /// Returns a copy of every employee record.
    pub fn all_employees(&self) -> Vec<Record> {
        self.all(RecordKind::Employee)
    }

    /// Returns a copy of every attendance record.
    pub fn all_attendance(&self) -> Vec<Record> {
        self.all(RecordKind::Attendance)
    }

    /// Returns a copy of every leave request.
    pub fn all_leave_requests(&self) -> Vec<Record> {
        self.all(RecordKind::LeaveRequest)
    }

    /// Returns a copy of every credential.
    pub fn all_credentials(&self) -> Vec<Record> {
        self.all(RecordKind::Credential)
    }

    fn by_employee_id<'a>(
        &'a self,
        kind: RecordKind,
        id: &'a str,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        let id = id.trim();
        self.collection(kind)
            .iter()
            .filter(move |r| r.employee_id().trim() == id)
    }

    /// Returns a copy of the first employee with the given ID.
    ///
    /// The Position is re-checked on every call and inferred if it is numeric
    /// or empty; the repaired value is not written back into the snapshot.
    pub fn employee_by_id(&self, id: &str) -> Option<Record> {
        let mut employee = self.by_employee_id(RecordKind::Employee, id).next()?.clone();
        repair_position(&mut employee, self.repair.as_ref());
        Some(employee)
    }

    /// Returns copies of all attendance rows for an employee, in file order.
    pub fn attendance_by_id(&self, id: &str) -> Vec<Record> {
        self.by_employee_id(RecordKind::Attendance, id)
            .cloned()
            .collect()
    }

    /// Returns attendance rows for an employee dated within `start..=end`.
    ///
    /// Rows without a parsable date are excluded.
    pub fn attendance_by_id_and_range(
        &self,
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Record> {
        self.by_employee_id(RecordKind::Attendance, id)
            .filter(|r| {
                r.date(field::DATE)
                    .is_some_and(|d| start <= d && d <= end)
            })
            .cloned()
            .collect()
    }

    /// Sums late hours for an employee within a calendar month.
    ///
    /// Only logins strictly after [`GRACE_CUTOFF`] count; each contributes
    /// the time between the cutoff and the login.
    ///
    /// # Example
    ///
    /// ```
    /// use personnel_records::models::{FieldValue, Record, RecordKind, YearMonth};
    /// use personnel_records::store::Dataset;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let row = Record::new(RecordKind::Attendance, vec![
    ///     FieldValue::Text("10001".into()),
    ///     FieldValue::Text("Garcia".into()),
    ///     FieldValue::Text("Manuel III".into()),
    ///     FieldValue::Date(NaiveDate::from_ymd_opt(2024, 6, 3)),
    ///     FieldValue::Time(NaiveTime::from_hms_opt(8, 40, 0)),
    ///     FieldValue::Time(NaiveTime::from_hms_opt(17, 0, 0)),
    /// ]);
    /// let dataset = Dataset::default().with_records(RecordKind::Attendance, vec![row]);
    /// let june = YearMonth::new(2024, 6).unwrap();
    /// assert_eq!(dataset.total_late_hours("10001", june), Decimal::new(5, 1));
    /// ```
    pub fn total_late_hours(&self, id: &str, month: YearMonth) -> Decimal {
        let late_minutes: i64 = self
            .by_employee_id(RecordKind::Attendance, id)
            .filter(|r| r.date(field::DATE).is_some_and(|d| month.contains(d)))
            .filter_map(|r| r.time(field::LOG_IN))
            .filter(|login| *login > GRACE_CUTOFF)
            .map(|login| (login - GRACE_CUTOFF).num_minutes())
            .sum();

        (Decimal::from(late_minutes) / Decimal::from(60)).normalize()
    }

    /// Returns copies of all leave requests filed by an employee.
    pub fn leave_requests_by_id(&self, id: &str) -> Vec<Record> {
        self.by_employee_id(RecordKind::LeaveRequest, id)
            .cloned()
            .collect()
    }

    /// Returns a copy of the first credential with the given username.
    pub fn credential_by_username(&self, username: &str) -> Option<Record> {
        let username = username.trim();
        self.credentials
            .iter()
            .find(|r| r.text(field::USERNAME).map(str::trim) == Some(username))
            .cloned()
    }
}
