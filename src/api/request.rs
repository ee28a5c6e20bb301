//! Query parameter types for the personnel records API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::models::YearMonth;

/// Query parameters for `GET /employees/{id}/attendance`.
///
/// Both bounds are optional together; giving only one is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceQuery {
    /// First date included (`YYYY-MM-DD`).
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Last date included (`YYYY-MM-DD`).
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl AttendanceQuery {
    /// Returns the inclusive range, `None` for "no range", or an error if
    /// only one bound was given.
    pub fn range(&self) -> StoreResult<Option<(NaiveDate, NaiveDate)>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(Some((start, end))),
            (None, None) => Ok(None),
            _ => Err(StoreError::InvalidQuery {
                message: "start and end must be given together".to_string(),
            }),
        }
    }
}

/// Query parameters for `GET /employees/{id}/late-hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateHoursQuery {
    /// Calendar month as `YYYY-MM`.
    pub month: String,
}

impl LateHoursQuery {
    /// Parses the month parameter.
    pub fn month(&self) -> StoreResult<YearMonth> {
        self.month.parse()
    }
}
