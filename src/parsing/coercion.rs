//! String to date / time-of-day coercion for attendance fields.
//!
//! Empty input yields `None` silently. Malformed input is logged and also
//! yields `None`; nothing here returns an error.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

/// Date format used in the CSV files (`MM/dd/yyyy`).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Time format used in the CSV files (`H:mm`, 24-hour).
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a `MM/dd/yyyy` date.
///
/// # Example
///
/// ```
/// use personnel_records::parsing::coerce_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(coerce_date("06/03/2024"), NaiveDate::from_ymd_opt(2024, 6, 3));
/// assert_eq!(coerce_date(""), None);
/// assert_eq!(coerce_date("2024-06-03"), None);
/// ```
pub fn coerce_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(value = %value, error = %e, "Malformed date, expected MM/dd/yyyy");
            None
        }
    }
}

/// Parses an `H:mm` time of day; the leading zero on the hour is optional.
///
/// # Example
///
/// ```
/// use personnel_records::parsing::coerce_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(coerce_time("8:05"), NaiveTime::from_hms_opt(8, 5, 0));
/// assert_eq!(coerce_time("17:30"), NaiveTime::from_hms_opt(17, 30, 0));
/// assert_eq!(coerce_time("late"), None);
/// ```
pub fn coerce_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveTime::parse_from_str(value, TIME_FORMAT) {
        Ok(time) => Some(time),
        Err(e) => {
            warn!(value = %value, error = %e, "Malformed time, expected H:mm");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_with_and_without_leading_zeros() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 3);
        assert_eq!(coerce_date("06/03/2024"), expected);
        assert_eq!(coerce_date("6/3/2024"), expected);
    }

    #[test]
    fn test_date_whitespace_is_trimmed() {
        assert_eq!(
            coerce_date(" 12/31/2023 "),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }

    #[test]
    fn test_invalid_calendar_date_is_absent() {
        assert_eq!(coerce_date("02/30/2024"), None);
        assert_eq!(coerce_date("13/01/2024"), None);
    }

    #[test]
    fn test_empty_values_are_absent() {
        assert_eq!(coerce_date("   "), None);
        assert_eq!(coerce_time(""), None);
    }

    #[test]
    fn test_time_with_leading_zero() {
        assert_eq!(coerce_time("08:10"), NaiveTime::from_hms_opt(8, 10, 0));
    }

    #[test]
    fn test_time_out_of_range_is_absent() {
        assert_eq!(coerce_time("25:00"), None);
        assert_eq!(coerce_time("8:75"), None);
    }
}
