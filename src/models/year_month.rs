//! Calendar month value used by monthly aggregations.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::StoreError;

/// A calendar year and month, e.g. June 2024.
///
/// # Example
///
/// ```
/// use personnel_records::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let june: YearMonth = "2024-06".parse().unwrap();
/// assert!(june.contains(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
/// assert!(!june.contains(NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, returning `None` unless `month` is 1 through 12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Returns the month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns true if the date falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for YearMonth {
    type Err = StoreError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StoreError::InvalidQuery {
            message: format!("expected month as YYYY-MM, got '{}'", s),
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let ym: YearMonth = "2024-6".parse().unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 6);
        assert_eq!(ym.to_string(), "2024-06");
    }

    #[test]
    fn test_rejects_month_out_of_range() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert!("2024-13".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            "June".parse::<YearMonth>(),
            Err(StoreError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(YearMonth::of(date), YearMonth::new(2024, 2).unwrap());
    }
}
