//! Job title recovery for employee rows whose Position column is corrupted.
//!
//! A Position that is empty or purely numeric (typically an ID that slid
//! into the wrong column) is replaced by, in order: the title implied by a
//! known supervisor, a title derived from the basic salary band, or
//! `"Employee"`.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Title used when neither the supervisor nor the salary gives a hint.
pub const DEFAULT_POSITION: &str = "Employee";

/// Basic salary at or above which the inferred title is "Manager".
pub const MANAGER_SALARY_FLOOR: Decimal = Decimal::from_parts(50000, 0, 0, false, 0);

/// Basic salary at or above which the inferred title is "Team Leader".
pub const TEAM_LEADER_SALARY_FLOOR: Decimal = Decimal::from_parts(40000, 0, 0, false, 0);

/// Returns true if a Position value needs to be inferred.
///
/// # Example
///
/// ```
/// use personnel_records::parsing::position_needs_inference;
///
/// assert!(position_needs_inference(""));
/// assert!(position_needs_inference("10005"));
/// assert!(!position_needs_inference("HR Manager"));
/// ```
pub fn position_needs_inference(position: &str) -> bool {
    let position = position.trim();
    position.is_empty() || position.chars().all(|c| c.is_ascii_digit())
}

/// Parses a monetary value, ignoring thousands separators.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let cleaned: String = value
        .trim()
        .trim_matches('"')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    Decimal::from_str(&cleaned).ok()
}

/// Maps a basic salary to a title band, or `None` if it is unparsable.
pub fn salary_band(basic_salary: &str) -> Option<&'static str> {
    let salary = parse_amount(basic_salary)?;
    Some(if salary >= MANAGER_SALARY_FLOOR {
        "Manager"
    } else if salary >= TEAM_LEADER_SALARY_FLOOR {
        "Team Leader"
    } else {
        "Rank and File"
    })
}

/// Known reporting lines: supervisor name → title of the person reporting to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorTable {
    positions: HashMap<String, String>,
}

impl SupervisorTable {
    /// Creates a table from `(supervisor, position)` pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let positions = entries
            .into_iter()
            .map(|(supervisor, position)| (normalize_name(supervisor.as_ref()), position.into()))
            .collect();
        Self { positions }
    }

    /// Looks up the title implied by a supervisor name.
    ///
    /// Matching ignores case and spacing around the comma.
    pub fn lookup(&self, supervisor: &str) -> Option<&str> {
        self.positions
            .get(&normalize_name(supervisor))
            .map(String::as_str)
    }

    /// Returns the number of known supervisors.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for SupervisorTable {
    fn default() -> Self {
        Self::new([
            ("Lim, Antonio", "IT Operations and Systems"),
            ("Villanueva, Andrea Mae", "HR Team Leader"),
            ("San Jose, Brad", "HR Rank and File"),
            ("Aquino, Bianca Sofia", "Accounting Head"),
            ("Alvaro, Roderick", "Payroll Manager"),
            ("Salcedo, Anthony", "Payroll Rank and File"),
            ("Romualdez, Fredrick", "Account Team Leader"),
            ("Mata, Christian", "Account Rank and File"),
            ("Reyes, Isabella", "Sales & Marketing"),
        ])
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .trim_matches('"')
        .split(',')
        .map(|part| part.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(", ")
        .to_lowercase()
}

/// Infers a title from the supervisor and basic salary.
///
/// # Example
///
/// ```
/// use personnel_records::parsing::{SupervisorTable, infer_position};
///
/// let table = SupervisorTable::default();
/// assert_eq!(infer_position(&table, "Lim, Antonio", "60000"), "IT Operations and Systems");
/// assert_eq!(infer_position(&table, "N/A", "45,000"), "Team Leader");
/// assert_eq!(infer_position(&table, "N/A", "n/a"), "Employee");
/// ```
pub fn infer_position(table: &SupervisorTable, supervisor: &str, basic_salary: &str) -> String {
    table
        .lookup(supervisor)
        .or_else(|| salary_band(basic_salary))
        .unwrap_or(DEFAULT_POSITION)
        .to_string()
}
