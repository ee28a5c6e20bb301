//! Positional reconstruction of employee lines.
//!
//! Employee files are hand-edited and their quoting is inconsistent: the
//! address, the supervisor name and the monetary columns may contain bare
//! commas. When a line carries no quotes at all, field boundaries are
//! recovered from the shape of the surrounding tokens instead.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{StoreError, StoreResult};
use crate::models::EMPLOYEE_FIELDS;

use super::tokenizer::split_and_unquote;

/// Number of columns in an employee line.
pub const EMPLOYEE_FIELD_COUNT: usize = EMPLOYEE_FIELDS.len();

/// Employment statuses that mark a line as an employee data row.
pub const STATUS_MARKERS: [&str; 2] = ["Regular", "Probationary"];

const ADDRESS: usize = 4;
const PHONE_NUMBER: usize = 5;
const SUPERVISOR: usize = 12;
const FIRST_MONETARY: usize = 13;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{3}$").expect("static phone pattern"));
static DIGITS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("static digits pattern"));
static THOUSANDS_GROUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}$").expect("static thousands pattern"));

/// Returns true if the line contains one of the [`STATUS_MARKERS`].
pub fn has_status_marker(line: &str) -> bool {
    STATUS_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Employee columns recovered from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeColumns {
    /// Always [`EMPLOYEE_FIELD_COUNT`] entries.
    pub fields: Vec<String>,
    /// Columns that had no source token and were left empty.
    pub missing: usize,
}

impl EmployeeColumns {
    /// Returns true if every column came from the line.
    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }
}

/// Parses a quoted employee line with the quote-aware tokenizer.
pub fn parse_quoted(line: &str) -> EmployeeColumns {
    let mut fields = split_and_unquote(line);
    let missing = EMPLOYEE_FIELD_COUNT.saturating_sub(fields.len());
    fields.resize(EMPLOYEE_FIELD_COUNT, String::new());
    EmployeeColumns { fields, missing }
}

/// Copies plain comma-split tokens 1:1 into the employee columns.
///
/// Used when positional repair fails; misalignment is accepted.
pub fn naive_split(line: &str) -> EmployeeColumns {
    let mut fields: Vec<String> = line
        .split(',')
        .take(EMPLOYEE_FIELD_COUNT)
        .map(str::to_string)
        .collect();
    let missing = EMPLOYEE_FIELD_COUNT - fields.len();
    fields.resize(EMPLOYEE_FIELD_COUNT, String::new());
    EmployeeColumns { fields, missing }
}

/// Rebuilds the employee columns of an unquoted line.
///
/// 1. ID, last name, first name and birthday are taken 1:1.
/// 2. Address absorbs tokens until one looks like a phone number (`ddd-ddd-ddd`).
/// 3. The next seven tokens are taken 1:1 (phone through position).
/// 4. The supervisor absorbs one extra token unless that token is all digits.
/// 5. Each monetary column absorbs one extra token if it is exactly three digits.
///
/// Columns whose source token is missing are left empty and counted in
/// [`EmployeeColumns::missing`]. Fails only when no
/// phone number can be found after the address, since every later column
/// would be unplaceable.
///
/// # Example
///
/// ```
/// use personnel_records::parsing::reconstruct_unquoted;
///
/// let line = "10002,Lim,Antonio,06/19/1988,San Antonio De Padua 2, Cavite,\
///             171-867-411,52-2061274-9,331735646338,683-102-776-000,663904995411,\
///             Regular,Chief Operating Officer,Garcia, Manuel III,\
///             289,715,1,500,2,000,1,000,144,857,1,723";
/// let columns = reconstruct_unquoted(line).unwrap();
/// assert!(columns.is_complete());
/// let fields = &columns.fields;
/// assert_eq!(fields[4], "San Antonio De Padua 2, Cavite");
/// assert_eq!(fields[12], "Garcia, Manuel III");
/// assert_eq!(fields[13], "289,715");
/// assert_eq!(fields[18], "1,723");
/// ```
pub fn reconstruct_unquoted(line: &str) -> StoreResult<EmployeeColumns> {
    let tokens: Vec<&str> = line.split(',').collect();
    let mut fields = vec![String::new(); EMPLOYEE_FIELD_COUNT];

    for (slot, token) in fields.iter_mut().zip(&tokens).take(ADDRESS) {
        *slot = (*token).to_string();
    }

    let phone_at = tokens
        .iter()
        .enumerate()
        .skip(ADDRESS + 1)
        .find(|(_, t)| PHONE_PATTERN.is_match(t.trim()))
        .map(|(i, _)| i)
        .ok_or_else(|| StoreError::HeuristicParse {
            message: format!(
                "no phone number found after address in employee '{}'",
                tokens.first().copied().unwrap_or_default()
            ),
        })?;
    fields[ADDRESS] = tokens[ADDRESS..phone_at].join(",");

    let mut missing = 0;
    let mut cursor = phone_at;
    for slot in &mut fields[PHONE_NUMBER..SUPERVISOR] {
        match tokens.get(cursor) {
            Some(token) => *slot = (*token).to_string(),
            None => missing += 1,
        }
        cursor += 1;
    }

    if let Some(token) = tokens.get(cursor) {
        let mut supervisor = (*token).to_string();
        cursor += 1;
        if let Some(next) = tokens
            .get(cursor)
            .filter(|t| !DIGITS_PATTERN.is_match(t.trim()))
        {
            supervisor.push(',');
            supervisor.push_str(next);
            cursor += 1;
        }
        fields[SUPERVISOR] = supervisor;
    } else {
        missing += 1;
        cursor += 1;
    }

    for slot in &mut fields[FIRST_MONETARY..] {
        let Some(token) = tokens.get(cursor) else {
            missing += 1;
            cursor += 1;
            continue;
        };
        let mut amount = (*token).to_string();
        cursor += 1;
        if let Some(next) = tokens
            .get(cursor)
            .filter(|t| THOUSANDS_GROUP_PATTERN.is_match(t))
        {
            amount.push(',');
            amount.push_str(next);
            cursor += 1;
        }
        *slot = amount;
    }

    Ok(EmployeeColumns { fields, missing })
}
