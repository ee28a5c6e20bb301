//! Replaceable repair heuristics for employee data.
//!
//! The tokenizer is generic; the rules that know how this organisation's
//! employee file tends to be broken live behind [`EmployeeRepair`] so they
//! can be swapped or tested on their own.

use crate::error::StoreResult;

use super::employee::{EmployeeColumns, parse_quoted, reconstruct_unquoted};
use super::position::{SupervisorTable, infer_position};

/// Heuristics applied to employee lines and records.
pub trait EmployeeRepair: std::fmt::Debug + Send + Sync {
    /// Splits an employee line carrying a status marker into exactly 19 fields,
    /// counting the columns the line did not supply.
    ///
    /// An `Err` tells the loader to fall back to a plain positional copy.
    fn reconstruct(&self, line: &str) -> StoreResult<EmployeeColumns>;

    /// Infers a job title for a record whose Position is numeric or empty.
    fn infer_position(&self, supervisor: &str, basic_salary: &str) -> String;
}

/// The stock heuristics: quote-aware parsing for quoted lines, positional
/// repair for unquoted ones, and supervisor/salary position inference.
///
/// # Example
///
/// ```
/// use personnel_records::parsing::{DefaultRepair, EmployeeRepair};
///
/// let repair = DefaultRepair::default();
/// assert_eq!(repair.infer_position("Lim, Antonio", ""), "IT Operations and Systems");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultRepair {
    supervisors: SupervisorTable,
}

impl DefaultRepair {
    /// Creates the stock repair with a custom supervisor table.
    pub fn with_supervisors(supervisors: SupervisorTable) -> Self {
        Self { supervisors }
    }

    /// Returns the supervisor table in use.
    pub fn supervisors(&self) -> &SupervisorTable {
        &self.supervisors
    }
}

impl EmployeeRepair for DefaultRepair {
    fn reconstruct(&self, line: &str) -> StoreResult<EmployeeColumns> {
        if line.contains('"') {
            Ok(parse_quoted(line))
        } else {
            reconstruct_unquoted(line)
        }
    }

    fn infer_position(&self, supervisor: &str, basic_salary: &str) -> String {
        infer_position(&self.supervisors, supervisor, basic_salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_line_uses_tokenizer() {
        let repair = DefaultRepair::default();
        let columns = repair
            .reconstruct("10006,Dela Cruz,Juan,01/01/1990,\"123 Main St, QC\",123-456-789")
            .unwrap();
        assert_eq!(columns.missing, 13);
        let fields = columns.fields;
        assert_eq!(fields.len(), 19);
        assert_eq!(fields[4], "123 Main St, QC");
        assert_eq!(fields[5], "123-456-789");
    }

    #[test]
    fn test_unquoted_line_uses_positional_repair() {
        let repair = DefaultRepair::default();
        let fields = repair
            .reconstruct("10006,Dela Cruz,Juan,01/01/1990,123 Main St, QC,123-456-789")
            .unwrap()
            .fields;
        assert_eq!(fields[4], "123 Main St, QC");
        assert_eq!(fields[5], "123-456-789");
    }

    #[test]
    fn test_custom_supervisors_are_used() {
        let repair =
            DefaultRepair::with_supervisors(SupervisorTable::new([("Doe, Jane", "Buyer")]));
        assert_eq!(repair.supervisors().len(), 1);
        assert_eq!(repair.infer_position("Doe, Jane", "90000"), "Buyer");
    }
}
