//! Line parsing for the personnel CSV files.
//!
//! This module contains the quote-aware tokenizer, the positional repair of
//! employee lines, attendance date/time coercion, and job title inference.

mod coercion;
mod employee;
mod position;
mod repair;
mod tokenizer;

pub use coercion::{DATE_FORMAT, TIME_FORMAT, coerce_date, coerce_time};
pub use employee::{
    EMPLOYEE_FIELD_COUNT, EmployeeColumns, STATUS_MARKERS, has_status_marker, naive_split,
    parse_quoted, reconstruct_unquoted,
};
pub use position::{
    DEFAULT_POSITION, MANAGER_SALARY_FLOOR, SupervisorTable, TEAM_LEADER_SALARY_FLOOR,
    infer_position, parse_amount, position_needs_inference, salary_band,
};
pub use repair::{DefaultRepair, EmployeeRepair};
pub use tokenizer::{split_and_unquote, split_quoted, strip_wrapping_quotes};
