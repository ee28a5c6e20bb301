//! Core data models for the personnel record store.
//!
//! This module contains the record kinds, their column schemas, and the
//! typed records produced by the loader.

mod kind;
mod record;
mod schema;
mod year_month;

pub use kind::RecordKind;
pub use record::{FieldValue, Record};
pub use schema::{
    ATTENDANCE_FIELDS, CREDENTIAL_FIELDS, EMPLOYEE_FIELDS, LEAVE_REQUEST_FIELDS, Schema, field,
};
pub use year_month::YearMonth;
