//! CSV ingestion and query layer for a file-backed personnel system.
//!
//! This crate turns the employee, attendance, leave request and credential
//! CSV files into typed, column-addressable records, repairing inconsistent
//! quoting along the way, and offers read-only lookups over the result.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod store;
