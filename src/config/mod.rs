//! Configuration loading for the personnel record store.
//!
//! This module loads the data source configuration (directories and file
//! names to probe, optional supervisor table) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use personnel_records::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/datastore.yaml").unwrap();
//! println!("Employee file: {}", loader.config().files.employees);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DataSourceConfig, FileNames};
