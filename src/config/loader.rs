//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the data
//! source configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::parsing::{DefaultRepair, SupervisorTable};

use super::types::DataSourceConfig;

/// Loads and provides access to the data source configuration.
///
/// # File format
///
/// ```text
/// base_dir: data            # probed first
/// resource_root: resources  # fixed fallback root
/// resource_prefix: data     # sub-directory next to the executable
/// files:
///   employees: employees.csv
///   attendance: attendance.csv
///   leave_requests: leave_requests.csv
///   credentials: credentials.csv
/// supervisor_positions:     # optional, replaces the built-in table
///   "Lim, Antonio": IT Operations and Systems
/// ```
///
/// # Example
///
/// ```no_run
/// use personnel_records::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/datastore.yaml")?;
/// println!("Reading CSV files from {}", loader.config().base_dir.display());
/// # Ok::<(), personnel_records::error::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DataSourceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`DataSourceConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| StoreError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            base_dir = %config.base_dir.display(),
            "Loaded data source configuration"
        );
        Ok(Self { config })
    }

    /// Loads configuration from a file, falling back to defaults if the file
    /// does not exist. Parse errors are still returned.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        match Self::load(path) {
            Err(StoreError::ConfigNotFound { path }) => {
                warn!(path = %path, "Configuration file not found, using defaults");
                Ok(Self::from_config(DataSourceConfig::default()))
            }
            other => other,
        }
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> StoreResult<Self> {
        Self::parse(yaml, "<inline>").map(Self::from_config)
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: DataSourceConfig) -> Self {
        Self { config }
    }

    fn parse(content: &str, path: &str) -> StoreResult<DataSourceConfig> {
        serde_yaml::from_str(content).map_err(|e| StoreError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DataSourceConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> DataSourceConfig {
        self.config
    }

    /// Builds the employee repair heuristics, honouring a configured
    /// supervisor table if there is one.
    pub fn repair(&self) -> DefaultRepair {
        match &self.config.supervisor_positions {
            Some(table) => DefaultRepair::with_supervisors(SupervisorTable::new(
                table.iter().map(|(k, v)| (k.as_str(), v.clone())),
            )),
            None => DefaultRepair::default(),
        }
    }
}
