//! Locating the CSV file for a record kind.
//!
//! A logical file name is probed in a fixed order of directories; the first
//! existing file wins. Failing to find a file is not an error: it is logged
//! together with every path tried and the loader returns an empty collection.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::DataSourceConfig;
use crate::models::RecordKind;

/// The outcome of probing for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The first candidate that exists.
    Found(PathBuf),
    /// No candidate existed; lists every path tried, in order.
    NotFound {
        /// Paths probed, in probe order.
        attempted: Vec<PathBuf>,
    },
}

/// Where the loader looks for the CSV files.
///
/// Probe order for a file name:
/// 1. `{base_dir}/{file}`
/// 2. `{executable dir}/{file}`
/// 3. `{resource_root}/{file}`
/// 4. `{executable dir}/{resource_prefix}/{file}`
/// 5. `{file}` relative to the working directory
///
/// # Example
///
/// ```
/// use personnel_records::config::DataSourceConfig;
/// use personnel_records::store::DataSource;
///
/// let mut source = DataSource::new(DataSourceConfig::default());
/// source.set_base_directory("/srv/hr");
/// let candidates = source.candidates("employees.csv");
/// assert_eq!(candidates[0].to_str(), Some("/srv/hr/employees.csv"));
/// assert_eq!(candidates.last().and_then(|p| p.to_str()), Some("employees.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct DataSource {
    config: DataSourceConfig,
    executable_dir: Option<PathBuf>,
}

impl DataSource {
    /// Creates a data source; the executable's directory is detected once here.
    pub fn new(config: DataSourceConfig) -> Self {
        let executable_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self {
            config,
            executable_dir,
        }
    }

    /// Overrides the base directory probed first.
    pub fn set_base_directory(&mut self, path: impl Into<PathBuf>) {
        self.config.base_dir = path.into();
    }

    /// Returns the base directory probed first.
    pub fn base_directory(&self) -> &Path {
        &self.config.base_dir
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &DataSourceConfig {
        &self.config
    }

    /// Returns the configured file name for a kind.
    pub fn file_name(&self, kind: RecordKind) -> &str {
        self.config.files.for_kind(kind)
    }

    /// Lists the paths probed for a file name, in probe order.
    pub fn candidates(&self, file_name: &str) -> Vec<PathBuf> {
        let mut candidates = vec![self.config.base_dir.join(file_name)];
        if let Some(dir) = &self.executable_dir {
            candidates.push(dir.join(file_name));
        }
        candidates.push(self.config.resource_root.join(file_name));
        if let Some(dir) = &self.executable_dir {
            candidates.push(dir.join(&self.config.resource_prefix).join(file_name));
        }
        candidates.push(PathBuf::from(file_name));
        candidates
    }

    /// Finds the file for a kind, logging diagnostics if none exists.
    pub fn resolve(&self, kind: RecordKind) -> Resolution {
        let file_name = self.file_name(kind);
        let attempted = self.candidates(file_name);

        if let Some(found) = attempted.iter().find(|p| p.is_file()) {
            return Resolution::Found(found.clone());
        }

        for path in &attempted {
            warn!(
                kind = %kind,
                path = %path.display(),
                "Data file not found at candidate location"
            );
        }
        self.log_directory_listing();
        Resolution::NotFound { attempted }
    }

    fn log_directory_listing(&self) {
        let dir = &self.config.base_dir;
        match fs::read_dir(dir) {
            Ok(entries) => {
                let names: Vec<String> = entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect();
                warn!(
                    dir = %dir.display(),
                    entries = ?names,
                    "Contents of configured base directory"
                );
            }
            Err(e) => {
                warn!(
                    dir = %dir.display(),
                    error = %e,
                    "Configured base directory is not readable"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with_base(base: &str) -> DataSource {
        let mut source = DataSource::new(DataSourceConfig::default());
        source.set_base_directory(base);
        source
    }

    #[test]
    fn test_base_directory_is_probed_first() {
        let source = source_with_base("tests/fixtures");
        let candidates = source.candidates("employees.csv");
        assert_eq!(candidates[0], PathBuf::from("tests/fixtures/employees.csv"));
        assert!(candidates.contains(&PathBuf::from("resources/employees.csv")));
        assert_eq!(candidates.last(), Some(&PathBuf::from("employees.csv")));
    }

    #[test]
    fn test_resolve_finds_fixture() {
        let source = source_with_base("tests/fixtures");
        assert_eq!(
            source.resolve(RecordKind::Attendance),
            Resolution::Found(PathBuf::from("tests/fixtures/attendance.csv"))
        );
    }

    #[test]
    fn test_resolve_missing_reports_every_attempt() {
        let mut config = DataSourceConfig::default();
        config.files.employees = "no_such_file.csv".to_string();
        let mut source = DataSource::new(config);
        source.set_base_directory("/nonexistent/dir");

        match source.resolve(RecordKind::Employee) {
            Resolution::NotFound { attempted } => {
                assert_eq!(attempted, source.candidates("no_such_file.csv"));
                assert!(attempted.len() >= 3);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_set_base_directory() {
        let mut source = DataSource::new(DataSourceConfig::default());
        assert_eq!(source.base_directory(), Path::new("data"));
        source.set_base_directory("/srv/hr");
        assert_eq!(source.base_directory(), Path::new("/srv/hr"));
    }
}
