//! Error types for the personnel record store.
//!
//! Data-quality problems in the source files (bad dates, short lines, broken
//! quoting) are logged and repaired rather than returned, so the variants here
//! cover configuration, unexpected I/O, and the query surface.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the personnel record store.
///
/// # Example
///
/// ```
/// use personnel_records::error::StoreError;
///
/// let error = StoreError::ConfigNotFound {
///     path: "/missing/datastore.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/datastore.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A resolved data file could not be opened or read.
    #[error("I/O error reading '{}': {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Positional repair of an employee line failed.
    ///
    /// Never escapes a load: the loader falls back to a plain positional copy.
    #[error("Heuristic parse failure: {message}")]
    HeuristicParse {
        /// What the reconstructor could not find.
        message: String,
    },

    /// No employee with the requested ID exists in the snapshot.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The requested employee ID.
        id: String,
    },

    /// A query parameter was malformed.
    #[error("Invalid query: {message}")]
    InvalidQuery {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = StoreError::ConfigNotFound {
            path: "/missing/datastore.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/datastore.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = StoreError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_io_error_displays_path() {
        let error = StoreError::Io {
            path: PathBuf::from("data/employees.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "I/O error reading 'data/employees.csv': denied"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = StoreError::EmployeeNotFound {
            id: "99999".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: 99999");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<StoreError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_heuristic_failure() -> StoreResult<()> {
            Err(StoreError::HeuristicParse {
                message: "no phone number".to_string(),
            })
        }

        fn propagates_error() -> StoreResult<()> {
            returns_heuristic_failure()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
