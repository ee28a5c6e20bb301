//! Application state for the personnel records API.

use std::sync::Arc;

use crate::store::Dataset;

/// Shared application state.
///
/// Holds the snapshot loaded at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<Dataset>,
}

impl AppState {
    /// Creates a new application state around a loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Returns the loaded dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
