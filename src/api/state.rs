//! Application state for the Site Labor Ledger API.
//!
//! The state is read-only: display settings and the loaded data store.
//! Requests that change time cards carry their own snapshot.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded settings and data store.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
