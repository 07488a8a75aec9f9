//! Configuration for giftr
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{GiftrError, Result};

/// The snapshot key the original application shipped with. Kept as the
/// default so existing data files load unchanged.
pub const DEFAULT_SNAPSHOT_KEY: &str = "@giftr_people";

/// Main configuration for a giftr store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// The single fixed backend key the whole collection snapshot lives
    /// under. Every mutation and `load()` use this one key, so the durable
    /// state can never diverge from what a later load reads back.
    pub snapshot_key: String,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for file-backed persistence (used by the CLI and
    /// the file backend; ignored by in-memory backends).
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            data_dir: PathBuf::from("./giftr_data"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration
    ///
    /// The snapshot key must be non-empty; an empty key would silently
    /// collide with other users of the backend.
    pub fn validate(&self) -> Result<()> {
        if self.snapshot_key.is_empty() {
            return Err(GiftrError::Config("snapshot key must not be empty".into()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backend key the collection snapshot is stored under
    pub fn snapshot_key(mut self, key: impl Into<String>) -> Self {
        self.config.snapshot_key = key.into();
        self
    }

    /// Set the data directory for file-backed persistence
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
