//! Configuration management for the shell.

use std::env;
use std::path::PathBuf;

/// Default store file, used when `SHELF_DATA_FILE` is not set.
pub const DEFAULT_DATA_FILE: &str = "books.json";

/// Shell configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the catalog store file
    pub data_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_file = match env::var("SHELF_DATA_FILE") {
            Ok(value) if value.trim().is_empty() => return Err(ConfigError::EmptyDataFile),
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        Ok(Self { data_file })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SHELF_DATA_FILE must not be empty")]
    EmptyDataFile,
}
