//! Configuration management for the moodlog application.
//!
//! This module handles loading configuration from environment variables,
//! with sensible defaults. The only setting is the data directory that
//! holds the key-value database.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Path to the data directory (defaults to
//!   `~/.local/share/moodlog`)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{DB_FILE_NAME, DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_MOODLOG_DIR};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the moodlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.db_path().ends_with("moodlog.db"));
/// ```
#[derive(Debug)]
pub struct Config {
    /// Directory where the key-value database lives.
    ///
    /// Loaded from the `MOODLOG_DIR` environment variable, with a fallback
    /// to `~/.local/share/moodlog`.
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables with sensible
    /// defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle
    /// `~` and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails.
    pub fn load() -> AppResult<Self> {
        let raw = env::var(ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded = shellexpand::full(&raw)
            .map_err(|e| AppError::Config(format!("Failed to expand data directory path: {}", e)))?;
        let data_dir = PathBuf::from(expanded.as_ref());

        debug!("Using data directory {:?}", data_dir);
        Ok(Config { data_dir })
    }

    /// Path of the key-value database file inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

/// Ensures the data directory exists, creating it (and parents) if needed.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created.
pub fn ensure_data_dir_exists(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        debug!("Creating data directory {:?}", dir);
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
