//! Path management for the expense tracker
//!
//! All files live next to the expense store.
//!
//! ## Path Resolution Order
//!
//! 1. `--file` command-line option
//! 2. `EXPENSE_TRACKER_FILE` environment variable (if set)
//! 3. `expenses.json` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Environment variable that overrides the store location
pub const STORE_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "expenses.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// The JSON file holding every expense
    store_file: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from an optional explicit store file
    ///
    /// Falls back to `EXPENSE_TRACKER_FILE`, then `./expenses.json`.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let store_file = explicit
            .or_else(|| std::env::var_os(STORE_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));

        Self { store_file }
    }

    /// Create TrackerPaths for a specific store file (useful for testing)
    pub fn with_store_file(store_file: impl Into<PathBuf>) -> Self {
        Self {
            store_file: store_file.into(),
        }
    }

    /// Get the path to the expense store
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    /// Directory containing the store; the working directory for bare file names
    pub fn base_dir(&self) -> PathBuf {
        match self.store_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir().join("expense-tracker.config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir().join("expense-tracker.audit.log")
    }

    /// Ensure the directory holding the store exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(self.base_dir())
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}
