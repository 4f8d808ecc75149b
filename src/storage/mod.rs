//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and the audit trail for
//! mutating commands.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::TrackerError;

/// Main storage coordinator that provides access to the expense repository
pub struct Storage {
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths, settings: &Settings) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        let audit = if settings.audit_enabled {
            AuditLogger::new(paths.audit_log())
        } else {
            AuditLogger::disabled(paths.audit_log())
        };

        Ok(Self {
            expenses: ExpenseRepository::new(paths.store_file().to_path_buf()),
            audit,
        })
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), TrackerError> {
        self.expenses.load()
    }

    /// Append an entry to the audit log
    pub fn log_audit(&self, entry: &AuditEntry) -> Result<(), TrackerError> {
        self.audit.log(entry)
    }
}
