//! Audit logger for the append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file (JSONL)
pub struct AuditLogger {
    log_path: PathBuf,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            enabled: true,
        }
    }

    /// A logger that accepts entries and writes nothing
    pub fn disabled(log_path: PathBuf) -> Self {
        Self {
            log_path,
            enabled: false,
        }
    }

    /// Log an audit entry
    ///
    /// Appends the entry as a JSON line to the audit log file.
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        if !self.enabled {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| TrackerError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| TrackerError::Io(format!("Failed to flush audit log: {}", e)))?;

        log::debug!("audit: {} expense {}", entry.operation, entry.expense_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::{Amount, Expense, ExpenseId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn read_entries(temp_dir: &TempDir) -> Vec<AuditEntry> {
        std::fs::read_to_string(temp_dir.path().join("audit.log"))
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn expense(id: u32) -> Expense {
        Expense::new(
            ExpenseId::new(id).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
            format!("expense {}", id),
            Amount::new(10.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_log_writes_one_json_line() {
        let (logger, temp) = create_test_logger();

        logger.log(&AuditEntry::create(&expense(1))).unwrap();

        let entries = read_entries(&temp);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].expense_id.get(), 1);
    }

    #[test]
    fn test_multiple_entries_in_order() {
        let (logger, temp) = create_test_logger();

        logger.log(&AuditEntry::create(&expense(1))).unwrap();
        logger.log(&AuditEntry::create(&expense(2))).unwrap();
        logger.log(&AuditEntry::delete(&expense(1))).unwrap();

        let operations: Vec<Operation> = read_entries(&temp).iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![Operation::Create, Operation::Create, Operation::Delete]
        );
    }

    #[test]
    fn test_unwritable_log_is_io_error() {
        let (logger, temp) = create_test_logger();
        std::fs::create_dir(temp.path().join("audit.log")).unwrap();

        let err = logger.log(&AuditEntry::create(&expense(1))).unwrap_err();
        assert!(matches!(err, TrackerError::Io(_)));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::disabled(temp_dir.path().join("audit.log"));

        logger.log(&AuditEntry::create(&expense(1))).unwrap();

        assert!(!temp_dir.path().join("audit.log").exists());
    }
}
