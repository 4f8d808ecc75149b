//! Audit logging for the expense tracker
//!
//! Records every add, update and delete with before/after values in an
//! append-only log that sits next to the expense store.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log line with timestamp, operation, expense id,
//!   and optional before/after snapshots.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON.
//! - `expense_diff`: human-readable summary of what an update changed.

mod diff;
mod entry;
mod logger;

pub use diff::expense_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
