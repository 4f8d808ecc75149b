//! Business logic layer
//!
//! Services sit between the CLI handlers and the storage layer, enforcing
//! validation and writing the audit trail.

pub mod expense;

pub use expense::{today, ExpenseService, ExpenseSummary, UpdateOutcome};
