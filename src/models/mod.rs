//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! expenses, their ids and amounts, and summary periods.

pub mod amount;
pub mod expense;
pub mod ids;
pub mod period;

pub use amount::{Amount, AmountParseError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, IdParseError};
pub use period::{PeriodParseError, SummaryPeriod};
