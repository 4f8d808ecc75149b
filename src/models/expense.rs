//! Expense model
//!
//! A single recorded expense. The field order matches the on-disk JSON
//! objects: `id`, `date`, `description`, `amount`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ExpenseId;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the store
    pub id: ExpenseId,

    /// Day the expense was recorded (serialized as `YYYY-MM-DD`)
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// How much was spent
    pub amount: Amount,
}

impl Expense {
    /// Create a new expense
    ///
    /// The description is trimmed and must not be empty.
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Amount,
    ) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            id,
            date,
            description: description.into().trim().to_string(),
            amount,
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }

    /// Replace the description, ignoring blank input
    ///
    /// Returns true if the description was changed.
    pub fn set_description(&mut self, description: &str) -> bool {
        let description = description.trim();
        if description.is_empty() || description == self.description {
            return false;
        }
        self.description = description.to_string();
        true
    }

    /// Replace the amount
    ///
    /// Returns true if the amount was changed.
    pub fn set_amount(&mut self, amount: Amount) -> bool {
        if amount == self.amount {
            return false;
        }
        self.amount = amount;
        true
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} ({})",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
