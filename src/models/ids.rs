//! Expense identifiers
//!
//! Ids are positive integers handed out by the store as `max + 1`, so a
//! newtype keeps them from being confused with counts or months.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Identifier of a single expense (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(NonZeroU32);

impl ExpenseId {
    /// The id given to the first expense in an empty store
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Create an id from a raw integer, rejecting zero
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Get the raw integer value
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// The id following this one
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Table columns pad ids, so the formatter flags must reach the integer
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ExpenseId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| IdParseError::InvalidFormat(s.to_string()))?;
        Self::new(value).ok_or(IdParseError::Zero)
    }
}

/// Error type for id parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    InvalidFormat(String),
    Zero,
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdParseError::InvalidFormat(s) => {
                write!(f, "Invalid expense ID '{}': must be a positive integer", s)
            }
            IdParseError::Zero => write!(f, "Invalid expense ID '0': must be a positive integer"),
        }
    }
}

impl std::error::Error for IdParseError {}
