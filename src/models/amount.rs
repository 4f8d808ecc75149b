//! Amount type for expense values
//!
//! Amounts are kept as `f64` so the JSON store holds plain numbers. Display
//! always rounds to two decimal places. An `Amount` is never negative or
//! non-finite; deserialization enforces the same rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting negative and non-finite values
    pub fn new(value: f64) -> Result<Self, AmountParseError> {
        if !value.is_finite() {
            return Err(AmountParseError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountParseError::Negative(value));
        }
        // Normalize -0.0 so it never displays as "-0.00"
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "10.50", "10", "$10.50", "1e3"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        // Only one sign, and only ahead of the currency symbol
        if rest.len() < trimmed.len() && rest.starts_with(['-', '+']) {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        let value: f64 = rest
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        Self::new(if negative { -value } else { value })
    }

    /// Add two amounts, or `None` if the total is no longer finite
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Self::new(self.0 + other.0).ok()
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Error type for amount parsing and validation
#[derive(Debug, Clone, PartialEq)]
pub enum AmountParseError {
    InvalidFormat(String),
    Negative(f64),
    NotFinite,
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            AmountParseError::Negative(_) => write!(f, "Amount cannot be negative"),
            AmountParseError::NotFinite => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for AmountParseError {}
