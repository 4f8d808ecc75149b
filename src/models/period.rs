//! Summary period representation
//!
//! A summary covers either every expense or a single month of one year.

use chrono::{Datelike, Month, NaiveDate};
use std::fmt;

/// The range of expenses a summary totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    /// Every expense in the store
    AllTime,

    /// A single calendar month of a given year
    Month { year: i32, month: Month },
}

impl SummaryPeriod {
    /// Create a monthly period from a month number (1-12)
    pub fn monthly(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(PeriodParseError::MonthOutOfRange(month.to_string()))?;
        Ok(Self::Month { year, month })
    }

    /// Parse a month number and pin it to the year of `today`
    pub fn month_of_current_year(month: &str, today: NaiveDate) -> Result<Self, PeriodParseError> {
        let number: u32 = month
            .trim()
            .parse()
            .map_err(|_| PeriodParseError::InvalidMonth(month.to_string()))?;
        Self::monthly(today.year(), number)
            .map_err(|_| PeriodParseError::MonthOutOfRange(month.to_string()))
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::AllTime => true,
            Self::Month { year, month } => {
                date.year() == *year && date.month() == month.number_from_month()
            }
        }
    }

    /// Full English month name, if this is a monthly period
    pub fn month_name(&self) -> Option<&'static str> {
        match self {
            Self::AllTime => None,
            Self::Month { month, .. } => Some(month.name()),
        }
    }
}

impl fmt::Display for SummaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllTime => write!(f, "all time"),
            Self::Month { year, month } => write!(f, "{} {}", month.name(), year),
        }
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidMonth(String),
    MonthOutOfRange(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(s) => write!(f, "Invalid month '{}': must be a number", s),
            Self::MonthOutOfRange(s) => {
                write!(f, "Invalid month '{}': must be between 1 and 12", s)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}
