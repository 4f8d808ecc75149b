//! Expense tracker - command-line personal expense tracking
//!
//! This library provides the core functionality for the `expense-tracker`
//! binary: expenses with a description, amount and date, kept in a single
//! JSON file and managed through add, list, delete, update and summary
//! commands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Store path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense, id, amount and summary period types
//! - `storage`: JSON file storage layer
//! - `audit`: Append-only audit log of mutations
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Subcommand definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::models::Amount;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::with_store_file("expenses.json");
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let expense = ExpenseService::new(&storage).add("coffee", Amount::new(3.5)?)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
