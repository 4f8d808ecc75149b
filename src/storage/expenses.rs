//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to the store file, which holds a bare
//! JSON array in insertion order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json_or_init, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, creating an empty store if the file is absent
    pub fn load(&self) -> Result<(), TrackerError> {
        let expenses: Vec<Expense> = read_json_or_init(&self.path)?;
        log::debug!("loaded {} expenses from {}", expenses.len(), self.path.display());

        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = expenses;

        Ok(())
    }

    /// Save all expenses to disk, replacing the file
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)?;
        log::debug!("saved {} expenses to {}", data.len(), self.path.display());
        Ok(())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in store order
    pub fn get_all(&self) -> Result<Vec<Expense>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// The id the next inserted expense should receive: max existing id + 1
    pub fn next_id(&self) -> Result<ExpenseId, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        match data.iter().map(|e| e.id).max() {
            None => Ok(ExpenseId::FIRST),
            Some(max) => max
                .next()
                .ok_or_else(|| TrackerError::Storage("Expense ID space exhausted".into())),
        }
    }

    /// Insert a new expense at the end, or replace the one with the same ID in place
    pub fn upsert(&self, expense: Expense) -> Result<(), TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => *existing = expense,
            None => data.push(expense),
        }
        Ok(())
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let position = data.iter().position(|e| e.id == id);
        Ok(position.map(|index| data.remove(index)))
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
