//! Expense service
//!
//! Provides the business logic behind every command: each operation is one
//! load-modify-save round against the store, followed by an audit entry for
//! mutations.

use chrono::{Local, NaiveDate};

use crate::audit::AuditEntry;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Expense, ExpenseId, SummaryPeriod};
use crate::storage::Storage;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Result of an update
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The expense as stored after the update
    pub expense: Expense,
    pub description_changed: bool,
    pub amount_changed: bool,
}

impl UpdateOutcome {
    /// True when the update was accepted but altered nothing
    pub fn is_unchanged(&self) -> bool {
        !self.description_changed && !self.amount_changed
    }
}

/// Total spent over a period
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub period: SummaryPeriod,
    pub total: Amount,
    /// Number of expenses that contributed to the total
    pub count: usize,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense dated today
    pub fn add(&self, description: &str, amount: Amount) -> TrackerResult<Expense> {
        self.add_on(today(), description, amount)
    }

    /// Record a new expense with an explicit date
    fn add_on(&self, date: NaiveDate, description: &str, amount: Amount) -> TrackerResult<Expense> {
        let id = self.storage.expenses.next_id()?;
        let expense = Expense::new(id, date, description, amount)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.record(&AuditEntry::create(&expense));

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// List all expenses in store order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<Expense> {
        let deleted = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| TrackerError::expense_not_found(id))?;

        self.storage.expenses.save()?;

        self.record(&AuditEntry::delete(&deleted));

        Ok(deleted)
    }

    /// Update an expense's description and/or amount
    ///
    /// A blank description is treated as not provided. The record is saved
    /// even when nothing changes.
    pub fn update(
        &self,
        id: ExpenseId,
        description: Option<&str>,
        amount: Option<Amount>,
    ) -> TrackerResult<UpdateOutcome> {
        let before = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| TrackerError::expense_not_found(id))?;

        let mut expense = before.clone();
        let description_changed = description
            .map(|d| expense.set_description(d))
            .unwrap_or(false);
        let amount_changed = amount.map(|a| expense.set_amount(a)).unwrap_or(false);

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        let outcome = UpdateOutcome {
            expense,
            description_changed,
            amount_changed,
        };

        if !outcome.is_unchanged() {
            self.record(&AuditEntry::update(&before, &outcome.expense));
        }

        Ok(outcome)
    }

    /// Total the expenses that fall within a period
    pub fn summary(&self, period: SummaryPeriod) -> TrackerResult<ExpenseSummary> {
        let expenses = self.storage.expenses.get_all()?;
        let matching: Vec<&Expense> = expenses.iter().filter(|e| period.contains(e.date)).collect();

        let total = matching
            .iter()
            .try_fold(Amount::zero(), |acc, e| acc.checked_add(e.amount))
            .ok_or_else(|| {
                TrackerError::Validation("Expense total is too large to represent".into())
            })?;

        Ok(ExpenseSummary {
            period,
            total,
            count: matching.len(),
        })
    }

    /// Append to the audit log once a mutation is already saved
    ///
    /// The store is the source of truth, so a failed audit write is only
    /// warned about.
    fn record(&self, entry: &AuditEntry) {
        if let Err(e) = self.storage.log_audit(entry) {
            log::warn!(
                "{} of expense {} saved but not audited: {}",
                entry.operation,
                entry.expense_id,
                e
            );
        }
    }
}
