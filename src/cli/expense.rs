//! Expense CLI commands
//!
//! Maps each subcommand onto the expense service. Flag values arrive as raw
//! strings so malformed numbers surface as validation errors rather than
//! argument-parser failures.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_table, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, ExpenseId, SummaryPeriod};
use crate::services::{today, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ExpenseCommands {
    /// Record a new expense dated today
    Add {
        /// What the money was spent on
        #[arg(long, allow_hyphen_values = true)]
        description: String,
        /// Amount spent (e.g., "12.50"); must not be negative
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// List all expenses
    List,
    /// Delete an expense
    Delete {
        /// ID of the expense to delete
        #[arg(long, allow_hyphen_values = true)]
        id: String,
    },
    /// Show total expenses, optionally for one month of the current year
    Summary {
        /// Month number (1-12)
        #[arg(long, allow_hyphen_values = true)]
        month: Option<String>,
    },
    /// Change an expense's description and/or amount
    Update {
        /// ID of the expense to update
        #[arg(long, allow_hyphen_values = true)]
        id: String,
        /// New description (empty keeps the current one)
        #[arg(long, allow_hyphen_values = true)]
        description: Option<String>,
        /// New amount; must not be negative
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
        } => {
            let amount = parse_amount(&amount)?;
            let expense = service.add(&description, amount)?;
            println!("Expense added successfully (ID: {})", expense.id);
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_table(&expenses, settings));
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let deleted = service.delete(id)?;
            println!("Expense deleted successfully (ID: {})", deleted.id);
        }

        ExpenseCommands::Summary { month } => {
            let period = match month {
                Some(month) => SummaryPeriod::month_of_current_year(&month, today())
                    .map_err(|e| TrackerError::Validation(e.to_string()))?,
                None => SummaryPeriod::AllTime,
            };
            let summary = service.summary(period)?;
            println!("{}", format_summary(&summary, settings));
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
        } => {
            let id = parse_id(&id)?;
            service
                .get(id)?
                .ok_or_else(|| TrackerError::expense_not_found(id))?;

            // An invalid amount aborts the whole update, description included
            let amount = amount.as_deref().map(parse_amount).transpose()?;

            let outcome = service.update(id, description.as_deref(), amount)?;
            println!("Expense updated successfully (ID: {})", outcome.expense.id);
            if outcome.is_unchanged() {
                println!("No changes requested.");
            }
        }
    }

    Ok(())
}

/// Parse a user-supplied expense ID
fn parse_id(raw: &str) -> TrackerResult<ExpenseId> {
    raw.parse::<ExpenseId>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Parse a user-supplied amount, rejecting negatives
fn parse_amount(raw: &str) -> TrackerResult<Amount> {
    Amount::parse(raw).map_err(|e| TrackerError::Validation(e.to_string()))
}
