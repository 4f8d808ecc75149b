//! Expense display formatting
//!
//! Renders the expense table, summaries and command confirmations for the
//! terminal.

use crate::config::Settings;
use crate::models::Expense;
use crate::services::ExpenseSummary;

const DESCRIPTION_WIDTH: usize = 30;
const TABLE_WIDTH: usize = 4 + 1 + 10 + 1 + DESCRIPTION_WIDTH + 1 + 12;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:<4} {:<10} {} {:>12}",
        expense.id,
        expense.date.format(&settings.date_format).to_string(),
        truncate(&expense.description, DESCRIPTION_WIDTH),
        expense.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format expenses as a fixed-width table in store order
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<4} {:<10} {:<width$} {:>12}\n",
        "ID",
        "Date",
        "Description",
        "Amount",
        width = DESCRIPTION_WIDTH
    ));
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}

/// Format a summary total, naming the month when one was requested
pub fn format_summary(summary: &ExpenseSummary, settings: &Settings) -> String {
    let total = summary.total.format_with_symbol(&settings.currency_symbol);
    match summary.period.month_name() {
        Some(month) => format!("Total expenses for {}: {}", month, total),
        None => format!("Total expenses: {}", total),
    }
}

/// Message shown when no command (or an unknown one) is given
pub fn format_usage() -> String {
    let mut output = String::new();
    output.push_str("Usage: expense-tracker <COMMAND> [OPTIONS]\n\n");
    output.push_str("Supported commands: add, list, delete, summary, update\n\n");
    output.push_str("  add      --description <TEXT> --amount <AMOUNT>\n");
    output.push_str("  list\n");
    output.push_str("  delete   --id <ID>\n");
    output.push_str("  summary  [--month <1-12>]\n");
    output.push_str("  update   --id <ID> [--description <TEXT>] [--amount <AMOUNT>]\n\n");
    output.push_str("Run 'expense-tracker --help' for more information.\n");
    output
}

/// Pad or truncate a string to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
