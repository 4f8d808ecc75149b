//! Diff generation for audit logging
//!
//! Summarizes which user-editable fields of an expense changed.

use crate::models::Expense;

/// Generate a human-readable diff between two states of an expense
///
/// Only `description` and `amount` can change after creation. Returns `None`
/// when neither differs.
pub fn expense_diff(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(format!(
            "description: {} -> {}",
            format_text(&before.description),
            format_text(&after.description)
        ));
    }

    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote text, truncating long values on a char boundary
fn format_text(s: &str) -> String {
    if s.chars().count() > 50 {
        let head: String = s.chars().take(47).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}
