//! End-to-end tests for the `expense-tracker` binary
//!
//! Every test points the binary at a store inside its own temp directory.

use assert_cmd::Command;
use chrono::{Datelike, Local, Month};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn store(dir: &TempDir) -> PathBuf {
    dir.path().join("expenses.json")
}

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("EXPENSE_TRACKER_FILE")
        .arg("--file")
        .arg(store(dir));
    cmd
}

fn read_store(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn add(dir: &TempDir, description: &str, amount: &str) {
    tracker(dir)
        .args(["add", "--description", description, "--amount", amount])
        .assert()
        .success();
}

#[test]
fn test_add_reports_id_and_persists() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "--description", "coffee", "--amount", "3.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully (ID: 1)"));

    let on_disk = read_store(&store(&dir));
    assert_eq!(on_disk.as_array().unwrap().len(), 1);
    assert_eq!(on_disk[0]["id"], 1);
    assert_eq!(on_disk[0]["description"], "coffee");
    assert_eq!(on_disk[0]["amount"], 3.5);
    assert_eq!(
        on_disk[0]["date"],
        Local::now().date_naive().format("%Y-%m-%d").to_string()
    );
}

#[test]
fn test_flags_are_order_insensitive() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "--amount", "12", "--description", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 1)"));
}

#[test]
fn test_negative_amount_is_reported_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "--description", "refund", "--amount", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount cannot be negative"));

    assert_eq!(read_store(&store(&dir)), serde_json::json!([]));
}

#[test]
fn test_doubled_sign_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "--description", "refund", "--amount=--5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid amount"));

    assert_eq!(read_store(&store(&dir)), serde_json::json!([]));
}

#[test]
fn test_missing_required_flag_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "--description", "coffee"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--amount"));

    assert!(!store(&dir).exists());
}

#[test]
fn test_list_empty_and_populated() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    add(&dir, "coffee", "3.5");
    add(&dir, "lunch", "12");

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description"))
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("$3.50"))
        .stdout(predicate::str::contains("$12.00"));
}

#[test]
fn test_delete_existing_and_missing() {
    let dir = TempDir::new().unwrap();
    add(&dir, "coffee", "3.5");
    add(&dir, "lunch", "12");

    tracker(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted successfully (ID: 1)"));

    let before = std::fs::read(store(&dir)).unwrap();

    tracker(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense not found: 1"));

    assert_eq!(std::fs::read(store(&dir)).unwrap(), before);
    let on_disk = read_store(&store(&dir));
    assert_eq!(on_disk.as_array().unwrap().len(), 1);
    assert_eq!(on_disk[0]["id"], 2);
}

#[test]
fn test_summary_total_and_month() {
    let dir = TempDir::new().unwrap();
    let today = Local::now().date_naive();
    let this_month = Month::try_from(today.month() as u8).unwrap();

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $0.00"));

    add(&dir, "coffee", "3.5");
    add(&dir, "lunch", "12");

    // An expense from the same month of last year must not count
    let mut on_disk = read_store(&store(&dir));
    let last_year = today.with_year(today.year() - 1).unwrap_or(today - chrono::Duration::days(365));
    on_disk.as_array_mut().unwrap().push(serde_json::json!({
        "id": 3,
        "date": last_year.format("%Y-%m-%d").to_string(),
        "description": "old",
        "amount": 100.0
    }));
    std::fs::write(store(&dir), serde_json::to_string_pretty(&on_disk).unwrap()).unwrap();

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $115.50"));

    tracker(&dir)
        .args(["summary", "--month", &today.month().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Total expenses for {}: $15.50",
            this_month.name()
        )));
}

#[test]
fn test_summary_rejects_bad_month() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["summary", "--month", "13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("between 1 and 12"));
}

#[test]
fn test_update_negative_amount_keeps_record() {
    let dir = TempDir::new().unwrap();
    add(&dir, "coffee", "3.5");

    tracker(&dir)
        .args([
            "update",
            "--id",
            "1",
            "--description",
            "espresso",
            "--amount",
            "-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount cannot be negative"));

    let on_disk = read_store(&store(&dir));
    assert_eq!(on_disk[0]["description"], "coffee");
    assert_eq!(on_disk[0]["amount"], 3.5);
}

#[test]
fn test_update_missing_id() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["update", "--id", "5", "--amount", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense not found: 5"));
}

#[test]
fn test_scenario() {
    let dir = TempDir::new().unwrap();

    add(&dir, "coffee", "3.5");
    add(&dir, "lunch", "12");
    tracker(&dir).args(["delete", "--id", "1"]).assert().success();

    tracker(&dir)
        .arg("summary")
        .assert()
        .stdout(predicate::str::contains("Total expenses: $12.00"));

    tracker(&dir)
        .args(["update", "--id", "2", "--amount", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense updated successfully (ID: 2)"));

    tracker(&dir)
        .arg("summary")
        .assert()
        .stdout(predicate::str::contains("Total expenses: $15.00"));

    let on_disk = read_store(&store(&dir));
    assert_eq!(on_disk.as_array().unwrap().len(), 1);
    assert_eq!(on_disk[0]["id"], 2);
    assert_eq!(on_disk[0]["amount"], 15.0);
}

#[test]
fn test_no_command_prints_usage() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Supported commands: add, list, delete, summary, update",
        ));
}

#[test]
fn test_unknown_command_prints_usage() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported commands"));
}

#[test]
fn test_corrupt_store_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(store(&dir), "{ not json").unwrap();

    tracker(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));

    assert_eq!(std::fs::read_to_string(store(&dir)).unwrap(), "{ not json");
}

fn write_settings(dir: &TempDir, json: &str) {
    std::fs::write(dir.path().join("expense-tracker.config.json"), json).unwrap();
}

#[test]
fn test_audit_log_written_next_to_store() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, r#"{"audit_enabled": true}"#);
    add(&dir, "coffee", "3.5");
    tracker(&dir)
        .args(["update", "--id", "1", "--description", "espresso"])
        .assert()
        .success();

    let log = std::fs::read_to_string(dir.path().join("expense-tracker.audit.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"operation\":\"create\""));
    assert!(lines[1].contains("\"operation\":\"update\""));
}

#[test]
fn test_settings_currency_symbol() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, r#"{"currency_symbol": "€"}"#);
    add(&dir, "coffee", "3.5");

    tracker(&dir)
        .arg("summary")
        .assert()
        .stdout(predicate::str::contains("Total expenses: €3.50"));

    assert!(!dir.path().join("expense-tracker.audit.log").exists());
}

#[test]
fn test_store_is_the_only_file_by_default() {
    let dir = TempDir::new().unwrap();
    add(&dir, "coffee", "3.5");
    tracker(&dir).args(["delete", "--id", "1"]).assert().success();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["expenses.json"]);
}

#[test]
fn test_unwritable_audit_log_still_reports_success() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, r#"{"audit_enabled": true}"#);
    std::fs::create_dir(dir.path().join("expense-tracker.audit.log")).unwrap();

    tracker(&dir)
        .args(["add", "--description", "coffee", "--amount", "3.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully (ID: 1)"));

    assert_eq!(read_store(&store(&dir))[0]["description"], "coffee");
}

#[test]
fn test_invalid_date_format_is_config_error() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, r#"{"date_format": "%Q"}"#);

    tracker(&dir)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
