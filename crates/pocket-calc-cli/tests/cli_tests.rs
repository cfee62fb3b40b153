//! Smoke tests for the pocket-calc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pocket_calc() -> Command {
    let mut cmd = Command::cargo_bin("pocket-calc").expect("pocket-calc binary should exist");
    cmd.env_remove("RUST_LOG")
        .env_remove("POCKET_CALC_CONFIG")
        .arg("--color")
        .arg("never");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocket_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    pocket_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("--history-limit"));
}

#[test]
fn test_press_help() {
    pocket_calc()
        .args(["press", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// ============================================================================
// Press Command Tests
// ============================================================================

#[test]
fn test_press_left_to_right() {
    pocket_calc()
        .args(["press", "4+3*2="])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("14\n"))
        .stdout(predicate::str::contains("7 × 2"));
}

#[test]
fn test_press_named_keys() {
    pocket_calc()
        .args(["press", "12", "Backspace", "+", "5", "Enter"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("6\n"));
}

#[test]
fn test_press_divide_by_zero_shows_error() {
    pocket_calc()
        .args(["press", "5/0="])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot divide by zero"))
        .stdout(predicate::str::contains("5 ÷"));
}

#[test]
fn test_press_quiet_prints_display_only() {
    pocket_calc()
        .args(["-q", "press", "6*7="])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_press_history() {
    pocket_calc()
        .args(["press", "--history", "1+1=", "c", "2*3="])
        .assert()
        .success()
        .stdout(predicate::str::contains("History"))
        .stdout(predicate::str::contains("2 × 3 = 6"))
        .stdout(predicate::str::contains("1 + 1 = 2"));
}

#[test]
fn test_press_json() {
    let output = pocket_calc()
        .args(["press", "--json", "9/0="])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["current"], "0");
    assert_eq!(json["operator"], "/");
    assert_eq!(json["errorKind"], "divide_by_zero");
}

#[test]
fn test_press_unknown_key_fails() {
    pocket_calc()
        .args(["press", "2x3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Unknown key: x"));
}

#[test]
fn test_press_requires_keys() {
    pocket_calc().arg("press").assert().failure();
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_history_limit_flag() {
    pocket_calc()
        .args(["--history-limit", "1", "press", "--history", "1+1=c2+2="])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 + 2 = 4"))
        .stdout(predicate::str::contains("1 + 1 = 2").not());
}

#[test]
fn test_zero_history_limit_rejected() {
    pocket_calc()
        .args(["--history-limit", "0", "press", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid history limit"));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.yaml");
    fs::write(&path, "history_limit: 2\n").unwrap();

    let output = pocket_calc()
        .arg("--config")
        .arg(&path)
        .args(["press", "--json", "1+1=c2+2=c3+3="])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["history"].as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.yaml");
    fs::write(&path, "history_limit: lots\n").unwrap();

    pocket_calc()
        .arg("--config")
        .arg(&path)
        .args(["press", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_log_file_receives_json() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("calc.log");

    pocket_calc()
        .arg("-vv")
        .arg("--log-file")
        .arg(&log)
        .args(["press", "1+2="])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("evaluated"));
    assert!(contents.lines().all(|line| line.starts_with('{')));
}
