//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_help_mentions_timer() {
    Command::cargo_bin("pomo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro timer"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus duration"))
        .stdout(predicate::str::contains("25 minutes"));
}

#[test]
fn test_config_set_persists() {
    let home = TempDir::new().unwrap();

    pomo(&home)
        .args(["config", "set", "--focus", "50", "--break", "10"])
        .assert()
        .success();

    pomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 50"))
        .stdout(predicate::str::contains("\"break_minutes\": 10"));
}

#[test]
fn test_config_set_rejects_out_of_bounds_focus() {
    let home = TempDir::new().unwrap();

    pomo(&home)
        .args(["config", "set", "--focus", "90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 5 and 60"));
}

#[test]
fn test_config_set_rejects_out_of_bounds_break() {
    let home = TempDir::new().unwrap();

    pomo(&home)
        .args(["config", "set", "--break", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 15"));
}

#[test]
fn test_config_set_requires_a_flag() {
    let home = TempDir::new().unwrap();

    pomo(&home)
        .args(["config", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to set"));
}

#[test]
fn test_config_path_points_into_home() {
    let home = TempDir::new().unwrap();

    pomo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomo"))
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();

    pomo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));
}
