//! End-to-end tests for the birthwatch binary.
//!
//! Each test runs against its own data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn birthwatch(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("birthwatch").unwrap();
    cmd.env("BIRTHWATCH_DATA_DIR", dir.path()).env("TZ", "UTC");
    cmd
}

#[test]
fn test_first_run_suggests_setup() {
    let dir = TempDir::new().unwrap();
    birthwatch(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("birthwatch setup"));
}

#[test]
fn test_timer_escalates() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .args(["timer", "start", "--at", "2026-02-22T06:15:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timer started"));

    birthwatch(&dir)
        .args(["timer", "show", "--now", "2026-02-22T20:15:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14:00:00"))
        .stdout(predicate::str::contains("none"));

    birthwatch(&dir)
        .args(["timer", "show", "--now", "2026-02-23T00:15:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18:00:00"))
        .stdout(predicate::str::contains("elevated"));

    birthwatch(&dir)
        .args(["timer", "show", "--now", "2026-02-23T06:15:01Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("24:00:01"))
        .stdout(predicate::str::contains("critical"));
}

#[test]
fn test_timer_start_requires_force_to_replace() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .args(["timer", "start", "--at", "2026-02-22 06:15"])
        .assert()
        .success();

    birthwatch(&dir)
        .args(["timer", "start", "--at", "2026-02-22 07:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    birthwatch(&dir)
        .args(["timer", "start", "--at", "2026-02-22 07:00", "--force"])
        .assert()
        .success();
}

#[test]
fn test_timer_clear() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .args(["timer", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not running"));

    birthwatch(&dir).args(["timer", "start"]).assert().success();

    birthwatch(&dir)
        .args(["timer", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timer cleared"));

    birthwatch(&dir)
        .args(["timer", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not started"));
}

#[test]
fn test_due_from_lmp() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .args(["due", "lmp", "2025-05-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-02-21"));

    birthwatch(&dir)
        .args(["due", "show", "--today", "2026-02-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14 days to go"))
        .stdout(predicate::str::contains("38w0d"));
}

#[test]
fn test_due_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    birthwatch(&dir)
        .args(["due", "set", "next week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_checklist_toggle() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .args(["checklist", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slippers"))
        .stdout(predicate::str::contains("0 of"));

    birthwatch(&dir)
        .args(["checklist", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]"))
        .stdout(predicate::str::contains("1 of"));

    birthwatch(&dir)
        .args(["checklist", "toggle", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_checklist_add_to_group() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .args(["checklist", "add", "Camera", "--group", "baby"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Camera' to For Baby"));

    birthwatch(&dir)
        .args(["checklist", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Camera"));
}

#[test]
fn test_contacts_blank_keeps_existing() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .args(["contacts", "set", "partner", "--phone", "12345"])
        .assert()
        .success();

    birthwatch(&dir)
        .args(["contacts", "set", "partner", "--phone", " ", "--name", "Sam"])
        .assert()
        .success();

    birthwatch(&dir)
        .args(["contacts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12345"))
        .stdout(predicate::str::contains("Sam"));
}

#[test]
fn test_dial_without_phone_fails() {
    let dir = TempDir::new().unwrap();
    birthwatch(&dir)
        .args(["contacts", "dial", "doctor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact not found"));
}

#[test]
fn test_setup_runs_once() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .arg("setup")
        .write_stdin("\n2026-02-21\nCity Maternity\n555 0100\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup complete!"));

    birthwatch(&dir)
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("already completed"));

    birthwatch(&dir)
        .args(["contacts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("City Maternity"));
}

#[test]
fn test_log_records_changes() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .args(["contacts", "set", "hospital", "--phone", "555"])
        .assert()
        .success();

    birthwatch(&dir)
        .args(["log", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts/hospital_phone"));
}

#[test]
fn test_config_writes_defaults() {
    let dir = TempDir::new().unwrap();

    birthwatch(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Time format"));

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"time_format\""));
}

#[test]
fn test_bad_time_format_is_reported_not_crashed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"time_format":"%Q"}"#).unwrap();

    birthwatch(&dir)
        .args(["timer", "start", "--at", "2026-02-22T06:15:00Z"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("time_format"));

    std::fs::write(dir.path().join("config.json"), "{}").unwrap();
    birthwatch(&dir)
        .args(["timer", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not started"));
}

#[test]
fn test_start_time_uses_date_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format":"%d.%m.%Y"}"#).unwrap();

    birthwatch(&dir)
        .args(["timer", "start", "--at", "2026-02-22T06:15:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("22.02.2026 06:15"));

    birthwatch(&dir)
        .args(["timer", "show", "--now", "2026-02-22T08:15:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Waters broke:  22.02.2026 06:15"));
}
