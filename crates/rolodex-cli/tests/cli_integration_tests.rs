//! CLI integration tests
//!
//! Drive the built binary against a scratch data directory.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn rolodex(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rolodex"))
        .current_dir(dir.path())
        .args(["--data-dir", "data", "--no-sample-data"])
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_run_add_and_list() {
    let dir = TempDir::new().unwrap();

    let output = rolodex(
        &dir,
        &[
            "run",
            "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312",
            "list",
        ],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let out = stdout(&output);
    assert!(out.contains("New person added: Amy Bee"));
    assert!(out.contains("1. Amy Bee"));
    assert!(dir.path().join("data").join("addressbook.json").exists());
    assert!(dir.path().join("preferences.json").exists());
}

#[test]
fn test_run_delete_with_confirmation_persists() {
    let dir = TempDir::new().unwrap();
    rolodex(
        &dir,
        &[
            "run",
            "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312",
            "add n/Bob Choo p/22222222 e/bob@example.com a/Block 123",
        ],
    );

    let output = rolodex(&dir, &["run", "delete 1", "y"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Deleted Person(s): Amy Bee"));
    let saved = fs::read_to_string(dir.path().join("data").join("addressbook.json")).unwrap();
    assert!(!saved.contains("Amy Bee"));
    assert!(saved.contains("Bob Choo"));

    let history = fs::read_to_string(dir.path().join("data").join("commandhistory.json")).unwrap();
    assert!(history.contains("delete 1"));
}

#[test]
fn test_run_stops_on_error() {
    let dir = TempDir::new().unwrap();

    let output = rolodex(&dir, &["run", "delete 1", "list"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Error: The person index provided is invalid"));
    assert!(!stdout(&output).contains("Listed all persons"));
}

#[test]
fn test_pending_confirmation_is_not_carried_between_runs() {
    let dir = TempDir::new().unwrap();
    rolodex(
        &dir,
        &["run", "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312"],
    );

    let first = rolodex(&dir, &["run", "clear"]);
    assert!(stdout(&first).contains("Confirmation still pending"));

    let second = rolodex(&dir, &["run", "y"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("Unknown command"));
}

#[test]
fn test_repl_reads_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_rolodex"))
        .current_dir(dir.path())
        .args(["--no-sample-data", "--data-dir", "data"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"history\nexit\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("You have not yet entered any commands."));
    assert!(out.contains("Exiting Address Book as requested ..."));
}
