//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Directory uploaded images are written to"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SQLite database file"));
}

#[test]
fn test_init_db_creates_file() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("recipes.db");

    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.arg("init-db").arg("--db").arg(&db);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));
    assert!(db.exists());
}

#[test]
fn test_init_db_unopenable_path_fails() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be opened as a database file
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.arg("init-db").arg("--db").arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize database"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.arg("bake");

    cmd.assert().failure();
}
