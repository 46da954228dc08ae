//! Integration tests for the `roomscout` binary.
//!
//! The session itself is prompt-driven and needs a terminal, so these tests
//! cover the non-interactive surface: help, version and configuration
//! failures, which must be fatal before any prompt is shown.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("roomscout")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("meeting room"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_is_reported() {
    Command::cargo_bin("roomscout")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roomscout"));
}

#[test]
fn missing_config_file_is_fatal() {
    Command::cargo_bin("roomscout")
        .unwrap()
        .args(["--config", "/nonexistent/roomscout.toml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn malformed_config_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server_url = [this is not toml").unwrap();

    Command::cargo_bin("roomscout")
        .unwrap()
        .args(["--config", file.path().to_str().unwrap()])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn incomplete_config_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server_url = \"https://calendar.example.com\"").unwrap();

    Command::cargo_bin("roomscout")
        .unwrap()
        .args(["--config", file.path().to_str().unwrap()])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}
