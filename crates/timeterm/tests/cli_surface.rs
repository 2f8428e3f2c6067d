//! CLI surface checks.
//!
//! These run the binary only with arguments that fail validation or print
//! help, so they never touch the terminal state of the test runner.

use assert_cmd::Command;

#[test]
fn help_lists_the_flags() {
    let mut cmd = Command::cargo_bin("timeterm").unwrap();
    let assert = cmd.arg("--help").assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(out.contains("--no-bell"));
    assert!(out.contains("--no-notify"));
    assert!(out.contains("--restore-previous"));
}

#[test]
fn missing_duration_is_a_usage_error() {
    Command::cargo_bin("timeterm").unwrap().assert().failure();
}

#[test]
fn malformed_duration_is_rejected() {
    Command::cargo_bin("timeterm")
        .unwrap()
        .arg("1:2:3:4")
        .assert()
        .failure();
}

#[test]
fn zero_duration_is_rejected() {
    let mut cmd = Command::cargo_bin("timeterm").unwrap();
    let assert = cmd.arg("0").assert().failure();
    let err = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(err.contains("positive"));
}

#[test]
fn day_long_duration_is_rejected() {
    Command::cargo_bin("timeterm")
        .unwrap()
        .arg("24:00:00")
        .assert()
        .failure();
}
