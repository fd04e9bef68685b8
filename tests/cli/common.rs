//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("markee")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Markee parses CommonMark documents"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("markee")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("markee")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("markee")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_render_help() {
    cargo_bin_cmd!("markee")
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a CommonMark document"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("markee")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("markee")
        .args(["render", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: does-not-exist.md"));
}
