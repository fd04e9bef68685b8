//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("markee")
        .arg("parse")
        .write_stdin("# Heading\n\nParagraph.")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[Document]\n"))
        .stdout(predicate::str::contains("[Heading level=1]"));
}

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "# Heading\n\nParagraph with *emphasis*.").unwrap();

    cargo_bin_cmd!("markee")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Heading level=1]"))
        .stdout(predicate::str::contains("[Paragraph]"))
        .stdout(predicate::str::contains("[Emphasis]"));
}

#[test]
fn test_parse_ignores_configured_format() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "- a\n- b\n").unwrap();
    fs::write(temp_dir.path().join(".markee.toml"), "format = \"json\"\n").unwrap();

    cargo_bin_cmd!("markee")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[List bullet=- tight=true]"));
}

#[test]
fn test_parse_complex_document() {
    cargo_bin_cmd!("markee")
        .arg("parse")
        .write_stdin("> quote\n\n1. item\n\n```rust\ncode\n```\n\n[link](/u) ![img](/i.png)")
        .assert()
        .success()
        .stdout(predicate::str::contains("[BlockQuote]"))
        .stdout(predicate::str::contains("[List ordered start=1 delim=. tight=true]"))
        .stdout(predicate::str::contains("[CodeBlock fenced info=\"rust\"] \"code\\n\""))
        .stdout(predicate::str::contains("[Link dest=\"/u\"]"))
        .stdout(predicate::str::contains("[Image dest=\"/i.png\" alt=\"img\"]"));
}
