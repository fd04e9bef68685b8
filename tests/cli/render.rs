//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin_to_stdout() {
    cargo_bin_cmd!("markee")
        .arg("render")
        .write_stdin("# Heading\n\nParagraph with *emphasis*.\n")
        .assert()
        .success()
        .stdout("<h1>Heading</h1>\n<p>Paragraph with <em>emphasis</em>.</p>\n");
}

#[test]
fn test_render_file_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.md");
    let output = temp_dir.path().join("doc.html");
    fs::write(&input, "- one\n- two\n").unwrap();

    cargo_bin_cmd!("markee")
        .args([
            "render",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");
}

#[test]
fn test_render_to_tree() {
    cargo_bin_cmd!("markee")
        .args(["render", "--to", "tree"])
        .write_stdin("*a*")
        .assert()
        .success()
        .stdout("[Document]\n  [Paragraph]\n    [Emphasis]\n      [Text] \"a\"\n");
}

#[test]
fn test_render_to_json() {
    let assert = cargo_bin_cmd!("markee")
        .args(["render", "-t", "json"])
        .write_stdin("## Title")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["type"], "Document");
    assert_eq!(value["children"][0]["type"], "Heading");
    assert_eq!(value["children"][0]["level"], 2);
    assert_eq!(value["children"][0]["children"][0]["literal"], "Title");
}

#[test]
fn test_render_unsupported_format() {
    cargo_bin_cmd!("markee")
        .args(["render", "--to", "pdf"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format 'pdf'"));
}

#[test]
fn test_render_with_discovered_config() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("docs");
    fs::create_dir_all(&nested).unwrap();
    let input = nested.join("doc.md");
    fs::write(&input, "See [home].\nNext line\n").unwrap();
    fs::write(
        temp_dir.path().join("markee.toml"),
        "[extensions]\nhard_line_breaks = true\n\n[references]\nhome = \"/index.html\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("markee")
        .args(["render", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<p>See <a href=\"/index.html\">home</a>.<br />\nNext line</p>\n");
}

#[test]
fn test_render_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "format = \"tree\"\n").unwrap();

    cargo_bin_cmd!("markee")
        .args(["render", "--config", config.to_str().unwrap()])
        .write_stdin("---\n")
        .assert()
        .success()
        .stdout("[Document]\n  [ThematicBreak]\n");
}

#[test]
fn test_render_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "format = 42\n").unwrap();

    cargo_bin_cmd!("markee")
        .args(["render", "--config", config.to_str().unwrap()])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_render_preserves_crlf() {
    cargo_bin_cmd!("markee")
        .arg("render")
        .write_stdin("a\r\nb\r\n")
        .assert()
        .success()
        .stdout("<p>a\r\nb</p>\r\n");
}
