//! Golden test cases for the markee renderer.
//!
//! Each test case is a directory under `tests/cases/` containing:
//! - `input.md` - Source document
//! - `expected.html` - Expected HTML output
//! - `tree.txt` - (Optional) Expected tree dump for parse regression testing
//! - `markee.toml` - (Optional) Config to test extensions and references
//!
//! Run with `UPDATE_EXPECTED=1 cargo test` to regenerate expected outputs.
//! Run with `UPDATE_TREE=1 cargo test` to regenerate tree dumps.

use markee::config::OutputFormat;
use markee::{Config, render, to_html};
use std::{fs, path::Path};

/// Load config from test case directory if it exists.
fn load_test_config(dir: &Path) -> Option<Config> {
    let config_path = dir.join("markee.toml");
    if config_path.exists() {
        let content = fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    } else {
        None
    }
}

/// Run a single golden test case.
fn run_golden_case(case_name: &str) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cases")
        .join(case_name);

    let update_expected = std::env::var_os("UPDATE_EXPECTED").is_some();
    let update_tree = std::env::var_os("UPDATE_TREE").is_some();

    let input_path = dir.join("input.md");
    let expected_path = dir.join("expected.html");
    let tree_path = dir.join("tree.txt");

    let config = load_test_config(&dir);

    // Read input file - preserve line endings exactly
    let input = fs::read_to_string(&input_path)
        .unwrap_or_else(|_| panic!("No input.md found in {}", case_name));

    let output = to_html(&input, config.clone());

    // Rendering is a pure function of the input
    let output_twice = to_html(&input, config.clone());
    similar_asserts::assert_eq!(output, output_twice, "determinism: {}", case_name);

    if tree_path.exists() || update_tree {
        let tree_config = Config {
            format: OutputFormat::Tree,
            ..config.clone().unwrap_or_default()
        };
        let tree_output = render(&input, Some(tree_config));

        if update_tree {
            fs::write(&tree_path, &tree_output).unwrap();
        } else {
            let expected_tree = fs::read_to_string(&tree_path)
                .unwrap_or_else(|_| panic!("Failed to read tree.txt in {}", case_name));
            similar_asserts::assert_eq!(expected_tree, tree_output, "tree mismatch: {}", case_name);
        }
    }

    if update_expected {
        fs::write(&expected_path, &output).unwrap();
        return;
    }

    let expected = fs::read_to_string(&expected_path)
        .unwrap_or_else(|_| panic!("No expected.html found in {}", case_name));

    similar_asserts::assert_eq!(expected, output, "case: {}", case_name);
}

/// Macro to generate individual test functions for each golden case.
///
/// Usage: `golden_test_cases!(case1, case2, case3);`
///
/// Each test runs independently, so failures don't stop other tests from running.
macro_rules! golden_test_cases {
    ($($case:ident),+ $(,)?) => {
        $(
            #[test]
            fn $case() {
                run_golden_case(stringify!($case));
            }
        )+
    };
}

// Generate test functions for each case directory.
// To add a new test case:
// 1. Create a new directory under tests/cases/
// 2. Add the directory name to this list
golden_test_cases!(
    blockquotes,
    code_spans,
    crlf_basic,
    emphasis,
    escapes,
    fenced_code,
    hard_line_breaks,
    headings,
    horizontal_rules,
    images,
    indented_code,
    links,
    lists_bullet,
    lists_nested,
    lists_ordered,
    paragraphs,
    reference_links,
);
