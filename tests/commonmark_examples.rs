//! Conformance checks against CommonMark reference examples.
//!
//! `tests/data/commonmark_cases.json` holds a curated subset covering the
//! constructs markee supports. Examples that need HTML blocks, autolinks,
//! raw HTML or link reference definitions are left out.

use markee::to_html;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct Example {
    markdown: String,
    html: String,
    example: usize,
    section: String,
}

fn load_examples() -> Vec<Example> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("commonmark_cases.json");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&content).expect("commonmark_cases.json is valid")
}

fn run_section(section: &str) {
    let examples: Vec<Example> = load_examples()
        .into_iter()
        .filter(|ex| ex.section == section)
        .collect();
    assert!(!examples.is_empty(), "no examples for section {section}");

    let failures: Vec<String> = examples
        .iter()
        .filter_map(|ex| {
            let actual = to_html(&ex.markdown, None);
            (actual != ex.html).then(|| {
                format!(
                    "example {}\n  input:    {:?}\n  expected: {:?}\n  actual:   {:?}",
                    ex.example, ex.markdown, ex.html, actual
                )
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} examples failed in {section}:\n{}",
        failures.len(),
        examples.len(),
        failures.join("\n")
    );
}

macro_rules! commonmark_sections {
    ($($name:ident => $section:literal),+ $(,)?) => {
        $(
            #[test]
            fn $name() {
                run_section($section);
            }
        )+
    };
}

commonmark_sections!(
    tabs => "Tabs",
    thematic_breaks => "Thematic breaks",
    atx_headings => "ATX headings",
    setext_headings => "Setext headings",
    indented_code_blocks => "Indented code blocks",
    fenced_code_blocks => "Fenced code blocks",
    paragraphs => "Paragraphs",
    blank_lines => "Blank lines",
    block_quotes => "Block quotes",
    lists => "Lists",
    list_items => "List items",
    emphasis => "Emphasis and strong emphasis",
    code_spans => "Code spans",
    backslash_escapes => "Backslash escapes",
    entities => "Entity and numeric character references",
    links => "Links",
    images => "Images",
    hard_line_breaks => "Hard line breaks",
    soft_line_breaks => "Soft line breaks",
    textual_content => "Textual content",
);

#[test]
fn test_every_example_has_a_section_test() {
    let known = [
        "Tabs",
        "Thematic breaks",
        "ATX headings",
        "Setext headings",
        "Indented code blocks",
        "Fenced code blocks",
        "Paragraphs",
        "Blank lines",
        "Block quotes",
        "Lists",
        "List items",
        "Emphasis and strong emphasis",
        "Code spans",
        "Backslash escapes",
        "Entity and numeric character references",
        "Links",
        "Images",
        "Hard line breaks",
        "Soft line breaks",
        "Textual content",
    ];
    for ex in load_examples() {
        assert!(
            known.contains(&ex.section.as_str()),
            "example {} has unknown section {:?}",
            ex.example,
            ex.section
        );
    }
}
