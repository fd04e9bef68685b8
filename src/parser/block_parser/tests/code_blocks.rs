use crate::parser::block_parser::tests::helpers::{
    assert_block_kinds, code_literal, find_first, parse_blocks, raw_lines,
};
use crate::syntax::{CodeBlockData, NodeValue, Tree};

fn code_data(tree: &Tree) -> CodeBlockData {
    let id = find_first(tree, "CodeBlock").expect("code block");
    match tree.value(id) {
        NodeValue::CodeBlock(code) => code.clone(),
        _ => unreachable!(),
    }
}

#[test]
fn fenced_with_info_string() {
    let tree = parse_blocks("```rust\nfn main() {}\n```\n");
    let code = code_data(&tree);
    assert!(code.fenced);
    assert_eq!(code.info, "rust");
    assert_eq!(code.literal(), "fn main() {}\n");
}

#[test]
fn unclosed_fence_runs_to_end() {
    assert_eq!(code_literal(&parse_blocks("```\nabc\ndef")), "abc\ndef\n");
}

#[test]
fn closing_fence_must_be_long_enough() {
    let tree = parse_blocks("````\naaa\n```\n``````\nafter\n");
    assert_eq!(code_literal(&tree), "aaa\n```\n");
    assert_block_kinds("````\naaa\n```\n``````\nafter\n", &["CodeBlock", "Paragraph"]);
}

#[test]
fn closing_fence_must_match_character() {
    assert_eq!(code_literal(&parse_blocks("~~~\naaa\n```\n~~~\n")), "aaa\n```\n");
}

#[test]
fn fence_indentation_is_removed_from_content() {
    let tree = parse_blocks("  ```\n aaa\naaa\n  aaa\n  ```\n");
    assert_eq!(code_literal(&tree), "aaa\naaa\naaa\n");
}

#[test]
fn fenced_code_interrupts_paragraph() {
    assert_block_kinds(
        "foo\n```\nbar\n```\nbaz\n",
        &["Paragraph", "CodeBlock", "Paragraph"],
    );
}

#[test]
fn fence_content_is_not_parsed() {
    assert_block_kinds("```\n# not a heading\n> nor a quote\n```\n", &["CodeBlock"]);
}

#[test]
fn tilde_fence_allows_backticks_in_info() {
    let tree = parse_blocks("~~~ aa ``` ~~~\nfoo\n~~~\n");
    let code = code_data(&tree);
    assert_eq!(code.info, "aa ``` ~~~");
    assert_eq!(code.language(), Some("aa"));
    assert_eq!(code.literal(), "foo\n");
}

#[test]
fn indented_code_keeps_extra_indentation() {
    let tree = parse_blocks("    chunk1\n\n      chunk2\n");
    let code = code_data(&tree);
    assert!(!code.fenced);
    assert_eq!(code.literal(), "chunk1\n\n  chunk2\n");
}

#[test]
fn indented_code_with_tabs() {
    assert_eq!(code_literal(&parse_blocks("\tfoo\tbaz\n")), "foo\tbaz\n");
}

#[test]
fn indented_code_cannot_interrupt_paragraph() {
    let tree = parse_blocks("foo\n    bar\n");
    let para = find_first(&tree, "Paragraph").unwrap();
    assert_eq!(raw_lines(&tree, para), vec!["foo", "bar"]);
    assert!(find_first(&tree, "CodeBlock").is_none());
}

#[test]
fn indented_code_keeps_its_first_line() {
    let tree = parse_blocks("    foo\nbar\n");
    assert_block_kinds("    foo\nbar\n", &["CodeBlock", "Paragraph"]);
    let code = find_first(&tree, "CodeBlock").unwrap();
    assert!(tree.first_child(code).is_none());
    assert_eq!(code_literal(&tree), "foo\n");
}

#[test]
fn indented_code_inside_containers() {
    assert_eq!(code_literal(&parse_blocks(">\t\tfoo\n")), "  foo\n");
    assert_eq!(code_literal(&parse_blocks("-\n      baz\n")), "baz\n");
}
