use crate::parser::block_parser::BlockParser;
use crate::syntax::{NodeId, NodeValue, Tree};

/// Block structure only; paragraphs and headings keep their raw lines.
pub fn parse_blocks(input: &str) -> Tree {
    BlockParser::new(input).parse()
}

pub fn find_first(tree: &Tree, kind: &str) -> Option<NodeId> {
    tree.descendants(tree.root())
        .find(|&id| tree.value(id).kind_name() == kind)
}

pub fn find_all(tree: &Tree, kind: &str) -> Vec<NodeId> {
    tree.descendants(tree.root())
        .filter(|&id| tree.value(id).kind_name() == kind)
        .collect()
}

pub fn child_kinds(tree: &Tree, id: NodeId) -> Vec<&'static str> {
    tree.children(id).map(|c| tree.value(c).kind_name()).collect()
}

pub fn assert_block_kinds(input: &str, expected: &[&str]) {
    let tree = parse_blocks(input);
    let actual = child_kinds(&tree, tree.root());
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

/// Raw lines collected by a paragraph or heading.
pub fn raw_lines(tree: &Tree, id: NodeId) -> Vec<String> {
    tree.children(id)
        .filter_map(|c| tree.value(c).text().map(str::to_string))
        .collect()
}

/// Literal of the first code block.
pub fn code_literal(tree: &Tree) -> String {
    let id = find_first(tree, "CodeBlock").expect("code block");
    match tree.value(id) {
        NodeValue::CodeBlock(code) => code.literal(),
        _ => unreachable!(),
    }
}

/// Count direct children of a specific kind
pub fn count_children(tree: &Tree, id: NodeId, kind: &str) -> usize {
    tree.children(id)
        .filter(|&c| tree.value(c).kind_name() == kind)
        .count()
}
