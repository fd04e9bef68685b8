//! Post-pass over the closed block tree: list tightness and inline content.

use crate::parser::inline_parser::InlineParser;
use crate::parser::references::ReferenceResolver;
use crate::syntax::{NodeId, NodeValue, Tree, VisitStatus, Visitor};

#[derive(Default)]
struct Collector {
    leaves: Vec<NodeId>,
    lists: Vec<NodeId>,
}

impl Visitor for Collector {
    fn visit(&mut self, tree: &Tree, id: NodeId) -> VisitStatus {
        match tree.value(id) {
            NodeValue::Paragraph | NodeValue::Heading(_) => {
                self.leaves.push(id);
                VisitStatus::SkipChildren
            }
            NodeValue::List(_) => {
                self.lists.push(id);
                VisitStatus::Continue
            }
            NodeValue::Document | NodeValue::BlockQuote | NodeValue::ListItem(_) => {
                VisitStatus::Continue
            }
            _ => VisitStatus::SkipChildren,
        }
    }
}

/// Computes list tightness and replaces the raw lines of every paragraph
/// and heading with parsed inline nodes.
pub(crate) fn finalize(tree: &mut Tree, resolver: &dyn ReferenceResolver) {
    let mut collector = Collector::default();
    tree.walk(tree.root(), &mut collector);

    for list in collector.lists {
        let tight = is_tight(tree, list);
        if let NodeValue::List(data) = tree.value_mut(list) {
            data.tight = tight;
        }
    }

    log::debug!("Parsing inlines of {} blocks", collector.leaves.len());
    for leaf in collector.leaves {
        let content = take_raw_content(tree, leaf);
        InlineParser::new(tree, leaf, &content, resolver).parse();
    }
}

/// Joins and detaches the raw line children of a paragraph or heading.
fn take_raw_content(tree: &mut Tree, leaf: NodeId) -> String {
    let lines: Vec<NodeId> = tree.children(leaf).collect();
    let mut content = String::new();
    for (i, id) in lines.into_iter().enumerate() {
        if i > 0 {
            content.push('\n');
        }
        if let NodeValue::Text(text) = tree.value(id) {
            content.push_str(text);
        }
        tree.detach(id);
    }
    match tree.value(leaf) {
        NodeValue::Heading(_) => content.trim_matches([' ', '\t']).to_string(),
        _ => {
            let trimmed = content.trim_end_matches([' ', '\t']).len();
            content.truncate(trimmed);
            content
        }
    }
}

fn is_blank_marker(tree: &Tree, id: NodeId) -> bool {
    matches!(tree.value(id), NodeValue::BlankLine)
}

/// A list is loose when an item other than the last ends with a blank line,
/// or when an item has a blank line between two of its blocks. The blank
/// line may sit at the end of a nested list.
fn is_tight(tree: &Tree, list: NodeId) -> bool {
    for item in tree.children(list) {
        if tree.next_sibling(item).is_some() && ends_with_blank_line(tree, item) {
            return false;
        }
        let gap_inside = tree.children(item).any(|child| {
            let Some(next) = tree.next_sibling(child) else {
                return false;
            };
            if is_blank_marker(tree, child) {
                !is_blank_marker(tree, next)
            } else {
                ends_with_blank_line(tree, child)
            }
        });
        if gap_inside {
            return false;
        }
    }
    true
}

/// Follows the last child through nested lists and items.
fn ends_with_blank_line(tree: &Tree, id: NodeId) -> bool {
    let mut node = id;
    while let Some(last) = tree.last_child(node) {
        match tree.value(last) {
            NodeValue::BlankLine => return true,
            NodeValue::List(_) | NodeValue::ListItem(_) => node = last,
            _ => return false,
        }
    }
    false
}
