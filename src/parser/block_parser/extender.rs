//! Continuation matching for the open blocks on the right spine.

use super::line::Line;
use super::{blockquotes, indented_code, lists};
use crate::syntax::{NodeId, NodeValue, Tree};

/// Walks from the document down the chain of open last children, consuming
/// each block's continuation marker. Returns the deepest block that matched.
pub(crate) fn match_open_blocks(tree: &Tree, line: &mut Line<'_>) -> NodeId {
    let mut container = tree.root();
    while let Some(child) = tree.last_child(container) {
        if !tree.get(child).open {
            break;
        }
        line.find_next_nonspace();
        if !continues(tree, child, line) {
            log::trace!("{} does not continue", tree.value(child).kind_name());
            break;
        }
        container = child;
    }
    container
}

fn continues(tree: &Tree, id: NodeId, line: &mut Line<'_>) -> bool {
    match tree.value(id) {
        NodeValue::Document | NodeValue::List(_) => true,
        NodeValue::BlockQuote => blockquotes::continue_block_quote(line),
        NodeValue::ListItem(item) => {
            lists::continue_list_item(line, item, tree.first_child(id).is_some())
        }
        // Closing fences are checked once the whole spine has matched
        NodeValue::CodeBlock(code) if code.fenced => true,
        NodeValue::CodeBlock(_) => indented_code::continue_indented_code(line),
        NodeValue::Paragraph => !line.is_blank(),
        _ => false,
    }
}
