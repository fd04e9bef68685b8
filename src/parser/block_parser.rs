//! Block structure parser.
//!
//! Lines are incorporated one at a time. For each line the open blocks on
//! the right spine are matched (see `extender`), new blocks are opened from
//! the rule table in `matcher`, and whatever remains becomes content of the
//! tip. Inline content is parsed later, once every block is closed.

mod blockquotes;
mod code_blocks;
mod extender;
pub(crate) mod finalizer;
mod headings;
mod horizontal_rules;
mod indented_code;
pub mod line;
mod lists;
mod matcher;
mod paragraphs;

use crate::syntax::{HeadingData, ListData, NodeId, NodeValue, Tree};

use line::{Line, split_lines};
use matcher::{BlockStart, MatchContext, try_open_block};

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    tree: Tree,
    /// Deepest open block.
    tip: NodeId,
    /// Tip before the current line was matched.
    old_tip: NodeId,
    /// Deepest block whose continuation matched the current line.
    last_matched: NodeId,
    /// Whether the blocks between `old_tip` and `last_matched` are closed.
    all_closed: bool,
    line_number: usize,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str) -> Self {
        let tree = Tree::new();
        let root = tree.root();
        Self {
            lines: split_lines(input),
            tree,
            tip: root,
            old_tip: root,
            last_matched: root,
            all_closed: true,
            line_number: 0,
        }
    }

    /// Builds the block tree. Paragraph and heading text is left as raw
    /// lines; every block except the document is closed.
    pub fn parse(mut self) -> Tree {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        log::debug!("Starting block parse of {} lines", self.lines.len());
        self.feed_all();
        self.finish();
        self.tree
    }

    fn feed_all(&mut self) {
        for i in 0..self.lines.len() {
            let text = self.lines[i];
            self.incorporate_line(text);
        }
    }

    fn finish(&mut self) {
        let root = self.tree.root();
        while self.tip != root {
            self.finalize_block(self.tip);
        }
    }

    #[cfg(test)]
    fn into_tree(self) -> Tree {
        self.tree
    }

    fn incorporate_line(&mut self, text: &str) {
        self.line_number += 1;
        log::debug!("Parsing line {}: {:?}", self.line_number, text);

        let mut line = Line::new(text);
        self.old_tip = self.tip;

        let mut container = extender::match_open_blocks(&self.tree, &mut line);
        self.last_matched = container;
        self.all_closed = container == self.old_tip;

        // An open code block at the end of a fully matched spine owns the line
        if self.all_closed
            && let NodeValue::CodeBlock(code) = self.tree.value(container)
        {
            let (fenced, fence_char, fence_length, fence_offset) = (
                code.fenced,
                code.fence_char,
                code.fence_length,
                code.fence_offset,
            );
            if fenced {
                line.find_next_nonspace();
                if !line.is_indented()
                    && code_blocks::is_closing_fence(line.nonspace_rest(), fence_char, fence_length)
                {
                    log::debug!("Closing fence at line {}", self.line_number);
                    self.finalize_block(container);
                    return;
                }
                code_blocks::skip_fence_offset(&mut line, fence_offset);
            }
            self.add_code_line(container, line.rest());
            return;
        }

        loop {
            if matches!(
                self.tree.value(container),
                NodeValue::CodeBlock(_) | NodeValue::HtmlBlock(_)
            ) {
                break;
            }
            line.find_next_nonspace();
            let ctx = MatchContext {
                container: self.tree.value(container),
                tip_is_paragraph: matches!(self.tree.value(self.tip), NodeValue::Paragraph),
            };
            let Some((rule, start)) = try_open_block(&mut line, &ctx) else {
                break;
            };
            log::debug!("Line {}: {} opens", self.line_number, rule);

            match start {
                BlockStart::Container(NodeValue::ListItem(item)) => {
                    container = self.add_list_item(item);
                }
                BlockStart::Container(value) => {
                    container = self.add_child(value);
                }
                BlockStart::Leaf { value, content } => {
                    let leaf = self.add_child(value);
                    if let Some(content) = content {
                        if matches!(self.tree.value(leaf), NodeValue::CodeBlock(_)) {
                            self.add_code_line(leaf, content);
                        } else {
                            self.add_line(leaf, content);
                        }
                    }
                    // Headings and breaks are complete after their one line
                    if !self.tree.value(leaf).accepts_lines()
                        || matches!(self.tree.value(leaf), NodeValue::Heading(_))
                    {
                        self.finalize_block(leaf);
                    }
                    return;
                }
                BlockStart::SetextHeading(level) => {
                    if let NodeValue::Paragraph = self.tree.value(container) {
                        *self.tree.value_mut(container) =
                            NodeValue::Heading(HeadingData { level, setext: true });
                    }
                    self.finalize_block(container);
                    return;
                }
            }
        }

        line.find_next_nonspace();
        let tip_is_paragraph = matches!(self.tree.value(self.tip), NodeValue::Paragraph);
        if !self.all_closed && !line.is_blank() && tip_is_paragraph {
            log::trace!("Lazy continuation line {}", self.line_number);
            self.add_line(self.tip, line.nonspace_rest().to_string());
            return;
        }

        self.close_unmatched_blocks();

        if line.is_blank() {
            // Containers opened on this very line stay free of markers, so an
            // empty list item can still end at the next blank line. A blank
            // that only reached the list ended an empty item; the marker goes
            // into that closed item.
            let holder = match self.tree.value(container) {
                NodeValue::List(_) => self.tree.last_child(container),
                _ => Some(container),
            };
            if container == self.last_matched
                && let Some(holder) = holder
            {
                let marker = self.tree.new_node(NodeValue::BlankLine);
                let node = self.tree.get_mut(marker);
                node.open = false;
                node.start_line = self.line_number;
                self.tree.append_child(holder, marker);
            }
        } else if matches!(self.tree.value(container), NodeValue::Paragraph) {
            self.add_line(container, line.nonspace_rest().to_string());
        } else {
            let paragraph = self.add_child(NodeValue::Paragraph);
            self.add_line(paragraph, line.nonspace_rest().to_string());
        }
    }

    /// Closes the blocks that were open before this line but did not match it.
    fn close_unmatched_blocks(&mut self) {
        if self.all_closed {
            return;
        }
        while self.old_tip != self.last_matched {
            let Some(parent) = self.tree.parent(self.old_tip) else {
                break;
            };
            self.finalize_block(self.old_tip);
            self.old_tip = parent;
        }
        self.tip = self.last_matched;
        self.all_closed = true;
    }

    /// Appends a new open block under the tip, closing blocks that cannot hold it.
    fn add_child(&mut self, value: NodeValue) -> NodeId {
        self.close_unmatched_blocks();
        let root = self.tree.root();
        while self.tip != root && !self.tree.value(self.tip).can_contain(&value) {
            self.finalize_block(self.tip);
        }
        log::trace!(
            "Opening {} under {} at line {}",
            value.kind_name(),
            self.tree.value(self.tip).kind_name(),
            self.line_number
        );
        let id = self.tree.new_node(value);
        self.tree.get_mut(id).start_line = self.line_number;
        self.tree.append_child(self.tip, id);
        self.tip = id;
        id
    }

    /// Opens a list item, reusing the open list when its markers match.
    fn add_list_item(&mut self, item: ListData) -> NodeId {
        self.close_unmatched_blocks();
        let joins_open_list = matches!(
            self.tree.value(self.tip),
            NodeValue::List(list) if list.same_list(&item)
        );
        if !joins_open_list {
            if matches!(self.tree.value(self.tip), NodeValue::List(_)) {
                log::debug!("List markers changed at line {}", self.line_number);
                self.finalize_block(self.tip);
            }
            self.add_child(NodeValue::List(item.clone()));
        }
        self.add_child(NodeValue::ListItem(item))
    }

    fn add_line(&mut self, id: NodeId, text: String) {
        let content = self.tree.new_node(NodeValue::Text(text));
        self.tree.get_mut(content).open = false;
        self.tree.append_child(id, content);
    }

    fn add_code_line(&mut self, id: NodeId, text: String) {
        if let NodeValue::CodeBlock(code) = self.tree.value_mut(id) {
            code.literal_lines.push(text);
        }
    }

    /// Closes `id` and moves the tip to its parent.
    fn finalize_block(&mut self, id: NodeId) {
        let line_number = self.line_number;
        let node = self.tree.get_mut(id);
        node.open = false;
        let mut trailing_blank = false;
        if let NodeValue::CodeBlock(code) = &mut node.value
            && !code.fenced
        {
            trailing_blank = indented_code::trim_trailing_blank_lines(&mut code.literal_lines) > 0;
        }
        log::trace!(
            "Closing {} (lines {}-{})",
            node.value.kind_name(),
            node.start_line,
            line_number
        );
        if trailing_blank {
            // The blank lines an indented code block swallowed belong after it
            let marker = self.tree.new_node(NodeValue::BlankLine);
            self.tree.get_mut(marker).open = false;
            self.tree.insert_after(id, marker);
        }
        self.tip = self.tree.parent(id).unwrap_or_else(|| self.tree.root());
    }
}
