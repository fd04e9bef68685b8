//! Inline parsing for the text of one paragraph or heading.
//!
//! The text is scanned once. Plain runs, code spans, escapes, entities and
//! breaks become nodes directly under the target. Emphasis delimiters and
//! brackets are appended as literal text and pushed onto the delimiter
//! stack; `]` resolves links on the spot and emphasis is resolved at the
//! end (or inside each link as it closes).

mod code_spans;
mod delimiters;
mod emphasis;
pub(crate) mod escapes;
mod links;

use crate::parser::references::{LinkReference, ReferenceResolver};
use crate::syntax::{ImageData, LinkData, NodeId, NodeValue, Tree};

use delimiters::{DelimId, DelimKind, Delimiter, DelimiterStack, scan_delimiter_run};
use escapes::Escape;

fn is_special(b: u8) -> bool {
    matches!(
        b,
        b'\n' | b'\\' | b'`' | b'*' | b'_' | b'[' | b']' | b'!' | b'&'
    )
}

pub struct InlineParser<'a> {
    tree: &'a mut Tree,
    target: NodeId,
    input: &'a str,
    pos: usize,
    delimiters: DelimiterStack,
    /// Bracket openers still on the delimiter stack, innermost last.
    brackets: Vec<DelimId>,
    resolver: &'a dyn ReferenceResolver,
}

impl<'a> InlineParser<'a> {
    pub fn new(
        tree: &'a mut Tree,
        target: NodeId,
        input: &'a str,
        resolver: &'a dyn ReferenceResolver,
    ) -> Self {
        Self {
            tree,
            target,
            input,
            pos: 0,
            delimiters: DelimiterStack::default(),
            brackets: Vec::new(),
            resolver,
        }
    }

    /// Appends the inline nodes for the whole input under the target.
    pub fn parse(mut self) {
        log::trace!("Inline parsing {:?}", self.input);
        while let Some(&b) = self.input.as_bytes().get(self.pos) {
            match b {
                b'\n' => self.parse_newline(),
                b'\\' => self.parse_backslash(),
                b'`' => self.parse_backticks(),
                b'*' | b'_' => self.parse_delimiter_run(b as char),
                b'[' => self.parse_open_bracket(),
                b'!' => self.parse_bang(),
                b']' => self.parse_close_bracket(),
                b'&' => self.parse_entity(),
                _ => self.parse_text(),
            }
        }
        self.process_emphasis(None);
        merge_adjacent_text(self.tree, self.target);
    }

    fn append(&mut self, value: NodeValue) -> NodeId {
        let id = self.tree.new_node(value);
        let node = self.tree.get_mut(id);
        node.open = false;
        self.tree.append_child(self.target, id);
        id
    }

    fn append_text(&mut self, text: impl Into<String>) -> NodeId {
        self.append(NodeValue::Text(text.into()))
    }

    fn skip_spaces(&mut self) {
        while self.input.as_bytes().get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
    }

    fn parse_text(&mut self) {
        let input = self.input;
        let rest = &input[self.pos..];
        let len = rest
            .bytes()
            .skip(1)
            .position(is_special)
            .map_or(rest.len(), |i| i + 1);
        let text = &rest[..len];
        self.pos += len;
        self.append_text(text);
    }

    /// Soft break, or a hard break when the line ended in two or more spaces.
    fn parse_newline(&mut self) {
        self.pos += 1;
        let mut hard = false;
        if let Some(last) = self.tree.last_child(self.target)
            && let NodeValue::Text(text) = self.tree.value_mut(last)
        {
            let kept = text.trim_end_matches(' ').len();
            hard = text.len() - kept >= 2;
            text.truncate(kept);
            if text.is_empty() {
                self.tree.detach(last);
            }
        }
        self.append(if hard {
            NodeValue::LineBreak
        } else {
            NodeValue::SoftBreak
        });
        self.skip_spaces();
    }

    fn parse_backslash(&mut self) {
        let (escape, len) = escapes::parse_escape(&self.input[self.pos..]);
        self.pos += len;
        match escape {
            Escape::Literal(ch) => {
                self.append_text(ch);
            }
            Escape::HardLineBreak => {
                self.append(NodeValue::LineBreak);
                self.skip_spaces();
            }
            Escape::Backslash => {
                self.append_text("\\");
            }
        }
    }

    fn parse_backticks(&mut self) {
        let input = self.input;
        let rest = &input[self.pos..];
        match code_spans::try_parse_code_span(rest) {
            Some((len, content)) => {
                self.pos += len;
                self.append(NodeValue::CodeSpan(content));
            }
            None => {
                let run = code_spans::backtick_run(rest);
                self.pos += run;
                self.append_text(&rest[..run]);
            }
        }
    }

    fn parse_entity(&mut self) {
        match escapes::parse_entity(&self.input[self.pos..]) {
            Some((decoded, len)) => {
                self.pos += len;
                self.append_text(decoded);
            }
            None => {
                self.pos += 1;
                self.append_text("&");
            }
        }
    }

    fn parse_delimiter_run(&mut self, ch: char) {
        let input = self.input;
        let run = scan_delimiter_run(input, self.pos, ch);
        let start = self.pos;
        self.pos += run.count;
        let node = self.append_text(&input[start..self.pos]);
        if !(run.can_open || run.can_close) {
            return;
        }
        let Some(kind) = DelimKind::from_char(ch) else {
            return;
        };
        let mut delim = Delimiter::new(kind, run.count, node, self.pos);
        delim.can_open = run.can_open;
        delim.can_close = run.can_close;
        self.delimiters.push(delim);
    }

    fn parse_open_bracket(&mut self) {
        self.pos += 1;
        let node = self.append_text("[");
        let id = self
            .delimiters
            .push(Delimiter::new(DelimKind::Bracket, 1, node, self.pos));
        self.brackets.push(id);
    }

    fn parse_bang(&mut self) {
        self.pos += 1;
        if self.input.as_bytes().get(self.pos) == Some(&b'[') {
            self.pos += 1;
            let node = self.append_text("![");
            let id = self
                .delimiters
                .push(Delimiter::new(DelimKind::Image, 1, node, self.pos));
            self.brackets.push(id);
        } else {
            self.append_text("!");
        }
    }

    fn pop_bracket(&mut self, opener: DelimId) {
        self.brackets.pop();
        self.delimiters.remove(opener);
    }

    fn parse_close_bracket(&mut self) {
        let close_start = self.pos;
        self.pos += 1;
        let after_close = self.pos;

        let Some(&opener) = self.brackets.last() else {
            self.append_text("]");
            return;
        };
        if !self.delimiters.get(opener).active {
            self.pop_bracket(opener);
            self.append_text("]");
            return;
        }

        let input = self.input;
        let label_start = self.delimiters.get(opener).position;
        let target = match links::parse_inline_tail(input, after_close) {
            Some((reference, end)) => {
                self.pos = end;
                Some(reference)
            }
            None => self.resolve_reference(&input[label_start..close_start]),
        };

        let Some(reference) = target else {
            log::trace!("No link target after bracket at {}", label_start);
            self.pos = after_close;
            self.pop_bracket(opener);
            self.append_text("]");
            return;
        };
        self.close_link(opener, reference);
    }

    /// Full, collapsed or shortcut reference after `]`. Advances past a
    /// consumed label.
    fn resolve_reference(&mut self, link_text: &'a str) -> Option<LinkReference> {
        let after_close = self.pos;
        let label = match links::scan_label(self.input, after_close) {
            Some(("", end)) => {
                self.pos = end;
                link_text
            }
            Some((label, end)) => {
                self.pos = end;
                label
            }
            None => link_text,
        };
        if !links::is_valid_label(label) {
            return None;
        }
        self.resolver.resolve(label)
    }

    /// Wraps everything after the opener into a link or image node.
    fn close_link(&mut self, opener: DelimId, reference: LinkReference) {
        let opener_node = self.delimiters.get(opener).node;
        let is_image = self.delimiters.get(opener).kind == DelimKind::Image;
        let LinkReference { destination, title } = reference;

        let value = if is_image {
            NodeValue::Image(ImageData {
                destination,
                title,
                alt: String::new(),
            })
        } else {
            NodeValue::Link(LinkData { destination, title })
        };
        let link = self.tree.new_node(value);
        self.tree.get_mut(link).open = false;

        let mut child = self.tree.next_sibling(opener_node);
        while let Some(c) = child {
            child = self.tree.next_sibling(c);
            self.tree.append_child(link, c);
        }
        self.tree.replace(opener_node, link);

        self.process_emphasis(Some(opener));
        self.pop_bracket(opener);

        if is_image {
            let alt = self.tree.text_content(link);
            if let NodeValue::Image(image) = self.tree.value_mut(link) {
                image.alt = alt;
            }
        } else {
            // Links may not contain other links. Below an inactive `[`
            // every `[` is already inactive.
            for &id in self.brackets.iter().rev() {
                let delim = self.delimiters.get_mut(id);
                if delim.kind == DelimKind::Bracket {
                    if !delim.active {
                        break;
                    }
                    delim.active = false;
                }
            }
        }
    }
}

/// Joins runs of sibling text nodes below `root`.
fn merge_adjacent_text(tree: &mut Tree, root: NodeId) {
    let ids: Vec<NodeId> = tree.descendants(root).collect();
    for id in ids {
        if !matches!(tree.value(id), NodeValue::Text(_)) || tree.parent(id).is_none() {
            continue;
        }
        while let Some(next) = tree.next_sibling(id) {
            let NodeValue::Text(more) = tree.value(next) else {
                break;
            };
            let more = more.clone();
            if let NodeValue::Text(text) = tree.value_mut(id) {
                text.push_str(&more);
            }
            tree.detach(next);
        }
    }
}
