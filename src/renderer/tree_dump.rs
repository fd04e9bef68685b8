//! Indented dump of the document tree, one node per line.

use std::fmt::Write;

use crate::syntax::{ListKind, NodeId, NodeValue, Tree, VisitStatus, Visitor};

#[derive(Default)]
pub struct TreeDump {
    output: String,
    depth: usize,
}

impl TreeDump {
    pub fn render(mut self, tree: &Tree) -> String {
        tree.walk(tree.root(), &mut self);
        self.output
    }
}

fn describe(value: &NodeValue) -> String {
    let name = value.kind_name();
    match value {
        NodeValue::List(data) => match data.kind {
            ListKind::Ordered => format!(
                "[{name} ordered start={} delim={} tight={}]",
                data.start,
                data.delimiter.as_char(),
                data.tight
            ),
            ListKind::Bullet(c) => format!("[{name} bullet={c} tight={}]", data.tight),
        },
        NodeValue::Heading(h) if h.setext => format!("[{name} level={} setext]", h.level),
        NodeValue::Heading(h) => format!("[{name} level={}]", h.level),
        NodeValue::CodeBlock(code) => {
            let mut s = if code.fenced {
                format!("[{name} fenced")
            } else {
                format!("[{name} indented")
            };
            if !code.info.is_empty() {
                let _ = write!(s, " info={:?}", code.info);
            }
            let _ = write!(s, "] {:?}", code.literal());
            s
        }
        NodeValue::Link(link) => {
            let mut s = format!("[{name} dest={:?}", link.destination);
            if !link.title.is_empty() {
                let _ = write!(s, " title={:?}", link.title);
            }
            s.push(']');
            s
        }
        NodeValue::Image(image) => {
            let mut s = format!("[{name} dest={:?} alt={:?}", image.destination, image.alt);
            if !image.title.is_empty() {
                let _ = write!(s, " title={:?}", image.title);
            }
            s.push(']');
            s
        }
        NodeValue::Text(text)
        | NodeValue::CodeSpan(text)
        | NodeValue::HtmlSpan(text)
        | NodeValue::HtmlBlock(text) => format!("[{name}] {text:?}"),
        _ => format!("[{name}]"),
    }
}

impl Visitor for TreeDump {
    fn visit(&mut self, tree: &Tree, id: NodeId) -> VisitStatus {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
        self.output.push_str(&describe(tree.value(id)));
        self.output.push('\n');
        self.depth += 1;
        VisitStatus::Continue
    }

    fn depart(&mut self, _tree: &Tree, _id: NodeId) {
        self.depth -= 1;
    }
}
