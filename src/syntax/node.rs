//! Node kinds of the document tree.

use serde::Serialize;

/// Payload of a single tree node.
///
/// Block kinds come first, inline kinds after. Only `Document`, `BlockQuote`,
/// `List` and `ListItem` hold block children; `Paragraph`, `Heading` and the
/// inline containers hold inline children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    Document,
    BlockQuote,
    List(ListData),
    ListItem(ListData),
    CodeBlock(CodeBlockData),
    HtmlBlock(String),
    ThematicBreak,
    Heading(HeadingData),
    Paragraph,
    /// Marks a blank line inside a container. Feeds list tightness, renders as nothing.
    BlankLine,

    CodeSpan(String),
    HtmlSpan(String),
    Emphasis,
    Strong,
    Link(LinkData),
    Image(ImageData),
    SoftBreak,
    LineBreak,
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    Bullet(char),
    Ordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListDelimiter {
    Period,
    Paren,
}

impl ListDelimiter {
    pub fn as_char(self) -> char {
        match self {
            ListDelimiter::Period => '.',
            ListDelimiter::Paren => ')',
        }
    }
}

/// Shared by `List` and `ListItem`. The list copies the data of its first item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListData {
    pub kind: ListKind,
    pub delimiter: ListDelimiter,
    pub start: u64,
    pub tight: bool,
    /// Columns of indentation before the marker.
    pub marker_offset: usize,
    /// Marker width plus the whitespace that follows it.
    pub padding: usize,
    /// Column where item content starts, relative to the enclosing container.
    pub indent_width: usize,
}

impl ListData {
    pub fn is_ordered(&self) -> bool {
        matches!(self.kind, ListKind::Ordered)
    }

    /// Whether an item with `other` markers may continue a list started with `self`.
    pub fn same_list(&self, other: &ListData) -> bool {
        self.kind == other.kind && self.delimiter == other.delimiter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingData {
    pub level: u8,
    pub setext: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CodeBlockData {
    pub fenced: bool,
    pub fence_char: char,
    pub fence_length: usize,
    pub fence_offset: usize,
    pub info: String,
    pub literal_lines: Vec<String>,
}

impl CodeBlockData {
    pub fn indented() -> Self {
        Self::default()
    }

    /// Code content with every line newline-terminated.
    pub fn literal(&self) -> String {
        let mut out = String::new();
        for line in &self.literal_lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// First word of the info string, if any.
    pub fn language(&self) -> Option<&str> {
        self.info.split_whitespace().next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LinkData {
    pub destination: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ImageData {
    pub destination: String,
    pub title: String,
    pub alt: String,
}

impl NodeValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeValue::Document => "Document",
            NodeValue::BlockQuote => "BlockQuote",
            NodeValue::List(_) => "List",
            NodeValue::ListItem(_) => "ListItem",
            NodeValue::CodeBlock(_) => "CodeBlock",
            NodeValue::HtmlBlock(_) => "HtmlBlock",
            NodeValue::ThematicBreak => "ThematicBreak",
            NodeValue::Heading(_) => "Heading",
            NodeValue::Paragraph => "Paragraph",
            NodeValue::BlankLine => "BlankLine",
            NodeValue::CodeSpan(_) => "CodeSpan",
            NodeValue::HtmlSpan(_) => "HtmlSpan",
            NodeValue::Emphasis => "Emphasis",
            NodeValue::Strong => "Strong",
            NodeValue::Link(_) => "Link",
            NodeValue::Image(_) => "Image",
            NodeValue::SoftBreak => "SoftBreak",
            NodeValue::LineBreak => "LineBreak",
            NodeValue::Text(_) => "Text",
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeValue::Document
                | NodeValue::BlockQuote
                | NodeValue::List(_)
                | NodeValue::ListItem(_)
                | NodeValue::CodeBlock(_)
                | NodeValue::HtmlBlock(_)
                | NodeValue::ThematicBreak
                | NodeValue::Heading(_)
                | NodeValue::Paragraph
                | NodeValue::BlankLine
        )
    }

    /// Whether a block of kind `child` may be appended under `self` during block parsing.
    pub fn can_contain(&self, child: &NodeValue) -> bool {
        match self {
            NodeValue::Document | NodeValue::BlockQuote | NodeValue::ListItem(_) => {
                child.is_block() && !matches!(child, NodeValue::ListItem(_))
            }
            NodeValue::List(_) => matches!(child, NodeValue::ListItem(_)),
            _ => false,
        }
    }

    /// Leaf blocks whose raw lines are collected while they stay open.
    pub fn accepts_lines(&self) -> bool {
        matches!(
            self,
            NodeValue::Paragraph | NodeValue::Heading(_) | NodeValue::CodeBlock(_)
        )
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            NodeValue::Text(s) | NodeValue::CodeSpan(s) => Some(s),
            _ => None,
        }
    }
}
