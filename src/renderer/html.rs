//! CommonMark HTML output.

use std::fmt::Write;

use crate::config::Extensions;
use crate::syntax::{ListKind, NodeId, NodeValue, Tree, VisitStatus, Visitor};

/// Escapes `&`, `<`, `>` and `"` for text and attribute values.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Bytes left alone in URLs besides ASCII alphanumerics.
const URL_SAFE: &[u8] = b";/?:@=+$,-_.!~*'()#";

/// Percent-encodes a link destination and escapes it for an attribute.
/// Existing `%XX` sequences are kept.
pub fn escape_href(url: &str) -> String {
    let bytes = url.as_bytes();
    let mut out = String::with_capacity(url.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'%' if bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit) =>
            {
                out.push('%');
            }
            b'&' => out.push_str("&amp;"),
            _ if b.is_ascii_alphanumeric() || URL_SAFE.contains(&b) => out.push(b as char),
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
        i += 1;
    }
    out
}

pub struct HtmlRenderer {
    output: String,
    hard_line_breaks: bool,
}

impl HtmlRenderer {
    pub fn new(extensions: &Extensions) -> Self {
        Self {
            output: String::with_capacity(1024),
            hard_line_breaks: extensions.hard_line_breaks,
        }
    }

    pub fn render(mut self, tree: &Tree) -> String {
        tree.walk(tree.root(), &mut self);
        self.output
    }

    /// Starts a new line unless already at the start of one.
    fn cr(&mut self) {
        if !self.output.is_empty() && !self.output.ends_with('\n') {
            self.output.push('\n');
        }
    }

    fn push(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn push_escaped(&mut self, s: &str) {
        self.output.push_str(&escape_html(s));
    }

    fn push_title(&mut self, title: &str) {
        if !title.is_empty() {
            self.push(" title=\"");
            self.push_escaped(title);
            self.push("\"");
        }
    }
}

/// Paragraphs directly inside an item of a tight list render without `<p>`.
fn in_tight_list(tree: &Tree, paragraph: NodeId) -> bool {
    let Some(item) = tree.parent(paragraph) else {
        return false;
    };
    if !matches!(tree.value(item), NodeValue::ListItem(_)) {
        return false;
    }
    tree.parent(item)
        .is_some_and(|list| matches!(tree.value(list), NodeValue::List(data) if data.tight))
}

impl Visitor for HtmlRenderer {
    fn visit(&mut self, tree: &Tree, id: NodeId) -> VisitStatus {
        match tree.value(id) {
            NodeValue::Document | NodeValue::BlankLine => {}
            NodeValue::BlockQuote => {
                self.cr();
                self.push("<blockquote>\n");
            }
            NodeValue::List(data) => {
                self.cr();
                match data.kind {
                    ListKind::Ordered if data.start != 1 => {
                        let _ = write!(self.output, "<ol start=\"{}\">", data.start);
                    }
                    ListKind::Ordered => self.push("<ol>"),
                    ListKind::Bullet(_) => self.push("<ul>"),
                }
                self.cr();
            }
            NodeValue::ListItem(_) => self.push("<li>"),
            NodeValue::Paragraph => {
                if !in_tight_list(tree, id) {
                    self.cr();
                    self.push("<p>");
                }
            }
            NodeValue::Heading(h) => {
                self.cr();
                let _ = write!(self.output, "<h{}>", h.level);
            }
            NodeValue::CodeBlock(code) => {
                self.cr();
                match code.language() {
                    Some(lang) => {
                        self.push("<pre><code class=\"language-");
                        self.push_escaped(lang);
                        self.push("\">");
                    }
                    None => self.push("<pre><code>"),
                }
                self.push_escaped(&code.literal());
                self.push("</code></pre>\n");
            }
            NodeValue::HtmlBlock(html) => {
                self.cr();
                self.push(html);
                self.cr();
            }
            NodeValue::ThematicBreak => {
                self.cr();
                self.push("<hr />\n");
            }
            NodeValue::Text(text) => self.push_escaped(text),
            NodeValue::SoftBreak => {
                if self.hard_line_breaks {
                    self.push("<br />\n");
                } else {
                    self.push("\n");
                }
            }
            NodeValue::LineBreak => self.push("<br />\n"),
            NodeValue::CodeSpan(code) => {
                self.push("<code>");
                self.push_escaped(code);
                self.push("</code>");
            }
            NodeValue::HtmlSpan(html) => self.push(html),
            NodeValue::Emphasis => self.push("<em>"),
            NodeValue::Strong => self.push("<strong>"),
            NodeValue::Link(link) => {
                self.push("<a href=\"");
                self.push(&escape_href(&link.destination));
                self.push("\"");
                self.push_title(&link.title);
                self.push(">");
            }
            NodeValue::Image(image) => {
                self.push("<img src=\"");
                self.push(&escape_href(&image.destination));
                self.push("\" alt=\"");
                self.push_escaped(&image.alt);
                self.push("\"");
                self.push_title(&image.title);
                self.push(" />");
                return VisitStatus::SkipChildren;
            }
        }
        VisitStatus::Continue
    }

    fn depart(&mut self, tree: &Tree, id: NodeId) {
        match tree.value(id) {
            NodeValue::BlockQuote => {
                self.cr();
                self.push("</blockquote>\n");
            }
            NodeValue::List(data) => {
                self.cr();
                self.push(if data.is_ordered() { "</ol>\n" } else { "</ul>\n" });
            }
            NodeValue::ListItem(_) => self.push("</li>\n"),
            NodeValue::Paragraph => {
                if !in_tight_list(tree, id) {
                    self.push("</p>\n");
                }
            }
            NodeValue::Heading(h) => {
                let _ = writeln!(self.output, "</h{}>", h.level);
            }
            NodeValue::Emphasis => self.push("</em>"),
            NodeValue::Strong => self.push("</strong>"),
            NodeValue::Link(_) => self.push("</a>"),
            _ => {}
        }
    }
}
