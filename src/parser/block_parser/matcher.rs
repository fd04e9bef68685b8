//! Priority-ordered table of block openers.

use super::line::Line;
use super::{blockquotes, code_blocks, headings, horizontal_rules, indented_code, lists, paragraphs};
use crate::syntax::NodeValue;

/// What a rule sees besides the line itself.
pub(crate) struct MatchContext<'t> {
    /// Deepest block matched on this line so far, or the container just opened.
    pub container: &'t NodeValue,
    /// The open tip is a paragraph, whether or not this line matched it.
    pub tip_is_paragraph: bool,
}

impl MatchContext<'_> {
    /// A new block here would cut the matched paragraph short.
    pub(crate) fn interrupts_paragraph(&self) -> bool {
        matches!(self.container, NodeValue::Paragraph)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BlockStart {
    /// A container opened; matching continues on the rest of the line.
    Container(NodeValue),
    /// A leaf opened, with its first line of content if it has one. The line is done.
    Leaf {
        value: NodeValue,
        content: Option<String>,
    },
    /// The matched paragraph turns into a heading of this level.
    SetextHeading(u8),
}

pub(crate) struct BlockRule {
    pub name: &'static str,
    pub can_interrupt_paragraph: bool,
    pub try_start: fn(&mut Line<'_>, &MatchContext<'_>) -> Option<BlockStart>,
}

/// Tried in order; the first rule that returns a start wins. A rule that
/// returns `None` leaves the line untouched.
pub(crate) const BLOCK_RULES: &[BlockRule] = &[
    BlockRule {
        name: "setext heading",
        can_interrupt_paragraph: true,
        try_start: headings::start_setext_heading,
    },
    BlockRule {
        name: "thematic break",
        can_interrupt_paragraph: true,
        try_start: horizontal_rules::start_thematic_break,
    },
    BlockRule {
        name: "ATX heading",
        can_interrupt_paragraph: true,
        try_start: headings::start_atx_heading,
    },
    BlockRule {
        name: "fenced code",
        can_interrupt_paragraph: true,
        try_start: code_blocks::start_fenced_code,
    },
    BlockRule {
        name: "block quote",
        can_interrupt_paragraph: true,
        try_start: blockquotes::start_block_quote,
    },
    BlockRule {
        name: "list item",
        can_interrupt_paragraph: true,
        try_start: lists::start_list_item,
    },
    BlockRule {
        name: "indented code",
        can_interrupt_paragraph: false,
        try_start: indented_code::start_indented_code,
    },
    BlockRule {
        name: "paragraph",
        can_interrupt_paragraph: false,
        try_start: paragraphs::start_paragraph,
    },
];

pub(crate) fn try_open_block(
    line: &mut Line<'_>,
    ctx: &MatchContext<'_>,
) -> Option<(&'static str, BlockStart)> {
    let interrupting = ctx.interrupts_paragraph();
    BLOCK_RULES
        .iter()
        .filter(|rule| !interrupting || rule.can_interrupt_paragraph)
        .find_map(|rule| (rule.try_start)(line, ctx).map(|start| (rule.name, start)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(text: &str, container: &NodeValue, tip_is_paragraph: bool) -> Option<&'static str> {
        let mut line = Line::new(text);
        let ctx = MatchContext {
            container,
            tip_is_paragraph,
        };
        try_open_block(&mut line, &ctx).map(|(name, _)| name)
    }

    #[test]
    fn test_priority_order() {
        let doc = NodeValue::Document;
        assert_eq!(open("***", &doc, false), Some("thematic break"));
        assert_eq!(open("* * *", &doc, false), Some("thematic break"));
        assert_eq!(open("* item", &doc, false), Some("list item"));
        assert_eq!(open("## h", &doc, false), Some("ATX heading"));
        assert_eq!(open("```rust", &doc, false), Some("fenced code"));
        assert_eq!(open("> q", &doc, false), Some("block quote"));
        assert_eq!(open("    code", &doc, false), Some("indented code"));
        assert_eq!(open("text", &doc, false), Some("paragraph"));
        assert_eq!(open("", &doc, false), None);
    }

    #[test]
    fn test_setext_beats_thematic_break_under_paragraph() {
        assert_eq!(
            open("---", &NodeValue::Paragraph, true),
            Some("setext heading")
        );
        assert_eq!(open("---", &NodeValue::Document, false), Some("thematic break"));
    }

    #[test]
    fn test_indented_code_cannot_interrupt_paragraph() {
        assert_eq!(open("    code", &NodeValue::Paragraph, true), None);
        // Lazy line: the paragraph did not match, but it is still the tip.
        assert_eq!(open("    code", &NodeValue::Document, true), None);
    }

    #[test]
    fn test_paragraph_continues_instead_of_reopening() {
        assert_eq!(open("more", &NodeValue::Paragraph, true), None);
        assert_eq!(open("more", &NodeValue::BlockQuote, true), None);
    }

    #[test]
    fn test_failed_rule_leaves_line_untouched() {
        let mut line = Line::new("  plain");
        let doc = NodeValue::Document;
        let ctx = MatchContext {
            container: &doc,
            tip_is_paragraph: true,
        };
        assert!(try_open_block(&mut line, &ctx).is_none());
        assert_eq!(line.column(), 0);
        assert_eq!(line.nonspace_rest(), "plain");
    }
}
