//! Indented code block parsing.
//!
//! A block of text indented four columns is treated as verbatim text. The
//! initial four columns of indentation are not part of the text.
//!
//! Note: blank lines in the verbatim text need not be indented.

use super::line::{CODE_INDENT, Line};
use super::matcher::{BlockStart, MatchContext};
use crate::syntax::{CodeBlockData, NodeValue};

pub(crate) fn start_indented_code(line: &mut Line<'_>, ctx: &MatchContext<'_>) -> Option<BlockStart> {
    // An open paragraph, matched or lazy, swallows the line instead
    if !line.is_indented() || line.is_blank() || ctx.tip_is_paragraph {
        return None;
    }
    line.advance_offset(CODE_INDENT, true);
    Some(BlockStart::Leaf {
        value: NodeValue::CodeBlock(CodeBlockData::indented()),
        content: Some(line.rest()),
    })
}

/// Continuation check for an open indented code block.
pub(crate) fn continue_indented_code(line: &mut Line<'_>) -> bool {
    if line.is_indented() {
        line.advance_offset(CODE_INDENT, true);
        true
    } else if line.is_blank() {
        line.advance_next_nonspace();
        true
    } else {
        false
    }
}

/// Drops trailing blank lines; they belong to whatever follows the block.
/// Returns how many were dropped.
pub(crate) fn trim_trailing_blank_lines(lines: &mut Vec<String>) -> usize {
    let mut dropped = 0;
    while lines
        .last()
        .is_some_and(|l| l.trim_matches([' ', '\t']).is_empty())
    {
        lines.pop();
        dropped += 1;
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_strips_four_columns() {
        let mut line = Line::new("      two extra");
        let doc = NodeValue::Document;
        let ctx = MatchContext {
            container: &doc,
            tip_is_paragraph: false,
        };
        match start_indented_code(&mut line, &ctx) {
            Some(BlockStart::Leaf { content, .. }) => {
                assert_eq!(content.as_deref(), Some("  two extra"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_tab_counts_as_four() {
        let mut line = Line::new("\tfoo");
        assert!(continue_indented_code(&mut line));
        assert_eq!(line.rest(), "foo");
    }

    #[test]
    fn test_blank_and_short_lines() {
        let mut line = Line::new("  ");
        assert!(continue_indented_code(&mut line));
        assert_eq!(line.rest(), "");

        let mut line = Line::new("      ");
        assert!(continue_indented_code(&mut line));
        assert_eq!(line.rest(), "  ");

        let mut line = Line::new("   foo");
        assert!(!continue_indented_code(&mut line));
    }

    #[test]
    fn test_trim_trailing_blank_lines() {
        let mut lines = vec!["a".to_string(), "".to_string(), "  ".to_string()];
        assert_eq!(trim_trailing_blank_lines(&mut lines), 2);
        assert_eq!(lines, vec!["a"]);
    }
}
