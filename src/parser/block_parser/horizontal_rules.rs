//! Thematic break parsing.

use super::line::Line;
use super::matcher::{BlockStart, MatchContext};
use crate::syntax::NodeValue;

/// Try to parse a thematic break from the text after the indent.
///
/// A thematic break is 3 or more `*`, `-`, or `_` characters,
/// optionally separated by spaces or tabs.
pub(crate) fn try_parse_thematic_break(text: &str) -> Option<char> {
    let rule_char = text.chars().next()?;
    if !matches!(rule_char, '*' | '-' | '_') {
        return None;
    }

    let mut count = 0;
    for ch in text.chars() {
        match ch {
            c if c == rule_char => count += 1,
            ' ' | '\t' => continue,
            _ => return None,
        }
    }

    if count >= 3 { Some(rule_char) } else { None }
}

pub(crate) fn start_thematic_break(line: &mut Line<'_>, _ctx: &MatchContext<'_>) -> Option<BlockStart> {
    if line.is_indented() {
        return None;
    }
    try_parse_thematic_break(line.nonspace_rest())?;
    line.advance_to_end();
    Some(BlockStart::Leaf {
        value: NodeValue::ThematicBreak,
        content: None,
    })
}
