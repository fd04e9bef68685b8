//! ATX and setext heading parsing.

use super::line::Line;
use super::matcher::{BlockStart, MatchContext};
use crate::syntax::{HeadingData, NodeValue};

/// Try to parse an ATX heading from the text after the indent.
/// Returns the level (1-6) and the heading text with any closing sequence removed.
pub(crate) fn try_parse_atx_heading(text: &str) -> Option<(u8, &str)> {
    // Must start with 1-6 # characters
    let hash_count = text.bytes().take_while(|&b| b == b'#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &text[hash_count..];
    if !after_hashes.is_empty() && !after_hashes.starts_with([' ', '\t']) {
        return None;
    }

    let content = strip_closing_sequence(after_hashes.trim_matches([' ', '\t']));
    Some((hash_count as u8, content))
}

/// Drops an optional closing run of `#`, which must be preceded by a space
/// or tab unless it is all there is.
fn strip_closing_sequence(content: &str) -> &str {
    let without_hashes = content.trim_end_matches('#');
    if without_hashes.len() == content.len() {
        return content;
    }
    if without_hashes.is_empty() {
        return "";
    }
    if without_hashes.ends_with([' ', '\t']) {
        without_hashes.trim_end_matches([' ', '\t'])
    } else {
        content
    }
}

/// Setext underline: a run of `=` (level 1) or `-` (level 2) with optional trailing whitespace.
pub(crate) fn try_parse_setext_underline(text: &str) -> Option<u8> {
    let trimmed = text.trim_end_matches([' ', '\t']);
    let first = trimmed.chars().next()?;
    let level = match first {
        '=' => 1,
        '-' => 2,
        _ => return None,
    };
    if trimmed.chars().all(|c| c == first) {
        Some(level)
    } else {
        None
    }
}

pub(crate) fn start_atx_heading(line: &mut Line<'_>, _ctx: &MatchContext<'_>) -> Option<BlockStart> {
    if line.is_indented() {
        return None;
    }
    let (level, content) = try_parse_atx_heading(line.nonspace_rest())?;
    let content = (!content.is_empty()).then(|| content.to_string());
    line.advance_to_end();
    Some(BlockStart::Leaf {
        value: NodeValue::Heading(HeadingData {
            level,
            setext: false,
        }),
        content,
    })
}

/// Only applies when this line matched an open paragraph, so lazy lines
/// never become underlines.
pub(crate) fn start_setext_heading(line: &mut Line<'_>, ctx: &MatchContext<'_>) -> Option<BlockStart> {
    if !ctx.interrupts_paragraph() || line.is_indented() {
        return None;
    }
    let level = try_parse_setext_underline(line.nonspace_rest())?;
    line.advance_to_end();
    Some(BlockStart::SetextHeading(level))
}
