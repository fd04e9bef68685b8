//! Fenced code block parsing.

use super::line::Line;
use super::matcher::{BlockStart, MatchContext};
use crate::parser::inline_parser::escapes::unescape_string;
use crate::syntax::{CodeBlockData, NodeValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FenceInfo<'a> {
    pub fence_char: char,
    pub fence_count: usize,
    pub info_string: &'a str,
}

/// Try to detect a fenced code block opening in the text after the indent.
pub(crate) fn try_parse_fence_open(content: &str) -> Option<FenceInfo<'_>> {
    let fence_char = match content.chars().next()? {
        c @ ('`' | '~') => c,
        _ => return None,
    };
    let fence_count = content.chars().take_while(|&c| c == fence_char).count();
    if fence_count < 3 {
        return None;
    }

    let info_string = content[fence_count..].trim_matches([' ', '\t']);
    // A backtick fence would otherwise be ambiguous with an inline code span
    if fence_char == '`' && info_string.contains('`') {
        return None;
    }

    Some(FenceInfo {
        fence_char,
        fence_count,
        info_string,
    })
}

/// Check whether the text after the indent closes a fence opened with
/// `fence_count` copies of `fence_char`.
pub(crate) fn is_closing_fence(content: &str, fence_char: char, fence_count: usize) -> bool {
    if !content.starts_with(fence_char) {
        return false;
    }

    let closing_count = content.chars().take_while(|&c| c == fence_char).count();
    if closing_count < fence_count {
        return false;
    }

    // Rest of line must be empty
    content[closing_count..].trim_matches([' ', '\t']).is_empty()
}

/// Removes up to `fence_offset` columns of leading spaces from a content line,
/// mirroring the indentation of the opening fence.
pub(crate) fn skip_fence_offset(line: &mut Line<'_>, fence_offset: usize) {
    let mut remaining = fence_offset;
    while remaining > 0 && matches!(line.peek(), Some(b' ' | b'\t')) {
        line.advance_offset(1, true);
        remaining -= 1;
    }
}

pub(crate) fn start_fenced_code(line: &mut Line<'_>, _ctx: &MatchContext<'_>) -> Option<BlockStart> {
    if line.is_indented() {
        return None;
    }
    let fence = try_parse_fence_open(line.nonspace_rest())?;
    let code = CodeBlockData {
        fenced: true,
        fence_char: fence.fence_char,
        fence_length: fence.fence_count,
        fence_offset: line.indent(),
        info: unescape_string(fence.info_string),
        literal_lines: Vec::new(),
    };
    line.advance_to_end();
    Some(BlockStart::Leaf {
        value: NodeValue::CodeBlock(code),
        content: None,
    })
}
