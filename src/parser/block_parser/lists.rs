//! List item markers and continuation.

use super::line::Line;
use super::matcher::{BlockStart, MatchContext};
use crate::syntax::{ListData, ListDelimiter, ListKind, NodeValue};

/// Ordered markers allow at most this many digits.
const MAX_ORDERED_DIGITS: usize = 9;
/// Whitespace after a marker beyond this many columns belongs to the content.
const MAX_MARKER_PADDING: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ListMarker {
    Bullet(char),
    Ordered { number: u64, delimiter: ListDelimiter },
}

/// Try to parse a list marker at the start of `text`.
/// Returns the marker and its length in bytes. The marker must be followed
/// by a space, a tab, or the end of the line.
pub(crate) fn try_parse_list_marker(text: &str) -> Option<(ListMarker, usize)> {
    let bytes = text.as_bytes();
    let (marker, len) = match *bytes.first()? {
        c @ (b'-' | b'+' | b'*') => (ListMarker::Bullet(c as char), 1),
        b'0'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > MAX_ORDERED_DIGITS {
                return None;
            }
            let delimiter = match bytes.get(digits) {
                Some(b'.') => ListDelimiter::Period,
                Some(b')') => ListDelimiter::Paren,
                _ => return None,
            };
            let number = text[..digits].parse().ok()?;
            (ListMarker::Ordered { number, delimiter }, digits + 1)
        }
        _ => return None,
    };

    match bytes.get(len) {
        None | Some(b' ' | b'\t') => Some((marker, len)),
        _ => None,
    }
}

pub(crate) fn start_list_item(line: &mut Line<'_>, ctx: &MatchContext<'_>) -> Option<BlockStart> {
    if line.is_indented() {
        return None;
    }
    let rest = line.nonspace_rest();
    let (marker, marker_len) = try_parse_list_marker(rest)?;

    if ctx.interrupts_paragraph() {
        // Only a non-empty item, and for ordered lists one starting at 1,
        // may interrupt a paragraph.
        if rest[marker_len..].trim_matches([' ', '\t']).is_empty() {
            return None;
        }
        if matches!(marker, ListMarker::Ordered { number, .. } if number != 1) {
            return None;
        }
    }

    let marker_offset = line.indent();
    line.advance_next_nonspace();
    line.advance_offset(marker_len, true);

    let spaces_start = line.checkpoint();
    let spaces_start_column = line.column();
    loop {
        line.advance_offset(1, true);
        let spaces = line.column() - spaces_start_column;
        if spaces >= MAX_MARKER_PADDING + 1 || !matches!(line.peek(), Some(b' ' | b'\t')) {
            break;
        }
    }
    let blank_item = line.peek().is_none();
    let spaces_after_marker = line.column() - spaces_start_column;

    let padding = if spaces_after_marker > MAX_MARKER_PADDING || spaces_after_marker < 1 || blank_item
    {
        // Content starts one column after the marker; the rest is indentation.
        line.restore(spaces_start);
        if matches!(line.peek(), Some(b' ' | b'\t')) {
            line.advance_offset(1, true);
        }
        marker_len + 1
    } else {
        marker_len + spaces_after_marker
    };

    let (kind, delimiter, start) = match marker {
        ListMarker::Bullet(c) => (ListKind::Bullet(c), ListDelimiter::Period, 1),
        ListMarker::Ordered { number, delimiter } => (ListKind::Ordered, delimiter, number),
    };

    Some(BlockStart::Container(NodeValue::ListItem(ListData {
        kind,
        delimiter,
        start,
        tight: true,
        marker_offset,
        padding,
        indent_width: marker_offset + padding,
    })))
}

/// Continuation check for an open list item.
///
/// A blank line continues the item unless the item is still empty; a
/// non-blank line must be indented up to the item's content column.
pub(crate) fn continue_list_item(line: &mut Line<'_>, item: &ListData, has_children: bool) -> bool {
    if line.is_blank() {
        if !has_children {
            return false;
        }
        line.advance_next_nonspace();
        true
    } else if line.indent() >= item.indent_width {
        line.advance_offset(item.indent_width, true);
        true
    } else {
        false
    }
}
