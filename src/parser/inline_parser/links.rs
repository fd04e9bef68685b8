//! Link and image tails: the `(destination "title")` part after `]` and
//! reference labels.

use super::escapes::unescape_string;
use crate::parser::references::LinkReference;

/// Link labels longer than this are not labels.
pub(crate) const MAX_LABEL_LEN: usize = 999;

/// Nesting limit for unescaped parentheses in a bare destination.
const MAX_PAREN_DEPTH: usize = 32;

/// Skips spaces and tabs with at most one line ending among them.
fn skip_spnl(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut seen_newline = false;
    while pos < bytes.len() {
        match bytes[pos] {
            b' ' | b'\t' => pos += 1,
            b'\n' if !seen_newline => {
                seen_newline = true;
                pos += 1;
            }
            _ => break,
        }
    }
    pos
}

/// Parses an inline link tail starting at the `(` at byte `start`.
/// Returns the reference and the position after the closing `)`.
pub(crate) fn parse_inline_tail(text: &str, start: usize) -> Option<(LinkReference, usize)> {
    if text.as_bytes().get(start) != Some(&b'(') {
        return None;
    }
    let mut pos = skip_spnl(text, start + 1);

    let (raw_destination, after_destination) = match text.as_bytes().get(pos) {
        Some(b')') => ("", pos),
        _ => parse_destination(text, pos)?,
    };
    pos = skip_spnl(text, after_destination);

    let mut raw_title = "";
    let separated = pos > after_destination;
    if separated && let Some((title, after_title)) = parse_title(text, pos) {
        raw_title = title;
        pos = skip_spnl(text, after_title);
    }

    if text.as_bytes().get(pos) != Some(&b')') {
        return None;
    }
    let reference = LinkReference {
        destination: unescape_string(raw_destination),
        title: unescape_string(raw_title),
    };
    Some((reference, pos + 1))
}

/// Returns the raw destination and the position after it.
fn parse_destination(text: &str, start: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(start) == Some(&b'<') {
        let mut pos = start + 1;
        while pos < bytes.len() {
            match bytes[pos] {
                b'>' => return Some((&text[start + 1..pos], pos + 1)),
                b'\\' if pos + 1 < bytes.len() && bytes[pos + 1] != b'\n' => pos += 2,
                b'<' | b'\n' => return None,
                _ => pos += 1,
            }
        }
        return None;
    }

    let mut pos = start;
    let mut depth = 0usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' if pos + 1 < bytes.len() && bytes[pos + 1].is_ascii_punctuation() => pos += 2,
            b'(' => {
                depth += 1;
                if depth > MAX_PAREN_DEPTH {
                    return None;
                }
                pos += 1;
            }
            b')' if depth == 0 => break,
            b')' => {
                depth -= 1;
                pos += 1;
            }
            b if b <= b' ' || b == 0x7f => break,
            _ => pos += 1,
        }
    }
    if pos == start || depth != 0 {
        return None;
    }
    Some((&text[start..pos], pos))
}

/// Returns the raw title without its quotes and the position after it.
fn parse_title(text: &str, start: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    let close = match bytes.get(start)? {
        b'"' => b'"',
        b'\'' => b'\'',
        b'(' => b')',
        _ => return None,
    };
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' if pos + 1 < bytes.len() => pos += 2,
            b if b == close => return Some((&text[start + 1..pos], pos + 1)),
            b'(' if close == b')' => return None,
            _ => pos += 1,
        }
    }
    None
}

/// Scans a `[label]` at byte `start`. Returns the label text and the
/// position after the closing `]`.
pub(crate) fn scan_label(text: &str, start: usize) -> Option<(&str, usize)> {
    if text.as_bytes().get(start) != Some(&b'[') {
        return None;
    }
    let bytes = text.as_bytes();
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' if pos + 1 < bytes.len() => pos += 2,
            b'[' => return None,
            b']' => {
                let label = &text[start + 1..pos];
                return (label.chars().count() <= MAX_LABEL_LEN).then_some((label, pos + 1));
            }
            _ => pos += 1,
        }
    }
    None
}

/// Whether `label` may be looked up as a reference: not blank, no
/// unescaped brackets, within the length limit.
pub(crate) fn is_valid_label(label: &str) -> bool {
    if label.trim().is_empty() || label.chars().count() > MAX_LABEL_LEN {
        return false;
    }
    let bytes = label.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'[' | b']' => return false,
            _ => pos += 1,
        }
    }
    true
}
