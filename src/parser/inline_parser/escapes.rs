//! Backslash escapes and character references.
//!
//! - Any ASCII punctuation character preceded by a backslash is literal
//! - A backslash before a line ending is a hard line break
//! - Any other backslash is a literal backslash
//! - `&name;`, `&#123;` and `&#x7B;` decode to the referenced character(s)
//!
//! Neither applies inside code spans or code blocks.

use std::sync::LazyLock;

use regex::Regex;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap()
});

pub(crate) fn is_escapable(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Escape {
    /// `\*` and friends.
    Literal(char),
    /// Backslash at the end of a line.
    HardLineBreak,
    /// A backslash that escapes nothing.
    Backslash,
}

/// Classifies the backslash at the start of `text`. Returns the escape and
/// how many bytes it spans.
pub(crate) fn parse_escape(text: &str) -> (Escape, usize) {
    match text[1..].chars().next() {
        Some('\n') => (Escape::HardLineBreak, 2),
        Some(ch) if is_escapable(ch) => (Escape::Literal(ch), 2),
        _ => (Escape::Backslash, 1),
    }
}

/// Decodes the character reference at the start of `text`.
/// Returns the decoded text and the length of the reference.
pub(crate) fn parse_entity(text: &str) -> Option<(String, usize)> {
    let matched = ENTITY.find(text)?.as_str();
    let body = &matched[1..matched.len() - 1];

    let decoded = if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        let ch = match code {
            0 => '\u{FFFD}',
            _ => char::from_u32(code).unwrap_or('\u{FFFD}'),
        };
        ch.to_string()
    } else {
        let decoded = html_escape::decode_html_entities(matched);
        if decoded == matched {
            return None;
        }
        decoded.into_owned()
    };
    Some((decoded, matched.len()))
}

/// Resolves backslash escapes and character references in `text`.
/// Used for info strings, link destinations and titles.
pub fn unescape_string(text: &str) -> String {
    if !text.contains(['\\', '&']) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(offset) = text[pos..].find(['\\', '&']) {
        out.push_str(&text[pos..pos + offset]);
        pos += offset;
        let rest = &text[pos..];
        if rest.starts_with('\\') {
            match rest[1..].chars().next() {
                Some(ch) if is_escapable(ch) => {
                    out.push(ch);
                    pos += 2;
                }
                _ => {
                    out.push('\\');
                    pos += 1;
                }
            }
        } else if let Some((decoded, len)) = parse_entity(rest) {
            out.push_str(&decoded);
            pos += len;
        } else {
            out.push('&');
            pos += 1;
        }
    }
    out.push_str(&text[pos..]);
    out
}
