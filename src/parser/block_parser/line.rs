//! Line analysis: indentation with tab stops, blank detection, and the
//! column-aware cursor the block parser consumes markers with.

pub(crate) const TAB_STOP: usize = 4;
/// Indentation that turns a line into indented code.
pub(crate) const CODE_INDENT: usize = 4;

/// Summary of one physical line (or the remainder of one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo<'a> {
    /// Text after the analyzed indentation.
    pub content: &'a str,
    /// Columns of indentation, capped at [`CODE_INDENT`].
    pub indent: usize,
    /// Full column width of the leading whitespace.
    pub width: usize,
    pub is_blank: bool,
}

/// Analyzes a line starting at column 0.
pub fn analyze(raw: &str) -> LineInfo<'_> {
    analyze_from(raw, 0)
}

/// Analyzes text whose first byte sits at `column`; tabs advance to the
/// next multiple of 4 counted from there.
pub fn analyze_from(raw: &str, column: usize) -> LineInfo<'_> {
    let mut width = 0;
    let mut content_start = raw.len();
    for (i, b) in raw.bytes().enumerate() {
        match b {
            b' ' => width += 1,
            b'\t' => width += TAB_STOP - (column + width) % TAB_STOP,
            _ => {
                content_start = i;
                break;
            }
        }
    }
    let content = &raw[content_start..];
    LineInfo {
        content,
        indent: width.min(CODE_INDENT),
        width,
        is_blank: content.is_empty(),
    }
}

/// Splits input on `\n`, `\r\n` or `\r`. A trailing line ending does not
/// produce an extra empty line.
pub(crate) fn split_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&input[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&input[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&input[start..]);
    }
    lines
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    offset: usize,
    column: usize,
    partially_consumed_tab: bool,
}

/// Cursor over one line. Tracks both the byte offset and the visual column
/// so container markers can consume part of a tab.
#[derive(Debug, Clone)]
pub(crate) struct Line<'a> {
    text: &'a str,
    offset: usize,
    column: usize,
    partially_consumed_tab: bool,
    next_nonspace: usize,
    next_nonspace_column: usize,
    indent: usize,
    blank: bool,
}

impl<'a> Line<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut line = Self {
            text,
            offset: 0,
            column: 0,
            partially_consumed_tab: false,
            next_nonspace: 0,
            next_nonspace_column: 0,
            indent: 0,
            blank: false,
        };
        line.find_next_nonspace();
        line
    }

    /// Recomputes indentation and blankness from the current position.
    pub(crate) fn find_next_nonspace(&mut self) {
        let info = analyze_from(&self.text[self.offset..], self.column);
        self.next_nonspace = self.text.len() - info.content.len();
        self.next_nonspace_column = self.column + info.width;
        self.indent = info.width;
        self.blank = info.is_blank;
    }

    /// Columns between the cursor and the first non-whitespace character.
    pub(crate) fn indent(&self) -> usize {
        self.indent
    }

    pub(crate) fn is_indented(&self) -> bool {
        self.indent >= CODE_INDENT
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.blank
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Byte at the cursor.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.offset).copied()
    }

    /// First non-whitespace byte at or after the cursor.
    pub(crate) fn peek_nonspace(&self) -> Option<u8> {
        self.text.as_bytes().get(self.next_nonspace).copied()
    }

    /// Text from the first non-whitespace character on.
    pub(crate) fn nonspace_rest(&self) -> &'a str {
        &self.text[self.next_nonspace..]
    }

    pub(crate) fn advance_next_nonspace(&mut self) {
        self.offset = self.next_nonspace;
        self.column = self.next_nonspace_column;
        self.partially_consumed_tab = false;
    }

    /// Advances by `count` characters, or by `count` columns when `columns`
    /// is set, in which case a tab may be consumed only partially.
    pub(crate) fn advance_offset(&mut self, mut count: usize, columns: bool) {
        let bytes = self.text.as_bytes();
        while count > 0 && self.offset < bytes.len() {
            if bytes[self.offset] == b'\t' {
                let chars_to_tab = TAB_STOP - (self.column % TAB_STOP);
                if columns {
                    self.partially_consumed_tab = chars_to_tab > count;
                    let advance = chars_to_tab.min(count);
                    self.column += advance;
                    if !self.partially_consumed_tab {
                        self.offset += 1;
                    }
                    count -= advance;
                } else {
                    self.partially_consumed_tab = false;
                    self.column += chars_to_tab;
                    self.offset += 1;
                    count -= 1;
                }
            } else {
                self.partially_consumed_tab = false;
                let width = self.text[self.offset..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.offset += width;
                self.column += 1;
                count -= 1;
            }
        }
    }

    /// Consumes to the end of the line.
    pub(crate) fn advance_to_end(&mut self) {
        self.offset = self.text.len();
        self.partially_consumed_tab = false;
    }

    /// Everything after the cursor; the unconsumed part of a split tab
    /// becomes spaces.
    pub(crate) fn rest(&self) -> String {
        if self.partially_consumed_tab {
            let spaces = TAB_STOP - (self.column % TAB_STOP);
            let mut out = " ".repeat(spaces);
            out.push_str(&self.text[self.offset + 1..]);
            out
        } else {
            self.text[self.offset..].to_string()
        }
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            column: self.column,
            partially_consumed_tab: self.partially_consumed_tab,
        }
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset;
        self.column = checkpoint.column;
        self.partially_consumed_tab = checkpoint.partially_consumed_tab;
    }
}
