//! The delimiter stack shared by emphasis and bracket resolution.
//!
//! Entries live in their own arena and form a doubly linked list from the
//! bottom of the stack to the top. Removing an entry only unlinks it.

use crate::syntax::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DelimId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DelimKind {
    Asterisk,
    Underscore,
    /// `[`
    Bracket,
    /// `![`
    Image,
}

impl DelimKind {
    pub(crate) fn from_char(ch: char) -> Option<Self> {
        match ch {
            '*' => Some(DelimKind::Asterisk),
            '_' => Some(DelimKind::Underscore),
            _ => None,
        }
    }

    pub(crate) fn as_char(self) -> char {
        match self {
            DelimKind::Asterisk => '*',
            DelimKind::Underscore => '_',
            DelimKind::Bracket => '[',
            DelimKind::Image => '!',
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Delimiter {
    pub kind: DelimKind,
    /// Delimiter characters not yet consumed by emphasis.
    pub count: usize,
    pub original_count: usize,
    pub active: bool,
    pub can_open: bool,
    pub can_close: bool,
    /// Text node holding the literal delimiter characters.
    pub node: NodeId,
    /// Input offset right after the run.
    pub position: usize,
    prev: Option<DelimId>,
    next: Option<DelimId>,
}

impl Delimiter {
    pub(crate) fn new(kind: DelimKind, count: usize, node: NodeId, position: usize) -> Self {
        Self {
            kind,
            count,
            original_count: count,
            active: true,
            can_open: true,
            can_close: false,
            node,
            position,
            prev: None,
            next: None,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct DelimiterStack {
    entries: Vec<Delimiter>,
    top: Option<DelimId>,
}

impl DelimiterStack {
    pub(crate) fn push(&mut self, mut delim: Delimiter) -> DelimId {
        let id = DelimId(self.entries.len());
        delim.prev = self.top;
        delim.next = None;
        if let Some(top) = self.top {
            self.entries[top.0].next = Some(id);
        }
        self.entries.push(delim);
        self.top = Some(id);
        id
    }

    pub(crate) fn top(&self) -> Option<DelimId> {
        self.top
    }

    pub(crate) fn get(&self, id: DelimId) -> &Delimiter {
        &self.entries[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: DelimId) -> &mut Delimiter {
        &mut self.entries[id.0]
    }

    pub(crate) fn prev(&self, id: DelimId) -> Option<DelimId> {
        self.entries[id.0].prev
    }

    pub(crate) fn next(&self, id: DelimId) -> Option<DelimId> {
        self.entries[id.0].next
    }

    /// Unlinks `id`. Its neighbours are joined.
    pub(crate) fn remove(&mut self, id: DelimId) {
        let (prev, next) = {
            let d = &self.entries[id.0];
            (d.prev, d.next)
        };
        if let Some(prev) = prev {
            self.entries[prev.0].next = next;
        }
        match next {
            Some(next) => self.entries[next.0].prev = prev,
            None => self.top = prev,
        }
        let d = &mut self.entries[id.0];
        d.prev = None;
        d.next = None;
    }

    /// Removes every entry strictly between `lower` and `upper`.
    pub(crate) fn remove_between(&mut self, lower: DelimId, upper: DelimId) {
        let mut current = self.prev(upper);
        while let Some(id) = current
            && id != lower
        {
            current = self.prev(id);
            self.remove(id);
        }
    }

    /// Removes every entry above `bottom`, or all of them.
    pub(crate) fn truncate(&mut self, bottom: Option<DelimId>) {
        while let Some(top) = self.top
            && Some(top) != bottom
        {
            self.remove(top);
        }
    }

    /// Iterates from the top of the stack down.
    #[cfg(test)]
    pub(crate) fn iter_down(&self) -> impl Iterator<Item = DelimId> + '_ {
        std::iter::successors(self.top, |&id| self.prev(id))
    }
}

/// Unicode whitespace; the start and end of the input count as whitespace.
fn is_whitespace(ch: Option<char>) -> bool {
    ch.is_none_or(char::is_whitespace)
}

/// ASCII punctuation plus any other symbol that is neither alphanumeric
/// nor whitespace.
pub(crate) fn is_punctuation(ch: Option<char>) -> bool {
    match ch {
        Some(c) if c.is_ascii() => c.is_ascii_punctuation(),
        Some(c) => !c.is_alphanumeric() && !c.is_whitespace(),
        None => false,
    }
}

/// A scanned `*` or `_` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DelimiterRun {
    pub count: usize,
    pub can_open: bool,
    pub can_close: bool,
}

/// Scans the run of `ch` starting at byte `pos` and classifies it by the
/// left- and right-flanking rules.
pub(crate) fn scan_delimiter_run(input: &str, pos: usize, ch: char) -> DelimiterRun {
    let count = input[pos..].chars().take_while(|&c| c == ch).count();
    let before = input[..pos].chars().next_back();
    let after = input[pos + count..].chars().next();

    let left_flanking = !is_whitespace(after)
        && (!is_punctuation(after) || is_whitespace(before) || is_punctuation(before));
    let right_flanking = !is_whitespace(before)
        && (!is_punctuation(before) || is_whitespace(after) || is_punctuation(after));

    let (can_open, can_close) = if ch == '_' {
        (
            left_flanking && (!right_flanking || is_punctuation(before)),
            right_flanking && (!left_flanking || is_punctuation(after)),
        )
    } else {
        (left_flanking, right_flanking)
    };

    DelimiterRun {
        count,
        can_open,
        can_close,
    }
}
