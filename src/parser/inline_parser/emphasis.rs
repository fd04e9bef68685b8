//! Emphasis resolution over the delimiter stack.
//!
//! Closers are visited bottom to top. Each one looks back for the nearest
//! compatible opener; a match wraps the nodes between them in `Emphasis`
//! (one delimiter from each side) or `Strong` (two). Rules:
//! - Openers and closers must use the same character
//! - "Rule of 3s": when either side can both open and close, the run lengths
//!   must not sum to a multiple of 3 unless both are multiples of 3
//!   (`*foo**bar*` stays one emphasis)
//! - A failed search remembers where it stopped, per closer character,
//!   length mod 3 and can-open, so no opener is scanned twice

use super::InlineParser;
use super::delimiters::{DelimId, DelimKind};
use crate::syntax::{NodeId, NodeValue};

/// Index into the openers-bottom table.
fn bottom_slot(kind: DelimKind, original_count: usize, can_open: bool) -> usize {
    let kind = match kind {
        DelimKind::Underscore => 1,
        _ => 0,
    };
    kind * 6 + usize::from(can_open) * 3 + original_count % 3
}

fn is_emphasis(kind: DelimKind) -> bool {
    matches!(kind, DelimKind::Asterisk | DelimKind::Underscore)
}

impl InlineParser<'_> {
    /// Resolves emphasis among the delimiters above `stack_bottom` (all of
    /// them when `None`), then drops those delimiters.
    pub(super) fn process_emphasis(&mut self, stack_bottom: Option<DelimId>) {
        let mut openers_bottom = [stack_bottom; 12];

        // First delimiter above the bottom
        let mut closer = self.delimiters.top();
        while let Some(c) = closer
            && self.delimiters.prev(c) != stack_bottom
        {
            closer = self.delimiters.prev(c);
        }
        if closer == stack_bottom {
            closer = None;
        }

        while let Some(c) = closer {
            let d = self.delimiters.get(c).clone();
            if !(d.can_close && is_emphasis(d.kind)) {
                closer = self.delimiters.next(c);
                continue;
            }

            let slot = bottom_slot(d.kind, d.original_count, d.can_open);
            let mut candidate = self.delimiters.prev(c);
            let mut opener = None;
            while let Some(o) = candidate
                && Some(o) != stack_bottom
                && Some(o) != openers_bottom[slot]
            {
                let od = self.delimiters.get(o);
                let odd_match = (d.can_open || od.can_close)
                    && (od.original_count + d.original_count) % 3 == 0
                    && !(od.original_count % 3 == 0 && d.original_count % 3 == 0);
                if od.kind == d.kind && od.can_open && !odd_match {
                    opener = Some(o);
                    break;
                }
                candidate = self.delimiters.prev(o);
            }

            match opener {
                Some(o) => {
                    closer = self.wrap_emphasis(o, c);
                }
                None => {
                    log::trace!("No opener for {:?} closer", d.kind);
                    openers_bottom[slot] = self.delimiters.prev(c);
                    let next = self.delimiters.next(c);
                    if !d.can_open {
                        self.delimiters.remove(c);
                    }
                    closer = next;
                }
            }
        }

        self.delimiters.truncate(stack_bottom);
    }

    /// Wraps the nodes between a matched opener and closer. Returns the
    /// closer to continue from.
    fn wrap_emphasis(&mut self, opener: DelimId, closer: DelimId) -> Option<DelimId> {
        let (opener_count, opener_node, kind) = {
            let o = self.delimiters.get(opener);
            (o.count, o.node, o.kind)
        };
        let (closer_count, closer_node) = {
            let c = self.delimiters.get(closer);
            (c.count, c.node)
        };
        let used = if opener_count >= 2 && closer_count >= 2 { 2 } else { 1 };
        log::trace!("Matched {:?} run, using {}", kind, used);

        self.delimiters.get_mut(opener).count -= used;
        self.delimiters.get_mut(closer).count -= used;
        self.set_delimiter_text(opener_node, kind, opener_count - used);
        self.set_delimiter_text(closer_node, kind, closer_count - used);

        let emph = self.tree.new_node(if used == 1 {
            NodeValue::Emphasis
        } else {
            NodeValue::Strong
        });
        self.tree.get_mut(emph).open = false;
        let mut child = self.tree.next_sibling(opener_node);
        while let Some(c) = child
            && c != closer_node
        {
            child = self.tree.next_sibling(c);
            self.tree.append_child(emph, c);
        }
        self.tree.insert_after(opener_node, emph);

        self.delimiters.remove_between(opener, closer);

        if self.delimiters.get(opener).count == 0 {
            self.tree.detach(opener_node);
            self.delimiters.remove(opener);
        }
        if self.delimiters.get(closer).count == 0 {
            self.tree.detach(closer_node);
            let next = self.delimiters.next(closer);
            self.delimiters.remove(closer);
            next
        } else {
            Some(closer)
        }
    }

    fn set_delimiter_text(&mut self, node: NodeId, kind: DelimKind, count: usize) {
        if let NodeValue::Text(text) = self.tree.value_mut(node) {
            *text = kind.as_char().to_string().repeat(count);
        }
    }
}
