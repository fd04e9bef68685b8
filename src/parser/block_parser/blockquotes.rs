//! Block quote markers.

use super::line::Line;
use super::matcher::{BlockStart, MatchContext};
use crate::syntax::NodeValue;

/// Consumes `>` and one optional following space or tab column.
/// Leaves the line untouched when there is no marker within 3 columns.
fn consume_marker(line: &mut Line<'_>) -> bool {
    if line.is_indented() || line.peek_nonspace() != Some(b'>') {
        return false;
    }
    line.advance_next_nonspace();
    line.advance_offset(1, false);
    if matches!(line.peek(), Some(b' ' | b'\t')) {
        line.advance_offset(1, true);
    }
    true
}

pub(crate) fn start_block_quote(line: &mut Line<'_>, _ctx: &MatchContext<'_>) -> Option<BlockStart> {
    consume_marker(line).then_some(BlockStart::Container(NodeValue::BlockQuote))
}

/// Continuation check for an open block quote.
pub(crate) fn continue_block_quote(line: &mut Line<'_>) -> bool {
    consume_marker(line)
}
