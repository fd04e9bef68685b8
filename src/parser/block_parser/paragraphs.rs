//! Paragraph handling.
//!
//! Note: continuation and lazy lines are handled in the main BlockParser
//! since they depend on which containers matched.

use super::line::Line;
use super::matcher::{BlockStart, MatchContext};
use crate::syntax::NodeValue;

/// Fallback rule: any non-blank remainder opens a paragraph, unless the
/// tip already is one and the line should continue it.
pub(crate) fn start_paragraph(line: &mut Line<'_>, ctx: &MatchContext<'_>) -> Option<BlockStart> {
    if line.is_blank() || ctx.tip_is_paragraph {
        return None;
    }
    let content = line.nonspace_rest().to_string();
    line.advance_to_end();
    Some(BlockStart::Leaf {
        value: NodeValue::Paragraph,
        content: Some(content),
    })
}
