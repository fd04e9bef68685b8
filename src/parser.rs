//! Parser module containing block and inline parsers.

pub mod block_parser;
pub mod inline_parser;
pub mod references;

// Re-export commonly used types
pub use block_parser::BlockParser;
pub use inline_parser::InlineParser;
pub use references::{LinkReference, NoReferences, ReferenceMap, ReferenceResolver};

use crate::syntax::Tree;

/// Parses a CommonMark document string into a document tree.
///
/// Line endings may be `\n`, `\r\n` or `\r`. Reference links never resolve;
/// use [`parse_with_references`] to supply targets.
///
/// # Examples
///
/// ```rust
/// use markee::parser::parse;
///
/// let tree = parse("# Heading\n\nParagraph text.");
/// println!("{:#?}", tree);
/// ```
pub fn parse(input: &str) -> Tree {
    parse_with_references(input, &NoReferences)
}

/// Like [`parse`], consulting `resolver` for `[text][label]`, `[label][]`
/// and `[label]` links.
pub fn parse_with_references(input: &str, resolver: &dyn ReferenceResolver) -> Tree {
    let normalized_input = input.replace('\0', "\u{FFFD}");
    let mut tree = BlockParser::new(&normalized_input).parse();
    block_parser::finalizer::finalize(&mut tree, resolver);
    tree
}
