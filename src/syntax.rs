//! The document tree shared by the parser and the renderers.

mod node;
mod tree;
mod visit;

pub use node::{
    CodeBlockData, HeadingData, ImageData, LinkData, ListData, ListDelimiter, ListKind, NodeValue,
};
pub use tree::{Children, Descendants, Node, NodeId, Tree};
pub use visit::{VisitStatus, Visitor};
