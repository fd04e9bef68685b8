use super::tree::{NodeId, Tree};

/// Returned from [`Visitor::visit`] to steer a [`Tree::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitStatus {
    /// Descend into the node's children.
    Continue,
    SkipChildren,
    /// Abort the whole walk.
    Stop,
}

pub trait Visitor {
    fn visit(&mut self, tree: &Tree, id: NodeId) -> VisitStatus;

    /// Called after the node's children, unless the walk stopped.
    fn depart(&mut self, _tree: &Tree, _id: NodeId) {}
}
