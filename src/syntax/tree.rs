//! Arena-backed document tree.
//!
//! Nodes never own each other: the arena owns every node and the
//! parent/child/sibling links are plain `NodeId` lookups, so splicing a run
//! of siblings into a new wrapper is O(1) per node.

use super::node::NodeValue;
use super::visit::{VisitStatus, Visitor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub value: NodeValue,
    /// True while the block can still take continuation lines.
    pub open: bool,
    /// 1-based source line the block started on, 0 for inline nodes.
    pub start_line: usize,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl Node {
    fn new(value: NodeValue) -> Self {
        Self {
            value,
            open: true,
            start_line: 0,
            parent: None,
            first_child: None,
            last_child: None,
            prev: None,
            next: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Creates a tree holding only an open `Document` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeValue::Document)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes ever allocated, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.first_child(self.root).is_none()
    }

    /// Allocates a detached node.
    pub fn new_node(&mut self, value: NodeValue) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value));
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn value(&self, id: NodeId) -> &NodeValue {
        &self.nodes[id.0].value
    }

    pub fn value_mut(&mut self, id: NodeId) -> &mut NodeValue {
        &mut self.nodes[id.0].value
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].first_child
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].last_child
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].prev
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.first_child(id),
        }
    }

    /// Pre-order iterator over `id` and everything below it.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            start: id,
            next: Some(id),
        }
    }

    /// Appends `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let last = self.nodes[parent.0].last_child;
        {
            let node = &mut self.nodes[child.0];
            node.parent = Some(parent);
            node.prev = last;
        }
        match last {
            Some(last) => self.nodes[last.0].next = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
        self.nodes[parent.0].last_child = Some(child);
    }

    /// Inserts `node` right after `anchor` under the same parent.
    pub fn insert_after(&mut self, anchor: NodeId, node: NodeId) {
        self.detach(node);
        let parent = self.nodes[anchor.0].parent;
        let next = self.nodes[anchor.0].next;
        {
            let n = &mut self.nodes[node.0];
            n.parent = parent;
            n.prev = Some(anchor);
            n.next = next;
        }
        self.nodes[anchor.0].next = Some(node);
        match next {
            Some(next) => self.nodes[next.0].prev = Some(node),
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].last_child = Some(node);
                }
            }
        }
    }

    /// Unlinks `id` from its parent and siblings. Its own children stay attached to it.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.0];
            (node.parent, node.prev, node.next)
        };
        match prev {
            Some(prev) => self.nodes[prev.0].next = next,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].first_child = next;
                }
            }
        }
        match next {
            Some(next) => self.nodes[next.0].prev = prev,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].last_child = prev;
                }
            }
        }
        let node = &mut self.nodes[id.0];
        node.parent = None;
        node.prev = None;
        node.next = None;
    }

    /// Puts `new` where `old` is; `old` ends up detached.
    pub fn replace(&mut self, old: NodeId, new: NodeId) {
        if old == new {
            return;
        }
        self.detach(new);
        let (parent, prev, next) = {
            let node = &self.nodes[old.0];
            (node.parent, node.prev, node.next)
        };
        {
            let n = &mut self.nodes[new.0];
            n.parent = parent;
            n.prev = prev;
            n.next = next;
        }
        match prev {
            Some(prev) => self.nodes[prev.0].next = Some(new),
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].first_child = Some(new);
                }
            }
        }
        match next {
            Some(next) => self.nodes[next.0].prev = Some(new),
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent.0].last_child = Some(new);
                }
            }
        }
        let node = &mut self.nodes[old.0];
        node.parent = None;
        node.prev = None;
        node.next = None;
    }

    /// Depth-first walk starting at `start`.
    ///
    /// `Visitor::depart` runs for every visited node once its children are
    /// done, including nodes whose children were skipped. Returns
    /// `VisitStatus::Stop` if the visitor aborted the walk.
    pub fn walk<V: Visitor + ?Sized>(&self, start: NodeId, visitor: &mut V) -> VisitStatus {
        enum Step {
            Enter(NodeId),
            Leave(NodeId),
        }

        let mut stack = vec![Step::Enter(start)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id) => match visitor.visit(self, id) {
                    VisitStatus::Stop => return VisitStatus::Stop,
                    VisitStatus::SkipChildren => visitor.depart(self, id),
                    VisitStatus::Continue => {
                        stack.push(Step::Leave(id));
                        let mut child = self.last_child(id);
                        while let Some(c) = child {
                            stack.push(Step::Enter(c));
                            child = self.prev_sibling(c);
                        }
                    }
                },
                Step::Leave(id) => visitor.depart(self, id),
            }
        }
        VisitStatus::Continue
    }

    /// Concatenated literal text below `id`; breaks become spaces.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            match self.value(node) {
                NodeValue::Text(s) | NodeValue::CodeSpan(s) => out.push_str(s),
                NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
                _ => {}
            }
        }
        out
    }
}

pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

pub struct Descendants<'a> {
    tree: &'a Tree,
    start: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = if let Some(child) = self.tree.first_child(current) {
            Some(child)
        } else {
            let mut node = current;
            loop {
                if node == self.start {
                    break None;
                }
                if let Some(sibling) = self.tree.next_sibling(node) {
                    break Some(sibling);
                }
                match self.tree.parent(node) {
                    Some(parent) => node = parent,
                    None => break None,
                }
            }
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(tree: &mut Tree, s: &str) -> NodeId {
        tree.new_node(NodeValue::Text(s.to_string()))
    }

    fn texts(tree: &Tree, parent: NodeId) -> Vec<String> {
        tree.children(parent)
            .filter_map(|id| tree.value(id).text().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_append_and_siblings() {
        let mut tree = Tree::new();
        let para = tree.new_node(NodeValue::Paragraph);
        tree.append_child(tree.root(), para);
        let a = text(&mut tree, "a");
        let b = text(&mut tree, "b");
        tree.append_child(para, a);
        tree.append_child(para, b);

        assert_eq!(tree.parent(a), Some(para));
        assert_eq!(tree.first_child(para), Some(a));
        assert_eq!(tree.last_child(para), Some(b));
        assert_eq!(tree.next_sibling(a), Some(b));
        assert_eq!(tree.prev_sibling(b), Some(a));
        assert_eq!(texts(&tree, para), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_after_middle_and_end() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = text(&mut tree, "a");
        let c = text(&mut tree, "c");
        tree.append_child(root, a);
        tree.append_child(root, c);

        let b = text(&mut tree, "b");
        tree.insert_after(a, b);
        let d = text(&mut tree, "d");
        tree.insert_after(c, d);

        assert_eq!(texts(&tree, root), vec!["a", "b", "c", "d"]);
        assert_eq!(tree.last_child(root), Some(d));
        assert_eq!(tree.prev_sibling(c), Some(b));
    }

    #[test]
    fn test_detach_rewires_neighbours() {
        let mut tree = Tree::new();
        let root = tree.root();
        let ids: Vec<_> = ["a", "b", "c"].iter().map(|s| text(&mut tree, s)).collect();
        for id in &ids {
            tree.append_child(root, *id);
        }

        tree.detach(ids[1]);
        assert_eq!(texts(&tree, root), vec!["a", "c"]);
        assert_eq!(tree.parent(ids[1]), None);
        assert_eq!(tree.next_sibling(ids[1]), None);

        tree.detach(ids[0]);
        tree.detach(ids[2]);
        assert_eq!(tree.first_child(root), None);
        assert_eq!(tree.last_child(root), None);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = text(&mut tree, "a");
        let b = text(&mut tree, "b");
        let c = text(&mut tree, "c");
        tree.append_child(root, a);
        tree.append_child(root, b);
        tree.append_child(root, c);

        let link = tree.new_node(NodeValue::Emphasis);
        tree.replace(b, link);

        let kinds: Vec<_> = tree
            .children(root)
            .map(|id| tree.value(id).kind_name())
            .collect();
        assert_eq!(kinds, vec!["Text", "Emphasis", "Text"]);
        assert_eq!(tree.parent(b), None);
        assert_eq!(tree.prev_sibling(c), Some(link));
    }

    #[test]
    fn test_moving_a_run_of_siblings_into_wrapper() {
        let mut tree = Tree::new();
        let root = tree.root();
        let ids: Vec<_> = ["*", "x", "y", "*"].iter().map(|s| text(&mut tree, s)).collect();
        for id in &ids {
            tree.append_child(root, *id);
        }

        let emph = tree.new_node(NodeValue::Emphasis);
        let mut cur = tree.next_sibling(ids[0]);
        while let Some(id) = cur {
            if id == ids[3] {
                break;
            }
            cur = tree.next_sibling(id);
            tree.append_child(emph, id);
        }
        tree.insert_after(ids[0], emph);

        assert_eq!(texts(&tree, emph), vec!["x", "y"]);
        assert_eq!(tree.children(root).count(), 3);
        assert_eq!(tree.text_content(root), "*xy*");
    }

    #[test]
    fn test_descendants_stay_inside_start() {
        let mut tree = Tree::new();
        let root = tree.root();
        let p1 = tree.new_node(NodeValue::Paragraph);
        let p2 = tree.new_node(NodeValue::Paragraph);
        tree.append_child(root, p1);
        tree.append_child(root, p2);
        let a = text(&mut tree, "a");
        let b = text(&mut tree, "b");
        tree.append_child(p1, a);
        tree.append_child(p2, b);

        let under_p1: Vec<_> = tree.descendants(p1).collect();
        assert_eq!(under_p1, vec![p1, a]);
        assert_eq!(tree.descendants(root).count(), 5);
    }
}
