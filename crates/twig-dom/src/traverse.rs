//! Read-only structural queries over a built [`DomTree`].
//!
//! Every query runs in document order and reports absence structurally
//! (an empty slice or `Vec`, or `None`) rather than as an error.

use crate::{DomTree, NodeId};

/// The nodes on either side of a node within its parent's children.
///
/// Returned by [`DomTree::siblings`] only for nodes that have a parent, so
/// "first/last child" (`prev`/`next` is `None`) stays distinguishable from
/// "this is the root" (no `Siblings` at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Siblings {
    /// The child immediately before the node, if any.
    pub prev: Option<NodeId>,
    /// The child immediately after the node, if any.
    pub next: Option<NodeId>,
}

/// Pre-order walk yielding `(node, depth)` pairs.
///
/// Depth 0 is a direct child of the root; the root itself is not yielded.
/// The walk is lazy and uses an explicit stack, so arbitrarily deep trees
/// do not grow the call stack. Call [`DomTree::depth_first`] again (or clone
/// an unstarted walk) to restart.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    tree: &'a DomTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> DepthFirst<'a> {
    fn new(tree: &'a DomTree, from: NodeId) -> Self {
        let stack = tree
            .children(from)
            .iter()
            .rev()
            .map(|&child| (child, 0))
            .collect();
        Self { tree, stack }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(
            self.tree
                .children(id)
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((id, depth))
    }
}

/// Iterator over ancestors of a node, from parent to root.
#[derive(Debug, Clone)]
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

impl DomTree {
    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Tag names of a node's direct children, in document order.
    #[must_use]
    pub fn child_tag_names(&self, id: NodeId) -> Vec<&str> {
        self.children(id)
            .iter()
            .filter_map(|&child| self.tag_name(child))
            .collect()
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Both sibling links of a node.
    ///
    /// Returns `None` for the root (it has no parent) and for IDs that are
    /// not in this tree.
    #[must_use]
    pub fn siblings(&self, id: NodeId) -> Option<Siblings> {
        let node = self.get(id)?;
        if node.parent.is_none() {
            return None;
        }
        Some(Siblings {
            prev: node.prev_sibling,
            next: node.next_sibling,
        })
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Depth of a node: 0 for a child of the root. `None` for the root.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.parent(id).map(|_| self.ancestors(id).count() - 1)
    }

    /// Walk every element in document order with its depth.
    #[must_use]
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(self, NodeId::ROOT)
    }

    /// Walk the descendants of `id` in document order.
    ///
    /// Depths are relative to `id`: its direct children are at depth 0.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DepthFirst<'_> {
        DepthFirst::new(self, id)
    }

    /// All elements whose tag name is exactly `name`, in document order.
    ///
    /// The comparison is case-sensitive. The root is never matched.
    #[must_use]
    pub fn find_by_tag_name(&self, name: &str) -> Vec<NodeId> {
        self.depth_first()
            .map(|(id, _)| id)
            .filter(|&id| self.as_element(id).is_some_and(|e| e.tag_name == name))
            .collect()
    }

    /// The first element, in document order, whose tag name is `name`.
    #[must_use]
    pub fn first_by_tag_name(&self, name: &str) -> Option<NodeId> {
        self.depth_first()
            .map(|(id, _)| id)
            .find(|&id| self.as_element(id).is_some_and(|e| e.tag_name == name))
    }

    /// Deepest nesting level in the tree.
    ///
    /// 0 when the root has no children, 1 when only top-level elements
    /// exist.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.depth_first()
            .map(|(_, depth)| depth + 1)
            .max()
            .unwrap_or(0)
    }
}
