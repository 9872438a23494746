//! Markup tree implementation for Twig.
//!
//! This crate provides the arena-based tree that the markup parser builds
//! and the read-only queries callers run over it.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships. Parent and sibling links are plain `Option<NodeId>`
//! values, so there is nothing to dangle and the whole tree can be moved or
//! cloned as ordinary owned data. The synthetic root is always at
//! [`NodeId::ROOT`].

use std::collections::HashMap;

/// Read-only traversal and queries over a built tree.
pub mod traverse;

pub use traverse::{AncestorIterator, DepthFirst, Siblings};

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// Name reported by [`DomTree::tag_name`] for the synthetic root.
///
/// The tokenizer never produces it for a real element because the root is
/// a separate [`NodeType`] and tag-name queries only look at elements.
pub const ROOT_TAG_NAME: &str = "#root";

/// A type-safe index into the tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing
/// issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic root node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A single node in the arena.
///
/// All relationships are stored as indices so the tree can be walked in any
/// direction in O(1) per step.
#[derive(Debug, Clone)]
pub struct Node {
    /// Whether this is the synthetic root or an element.
    pub node_type: NodeType,

    /// Every text run that appeared directly inside this node, concatenated
    /// in the order it was encountered. Empty if there was none.
    pub content: String,

    /// The owning node. `None` only for the root.
    pub parent: Option<NodeId>,

    /// Direct children in document order.
    pub children: Vec<NodeId>,

    /// The child immediately following this one in its parent's children.
    pub next_sibling: Option<NodeId>,

    /// The child immediately preceding this one in its parent's children.
    pub prev_sibling: Option<NodeId>,
}

/// The kind of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// The synthetic root that holds the top-level elements.
    Root,
    /// An element created from an open or self-closing tag.
    Element(ElementData),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The tag name exactly as written in the source (case-sensitive).
    pub tag_name: String,
    /// Quoted attributes of the tag; the last occurrence of a name wins.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }
}

/// Arena-based markup tree with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. This provides:
/// - O(1) access to any node by `NodeId`
/// - O(1) parent/sibling traversal
/// - No borrowing issues (indices instead of references)
/// - The whole tree is released at once when the `DomTree` is dropped
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The root node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree holding just the synthetic root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Self::blank(NodeType::Root)],
        }
    }

    fn blank(node_type: NodeType) -> Node {
        Node {
            node_type,
            content: String::new(),
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of element nodes (everything except the root).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Create an element as the last child of `parent` and return its ID,
    /// wiring the parent link and the sibling links against the previous
    /// last child.
    ///
    /// Returns `None` if `parent` is not in this tree. This is the only way
    /// to link nodes, so every node is attached exactly once and the tree
    /// cannot contain a cycle.
    pub fn append_element(&mut self, parent: NodeId, data: ElementData) -> Option<NodeId> {
        let prev_last_child = self.get(parent)?.children.last().copied();
        let id = NodeId(self.nodes.len());

        let mut node = Self::blank(NodeType::Element(data));
        node.parent = Some(parent);
        node.prev_sibling = prev_last_child;
        self.nodes.push(node);

        if let Some(prev) = prev_last_child.and_then(|prev_id| self.get_mut(prev_id)) {
            prev.next_sibling = Some(id);
        }
        if let Some(parent) = self.get_mut(parent) {
            parent.children.push(id);
        }
        Some(id)
    }

    /// Append a text run to a node's `content`.
    pub fn append_content(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.get_mut(id) {
            node.content.push_str(text);
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Root => None,
        })
    }

    /// The tag name of a node; [`ROOT_TAG_NAME`] for the root.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| match &n.node_type {
            NodeType::Element(data) => data.tag_name.as_str(),
            NodeType::Root => ROOT_TAG_NAME,
        })
    }

    /// The concatenated text content of a node.
    #[must_use]
    pub fn content(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.content.as_str())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
