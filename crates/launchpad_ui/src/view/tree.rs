//! View tree for hierarchical section output.

use super::{NodeId, Tag, ViewNode};
use std::collections::HashMap;

/// Owns the nodes of one rendered frame and their hierarchy.
#[derive(Debug, Clone, Default)]
pub struct ViewTree {
    /// Nodes indexed by ID.
    nodes: HashMap<NodeId, ViewNode>,
    /// Root node IDs.
    roots: Vec<NodeId>,
    /// Parent-child relationships.
    children: HashMap<NodeId, Vec<NodeId>>,
    /// Child-parent relationships.
    parents: HashMap<NodeId, NodeId>,
    /// ID counter for generating unique IDs.
    next_id: u64,
}

impl ViewTree {
    /// Creates a new empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::with_capacity(64),
            roots: Vec::with_capacity(4),
            children: HashMap::with_capacity(64),
            parents: HashMap::with_capacity(64),
            next_id: 1,
        }
    }

    fn allocate(&mut self, node: ViewNode) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        self.children.insert(id, Vec::new());
        id
    }

    /// Adds a root node.
    pub fn push_root(&mut self, node: ViewNode) -> NodeId {
        let id = self.allocate(node);
        self.roots.push(id);
        id
    }

    /// Adds a child node to a parent.
    pub fn push_child(&mut self, parent: NodeId, node: ViewNode) -> NodeId {
        let id = self.allocate(node);
        self.children.entry(parent).or_default().push(id);
        self.parents.insert(id, parent);
        id
    }

    /// Gets a node by ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ViewNode> {
        self.nodes.get(&id)
    }

    /// Returns the parent of a node (None for roots).
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied()
    }

    /// Returns the children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns all root nodes.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns all node IDs in depth-first order.
    pub fn iter_dfs(&self) -> impl Iterator<Item = NodeId> + '_ {
        ViewDfsIterator {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Finds the first node carrying `tag`, in depth-first order.
    #[must_use]
    pub fn find(&self, tag: Tag) -> Option<(NodeId, &ViewNode)> {
        self.iter_dfs()
            .filter_map(|id| self.nodes.get(&id).map(|node| (id, node)))
            .find(|(_, node)| node.tag == Some(tag))
    }

    /// Returns the text shown by the node carrying `tag`.
    #[must_use]
    pub fn text_of(&self, tag: Tag) -> Option<&str> {
        self.find(tag).and_then(|(_, node)| node.text_content())
    }

    /// Returns every tagged node, in depth-first order.
    pub fn tagged(&self) -> impl Iterator<Item = (Tag, &ViewNode)> + '_ {
        self.iter_dfs()
            .filter_map(|id| self.nodes.get(&id))
            .filter_map(|node| node.tag.map(|tag| (tag, node)))
    }
}

/// Depth-first iterator over the view tree.
struct ViewDfsIterator<'a> {
    tree: &'a ViewTree,
    stack: Vec<NodeId>,
}

impl Iterator for ViewDfsIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        if let Some(children) = self.tree.children.get(&id) {
            for &child in children.iter().rev() {
                self.stack.push(child);
            }
        }

        Some(id)
    }
}
