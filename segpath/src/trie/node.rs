//! Arena storage for trie nodes.

use std::collections::HashMap;

/// Index of a node in the arena. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone)]
pub(crate) struct Node<E> {
    pub(crate) entry: Option<E>,
    children: HashMap<String, NodeId>,
}

impl<E> Node<E> {
    fn new(entry: Option<E>) -> Self {
        Self {
            entry,
            children: HashMap::new(),
        }
    }
}

/// Every node ever materialized, owned flat. Nodes are never removed
/// individually, so ids stay valid until the arena is reset.
#[derive(Debug, Clone)]
pub(crate) struct Arena<E> {
    nodes: Vec<Node<E>>,
}

impl<E> Arena<E> {
    pub(crate) fn new(root: Option<E>) -> Self {
        Self {
            nodes: vec![Node::new(root)],
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<E> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<E> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent).children.get(name).copied()
    }

    /// Return the child of `parent` called `name`, creating an empty one if
    /// absent.
    pub(crate) fn child_or_insert(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(id) = self.child(parent, name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(None));
        self.node_mut(parent).children.insert(name.to_string(), id);
        id
    }

    /// Follow `names` from the root as far as nodes exist.
    pub(crate) fn lookup(&self, names: &[String]) -> Option<NodeId> {
        names
            .iter()
            .try_fold(NodeId::ROOT, |id, name| self.child(id, name))
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn reset(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[0];
        root.entry = None;
        root.children.clear();
    }
}
