use slab::Slab;

/// A handle to a node in the live tree.
///
/// Ids are stable for the lifetime of the node: relocating a child keeps its
/// id, so renderers can track identity across reorders. Removing a node
/// frees its id for reuse by later insertions.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug)]
struct Node {
    key: Option<Box<str>>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The live tree: an arena of rendered nodes addressed by [`NodeId`].
///
/// The surrounding rendering environment owns one of these and hands the
/// reconciler a `&mut` borrow for the duration of a call, which is also what
/// enforces the single-writer access the algorithm relies on. All child
/// lists are ordered; mutation goes through DOM-style primitives so that a
/// node attached twice ends up in exactly one place.
#[derive(Debug)]
pub struct RealDom {
    nodes: Slab<Node>,
    root: NodeId,
}

impl Default for RealDom {
    fn default() -> Self {
        Self::new()
    }
}

impl RealDom {
    /// An empty tree containing only a root container.
    pub fn new() -> Self {
        let mut nodes = Slab::default();
        let root = NodeId(nodes.insert(Node {
            key: None,
            parent: None,
            children: Vec::new(),
        }));
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    /// Number of live nodes, the root included.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Create a detached node. It does not appear anywhere in the tree until
    /// placed with [`append_child`](Self::append_child) or
    /// [`insert_before`](Self::insert_before).
    pub fn create_node(&mut self, key: Option<&str>) -> NodeId {
        NodeId(self.nodes.insert(Node {
            key: key.map(Into::into),
            parent: None,
            children: Vec::new(),
        }))
    }

    /// The identity key this node was created with, if any.
    pub fn key(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].key.as_deref()
    }

    pub fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children_ids(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.nodes[id.0].children.len()
    }

    /// Positional child read. `None` when the container has fewer than
    /// `idx + 1` children.
    pub fn child_at(&self, id: NodeId, idx: usize) -> Option<NodeId> {
        self.nodes[id.0].children.get(idx).copied()
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first. `appendChild` semantics: appending a node that
    /// is already in the tree moves it.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert_ne!(parent, child, "a node cannot be its own child");
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `new` immediately before its future sibling `id`, detaching
    /// `new` from its current parent first. `insertBefore` semantics: the
    /// reference node's position is resolved after the detach, so relocating
    /// a node within the same parent lands it exactly before `id`.
    ///
    /// # Panics
    /// Panics if `id` has no parent.
    pub fn insert_before(&mut self, id: NodeId, new: NodeId) {
        debug_assert_ne!(id, new, "cannot insert a node before itself");
        self.detach(new);
        let parent = self.nodes[id.0]
            .parent
            .expect("reference node must have a parent");
        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|child| *child == id)
            .expect("reference node must be a child of its parent");
        self.nodes[new.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(index, new);
    }

    /// Remove `id` from its parent and reclaim its whole subtree.
    pub fn remove(&mut self, id: NodeId) {
        self.detach(id);
        self.remove_recursive(id);
    }

    fn remove_recursive(&mut self, id: NodeId) {
        let node = self.nodes.remove(id.0);
        for child in node.children {
            self.remove_recursive(child);
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
    }
}
