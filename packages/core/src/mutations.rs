//! Instructions produced while reconciling, for the renderer to mirror onto
//! whatever it has actually drawn.

use crate::arena::NodeId;

/// A single modification the reconciler made to the live tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    /// A new live node was created for a virtual child with no counterpart.
    CreateElement { id: NodeId },

    /// `id` became the last child of `parent`. Emitted both when wiring up a
    /// freshly created subtree and when an existing child moved to the end.
    AppendChild { parent: NodeId, id: NodeId },

    /// `id` was placed immediately before its sibling `before`, relocating
    /// it if it was attached elsewhere.
    InsertBefore { id: NodeId, before: NodeId },

    /// `id` and its whole subtree were removed.
    RemoveNode { id: NodeId },
}

/// A sink for [`Mutation`]s, implemented by renderers.
///
/// The reconciler converges the live tree on its own; everything it does is
/// reported through this trait so the rendering environment can follow
/// along.
pub trait WriteMutations {
    /// A new live node was created.
    fn create_element(&mut self, id: NodeId);

    /// Append `id` as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, id: NodeId);

    /// Place `id` immediately before its sibling `before`.
    fn insert_node_before(&mut self, id: NodeId, before: NodeId);

    /// Remove `id` and its subtree.
    fn remove_node(&mut self, id: NodeId);
}

/// Records mutations into an edit vector, for tests and for renderers that
/// apply their edits in a batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Mutations {
    /// The edits in the order they were performed.
    pub edits: Vec<Mutation>,
}

impl WriteMutations for Mutations {
    fn create_element(&mut self, id: NodeId) {
        self.edits.push(Mutation::CreateElement { id });
    }

    fn append_child(&mut self, parent: NodeId, id: NodeId) {
        self.edits.push(Mutation::AppendChild { parent, id });
    }

    fn insert_node_before(&mut self, id: NodeId, before: NodeId) {
        self.edits.push(Mutation::InsertBefore { id, before });
    }

    fn remove_node(&mut self, id: NodeId) {
        self.edits.push(Mutation::RemoveNode { id });
    }
}

/// A sink that drops every mutation, for callers that only need the live
/// tree converged.
pub struct NoOpMutations;

impl WriteMutations for NoOpMutations {
    fn create_element(&mut self, _: NodeId) {}
    fn append_child(&mut self, _: NodeId, _: NodeId) {}
    fn insert_node_before(&mut self, _: NodeId, _: NodeId) {}
    fn remove_node(&mut self, _: NodeId) {}
}
