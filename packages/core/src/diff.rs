//! The child reconciler.
//!
//! This is index-aligned diffing with a keyed escape hatch for reorders, not
//! a minimal edit script: a keyed child found at another index is relocated
//! with a single insert-before, new children are appended, and excess live
//! children are trimmed from the tail. The pass mutates the live tree as it
//! walks the virtual children, so each placement decision re-reads the live
//! child list instead of trusting a snapshot taken at loop start.

use crate::innerlude::{NodeId, RealDom, VNode, WriteMutations};

impl RealDom {
    /// Mutate `live`'s children in place to match `new.children`.
    ///
    /// After the call the live container has one child per virtual child,
    /// and the child at each index is either the pre-existing live node
    /// that corresponds to that virtual child (moved into place under the
    /// same [`NodeId`]) or a freshly attached copy of it. The content of
    /// aligned pairs is not touched here; callers recurse into each pair
    /// with their own per-node diff once the children line up.
    ///
    /// Sibling keys are expected to be unique. With duplicates, the first
    /// live child at a different index with an equal key wins; debug builds
    /// log a warning.
    ///
    /// # Panics
    /// Panics if `live` is not a node in this tree.
    pub fn reconcile_children(
        &mut self,
        live: NodeId,
        new: &VNode,
        to: &mut impl WriteMutations,
    ) {
        if cfg!(debug_assertions) {
            let mut keys = rustc_hash::FxHashSet::default();
            for child in new.children.iter().filter(|child| child.key().is_some()) {
                if !keys.insert(child.key()) {
                    tracing::warn!(key = ?child.key(), "duplicate sibling key, first match wins");
                }
            }
        }

        for (idx, vchild) in new.children.iter().enumerate() {
            // Placements above this index have already shifted the live
            // child list, so read it fresh. Past the live tail this is None
            // and the child is a candidate for appending.
            let aligned = self.child_at(live, idx);

            // A keyed virtual child may correspond to a live child sitting
            // at another index. A match at `idx` itself is already in place
            // and is not a move.
            let moved = vchild.key().and_then(|key| {
                self.children_ids(live)
                    .iter()
                    .enumerate()
                    .find(|(child_idx, child)| *child_idx != idx && self.key(**child) == Some(key))
                    .map(|(_, child)| *child)
            });

            if let Some(moved) = moved {
                match aligned {
                    Some(before) => {
                        tracing::trace!(?moved, ?before, "relocating keyed child");
                        self.insert_before(before, moved);
                        to.insert_node_before(moved, before);
                    }
                    None => {
                        tracing::trace!(?moved, "moving keyed child to the end");
                        self.append_child(live, moved);
                        to.append_child(live, moved);
                    }
                }
                continue;
            }

            if aligned.is_none() {
                // Genuinely new child with no live counterpart.
                let child = self.attach(vchild, to);
                tracing::trace!(?child, "appending new child");
                self.append_child(live, child);
                to.append_child(live, child);
            }
            // Aligned and not moved: leave it alone. Patching the pair's own
            // content belongs to the caller's recursive diff.
        }

        // Once the pass above has run, every surviving child sits at its
        // final index, so deletions are always a run of remove-last.
        while self.child_count(live) > new.children.len() {
            if let Some(last) = self.children_ids(live).last().copied() {
                tracing::trace!(?last, "trimming excess child");
                self.remove(last);
                to.remove_node(last);
            }
        }
    }

    /// Build a detached live subtree from a virtual node; the caller decides
    /// where it goes.
    fn attach(&mut self, vnode: &VNode, to: &mut impl WriteMutations) -> NodeId {
        let id = self.create_node(vnode.key());
        to.create_element(id);
        for vchild in &vnode.children {
            let child = self.attach(vchild, to);
            self.append_child(id, child);
            to.append_child(id, child);
        }
        id
    }
}
