//! arbor-core: keyed child reconciliation for live node trees.
//!
//! A [`RealDom`] mirrors whatever the host environment has actually
//! rendered. Each frame the caller produces a fresh virtual tree of
//! [`VNode`]s describing what the children of some container *should* look
//! like, then calls [`RealDom::reconcile_children`] to mutate the live
//! container in place: keyed children that merely moved are relocated under
//! the same [`NodeId`], genuinely new children are attached, and excess
//! children are trimmed from the tail.
//!
//! The pass covers one level of children per call. Diffing the content of
//! each aligned live/virtual pair is deliberately left to the caller, which
//! is expected to recurse pair by pair after this pass has lined the
//! children up. Every change is reported through a [`WriteMutations`] sink
//! so renderers can mirror the live tree; [`NoOpMutations`] serves callers
//! that only need the tree converged.

mod arena;
mod diff;
mod mutations;
mod nodes;

pub(crate) mod innerlude {
    pub use crate::arena::*;
    pub use crate::mutations::*;
    pub use crate::nodes::*;
}

pub use crate::arena::{NodeId, RealDom};
pub use crate::mutations::{Mutation, Mutations, NoOpMutations, WriteMutations};
pub use crate::nodes::VNode;
