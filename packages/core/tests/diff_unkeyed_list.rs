//! Diffing tests for unkeyed children.
//!
//! Without keys, identity is purely positional: existing children are left
//! in place for the caller's per-pair diff, growth appends, and shrinkage
//! trims from the tail.

use arbor_core::{Mutation::*, Mutations, NoOpMutations, RealDom, VNode};
use pretty_assertions::assert_eq;

fn unkeyed(n: usize) -> VNode {
    VNode::new().with_children((0..n).map(|_| VNode::new()))
}

fn keyed_list(keys: &[&str]) -> VNode {
    VNode::new().with_children(keys.iter().map(|key| VNode::keyed(*key)))
}

#[test]
fn empty_container_appends_in_order() {
    let mut dom = RealDom::new();
    let root = dom.root();

    let mut muts = Mutations::default();
    dom.reconcile_children(root, &unkeyed(3), &mut muts);

    assert_eq!(dom.child_count(root), 3);
    let [a, b, c] = dom.children_ids(root) else {
        panic!("expected three children")
    };
    assert_eq!(
        muts.edits,
        [
            CreateElement { id: *a },
            AppendChild { parent: root, id: *a },
            CreateElement { id: *b },
            AppendChild { parent: root, id: *b },
            CreateElement { id: *c },
            AppendChild { parent: root, id: *c },
        ]
    );
}

#[test]
fn list_grows_one_by_one_without_touching_existing_children() {
    let mut dom = RealDom::new();
    let root = dom.root();
    dom.reconcile_children(root, &unkeyed(1), &mut NoOpMutations);
    let a = dom.child_at(root, 0).unwrap();

    let mut muts = Mutations::default();
    dom.reconcile_children(root, &unkeyed(2), &mut muts);

    let b = dom.child_at(root, 1).unwrap();
    assert_eq!(dom.children_ids(root), [a, b]);
    assert_eq!(
        muts.edits,
        [CreateElement { id: b }, AppendChild { parent: root, id: b }]
    );
}

#[test]
fn matching_lists_are_a_no_op() {
    let mut dom = RealDom::new();
    let root = dom.root();
    dom.reconcile_children(root, &unkeyed(3), &mut NoOpMutations);
    let before = dom.children_ids(root).to_vec();

    let mut muts = Mutations::default();
    dom.reconcile_children(root, &unkeyed(3), &mut muts);

    assert!(muts.edits.is_empty());
    assert_eq!(dom.children_ids(root), before);
}

#[test]
fn excess_children_trim_from_the_tail() {
    let mut dom = RealDom::new();
    let root = dom.root();
    dom.reconcile_children(root, &unkeyed(4), &mut NoOpMutations);
    let ids = dom.children_ids(root).to_vec();

    let mut muts = Mutations::default();
    dom.reconcile_children(root, &unkeyed(2), &mut muts);

    assert_eq!(dom.children_ids(root), &ids[..2]);
    assert_eq!(muts.edits, [RemoveNode { id: ids[3] }, RemoveNode { id: ids[2] }]);
    assert_eq!(dom.size(), 3);
}

#[test]
fn shrinking_to_zero_removes_every_child() {
    let mut dom = RealDom::new();
    let root = dom.root();
    dom.reconcile_children(root, &unkeyed(3), &mut NoOpMutations);

    dom.reconcile_children(root, &unkeyed(0), &mut NoOpMutations);

    assert_eq!(dom.child_count(root), 0);
    assert_eq!(dom.size(), 1);
}

/// Unkeyed virtual children never trigger a key scan, even when the live
/// children carry keys that would match something.
#[test]
fn unkeyed_children_ignore_live_keys() {
    let mut dom = RealDom::new();
    let root = dom.root();
    dom.reconcile_children(root, &keyed_list(&["x", "y"]), &mut NoOpMutations);
    let before = dom.children_ids(root).to_vec();

    let mut muts = Mutations::default();
    dom.reconcile_children(root, &unkeyed(2), &mut muts);

    assert!(muts.edits.is_empty());
    assert_eq!(dom.children_ids(root), before);
    assert_eq!(dom.key(before[0]), Some("x"));
}

#[test]
fn converges_to_any_target_count() {
    for _ in 0..100 {
        let mut dom = RealDom::new();
        let root = dom.root();
        let initial = rand::random::<u8>() as usize % 8;
        dom.reconcile_children(root, &unkeyed(initial), &mut NoOpMutations);

        for _ in 0..4 {
            let target = rand::random::<u8>() as usize % 8;
            dom.reconcile_children(root, &unkeyed(target), &mut NoOpMutations);
            assert_eq!(dom.child_count(root), target);
            // Trimmed subtrees must also have been reclaimed.
            assert_eq!(dom.size(), target + 1);
        }
    }
}
