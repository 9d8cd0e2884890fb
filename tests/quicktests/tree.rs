use arena_bst::{Order, Tree};

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a count of each value.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same multiset of values in both.
fn do_ops(ops: &[Op], tree: &mut Tree, counts: &mut HashMap<u32, usize>) -> (usize, usize) {
    let (mut inserts, mut deletes) = (0, 0);
    for op in ops {
        match *op {
            Op::Insert(value) => {
                tree.insert(value);
                *counts.entry(value).or_default() += 1;
                inserts += 1;
            }
            Op::Delete(value) => {
                if tree.delete(value) {
                    deletes += 1;
                    let count = counts.get_mut(&value).expect("deleted a value never inserted");
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(&value);
                    }
                }
            }
        }
    }

    (inserts, deletes)
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut counts = HashMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    counts.keys().all(|value| tree.contains(*value))
        && tree.iter().all(|value| counts.contains_key(&value))
        && tree.check_invariants().is_ok()
}

#[quickcheck]
fn size_is_inserts_minus_deletes(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut counts = HashMap::new();

    let (inserts, deletes) = do_ops(&ops, &mut tree, &mut counts);
    tree.size() == inserts - deletes && tree.size() == counts.values().sum::<usize>()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<u32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let walked: Vec<_> = tree.iter().collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    walked == sorted
}

#[quickcheck]
fn in_order_is_sorted_after_deletes(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| u32::from(x)).collect();
    for delete in deletes {
        tree.delete(u32::from(delete));
    }

    let walked: Vec<_> = tree.iter().collect();
    walked.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn one_parentless_node(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut HashMap::new());

    let parentless: Vec<_> = tree
        .walk(Order::Pre)
        .filter(|node| node.parent().is_none())
        .collect();
    match tree.root() {
        Some(root) => parentless == [root],
        None => parentless.is_empty(),
    }
}

#[quickcheck]
fn parents_hold_their_children(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut HashMap::new());

    tree.walk(Order::Post).all(|node| match node.parent() {
        Some(parent) => parent.left() == Some(node) || parent.right() == Some(node),
        None => node.is_root(),
    })
}

#[quickcheck]
fn contains(xs: Vec<u32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<u32>, nots: Vec<u32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(*x))
}

#[quickcheck]
fn with_deletions(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| u32::from(x)).collect();
    let mut still_present = xs;
    for delete in &deletes {
        assert_eq!(
            tree.delete(u32::from(*delete)),
            still_present.contains(delete)
        );
        if let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    still_present.iter().all(|x| tree.contains(u32::from(*x)))
        && tree.size() == still_present.len()
}

#[quickcheck]
fn delete_everything(xs: Vec<u8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| u32::from(x)).collect();
    for x in &xs {
        if !tree.delete(u32::from(*x)) {
            return false;
        }
    }

    tree.is_empty() && tree.check_invariants().is_ok()
}

#[quickcheck]
fn clear_empties(xs: Vec<u32>) -> bool {
    let mut tree: Tree = xs.into_iter().collect();
    tree.clear();
    let once = tree.is_empty() && tree.size() == 0;
    tree.clear();

    once && tree.is_empty() && tree.check_invariants().is_ok()
}
