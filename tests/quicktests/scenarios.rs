use arena_bst::{Order, Tree, TreeError};

fn assert_sorted(tree: &Tree) {
    let walked: Vec<_> = tree.iter().collect();
    assert!(
        walked.windows(2).all(|pair| pair[0] <= pair[1]),
        "{walked:?} is not sorted"
    );
}

#[test]
fn round_trip() {
    let mut tree = Tree::new();
    assert!(tree.is_empty());

    for value in [3, 0, 132, 180, 99] {
        tree.insert(value);
    }
    assert_eq!(tree.size(), 5);

    tree.insert(132);
    tree.insert(80);
    assert_eq!(tree.size(), 7);

    assert!(tree.delete(99));
    assert_eq!(tree.size(), 6);
    assert!(!tree.contains(99));
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn delete_from_left_leaning_chain() {
    let mut tree: Tree = [50, 40, 30, 20].into_iter().collect();

    assert!(tree.delete(40));
    assert_eq!(tree.size(), 3);
    assert_sorted(&tree);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn delete_with_two_inner_grandchildren() {
    let mut tree: Tree = [50, 30, 90, 80, 85, 100, 99, 95, 101].into_iter().collect();

    assert!(tree.delete(90));
    assert_eq!(tree.size(), 8);
    assert!(!tree.contains(90));
    assert_sorted(&tree);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn delete_through_a_deep_tree() {
    // A full tree five levels deep. The early deletes hit nodes whose children both have inner
    // grandchildren, so they go through a successor several levels down.
    let values = [
        64, 32, 96, 16, 48, 80, 112, 8, 24, 40, 56, 72, 88, 104, 120, 4, 12, 20, 28, 36, 44, 52,
        60, 68, 76, 84, 92, 100, 108, 116, 124,
    ];
    let mut tree: Tree = values.into_iter().collect();

    for (deleted, value) in [64, 32, 96, 16, 48, 80, 112].into_iter().enumerate() {
        assert!(tree.delete(value));
        assert!(!tree.contains(value));
        assert_eq!(tree.size(), values.len() - deleted - 1);
        assert_sorted(&tree);
        assert_eq!(tree.check_invariants(), Ok(()));
    }
}

#[test]
fn clear_empty_tree() {
    let mut tree = Tree::new();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
}

#[test]
fn delete_missing_value() {
    let mut tree: Tree = [3, 0, 132].into_iter().collect();

    assert!(!tree.delete(7));
    assert_eq!(tree.remove(7), Err(TreeError::NotFound(7)));
    assert_eq!(tree.size(), 3);
}

#[test]
fn root_has_no_parent_after_root_deletes() {
    let mut tree: Tree = [8, 4, 12, 2, 6, 10, 14].into_iter().collect();

    while let Some(root) = tree.root() {
        let value = root.value();
        assert!(tree.delete(value));
        if let Some(root) = tree.root() {
            assert!(root.parent().is_none());
            assert!(root.is_root());
        }
        assert_eq!(
            tree.walk(Order::In)
                .filter(|node| node.parent().is_none())
                .count(),
            usize::from(!tree.is_empty())
        );
    }
}

#[test]
fn duplicates_are_deleted_one_at_a_time() {
    let mut tree: Tree = [5, 5, 5, 3, 7].into_iter().collect();

    assert_eq!(tree.size(), 5);
    for left in (0..3).rev() {
        assert!(tree.delete(5));
        assert_eq!(tree.contains(5), left > 0);
        assert_eq!(tree.check_invariants(), Ok(()));
    }
    assert_eq!(tree.to_string(), "[3 7]");
}
