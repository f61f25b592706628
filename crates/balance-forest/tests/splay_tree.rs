use balance_forest::splay::SplayTree;

fn keys_in_order(tree: &SplayTree<i32, i32>) -> Vec<i32> {
    tree.iterator().map(|i| *tree.key(i)).collect()
}

fn root_key(tree: &SplayTree<i32, i32>) -> i32 {
    *tree.key(tree.root.unwrap())
}

#[test]
fn every_insert_ends_at_the_root() {
    let mut tree = SplayTree::<i32, i32>::new();
    for i in 1..=5 {
        tree.set(i, i);
        assert_eq!(root_key(&tree), i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(keys_in_order(&tree), vec![1, 2, 3, 4, 5]);
    // Sequential inserts always attach at depth 1 after the splay of the
    // previous key, so none of them exceeds the 2·log2(n) bound.
    assert_eq!(tree.report(), 0);
}

#[test]
fn first_insert_is_never_bad() {
    let mut tree = SplayTree::<i32, i32>::new();
    tree.set(42, 0);
    assert_eq!(tree.report(), 0);
}

#[test]
fn deep_insert_counts_as_bad() {
    let mut tree = SplayTree::<i32, i32>::new();
    // Ascending inserts leave a left spine rooted at 8.
    for i in 1..=8 {
        tree.set(i, i);
    }
    assert_eq!(tree.report(), 0);
    // Key 0 descends the whole spine: depth 8 with n = 9, and
    // 8 > 2·log2(9) ≈ 6.34.
    tree.set(0, 0);
    assert_eq!(tree.report(), 1);
    assert_eq!(root_key(&tree), 0);
    tree.assert_valid().unwrap();
}

#[test]
fn overwrite_leaves_structure_and_stats_alone() {
    let mut tree = SplayTree::<i32, i32>::new();
    for i in [20, 10, 30, 25] {
        tree.set(i, i);
    }
    let root_before = tree.root;
    let report_before = tree.report();

    tree.set(10, -10);
    assert_eq!(tree.root, root_before);
    assert_eq!(tree.report(), report_before);
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.get(&10), Some(&-10));
    tree.assert_valid().unwrap();
}

#[test]
fn remove_splays_the_detached_neighborhood() {
    let mut tree = SplayTree::<i32, i32>::new();
    for i in [20, 10, 30, 25, 27, 22] {
        tree.set(i, i);
        assert_eq!(root_key(&tree), i);
    }
    // Shape is now 22 (l: 20 (l: 10), r: 27 (l: 25, r: 30)).

    // Root removal with two children: successor 25 takes the root slot and
    // its former parent 27 is splayed up.
    assert!(tree.del(&22));
    assert_eq!(root_key(&tree), 27);
    tree.assert_valid().unwrap();

    // Leaf removal: the former parent 20 is splayed up.
    assert!(tree.del(&10));
    assert_eq!(root_key(&tree), 20);
    tree.assert_valid().unwrap();

    // One-child removal: 30 is promoted and its new parent 25 is splayed up.
    assert!(tree.del(&27));
    assert_eq!(root_key(&tree), 25);
    tree.assert_valid().unwrap();

    assert_eq!(keys_in_order(&tree), vec![20, 25, 30]);
}

#[test]
fn direct_right_child_successor_takes_the_removed_slot() {
    let mut tree = SplayTree::<i32, i32>::new();
    for i in [20, 10, 30, 25] {
        tree.set(i, i);
    }
    // Shape is 25 (l: 20 (l: 10), r: 30): the root's successor is its
    // direct right child, which simply assumes the root position.
    assert!(tree.del(&25));
    assert_eq!(root_key(&tree), 30);
    assert_eq!(keys_in_order(&tree), vec![10, 20, 30]);
    tree.assert_valid().unwrap();
}

#[test]
fn removing_the_last_node_empties_the_tree() {
    let mut tree = SplayTree::<i32, i32>::new();
    tree.set(7, 70);
    assert!(tree.del(&7));
    assert!(tree.is_empty());
    assert_eq!(tree.root, None);
    assert!(!tree.del(&7));
}

#[test]
fn removal_is_idempotent() {
    let mut tree = SplayTree::<i32, i32>::new();
    for i in 0..20 {
        tree.set(i, i);
    }
    assert!(tree.del(&11));
    let after_first = keys_in_order(&tree);
    assert!(!tree.del(&11));
    assert_eq!(keys_in_order(&tree), after_first);
    assert_eq!(tree.size(), 19);
    tree.assert_valid().unwrap();
}

#[test]
fn ladder_insert_delete() {
    let mut tree = SplayTree::<i32, i32>::new();
    for i in 0..300 {
        tree.set(i, i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);

    for i in (0..300).step_by(3) {
        assert!(tree.del(&i));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        if i % 3 == 0 {
            assert_eq!(tree.get(&i), None);
        } else {
            assert_eq!(tree.get(&i), Some(&i));
        }
    }
}

#[test]
fn report_survives_unrelated_operations() {
    let mut tree = SplayTree::<i32, i32>::new();
    for i in 1..=8 {
        tree.set(i, i);
    }
    tree.set(0, 0);
    assert_eq!(tree.report(), 1);

    // Lookups and removals never touch the insert statistic.
    assert_eq!(tree.get(&4), Some(&4));
    assert!(tree.del(&4));
    assert_eq!(tree.report(), 1);
}
