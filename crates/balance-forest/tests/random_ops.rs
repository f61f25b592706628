//! Randomized op sequences cross-checked against `std::collections::BTreeMap`,
//! with invariant validation after every operation.

use std::collections::BTreeMap;

use balance_forest::{AvlTree, SplayTree};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Set(u8, u16),
    Del(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<u8>(), any::<u16>()).prop_map(|(k, v)| Op::Set(k, v)),
        any::<u8>().prop_map(Op::Del),
    ]
}

proptest! {
    #[test]
    fn avl_matches_btreemap(ops in prop::collection::vec(op_strategy(), 1..400)) {
        let mut tree = AvlTree::<u8, u16>::new();
        let mut model = BTreeMap::new();

        for op in &ops {
            match *op {
                Op::Set(k, v) => {
                    tree.set(k, v);
                    model.insert(k, v);
                }
                Op::Del(k) => {
                    prop_assert_eq!(tree.del(&k), model.remove(&k).is_some());
                }
            }
            tree.assert_valid().unwrap();
            prop_assert_eq!(tree.size(), model.len());
        }

        let collected: Vec<(u8, u16)> =
            tree.iterator().map(|i| (*tree.key(i), *tree.value(i))).collect();
        let expected: Vec<(u8, u16)> = model.into_iter().collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn splay_matches_btreemap(ops in prop::collection::vec(op_strategy(), 1..400)) {
        let mut tree = SplayTree::<u8, u16>::new();
        let mut model = BTreeMap::new();

        for op in &ops {
            match *op {
                Op::Set(k, v) => {
                    let fresh = !model.contains_key(&k);
                    tree.set(k, v);
                    model.insert(k, v);
                    // A genuinely new key must end up at the root; an
                    // overwrite must not splay.
                    if fresh {
                        prop_assert_eq!(tree.root.map(|i| *tree.key(i)), Some(k));
                    }
                }
                Op::Del(k) => {
                    prop_assert_eq!(tree.del(&k), model.remove(&k).is_some());
                }
            }
            tree.assert_valid().unwrap();
            prop_assert_eq!(tree.size(), model.len());
        }

        let collected: Vec<(u8, u16)> =
            tree.iterator().map(|i| (*tree.key(i), *tree.value(i))).collect();
        let expected: Vec<(u8, u16)> = model.into_iter().collect();
        prop_assert_eq!(collected, expected);
    }
}
