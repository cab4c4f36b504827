use proptest::prelude::*;
use treap::{Entry, Treap, NIL};

fn check_invariants(tree: &Treap<i64, u64>) {
    fn walk(tree: &Treap<i64, u64>, node: u32) {
        if node == NIL {
            return;
        }
        for child in [tree.left(node), tree.right(node)] {
            if child != NIL {
                assert_eq!(tree.parent(child), node);
                assert!(tree.priority(child) <= tree.priority(node));
            }
        }
        walk(tree, tree.left(node));
        walk(tree, tree.right(node));
    }

    if tree.root != NIL {
        assert_eq!(tree.parent(tree.root), NIL);
    }
    walk(tree, tree.root);

    let keys: Vec<&i64> = tree.keys().collect();
    for w in keys.windows(2) {
        assert!(w[0] <= w[1]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // op 0 inserts, op 1 erases by key, op 2 re-keys the newest live node
    #[test]
    fn random_op_sequences_hold_invariants(
        ops in proptest::collection::vec((0u8..3u8, 0i64..40i64), 1..120)
    ) {
        let mut tree = Treap::<i64, u64>::seeded([11u8; 32]);
        let mut live: Vec<u32> = Vec::new();
        let mut stamp = 0u64;

        for (op, key) in ops {
            match op {
                0 => {
                    stamp += 1;
                    let id = tree.insert(Entry::new(key, stamp)).unwrap();
                    live.push(id);
                }
                1 => {
                    let id = tree.find(&key);
                    if id != NIL {
                        tree.erase_node(id);
                        live.retain(|&x| x != id);
                    }
                }
                _ => {
                    if let Some(&id) = live.last() {
                        tree.change_key(id, key);
                    }
                }
            }
            check_invariants(&tree);
            prop_assert_eq!(tree.size(), live.len());
        }
    }

    #[test]
    fn duplicate_chains_cover_all_copies(
        copies in 1usize..6,
        key in 0i64..10,
    ) {
        let mut tree = Treap::<i64, u64>::seeded([13u8; 32]);
        // padding keys sit far above the duplicate key range
        for pad in 1..=10i64 {
            tree.insert(Entry::new(pad * 100, 0)).unwrap();
        }
        let mut inserted = vec![];
        for i in 0..copies {
            inserted.push(tree.insert(Entry::new(key, i as u64)).unwrap());
        }

        let mut visited = vec![];
        let mut node = tree.find_first(&key);
        while node != NIL {
            visited.push(node);
            node = tree.find_next(node);
        }

        visited.sort_unstable();
        inserted.sort_unstable();
        prop_assert_eq!(visited, inserted);
    }
}
