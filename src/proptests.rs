use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

/// Walks the tree checking ordering, balance and cached heights; returns the
/// number of reachable nodes.
fn validate_tree(t: &AvlTree<i32>) -> usize {
    fn walk(node: Option<&Node<i32>>, lo: Option<i32>, hi: Option<i32>, count: &mut usize) -> i32 {
        let Some(n) = node else {
            return -1;
        };
        *count += 1;
        let v = *n.value();
        if let Some(lo) = lo {
            assert!(v > lo, "{v} must be greater than ancestor bound {lo}");
        }
        if let Some(hi) = hi {
            assert!(v < hi, "{v} must be less than ancestor bound {hi}");
        }

        let lh = walk(n.left(), lo, Some(v), count);
        let rh = walk(n.right(), Some(v), hi, count);
        assert!((lh - rh).abs() <= 1, "node {v} is unbalanced: {lh} vs {rh}");
        assert_eq!(
            n.height(),
            lh.max(rh) + 1,
            "stored height of {v} must match children"
        );
        assert_eq!(n.balance_factor(), lh - rh);
        n.height()
    }

    let mut count = 0;
    walk(t.root(), None, None, &mut count);
    assert_eq!(count, t.len(), "reachable node count must match AvlTree::len");
    assert!(t.check_invariants().is_empty());
    count
}

/// Largest height an AVL tree with `n` nodes can reach.
fn avl_height_bound(n: usize) -> f64 {
    1.44 * ((n + 2) as f64).log2() - 1.0
}

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Contains(i32),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // A narrow range so duplicates and hits are common.
    let value = -500i32..500;
    let op = prop_oneof![
        70 => value.clone().prop_map(Op::Insert),
        30 => value.prop_map(Op::Contains),
    ];
    prop::collection::vec(op, 0..=2000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: AvlTree<i32> = AvlTree::new();
        let mut m: BTreeSet<i32> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    prop_assert_eq!(t.insert(v), m.insert(v));
                }
                Op::Contains(v) => {
                    prop_assert_eq!(t.contains(&v), m.contains(&v));
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_tree(&t);
        let got: Vec<i32> = t.iter().copied().collect();
        let expected: Vec<i32> = m.iter().copied().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_height_within_avl_bound(values in prop::collection::vec(any::<i32>(), 1..=4000)) {
        let t: AvlTree<i32> = values.iter().copied().collect();
        validate_tree(&t);
        prop_assert!(f64::from(t.height()) <= avl_height_bound(t.len()));
    }

    #[test]
    fn prop_membership_is_exact(values in prop::collection::btree_set(-1000i32..1000, 0..300)) {
        let t: AvlTree<i32> = values.iter().rev().copied().collect();
        for candidate in -1000i32..1000 {
            prop_assert_eq!(t.contains(&candidate), values.contains(&candidate));
        }
    }

    #[test]
    fn prop_duplicate_idempotence(values in prop::collection::vec(-200i32..200, 0..400)) {
        let once: AvlTree<i32> = values.iter().copied().collect();
        let mut twice: AvlTree<i32> = AvlTree::new();
        for &v in &values {
            twice.insert(v);
            twice.insert(v);
        }
        prop_assert_eq!(once.debug_string(), twice.debug_string());
    }
}

/// Calls `f` once per ordering of `items`, swapping in place (Heap's algorithm).
fn for_each_ordering<T: Copy>(items: &[T], mut f: impl FnMut(&[T])) {
    let mut order = items.to_vec();
    let mut swaps = vec![0usize; order.len()];
    f(&order);

    let mut i = 1;
    while i < order.len() {
        if swaps[i] < i {
            let j = if i % 2 == 0 { 0 } else { swaps[i] };
            order.swap(j, i);
            f(&order);
            swaps[i] += 1;
            i = 1;
        } else {
            swaps[i] = 0;
            i += 1;
        }
    }
}

#[test]
fn exhaustive_insert_order_small_set() {
    let values: Vec<i32> = (1..=7).collect();
    let mut orderings = 0;

    for_each_ordering(&values, |perm| {
        let mut t: AvlTree<i32> = AvlTree::new();
        for &v in perm {
            assert!(t.insert(v));
            validate_tree(&t);
        }
        // Seven nodes never need more than height 3.
        assert!(t.height() <= 3);
        let got: Vec<i32> = t.iter().copied().collect();
        assert_eq!(got, values);
        orderings += 1;
    });
    assert_eq!(orderings, 5040, "every ordering of seven values must be visited");
}

#[test]
fn exhaustive_three_node_orders_end_at_same_shape() {
    let values = [10, 20, 30];

    for_each_ordering(&values, |perm| {
        let t: AvlTree<i32> = perm.iter().copied().collect();
        assert_eq!(
            t.debug_string(),
            "root: 20 (h=1, bf=0)\n  L: 10 (h=0, bf=0)\n  R: 30 (h=0, bf=0)\n",
            "insert order {perm:?}"
        );
    });
}
