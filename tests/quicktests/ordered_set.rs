use bst_set::OrderedSet;

use std::collections::{BTreeSet, HashSet};

use pretty_assertions::assert_eq;

use crate::Op;

/// Applies a set of operations to an `OrderedSet` and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], set: &mut OrderedSet<T>, model: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => assert_eq!(set.insert(x.clone()), model.insert(x.clone())),
            Op::Remove(x) => assert_eq!(set.remove(x), model.remove(x)),
            Op::Balance => set.balance(),
        }
    }
}

fn in_order<T: Clone>(set: &OrderedSet<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(set.size());
    set.traverse(|x| out.push(x.clone()));
    out
}

/// Without deletions, the lowest common ancestor of `a` and `b` is the first
/// inserted element lying between them: it is an ancestor of everything in
/// that range.
fn first_inserted_between(xs: &[i8], a: i8, b: i8) -> Option<i8> {
    if !xs.contains(&a) || !xs.contains(&b) {
        return None;
    }
    let (lo, hi) = (a.min(b), a.max(b));
    xs.iter().copied().find(|x| lo <= *x && *x <= hi)
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut set = OrderedSet::new();
        let mut model = BTreeSet::new();

        do_ops(&ops, &mut set, &mut model);
        assert_eq!(in_order(&set), model.iter().copied().collect::<Vec<_>>());
        set.size() == model.len()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let set: OrderedSet<_> = xs.iter().copied().collect();

        xs.iter().all(|x| set.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let set: OrderedSet<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !set.contains(x))
    }
}

quickcheck::quickcheck! {
    fn duplicates_are_rejected(xs: Vec<i8>) -> bool {
        let mut set = OrderedSet::new();
        let mut model = BTreeSet::new();

        xs.into_iter().all(|x| {
            let before = set.size();
            let inserted = set.insert(x);
            inserted == model.insert(x) && (inserted || set.size() == before)
        })
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut set: OrderedSet<_> = xs.iter().copied().collect();
        let mut model: BTreeSet<_> = xs.into_iter().collect();
        for delete in &deletes {
            if set.remove(delete) != model.remove(delete) {
                return false;
            }
        }

        deletes.iter().all(|x| !set.contains(x))
            && model.iter().all(|x| set.contains(x))
            && set.size() == model.len()
    }
}

quickcheck::quickcheck! {
    fn traversal_is_sorted(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut set: OrderedSet<_> = xs.into_iter().collect();
        for delete in &deletes {
            set.remove(delete);
        }

        in_order(&set).windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn find_by_order_matches_traversal(xs: Vec<i8>, i: usize) -> bool {
        let set: OrderedSet<_> = xs.into_iter().collect();
        let sorted = in_order(&set);

        sorted.iter().enumerate().all(|(rank, x)| set.find_by_order(rank) == Some(x))
            && set.find_by_order(sorted.len() + i % 8).is_none()
    }
}

quickcheck::quickcheck! {
    fn balance_keeps_elements(xs: Vec<i8>) -> bool {
        let mut set: OrderedSet<_> = xs.into_iter().collect();
        let before = in_order(&set);
        set.balance();

        let size = set.size();
        // A median-rooted tree is as short as a binary tree can be.
        let min_height = (usize::BITS - size.leading_zeros()) as usize;
        in_order(&set) == before && set.height() == min_height
    }
}

quickcheck::quickcheck! {
    fn reaches_both_is_lowest_common_ancestor(xs: Vec<i8>, a: i8, b: i8) -> bool {
        let set: OrderedSet<_> = xs.iter().copied().collect();

        set.reaches_both(&a, &b).copied() == first_inserted_between(&xs, a, b)
    }
}

quickcheck::quickcheck! {
    fn reaches_both_members(xs: Vec<i8>, i: usize, j: usize) -> bool {
        if xs.is_empty() {
            return true;
        }
        let (a, b) = (xs[i % xs.len()], xs[j % xs.len()]);
        let set: OrderedSet<_> = xs.iter().copied().collect();

        set.reaches_both(&a, &b).copied() == first_inserted_between(&xs, a, b)
    }
}

#[test]
fn example_tree() {
    let mut set: OrderedSet<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(in_order(&set), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(set.height(), 3);
    assert_eq!(set.size(), 7);
    assert_eq!(set.reaches_both(&1, &4), Some(&3));
    assert_eq!(set.find_rightmost_lowest(), Some(&9));
    assert_eq!(set.find_by_order(0), Some(&1));
    assert_eq!(set.find_by_order(6), Some(&9));

    let mut out = Vec::new();
    set.print_structure_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "    9\n  8\n    7\n5\n    4\n  3\n    1\n"
    );

    assert!(set.remove(&5));
    assert!(!set.remove(&5));
    assert_eq!(set.size(), 6);
    assert_eq!(set.find_by_order(3), Some(&7));
}
