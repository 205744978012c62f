use ordered_tree::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Delete(v) => {
                tree.delete(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.inorder().into_iter().eq(set.iter()) && tree.check_invariants().is_ok()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.find(x)) && still_present.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.inorder().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn duplicates_are_ignored(xs: Vec<u8>, again: u8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.insert(again);
    let before = tree.to_string();
    let len = tree.len();

    !tree.insert(again) && tree.to_string() == before && tree.len() == len
}

#[quickcheck]
fn reversed_comparator(xs: Vec<i16>) -> bool {
    let mut tree = Tree::with_comparator(|a: &i16, b: &i16| b < a);
    tree.extend(xs.iter().copied());

    let mut expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    expected.reverse();

    tree.inorder().into_iter().copied().eq(expected) && tree.check_invariants().is_ok()
}

#[quickcheck]
fn delete_returns_stored_value(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let was_present = tree.find(&x);
    let len = tree.len();

    match tree.delete(&x) {
        Some(deleted) => was_present && deleted == x && tree.len() == len - 1,
        None => !was_present && tree.len() == len,
    }
}
