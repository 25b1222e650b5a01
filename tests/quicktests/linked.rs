use linked_bst::{Error, Tree};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a plain `Vec`.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                bst.add(x.clone());
                model.push(x.clone());
            }
            Op::Remove(x) => match model.iter().position(|y| y == x) {
                Some(at) => assert_eq!(bst.remove(x), Ok(model.swap_remove(at))),
                None => assert_eq!(bst.remove(x), Err(Error::KeyNotFound)),
            },
        }
    }
    model.sort();
}

fn is_sorted<T: Ord>(values: &[&T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.len() == model.len()
        && tree.is_empty() == model.is_empty()
        && tree.inorder().copied().eq(model.iter().copied())
}

#[quickcheck]
fn inorder_is_sorted(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut Vec::new());

    is_sorted(&tree.inorder().collect::<Vec<_>>())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have added the same value multiple times - delete each one.
        while tree.remove(delete).is_ok() {}
    }

    let still_present = xs.iter().filter(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.clone().all(|x| tree.find(x).is_some())
        && tree.len() == still_present.count()
}

#[quickcheck]
fn removal_only_drops_the_removed_value(xs: Vec<i8>, at: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let target = xs[at % xs.len()];
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut expected = tree.inorder().copied().collect::<Vec<_>>();
    let position = expected.iter().position(|x| *x == target).unwrap();
    expected.remove(position);

    tree.remove(&target) == Ok(target)
        && tree.len() == xs.len() - 1
        && tree.inorder().copied().eq(expected)
}

#[quickcheck]
fn queries_are_idempotent(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.height() == tree.height() && tree.is_balanced() == tree.is_balanced()
}

#[quickcheck]
fn every_order_visits_every_value(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs.clone();
    sorted.sort();

    let sorted_of = |values: Vec<&i8>| {
        let mut values = values.into_iter().copied().collect::<Vec<_>>();
        values.sort();
        values
    };

    sorted_of(tree.preorder().collect()) == sorted
        && sorted_of(tree.postorder().collect()) == sorted
        && sorted_of(tree.levelorder().collect()) == sorted
        && sorted_of(tree.iter().collect()) == sorted
}
