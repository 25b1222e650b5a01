//! `serde` support, enabled with the `serde` feature.
//!
//! A tree is written out as the sequence of its values in preorder. Reading a sequence adds each
//! value in turn. A round trip keeps the values along with their preorder and inorder order. For
//! a tree built only with `add` it also keeps the exact shape, but after a removal has lifted a
//! duplicated value above an equal copy on its left, re-adding sends that copy to the right and
//! the shape comes back different.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::linked::Tree;

impl<T> Serialize for Tree<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct TreeVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for TreeVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = Tree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of tree values in preorder")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tree = Tree::new();
        while let Some(value) = seq.next_element()? {
            tree.add(value);
        }
        Ok(tree)
    }
}

impl<'de, T> Deserialize<'de> for Tree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TreeVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_shape() {
        let tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80, 90].into_iter().collect();

        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "[50,30,20,40,70,60,80,90]");

        let back: Tree<i32> = serde_json::from_str(&json).unwrap();
        assert!(back.preorder().eq(tree.preorder()));
        assert_eq!(back.height(), tree.height());
        assert_eq!(back.len(), tree.len());
    }

    #[test]
    fn round_trip_after_removal_keeps_order_not_shape() {
        // Removing 10 lifts one 5 over the other, which stays on the left.
        let mut tree: Tree<_> = [10, 5, 15, 5].into_iter().collect();
        assert_eq!(tree.remove(&10), Ok(10));

        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "[5,5,15]");

        let back: Tree<i32> = serde_json::from_str(&json).unwrap();
        assert!(back.preorder().eq(tree.preorder()));
        assert!(back.inorder().eq(tree.inorder()));
        assert_eq!(back.len(), tree.len());
        // Re-adding sends the second 5 right, making a chain.
        assert_eq!((tree.height(), back.height()), (1, 2));
    }

    #[test]
    fn rejects_non_sequences() {
        assert!(serde_json::from_str::<Tree<i32>>("{\"root\": 1}").is_err());
    }
}
