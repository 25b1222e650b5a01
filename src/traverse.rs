//! Walking a [`Tree`].
//!
//! Iterating a tree directly ([`Tree::iter`], `for x in &tree`, `for x in tree`) is lazy and
//! visits values in preorder, keeping the subtrees still to visit on a [`LinkedStack`]. The named
//! orders ([`Tree::preorder`], [`Tree::inorder`], [`Tree::postorder`] and [`Tree::levelorder`])
//! collect every value up front and hand back a [`Traversal`] over the snapshot.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let tree: Tree<_> = [50, 30, 70, 20, 40].into_iter().collect();
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [50, 30, 20, 40, 70]);
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [20, 30, 40, 50, 70]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [20, 40, 30, 70, 50]);
//! assert_eq!(tree.levelorder().copied().collect::<Vec<_>>(), [50, 30, 70, 20, 40]);
//! ```

use std::iter::FusedIterator;
use std::vec;

use crate::linked::{Tree, TreeNode};
use crate::queue::LinkedQueue;
use crate::stack::LinkedStack;

impl<T> Tree<T> {
    /// Lazily visits every value in preorder (root, left, right).
    pub fn iter(&self) -> Iter<'_, T> {
        let mut pending = LinkedStack::new();
        pending.extend(self.root.as_deref());
        Iter {
            pending,
            remaining: self.len(),
        }
    }

    /// Every value in preorder: a node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Traversal<'_, T> {
        Traversal::new(self.iter().collect())
    }

    /// Every value in order: a node's left subtree, then the node, then its right subtree. As
    /// long as the tree hasn't been disturbed by [`Tree::replace`], this is sorted.
    pub fn inorder(&self) -> Traversal<'_, T> {
        let mut values = Vec::with_capacity(self.len());
        let mut pending = LinkedStack::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                pending.push(node);
                cursor = node.left();
            }
            match pending.pop() {
                Ok(node) => {
                    values.push(&node.value);
                    cursor = node.right();
                }
                Err(_) => break,
            }
        }
        Traversal::new(values)
    }

    /// Every value in postorder: a node's left subtree, then its right subtree, then the node.
    pub fn postorder(&self) -> Traversal<'_, T> {
        let values = self
            .postorder_nodes()
            .into_iter()
            .map(|node| &node.value)
            .collect();
        Traversal::new(values)
    }

    /// Every value breadth first: the root, then its children left to right, then their
    /// children, and so on.
    pub fn levelorder(&self) -> Traversal<'_, T> {
        let mut values = Vec::with_capacity(self.len());
        let mut pending = LinkedQueue::new();
        pending.extend(self.root.as_deref());
        while let Ok(node) = pending.pop() {
            values.push(&node.value);
            pending.extend(node.left());
            pending.extend(node.right());
        }
        Traversal::new(values)
    }

    /// The nodes of the tree in postorder.
    pub(crate) fn postorder_nodes(&self) -> Vec<&TreeNode<T>> {
        // Visiting root, right, left and reversing the result gives left, right, root.
        let mut nodes = Vec::with_capacity(self.len());
        let mut pending = LinkedStack::new();
        pending.extend(self.root.as_deref());
        while let Ok(node) = pending.pop() {
            nodes.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }
        nodes.reverse();
        nodes
    }
}

/// A snapshot of the values in a [`Tree`], taken in one of the named orders.
pub struct Traversal<'a, T> {
    values: vec::IntoIter<&'a T>,
}

impl<'a, T> Traversal<'a, T> {
    fn new(values: Vec<&'a T>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }
}

impl<'a, T> Clone for Traversal<'a, T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Traversal<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.values.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Traversal<'a, T> {}
impl<'a, T> FusedIterator for Traversal<'a, T> {}

/// Lazy preorder iterator over the values of a [`Tree`]. See [`Tree::iter`].
pub struct Iter<'a, T> {
    pending: LinkedStack<&'a TreeNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop().ok()?;
        // Right goes in first so that left comes out first.
        self.pending.extend(node.right());
        self.pending.extend(node.left());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning preorder iterator over the values of a [`Tree`]. Nodes are freed as their values are
/// handed out.
pub struct IntoIter<T> {
    pending: LinkedStack<Box<TreeNode<T>>>,
    remaining: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Nodes still on the stack own whole subtrees. Taking them apart one at a time keeps
        // this from recursing.
        for _ in self {}
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.pending.pop().ok()?;
        self.pending.extend(node.right.take());
        self.pending.extend(node.left.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let remaining = self.len();
        let mut pending = LinkedStack::new();
        pending.extend(self.root.take());
        IntoIter { pending, remaining }
    }
}
