//! A linked, unbalanced BST that stores plain values. Duplicates are allowed
//! and [`Tree::add`] always sends them to the right, so the shape of the tree
//! depends entirely on the order items were added in. [`Tree::remove`] can
//! leave an equal value on a node's left (see its docs).
//!
//! No method recurses on the call stack: every walk borrows a
//! [`LinkedStack`] (or a [`LinkedQueue`][crate::queue::LinkedQueue] for level
//! order), so even a tree that has degenerated into a long chain is safe to
//! search, measure, traverse, clone and drop.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//!
//! assert_eq!(tree.find(&60), Some(&60));
//! assert_eq!(tree.find(&99), None);
//!
//! // Removing a node with two children lifts the largest value on its left.
//! assert_eq!(tree.remove(&70), Ok(70));
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [20, 30, 40, 50, 60, 80]);
//!
//! // Removing something that isn't there is an error.
//! assert!(tree.remove(&70).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::stack::LinkedStack;

/// An owned, possibly empty subtree.
pub(crate) type Link<T> = Option<Box<TreeNode<T>>>;

/// A binary search tree of `T`s.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    size: usize,
}

/// A single value in the tree along with the subtrees that hang off of it.
pub(crate) struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> TreeNode<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Overwrites this node's value with the largest value in its left subtree and unlinks the
    /// node that held it. Returns the value this node held before, or `None` (leaving everything
    /// untouched) if there is no left subtree.
    ///
    /// The largest node has no right child, so unlinking it only means splicing its left child
    /// into its place.
    fn lift_max_of_left(&mut self) -> Option<T> {
        let mut cursor = &mut self.left;
        loop {
            match cursor.as_deref().map(|node| node.right.is_some()) {
                Some(true) => {
                    if let Some(node) = cursor {
                        cursor = &mut node.right;
                    }
                }
                Some(false) => break,
                None => return None,
            }
        }

        let max = cursor.take()?;
        let TreeNode { value, left, .. } = *max;
        *cursor = left;
        Some(mem::replace(&mut self.value, value))
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.release_nodes();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the tree node for node, so the clone has exactly the same shape even if
    /// [`Tree::replace`] has left the original out of order.
    fn clone(&self) -> Self {
        // Postorder hands us both subtrees of a node before the node itself. Their copies are
        // sitting on top of `built`, right above left.
        let mut built: LinkedStack<Box<TreeNode<T>>> = LinkedStack::new();
        for node in self.postorder_nodes() {
            let right = match node.right {
                Some(_) => built.pop().ok(),
                None => None,
            };
            let left = match node.left {
                Some(_) => built.pop().ok(),
                None => None,
            };
            built.push(Box::new(TreeNode {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop().ok(),
            size: self.size,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of values stored in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds `item` to the tree. Items smaller than a node go to its left and everything else,
    /// including an equal item, goes to its right. This never fails and never rebalances.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [2, 1, 2]);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut depth = 0usize;
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = if item < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        *cursor = Some(TreeNode::new_boxed(item));
        self.size += 1;
        trace!("added node at depth {}, size is now {}", depth, self.size);
    }

    /// Potentially finds the stored value equal to `item`. If no node holds an equal value,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3), Some(&3));
    /// assert_eq!(tree.find(&4), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match item.cmp(&node.value) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether some stored value is equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Removes one value equal to `item` from the tree and returns it.
    ///
    /// A node with at most one child is replaced by that child. A node with two children stays
    /// where it is and takes on the largest value from its left subtree instead; the node that
    /// held that value is the one that gets unlinked. If that largest value has duplicates, the
    /// other copies stay in the left subtree, so afterwards the node may have an equal value on
    /// its left. Lookups and inorder still work; only the "ties go right" shape is lost.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if nothing in the tree equals `item`. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    /// use linked_bst::Error;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [1, 3]);
    /// assert_eq!(tree.remove(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: Ord,
    {
        let slot = Self::slot_of(&mut self.root, item);
        let has_two_children = slot
            .as_deref()
            .map_or(false, |node| node.left.is_some() && node.right.is_some());

        let removed = if has_two_children {
            trace!("removing node with two children, lifting its predecessor");
            slot.as_deref_mut().and_then(TreeNode::lift_max_of_left)
        } else {
            match slot.take() {
                Some(node) => {
                    trace!("removing node with at most one child");
                    let TreeNode { value, left, right } = *node;
                    *slot = left.or(right);
                    Some(value)
                }
                None => None,
            }
        };

        let removed = removed.ok_or(Error::KeyNotFound)?;
        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the stored value equal to `item` with `new_item` and returns the old value, or
    /// `None` if nothing equals `item`.
    ///
    /// **Note** The node keeps its position. If `new_item` doesn't sort between the node's
    /// neighbours the tree is no longer a valid BST and later searches may miss values. It is up
    /// to the caller to only substitute values that sort the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&30, 35), Some(30));
    /// assert_eq!(tree.replace(&30, 36), None);
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [35, 50, 70]);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        Self::slot_of(&mut self.root, item)
            .as_deref_mut()
            .map(|node| mem::replace(&mut node.value, new_item))
    }

    /// The number of edges on the longest path from the root down to a leaf. A lone root has
    /// height `0` and an empty tree has height `-1`.
    pub fn height(&self) -> isize {
        let mut height: isize = -1;
        let mut pending = LinkedStack::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 0));
        }
        while let Ok((node, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [node.left(), node.right()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    /// Whether the tree is no taller than `floor(log2(len)) + 1`. An empty tree is balanced.
    ///
    /// This looks at the tree as a whole rather than comparing the subtrees of every node, so a
    /// tree can pass while some of its subtrees are lopsided.
    pub fn is_balanced(&self) -> bool {
        if self.size == 0 {
            return true;
        }
        self.height() <= self.size.ilog2() as isize + 1
    }

    /// The smallest stored value strictly greater than `item`. `item` itself doesn't need to be
    /// in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&30), Some(&50));
    /// assert_eq!(tree.successor(&55), Some(&70));
    /// assert_eq!(tree.successor(&70), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut candidate = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = if *item < node.value {
                candidate = Some(&node.value);
                node.left()
            } else {
                node.right()
            };
        }
        candidate
    }

    /// The largest stored value strictly less than `item`. `item` itself doesn't need to be in
    /// the tree.
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut candidate = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = if *item > node.value {
                candidate = Some(&node.value);
                node.right()
            } else {
                node.left()
            };
        }
        candidate
    }

    /// Empties the tree.
    pub fn clear(&mut self) {
        let released = self.release_nodes();
        debug!("cleared tree, released {} nodes", released);
    }

    /// Unlinks every node one at a time so that dropping a tall tree can't overflow the stack.
    /// Returns how many nodes were released.
    fn release_nodes(&mut self) -> usize {
        let released = self.size;
        self.size = 0;

        let mut pending = LinkedStack::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Ok(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        released
    }

    /// Walks down from `link` to the link that owns the node equal to `item`. When there is no
    /// such node, this is the empty link where `item` would have been found.
    ///
    /// Working with the owning link rather than the node means removing the root looks exactly
    /// like removing any other node.
    fn slot_of<'a>(mut link: &'a mut Link<T>, item: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => item.cmp(&node.value),
                None => return link,
            };
            if ordering == Ordering::Equal {
                return link;
            }
            if let Some(node) = link {
                link = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Adds every item in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> Extend<&'a T> for Tree<T>
where
    T: Ord + Copy + 'a,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
