//! A linked LIFO stack. The tree borrows one of these as scratch space for
//! every walk it does so that nothing recurses on the call stack.
//!
//! [`LinkedStack::iter`] and `Debug` go from the top of the stack to the
//! bottom, the order items would be popped in. That is the reverse of a
//! textbook linked stack that lists bottom to top.
//!
//! # Examples
//!
//! ```
//! use linked_bst::stack::LinkedStack;
//!
//! let mut stack = LinkedStack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.pop().is_err());
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::node::Node;

/// A stack of `T`s kept as a chain of [`Node`]s, top first.
pub struct LinkedStack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink one cell at a time. Dropping `head` directly would recurse once per cell.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> fmt::Debug for LinkedStack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> LinkedStack<T> {
    /// Generates a new, empty `LinkedStack`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// The number of items on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.head = Some(Node::new_boxed(item, self.head.take()));
        self.len += 1;
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(Error::EmptyCollection("stack"))?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    /// Returns the top item without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(Node::value)
            .ok_or(Error::EmptyCollection("stack"))
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Visits the items from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    /// Pushes every item in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Borrowing iterator over a [`LinkedStack`], top first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            node.value()
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
