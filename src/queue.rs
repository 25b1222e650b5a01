//! A FIFO queue made of two [`LinkedStack`]s. Level-order traversal uses it
//! to hold the subtrees it hasn't visited yet.
//!
//! Items are pushed onto `back`. `front` holds the oldest items with the
//! next one to leave on top; whenever it runs dry, `back` is flipped onto it.
//! That keeps every operation amortized `O(1)` and preserves one invariant:
//! `front` is only empty when the whole queue is.
//!
//! # Examples
//!
//! ```
//! use linked_bst::queue::LinkedQueue;
//!
//! let mut queue: LinkedQueue<_> = (1..=3).collect();
//! queue.push(4);
//!
//! assert_eq!(queue.pop(), Ok(1));
//! assert_eq!(queue.peek(), Ok(&2));
//! assert_eq!(queue.len(), 3);
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::stack::LinkedStack;

/// A first-in, first-out queue of `T`s.
pub struct LinkedQueue<T> {
    front: LinkedStack<T>,
    back: LinkedStack<T>,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LinkedQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut back = self.back.iter().collect::<Vec<_>>();
        back.reverse();
        f.debug_list()
            .entries(self.front.iter())
            .entries(back)
            .finish()
    }
}

impl<T> LinkedQueue<T> {
    /// Generates a new, empty `LinkedQueue`.
    pub fn new() -> Self {
        Self {
            front: LinkedStack::new(),
            back: LinkedStack::new(),
        }
    }

    /// The number of items waiting in the queue.
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Whether the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Adds `item` at the back of the queue.
    pub fn push(&mut self, item: T) {
        if self.front.is_empty() {
            self.front.push(item);
        } else {
            self.back.push(item);
        }
    }

    /// Removes and returns the oldest item.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        let item = self
            .front
            .pop()
            .map_err(|_| Error::EmptyCollection("queue"))?;
        if self.front.is_empty() {
            while let Ok(waiting) = self.back.pop() {
                self.front.push(waiting);
            }
        }
        Ok(item)
    }

    /// Returns the oldest item without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.front
            .peek()
            .map_err(|_| Error::EmptyCollection("queue"))
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
