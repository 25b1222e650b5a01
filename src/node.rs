//! The singly-linked cell that [`LinkedStack`][crate::stack::LinkedStack]
//! chains together.

/// A value and an owned pointer to the next cell, if any.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Boxes a new cell in front of `next`.
    pub(crate) fn new_boxed(value: T, next: Option<Box<Node<T>>>) -> Box<Self> {
        Box::new(Self { value, next })
    }

    /// The value stored in this cell.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The cell after this one.
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }
}
