//! This crate exposes a linked Binary Search Tree (BST) over plain values,
//! along with the small linked stack and queue it uses to walk itself.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The invariant that makes it a BST is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than _or equal to_ its own value.
//!
//! Adding always sends duplicates to the right, so in a tree built only by
//! adding, the left subtree is strictly smaller. Removing a node with two
//! children copies up the largest value on its left, and any other copies of
//! that value stay behind on the left.
//!
//! Searching takes `O(height)`, where `height` is the number of edges on the
//! longest path from the root `Node` to a leaf. The [`linked::Tree`] here
//! never rebalances, so its height depends on the order values arrive in:
//! adding values in sorted order degenerates into a chain. Every walk over
//! the tree therefore uses an explicit [`stack::LinkedStack`] (or
//! [`queue::LinkedQueue`]) rather than recursion.
//!
//! ## Features
//!
//! - `serde`: serialise a tree as its preorder sequence and read one back
//!   by adding each value in turn.
//!
//! ## Logging
//!
//! Structural edits are reported through the [`log`] facade at `trace`
//! level. Nothing is printed unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod linked;
pub mod node;
pub mod queue;
mod render;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod stack;
pub mod traverse;

pub use error::{Error, Result};
pub use linked::Tree;
