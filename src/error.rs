//! Errors raised when an operation's precondition isn't met.
//!
//! Lookups that can simply miss (`find`, `successor`, `replace`, ...) return
//! an `Option` instead. Only removal of an absent item and popping an empty
//! scratch container go through [`Error`].

use thiserror::Error;

/// Everything that can go wrong in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// [`Tree::remove`][crate::linked::Tree::remove] was asked for an item
    /// the tree doesn't hold.
    #[error("item not in tree")]
    KeyNotFound,
    /// `pop` or `peek` was called on an empty stack or queue. The payload names
    /// the container.
    #[error("the {0} is empty")]
    EmptyCollection(&'static str),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::KeyNotFound.to_string(), "item not in tree");
        assert_eq!(
            Error::EmptyCollection("stack").to_string(),
            "the stack is empty"
        );
    }
}
