//! Text pictures of a [`Tree`].
//!
//! [`Display`][fmt::Display] draws the tree on its side, root at the left edge and larger values
//! further down, with one `"| "` per level of depth:
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//! assert_eq!(tree.to_string(), "| 1\n2\n| 3\n");
//! ```
//!
//! [`Tree::alt_string`] draws branches instead, root first and the right subtree above the left:
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//! assert_eq!(tree.alt_string(), "2\n    ┌── 3\n    └── 1\n");
//! ```

use std::fmt::{self, Write};

use crate::linked::{Tree, TreeNode};
use crate::stack::LinkedStack;

/// Which edge led to a node in [`Tree::alt_string`].
#[derive(Clone, Copy, PartialEq, Eq)]
enum Branch {
    Root,
    Left,
    Right,
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // An inorder walk that remembers how deep each node is.
        let mut pending: LinkedStack<(&TreeNode<T>, usize)> = LinkedStack::new();
        let mut cursor = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, depth)) = cursor {
                pending.push((node, depth));
                cursor = node.left().map(|left| (left, depth + 1));
            }
            let Ok((node, depth)) = pending.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(depth), node.value)?;
            cursor = node.right().map(|right| (right, depth + 1));
        }
    }
}

impl<T> Tree<T> {
    /// Draws the tree with branch characters. Each node is followed by its right subtree and
    /// then its left subtree, each indented one step further. The bar under a right branch is
    /// four columns wide, the same as a blank indent, so nested levels line up.
    ///
    /// ```text
    /// 50
    ///     ┌── 70
    ///     │   ┌── 80
    ///     │   └── 60
    ///     └── 30
    ///         ┌── 40
    ///         └── 20
    /// ```
    pub fn alt_string(&self) -> String
    where
        T: fmt::Display,
    {
        let mut drawing = String::new();
        let mut pending = LinkedStack::new();
        pending.extend(self.root.as_deref().map(|root| (root, String::new(), Branch::Root)));

        while let Ok((node, prefix, branch)) = pending.pop() {
            let connector = match branch {
                Branch::Root => "",
                Branch::Left => "└── ",
                Branch::Right => "┌── ",
            };
            // Writing to a `String` can't fail.
            let _ = writeln!(drawing, "{}{}{}", prefix, connector, node.value);

            let child_prefix = match branch {
                Branch::Right => format!("{}│   ", prefix),
                Branch::Root | Branch::Left => format!("{}    ", prefix),
            };
            // Left goes in first so that the right subtree is drawn first.
            if let Some(left) = node.left() {
                pending.push((left, child_prefix.clone(), Branch::Left));
            }
            if let Some(right) = node.right() {
                pending.push((right, child_prefix, Branch::Right));
            }
        }
        drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> Tree<i32> {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    #[test]
    fn empty_tree_draws_nothing() {
        let tree = Tree::<i32>::new();

        assert_eq!(tree.to_string(), "");
        assert_eq!(tree.alt_string(), "");
    }

    #[test]
    fn sideways() {
        assert_eq!(
            scenario_a().to_string(),
            "| | 20\n| 30\n| | 40\n50\n| | 60\n| 70\n| | 80\n"
        );
    }

    #[test]
    fn branches() {
        let expected = "\
50
    ┌── 70
    │   ┌── 80
    │   └── 60
    └── 30
        ┌── 40
        └── 20
";
        assert_eq!(scenario_a().alt_string(), expected);
    }

    #[test]
    fn branches_of_a_skewed_tree() {
        let tree: Tree<_> = [1, 2, 3].into_iter().collect();
        let expected = "\
1
    ┌── 2
    │   ┌── 3
";
        assert_eq!(tree.alt_string(), expected);
    }

    #[test]
    fn nested_bars_line_up() {
        let tree: Tree<_> = [1, 4, 3, 2, 5].into_iter().collect();
        let expected = "\
1
    ┌── 4
    │   ┌── 5
    │   └── 3
    │       └── 2
";
        assert_eq!(tree.alt_string(), expected);
        for line in expected.lines().skip(1) {
            let indent = line.find(['┌', '└']).map(|at| line[..at].chars().count());
            assert_eq!(indent.map(|cols| cols % 4), Some(0), "{:?}", line);
        }
    }
}
