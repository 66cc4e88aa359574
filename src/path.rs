//! Directional navigation into subtrees.
//!
//! A path is a fixed sequence of descend directives, not a value search:
//! `'0'` descends into the lesser (left) subtree and `'1'` into the greater
//! (right) subtree. The empty path denotes the tree itself.

use crate::error::TreeError;
use crate::tree::OrderedTree;

/// A single descend directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Descend into the lesser (left) subtree. Encoded as `'0'`.
    Lesser,
    /// Descend into the greater (right) subtree. Encoded as `'1'`.
    Greater,
}

impl Direction {
    /// Decodes one path character.
    pub fn from_step(step: char) -> Result<Self, TreeError> {
        match step {
            '0' => Ok(Self::Lesser),
            '1' => Ok(Self::Greater),
            _ => Err(TreeError::InvalidArgument),
        }
    }
}

impl<T> OrderedTree<T> {
    /// Follows descend directives from the root and returns the subtree they
    /// lead to.
    ///
    /// Fails with [`TreeError::NotFound`] when a directive descends from an
    /// empty subtree or the directives land on one; the empty tree therefore
    /// fails even for an empty path.
    pub fn subtree_at(
        &self,
        steps: impl IntoIterator<Item = Direction>,
    ) -> Result<&Self, TreeError> {
        let mut current = self;
        for step in steps {
            let Self::Node(node) = current else {
                return Err(TreeError::NotFound);
            };
            current = match step {
                Direction::Lesser => &node.left,
                Direction::Greater => &node.right,
            };
        }

        match current {
            Self::Empty => Err(TreeError::NotFound),
            subtree => Ok(subtree),
        }
    }

    /// Parses a `'0'`/`'1'` directive string and navigates to the subtree it
    /// denotes.
    ///
    /// The whole string is validated before navigation: any other character
    /// fails with [`TreeError::InvalidArgument`].
    pub fn subtree_at_path(&self, path: &str) -> Result<&Self, TreeError> {
        let steps = path
            .chars()
            .map(Direction::from_step)
            .collect::<Result<Vec<_>, _>>()?;
        self.subtree_at(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i32]) -> OrderedTree<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_path_returns_the_tree_itself() {
        let tree = tree_of(&[1, 2, 3, 4]);
        let subtree = tree.subtree_at_path("").unwrap();
        assert_eq!(subtree.to_string(), "{1, ∅, {2, ∅, {3, ∅, {4, ∅, ∅}}}}");
    }

    #[test]
    fn follows_greater_chain() {
        let tree = tree_of(&[1, 2, 3, 4]);
        let subtree = tree.subtree_at_path("111").unwrap();
        assert_eq!(subtree.to_string(), "{4, ∅, ∅}");
    }

    #[test]
    fn lesser_directive_from_root() {
        let tree = tree_of(&[10, 20, 30, 5]);
        assert_eq!(tree.to_string(), "{10, {5, ∅, ∅}, {20, ∅, {30, ∅, ∅}}}");

        let subtree = tree.subtree_at_path("0").unwrap();
        assert_eq!(subtree.value(), Some(&5));
    }

    #[test]
    fn mixed_directives() {
        let tree = tree_of(&[50, 30, 10, 40, 80, 60]);
        let subtree = tree.subtree_at_path("01").unwrap();
        assert_eq!(subtree.to_string(), "{40, ∅, ∅}");

        let subtree = tree.subtree_at(vec![Direction::Greater, Direction::Lesser]).unwrap();
        assert_eq!(subtree.value(), Some(&60));
    }

    #[test]
    fn navigating_an_empty_tree_fails() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert_eq!(tree.subtree_at_path(""), Err(TreeError::NotFound));
        assert_eq!(tree.subtree_at_path("0"), Err(TreeError::NotFound));
    }

    #[test]
    fn navigating_past_the_tree_fails() {
        let tree = tree_of(&[10, 5, 20]);
        // 5 is a leaf; both of its subtrees are empty.
        assert_eq!(tree.subtree_at_path("00"), Err(TreeError::NotFound));
        // Landing on an empty subtree is just as much a miss.
        assert_eq!(tree.subtree_at_path("01"), Err(TreeError::NotFound));
        assert_eq!(tree.subtree_at_path("0000"), Err(TreeError::NotFound));
    }

    #[test]
    fn malformed_directive_fails_before_navigation() {
        let tree = tree_of(&[10, 5, 20]);
        assert_eq!(tree.subtree_at_path("0x1"), Err(TreeError::InvalidArgument));
        assert_eq!(Direction::from_step('2'), Err(TreeError::InvalidArgument));
    }
}
