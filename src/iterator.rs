//! Lazy in-order iteration.

use std::iter::FusedIterator;

use crate::tree::{Node, OrderedTree};

/// An in-order (ascending) iterator over the values of an [`OrderedTree`].
///
/// The iterator keeps an explicit stack of the nodes whose values have not
/// been yielded yet but whose left subtrees are already exhausted, so it
/// needs O(height) auxiliary space and never materializes the traversal.
/// It borrows the tree immutably for its whole lifetime, which keeps any
/// mutation of the tree from interleaving with iteration.
pub struct InorderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InorderIter<'a, T> {
    pub(crate) fn new(tree: &'a OrderedTree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    /// Pushes `tree` and the chain of its left descendants onto the stack.
    fn push_left_spine(&mut self, mut tree: &'a OrderedTree<T>) {
        while let OrderedTree::Node(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for InorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}

impl<T> FusedIterator for InorderIter<'_, T> {}

impl<T> OrderedTree<T> {
    /// Iterates over the tree's values in ascending order.
    pub fn iter_inorder(&self) -> InorderIter<'_, T> {
        InorderIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = InorderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i32]) -> OrderedTree<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn yields_values_in_ascending_order() {
        let tree = tree_of(&[50, 30, 10, 40, 80, 60]);
        let values: Vec<i32> = tree.iter_inorder().copied().collect();
        assert_eq!(values, [10, 30, 40, 50, 60, 80]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert_eq!(tree.iter_inorder().next(), None);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let tree = tree_of(&[2, 1, 3]);
        let mut iter = tree.iter_inorder();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn partial_consumption_needs_no_full_traversal() {
        let tree: OrderedTree<u32> = (0..1000).collect();
        let mut iter = tree.iter_inorder();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next(), Some(&1));
        drop(iter);
    }

    #[test]
    fn for_loop_over_a_tree_reference() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let mut last = 0;
        for value in &tree {
            assert!(*value > last);
            last = *value;
        }
        assert_eq!(last, 7);
    }
}
