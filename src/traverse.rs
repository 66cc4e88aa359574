//! Whole-tree traversal passes that annotate nodes through their tag stores.
//!
//! Each pass visits the tree exactly once and freely overwrites tags left by
//! earlier passes; tags never influence the search invariant.

use std::collections::VecDeque;

use crate::tag;
use crate::tree::OrderedTree;
use crate::TagPosition;

impl<T: Ord> OrderedTree<T> {
    /// Collects `(parent, child)` value pairs in a single reversed in-order
    /// pass: right subtree, then the node, then the left subtree.
    ///
    /// Every visited node receives a `descend` tag holding its 1-based visit
    /// position, so the right-most (largest) node is tagged 1. For each node
    /// with at least one populated subtree, a pair per child is appended to
    /// the result, right child before left, using the parent value as seen
    /// at visit time. The deepest right-most pairs therefore come first.
    pub fn parent_child_pairs_descend(&mut self) -> Vec<(T, T)>
    where
        T: Clone,
    {
        let mut pairs = Vec::new();
        let mut position: TagPosition = 0;
        self.descend_rec(&mut pairs, &mut position);
        pairs
    }

    fn descend_rec(&mut self, pairs: &mut Vec<(T, T)>, position: &mut TagPosition)
    where
        T: Clone,
    {
        let Self::Node(node) = self else {
            return;
        };

        node.right.descend_rec(pairs, position);

        *position += 1;
        node.tags.set(tag::DESCEND, *position);

        if let Self::Node(right) = &node.right {
            pairs.push((node.value.clone(), right.value.clone()));
        }
        if let Self::Node(left) = &node.left {
            pairs.push((node.value.clone(), left.value.clone()));
        }

        node.left.descend_rec(pairs, position);
    }

    /// Checks whether `values` spells out a literal root-down path.
    ///
    /// The first value must equal the root; at each node the *next* expected
    /// value is compared against the current value to pick the subtree to
    /// continue into, and the node found there must equal it exactly. A full
    /// match tags every node on the path with `path` and its 1-based depth,
    /// then returns `true`. Any mismatch returns `false` and leaves the tree
    /// untagged. The empty tree and the empty sequence never match.
    ///
    /// The tree is traversed at most once, with no backtracking.
    pub fn matches_path(&mut self, values: &[T]) -> bool {
        if self.is_empty() {
            return false;
        }
        self.matches_path_rec(values, 0)
    }

    fn matches_path_rec(&mut self, values: &[T], index: usize) -> bool {
        let Self::Node(node) = self else {
            return false;
        };
        let Some(expected) = values.get(index) else {
            return false;
        };
        if *expected != node.value {
            return false;
        }

        let matched = match values.get(index + 1) {
            None => true,
            Some(next) => match next.cmp(&node.value) {
                std::cmp::Ordering::Greater => node.right.matches_path_rec(values, index + 1),
                std::cmp::Ordering::Less => node.left.matches_path_rec(values, index + 1),
                // A repeated value can never continue a real path.
                std::cmp::Ordering::Equal => false,
            },
        };

        if matched {
            node.tags.set(tag::PATH, (index + 1) as TagPosition);
        }
        matched
    }
}

impl<T> OrderedTree<T> {
    /// Tags every node with `width` and its 1-based position in level-order
    /// traversal: the root is 1, then each level left to right.
    ///
    /// Driven by an explicit FIFO queue seeded with the root; a no-op on the
    /// empty tree.
    pub fn tag_width(&mut self) {
        let mut queue: VecDeque<&mut OrderedTree<T>> = VecDeque::new();
        if !self.is_empty() {
            queue.push_back(self);
        }

        let mut position: TagPosition = 0;
        while let Some(subtree) = queue.pop_front() {
            if let Self::Node(node) = subtree {
                position += 1;
                node.tags.set(tag::WIDTH, position);

                if !node.left.is_empty() {
                    queue.push_back(&mut node.left);
                }
                if !node.right.is_empty() {
                    queue.push_back(&mut node.right);
                }
            }
        }
    }

    /// Recursively drops every tag whose key is not in `keep`.
    pub fn filter_tags(&mut self, keep: &[&str]) {
        if let Self::Node(node) = self {
            node.tags.retain_keys(keep);
            node.left.filter_tags(keep);
            node.right.filter_tags(keep);
        }
    }
}
