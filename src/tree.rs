use std::cmp::Ordering;
use std::mem;

use tracing::debug;

use crate::error::TreeError;
use crate::tag::{TagValue, Tags};

/// An ordered binary search tree.
///
/// A tree is either [`Empty`](OrderedTree::Empty) or a [`Node`] owning one
/// value and two subtrees, each of which is itself a full tree. Emptiness is
/// a variant of the tree, never a null handle, so every subtree reference is
/// always dereferenceable.
///
/// For every node, all values in the left subtree compare strictly less than
/// the node value and all values in the right subtree strictly greater; the
/// tree never holds duplicates. Insertion order determines shape (there is
/// no rebalancing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedTree<T> {
    /// The empty tree.
    Empty,
    /// A populated subtree.
    Node(Box<Node<T>>),
}

/// A populated tree node: one value, a tag store, and two owned subtrees.
///
/// Fields are only reachable through read-only accessors, so the search
/// invariant cannot be broken from outside the crate even though the
/// [`OrderedTree`] variants are public for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) tags: Tags,
    pub(crate) left: OrderedTree<T>,
    pub(crate) right: OrderedTree<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            tags: Tags::new(),
            left: OrderedTree::Empty,
            right: OrderedTree::Empty,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> &OrderedTree<T> {
        &self.left
    }

    pub fn right(&self) -> &OrderedTree<T> {
        &self.right
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> OrderedTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// A leaf is a populated node whose both subtrees are empty.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Node(node) if node.left.is_empty() && node.right.is_empty())
    }

    /// The root value, or `None` for the empty tree.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&node.value),
        }
    }

    /// The root node's tag store, or `None` for the empty tree.
    pub fn tags(&self) -> Option<&Tags> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&node.tags),
        }
    }

    /// Attaches a tag to the root node. Returns `false` on the empty tree.
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<TagValue>) -> bool {
        match self {
            Self::Empty => false,
            Self::Node(node) => {
                node.tags.set(key, value);
                true
            }
        }
    }

    /// Reads a tag from the root node.
    pub fn get_tag(&self, key: &str) -> Option<&TagValue> {
        self.tags().and_then(|tags| tags.get(key))
    }

    /// Number of values stored in the tree.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(node) => 1 + node.left.len() + node.right.len(),
        }
    }

    /// Longest node count from the root down to a leaf. Empty trees have
    /// height zero.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(node) => 1 + node.left.height().max(node.right.height()),
        }
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Inserts a value, attaching it as a new leaf.
    ///
    /// Passing `None` fails with [`TreeError::InvalidArgument`]. Inserting a
    /// value already present is a silent no-op; the tree never holds
    /// duplicates.
    pub fn insert(&mut self, value: impl Into<Option<T>>) -> Result<(), TreeError> {
        let Some(value) = value.into() else {
            return Err(TreeError::InvalidArgument);
        };
        self.insert_value(value);
        Ok(())
    }

    fn insert_value(&mut self, value: T) {
        match self {
            Self::Empty => *self = Self::Node(Box::new(Node::new(value))),
            Self::Node(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert_value(value),
                Ordering::Equal => {}
                Ordering::Greater => node.right.insert_value(value),
            },
        }
    }

    /// Inserts a batch of values, all or nothing.
    ///
    /// The batch is scanned before any mutation: if any item is absent the
    /// whole call is a deliberate no-op returning `false`. Otherwise every
    /// item is inserted in sequence and the call returns `true`.
    pub fn insert_all<I, V>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<T>>,
    {
        let mut batch = Vec::new();
        for value in values {
            match value.into() {
                Some(value) => batch.push(value),
                None => {
                    debug!("batch insert contains an absent element, inserting nothing");
                    return false;
                }
            }
        }

        for value in batch {
            self.insert_value(value);
        }
        true
    }

    /// Checks membership by standard BST descent.
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::Empty => false,
            Self::Node(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.contains(value),
                Ordering::Equal => true,
                Ordering::Greater => node.right.contains(value),
            },
        }
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node(node) if node.left.is_empty() => Some(&node.value),
            Self::Node(node) => node.left.min(),
        }
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node(node) if node.right.is_empty() => Some(&node.value),
            Self::Node(node) => node.right.max(),
        }
    }

    /// Removes a value from the tree.
    ///
    /// Passing `None` fails with [`TreeError::InvalidArgument`]; a value not
    /// present in the tree fails with [`TreeError::NotFound`], leaving the
    /// tree unchanged.
    ///
    /// A leaf target becomes empty. A target with one subtree is replaced by
    /// that subtree entirely (the surviving subtree keeps its own tags). A
    /// target with two subtrees takes the largest value of its left subtree
    /// as its new value, and the node that held it is excised from the left
    /// subtree; the target keeps its tag store.
    pub fn withdraw(&mut self, value: impl Into<Option<T>>) -> Result<(), TreeError> {
        let Some(target) = value.into() else {
            return Err(TreeError::InvalidArgument);
        };
        let (tree, removed) = mem::take(self).withdraw_value(&target);
        *self = tree;
        if removed {
            Ok(())
        } else {
            Err(TreeError::NotFound)
        }
    }

    fn withdraw_value(self, target: &T) -> (Self, bool) {
        match self {
            Self::Empty => (Self::Empty, false),
            Self::Node(mut node) => match target.cmp(&node.value) {
                Ordering::Less => {
                    let (left, removed) = mem::take(&mut node.left).withdraw_value(target);
                    node.left = left;
                    (Self::Node(node), removed)
                }
                Ordering::Greater => {
                    let (right, removed) = mem::take(&mut node.right).withdraw_value(target);
                    node.right = right;
                    (Self::Node(node), removed)
                }
                Ordering::Equal => (Self::splice(node), true),
            },
        }
    }

    /// Removes the matched node, restructuring its subtree.
    fn splice(mut node: Box<Node<T>>) -> Self {
        if node.left.is_empty() && node.right.is_empty() {
            Self::Empty
        } else if node.left.is_empty() {
            mem::take(&mut node.right)
        } else if node.right.is_empty() {
            mem::take(&mut node.left)
        } else {
            debug!("two-subtree withdraw, promoting predecessor");
            let (left, predecessor) = mem::take(&mut node.left).withdraw_max();
            node.left = left;
            if let Some(value) = predecessor {
                node.value = value;
            }
            Self::Node(node)
        }
    }

    /// Removes the right-most node and hands back its value. The removed
    /// node has no right subtree, so its left subtree takes its place.
    fn withdraw_max(self) -> (Self, Option<T>) {
        match self {
            Self::Empty => (Self::Empty, None),
            Self::Node(mut node) => {
                if node.right.is_empty() {
                    let Node { value, left, .. } = *node;
                    (left, Some(value))
                } else {
                    let (right, max) = mem::take(&mut node.right).withdraw_max();
                    node.right = right;
                    (Self::Node(node), max)
                }
            }
        }
    }

    /// Withdraws a batch of values, with the same absent-element pre-scan as
    /// [`insert_all`](Self::insert_all): if any item is absent, nothing is
    /// withdrawn and `Ok(false)` is returned.
    ///
    /// Values are withdrawn in sequence; a value missing from the tree
    /// surfaces [`TreeError::NotFound`] without rolling back the withdrawals
    /// already performed.
    pub fn withdraw_all<I, V>(&mut self, values: I) -> Result<bool, TreeError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<T>>,
    {
        let mut batch = Vec::new();
        for value in values {
            match value.into() {
                Some(value) => batch.push(value),
                None => {
                    debug!("batch withdraw contains an absent element, withdrawing nothing");
                    return Ok(false);
                }
            }
        }

        for value in batch {
            self.withdraw(value)?;
        }
        Ok(true)
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert_value(value);
        }
        tree
    }
}
