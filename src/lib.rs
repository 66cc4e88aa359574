//! # Tanoak
//!
//! Ordered binary search trees with node tagging and traversal queries.
//!
//! ## Overview
//!
//! Tanoak provides [`OrderedTree`], a recursive binary search tree where the
//! empty tree is itself a tree value rather than a null handle. On top of
//! the usual insertion, withdrawal, and ascending iteration, every node
//! carries a string-keyed tag store that the traversal passes use to record
//! positions: breadth-first order, reversed in-order visit order, and
//! root-path depth. Subtrees can be addressed structurally with `'0'`/`'1'`
//! descend directives, and trees render both as a bracketed single line and
//! as an indented multi-line listing.

mod display;
mod error;
mod iterator;
mod path;
mod traverse;
mod tree;

pub mod tag;


pub use error::TreeError;
pub use iterator::InorderIter;
pub use path::Direction;
pub use tag::{TagValue, Tags};
pub use tree::{Node, OrderedTree};

/// A 1-based position recorded by the tagging traversals.
pub type TagPosition = u64;
