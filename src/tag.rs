//! Per-node tag storage.
//!
//! Tags are string-keyed annotations attached to nodes by the traversal
//! passes in [`crate::traverse`], or directly by callers. They carry no
//! ordering meaning: the search invariant of the tree is defined entirely
//! by node values, and every tagging pass is free to overwrite whatever a
//! previous pass left behind.

use std::collections::BTreeMap;
use std::fmt;

/// Tag key assigned by the reversed in-order pair collection pass.
pub const DESCEND: &str = "descend";

/// Tag key assigned by root path matching.
pub const PATH: &str = "path";

/// Tag key assigned by breadth-first position tagging.
pub const WIDTH: &str = "width";

/// A value attached to a node under a tag key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// A numeric annotation, such as a traversal position.
    Int(u64),
    /// A free-form text annotation.
    Text(String),
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Int(n) => write!(f, "{n}"),
            TagValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TagValue {
    fn from(value: u64) -> Self {
        TagValue::Int(value)
    }
}

impl From<usize> for TagValue {
    fn from(value: usize) -> Self {
        TagValue::Int(value as u64)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

/// The tag store owned by each node.
///
/// Keys are kept in a [`BTreeMap`] so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    entries: BTreeMap<String, TagValue>,
}

impl Tags {
    /// Creates an empty tag store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a tag, returning the previous value for the key if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Option<TagValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Looks up a tag by key.
    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.entries.get(key)
    }

    /// Removes a tag, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<TagValue> {
        self.entries.remove(key)
    }

    /// Drops every tag whose key is not in `keep`.
    pub fn retain_keys(&mut self, keep: &[&str]) {
        self.entries.retain(|key, _| keep.contains(&key.as_str()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Renders the store as `[(key, value), ...]` in key order.
impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({key}, {value})")?;
        }
        f.write_str("]")
    }
}
