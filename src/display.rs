//! Tree rendering.
//!
//! Two formats are provided, both including node tags when present:
//!
//! - [`Display`](std::fmt::Display): the bracketed single-line form, where
//!   the empty tree is `∅` and a populated tree is
//!   `{value [(key, tag), ...], left, right}`.
//! - [`OrderedTree::render`]: a multi-line form with one line per subtree,
//!   indenting each level with `|  `.

use std::fmt;

use crate::tree::OrderedTree;

/// Symbol for the empty tree in both rendered forms.
pub(crate) const EMPTY_MARK: &str = "∅";

impl<T: fmt::Display> fmt::Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_MARK),
            Self::Node(node) => {
                write!(f, "{{{}", node.value)?;
                if !node.tags.is_empty() {
                    write!(f, " {}", node.tags)?;
                }
                write!(f, ", {}, {}}}", node.left, node.right)
            }
        }
    }
}

impl<T: fmt::Display> OrderedTree<T> {
    /// Renders the tree line by line, one line per node or empty subtree,
    /// left subtree before right, each level indented with `|  `.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("|  ");
        }

        match self {
            Self::Empty => out.push_str(EMPTY_MARK),
            Self::Node(node) => {
                out.push_str(&node.value.to_string());
                if !node.tags.is_empty() {
                    out.push(' ');
                    out.push_str(&node.tags.to_string());
                }
            }
        }
        out.push('\n');

        if let Self::Node(node) = self {
            node.left.render_into(out, depth + 1);
            node.right.render_into(out, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i32]) -> OrderedTree<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_tree_displays_as_empty_mark() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert_eq!(tree.to_string(), "∅");
        assert_eq!(tree.render(), "∅\n");
    }

    #[test]
    fn bracketed_form_nests_recursively() {
        let mut tree: OrderedTree<&str> = OrderedTree::new();
        tree.insert_all(["M", "E", "S"]);
        assert_eq!(tree.to_string(), "{M, {E, ∅, ∅}, {S, ∅, ∅}}");
    }

    #[test]
    fn bracketed_form_includes_tags() {
        let mut tree = tree_of(&[10, 5]);
        tree.set_tag("width", 1u64);
        assert_eq!(tree.to_string(), "{10 [(width, 1)], {5, ∅, ∅}, ∅}");
    }

    #[test]
    fn render_indents_each_level() {
        let mut tree: OrderedTree<&str> = OrderedTree::new();
        tree.insert_all(["M", "E", "S"]);

        let expected = "\
M
|  E
|  |  ∅
|  |  ∅
|  S
|  |  ∅
|  |  ∅
";
        assert_eq!(tree.render(), expected);
    }

    #[test]
    fn render_includes_tags() {
        let mut tree = tree_of(&[2, 1]);
        tree.tag_width();

        let expected = "\
2 [(width, 1)]
|  1 [(width, 2)]
|  |  ∅
|  |  ∅
|  ∅
";
        assert_eq!(tree.render(), expected);
    }
}
