/// Errors surfaced by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The requested element or subtree does not exist in the tree.
    #[error("element not found in tree")]
    NotFound,

    /// The caller supplied an absent element or a malformed path directive.
    #[error("invalid argument")]
    InvalidArgument,
}
