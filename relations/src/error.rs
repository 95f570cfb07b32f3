//! Error type shared by every fallible relation operation.

use thiserror::Error;

/// Malformed input to a relation query.
///
/// A predicate that does not hold, or an extraction that finds nothing, is
/// never an error. Only inputs that make the question itself meaningless
/// are reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// An argument outside the domain of the operation (e.g. a non-positive
    /// number passed to divisor computation).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A node referenced by a query or a scope is not part of the relation.
    #[error("node {0} is not part of the relation")]
    UnknownNode(String),
}

impl RelationError {
    pub(crate) fn unknown_node(node: impl std::fmt::Display) -> Self {
        Self::UnknownNode(node.to_string())
    }
}
