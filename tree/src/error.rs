//! Builder error taxonomy

use abprune_engine::{NodeId, TreeError};
use thiserror::Error;

/// Errors raised while turning a structural description into a `GameTree`.
///
/// Only `InvalidChild` is recoverable: the rejected slot can be resupplied
/// and the builder state is unchanged. Everything else is fatal for the build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invalid tree specification ({internal} internal, {leaves} leaf nodes): {reason}")]
    InvalidCounts {
        internal: i64,
        leaves: i64,
        reason: String,
    },

    #[error("invalid child reference {child} in slot {slot} of internal node {node}")]
    InvalidChild { node: NodeId, slot: usize, child: i64 },

    #[error("internal node {node} needs at least one child")]
    EmptyChildren { node: NodeId },

    #[error("internal node {node} cannot have {count} children (at most {max})")]
    TooManyChildren { node: NodeId, count: i64, max: usize },

    #[error("expected {expected} child lists, got {actual}")]
    ChildListMismatch { expected: usize, actual: usize },

    #[error("{0}")]
    OutOfOrder(&'static str),

    #[error("tree is incomplete: {pending_leaves} leaves and {pending_internal} internal nodes missing")]
    Incomplete {
        pending_leaves: usize,
        pending_internal: usize,
    },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl BuildError {
    /// Whether the caller can fix this by resupplying a single child slot
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BuildError::InvalidChild { .. })
    }
}
