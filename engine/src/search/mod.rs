//! Minimax search over a `GameTree`
//!
//! Two evaluators share one outcome type: `AlphaBeta`, which prunes subtrees
//! that cannot change the result, and `Minimax`, which visits everything and
//! serves as the reference value.

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

use crate::node::{GameTree, Node, NodeId};
use thiserror::Error;

/// Errors that can occur during search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("cannot evaluate an empty tree")]
    EmptyTree,

    #[error("node {0} does not exist in the tree")]
    UnknownNode(NodeId),

    #[error("search exceeded the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes_visited: u64,
    /// Leaf values read
    pub leaves_evaluated: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`
    pub cutoffs: u64,
    /// Visit order, only filled when `SearchConfig::record_trace` is set
    pub trace: Vec<NodeId>,
}

impl SearchStats {
    pub(crate) fn visit(&mut self, id: NodeId, node: &Node, record_trace: bool) {
        self.nodes_visited += 1;
        if node.is_leaf() {
            self.leaves_evaluated += 1;
        }
        if record_trace {
            self.trace.push(id);
        }
    }

    /// Whether `id` was entered during the search (requires a recorded trace).
    pub fn was_visited(&self, id: NodeId) -> bool {
        self.trace.contains(&id)
    }
}

/// Result of searching from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Minimax value of the root
    pub value: i32,
    pub stats: SearchStats,
}

/// Common interface over the evaluators.
pub trait TreeSearch {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Evaluate the whole tree from its root with the given root polarity.
    fn search(&self, tree: &GameTree, maximizing: bool) -> Result<SearchOutcome, SearchError>;
}

/// Look up `id`, distinguishing an empty tree from a bad reference.
pub(crate) fn resolve(tree: &GameTree, id: NodeId) -> Result<&Node, SearchError> {
    if tree.is_empty() {
        return Err(SearchError::EmptyTree);
    }
    tree.get(id).ok_or(SearchError::UnknownNode(id))
}
