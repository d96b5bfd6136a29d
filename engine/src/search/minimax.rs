//! Plain minimax without pruning
//!
//! Visits every node reachable from the start node (shared nodes once per
//! parent). Used as the reference value for alpha-beta.

use super::{resolve, SearchError, SearchOutcome, SearchStats, TreeSearch};
use crate::config::SearchConfig;
use crate::node::{GameTree, Node, NodeId};
use tracing::debug;

/// Full-width minimax evaluator
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    /// Create an evaluator with the given depth limit and trace settings.
    pub fn new(config: SearchConfig) -> Self {
        Minimax { config }
    }

    /// Evaluate the subtree at `node`.
    pub fn evaluate(
        &self,
        tree: &GameTree,
        node: NodeId,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> Result<i32, SearchError> {
        self.minimax(tree, node, maximizing, 0, stats)
    }

    fn minimax(
        &self,
        tree: &GameTree,
        id: NodeId,
        maximizing: bool,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Result<i32, SearchError> {
        if depth > self.config.max_depth {
            return Err(SearchError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }

        let node = resolve(tree, id)?;
        stats.visit(id, node, self.config.record_trace);

        let children = match node {
            Node::Leaf { value } => return Ok(*value),
            Node::Internal { children } => children,
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for &child in children {
            let value = self.minimax(tree, child, !maximizing, depth + 1, stats)?;
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        Ok(best)
    }
}

impl TreeSearch for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&self, tree: &GameTree, maximizing: bool) -> Result<SearchOutcome, SearchError> {
        let root = tree.root().ok_or(SearchError::EmptyTree)?;
        let mut stats = SearchStats::default();
        let value = self.evaluate(tree, root, maximizing, &mut stats)?;

        debug!(
            value,
            nodes_visited = stats.nodes_visited,
            leaves = stats.leaves_evaluated,
            "minimax search finished"
        );
        Ok(SearchOutcome { value, stats })
    }
}
