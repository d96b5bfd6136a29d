//! Minimax with alpha-beta pruning
//!
//! Alpha is the value the maximizing player is already guaranteed, beta the
//! value the minimizing player is already guaranteed. Once `beta <= alpha`
//! the remaining siblings cannot influence the parent and are skipped.
//! Equality cuts off as well, which matters for visit counts, not values.

use super::{resolve, SearchError, SearchOutcome, SearchStats, TreeSearch};
use crate::config::SearchConfig;
use crate::node::{GameTree, Node, NodeId};
use tracing::{debug, trace};

/// Alpha-beta evaluator.
///
/// Holds only configuration; the tree is borrowed immutably per call and all
/// counters live in the caller's `SearchStats`, so one instance can be reused
/// across trees.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta {
    config: SearchConfig,
}

impl AlphaBeta {
    /// Create an evaluator with the given depth limit and trace settings.
    pub fn new(config: SearchConfig) -> Self {
        AlphaBeta { config }
    }

    /// Configuration this evaluator was created with
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Evaluate the subtree at `node` inside the window `(alpha, beta)`.
    ///
    /// The root call uses `alpha = i32::MIN` and `beta = i32::MAX`.
    pub fn evaluate(
        &self,
        tree: &GameTree,
        node: NodeId,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchError> {
        let mut stats = SearchStats::default();
        self.evaluate_with_stats(tree, node, maximizing, alpha, beta, &mut stats)
    }

    /// Same as [`AlphaBeta::evaluate`], accumulating counters into `stats`.
    pub fn evaluate_with_stats(
        &self,
        tree: &GameTree,
        node: NodeId,
        maximizing: bool,
        alpha: i32,
        beta: i32,
        stats: &mut SearchStats,
    ) -> Result<i32, SearchError> {
        self.alpha_beta(tree, node, maximizing, alpha, beta, 0, stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &self,
        tree: &GameTree,
        id: NodeId,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
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
        for (i, &child) in children.iter().enumerate() {
            let value = self.alpha_beta(tree, child, !maximizing, alpha, beta, depth + 1, stats)?;
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if beta <= alpha {
                stats.cutoffs += 1;
                trace!(
                    node = id,
                    alpha,
                    beta,
                    skipped = children.len() - i - 1,
                    "{} cutoff",
                    if maximizing { "beta" } else { "alpha" }
                );
                break;
            }
        }

        Ok(best)
    }
}

impl TreeSearch for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(&self, tree: &GameTree, maximizing: bool) -> Result<SearchOutcome, SearchError> {
        let root = tree.root().ok_or(SearchError::EmptyTree)?;
        let mut stats = SearchStats::default();
        let value =
            self.evaluate_with_stats(tree, root, maximizing, i32::MIN, i32::MAX, &mut stats)?;

        debug!(
            value,
            nodes_visited = stats.nodes_visited,
            leaves = stats.leaves_evaluated,
            cutoffs = stats.cutoffs,
            "alpha-beta search finished"
        );
        Ok(SearchOutcome { value, stats })
    }
}
