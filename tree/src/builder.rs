//! Incremental, validated tree construction
//!
//! Index scheme: `[0, I)` are internal nodes, `[I, I+L)` are leaves, and the
//! index doubles as the arena `NodeId`. Leaves are supplied first, then
//! internal nodes from `I-1` down to `0`. A child reference is valid only if
//! a node already exists at that index, which rules out self references,
//! forward references and therefore cycles.

use crate::error::BuildError;
use abprune_engine::{GameTree, Node, NodeId};
use tracing::{debug, trace};

/// Default cap on `I + L`
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

/// Size limits applied when counts are declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderLimits {
    /// Largest accepted `I + L`
    pub max_nodes: usize,
}

impl Default for BuilderLimits {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// Builds a `GameTree` one node at a time.
///
/// Rejected input never changes the builder, so an interactive caller can
/// re-prompt for the offending value and carry on.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    internal_count: usize,
    leaf_count: usize,
    slots: Vec<Option<Node>>,
    leaves_pushed: usize,
    /// Internal node that `push_internal` fills next
    next_internal: Option<usize>,
}

impl TreeBuilder {
    /// Declare the node counts with default limits.
    pub fn new(internal: i64, leaves: i64) -> Result<Self, BuildError> {
        Self::with_limits(internal, leaves, &BuilderLimits::default())
    }

    /// Declare the node counts.
    ///
    /// Negative counts, a tree with no leaves, or more than
    /// `limits.max_nodes` nodes are rejected.
    pub fn with_limits(
        internal: i64,
        leaves: i64,
        limits: &BuilderLimits,
    ) -> Result<Self, BuildError> {
        let invalid = |reason: String| BuildError::InvalidCounts {
            internal,
            leaves,
            reason,
        };

        if internal < 0 || leaves < 0 {
            return Err(invalid("counts must not be negative".into()));
        }
        if leaves == 0 {
            return Err(invalid("at least one leaf is required".into()));
        }
        let max_nodes = limits.max_nodes.min(NodeId::MAX as usize);
        let total = internal.saturating_add(leaves);
        if total as u64 > max_nodes as u64 {
            return Err(invalid(format!("more than {} nodes", max_nodes)));
        }

        let internal_count = internal as usize;
        let leaf_count = leaves as usize;
        debug!(internal_count, leaf_count, "declared tree shape");

        Ok(TreeBuilder {
            internal_count,
            leaf_count,
            slots: vec![None; internal_count + leaf_count],
            leaves_pushed: 0,
            next_internal: internal_count.checked_sub(1),
        })
    }

    pub fn internal_count(&self) -> usize {
        self.internal_count
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Declared `I + L`
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Leaves still to be supplied
    pub fn pending_leaves(&self) -> usize {
        self.leaf_count - self.leaves_pushed
    }

    /// Index the next `push_leaf` call fills, if any
    pub fn next_leaf(&self) -> Option<NodeId> {
        (self.pending_leaves() > 0).then(|| (self.internal_count + self.leaves_pushed) as NodeId)
    }

    /// Internal node the next `push_internal` call builds.
    ///
    /// `None` while leaves are still pending or once every internal node exists.
    pub fn current_internal(&self) -> Option<NodeId> {
        if self.pending_leaves() > 0 {
            return None;
        }
        self.next_internal.map(|i| i as NodeId)
    }

    /// Add the next leaf and return its index.
    pub fn push_leaf(&mut self, value: i32) -> Result<NodeId, BuildError> {
        let id = self
            .next_leaf()
            .ok_or(BuildError::OutOfOrder("all leaves have already been supplied"))?;
        self.slots[id as usize] = Some(Node::Leaf { value });
        self.leaves_pushed += 1;
        trace!(id, value, "leaf created");
        Ok(id)
    }

    /// Validate one child reference for the current internal node.
    ///
    /// `slot` is the 0-based position in the child list and only feeds the
    /// error report.
    pub fn check_child(&self, slot: usize, child: i64) -> Result<NodeId, BuildError> {
        let node = self
            .current_internal()
            .ok_or(BuildError::OutOfOrder("no internal node is awaiting children"))?;

        let exists = usize::try_from(child)
            .ok()
            .and_then(|idx| self.slots.get(idx))
            .is_some_and(Option::is_some);
        if !exists {
            return Err(BuildError::InvalidChild { node, slot, child });
        }
        Ok(child as NodeId)
    }

    /// Validate a declared child count for the current internal node.
    ///
    /// Zero or negative counts are `EmptyChildren`. Counts above `I + L` are
    /// `TooManyChildren`; a longer list could only repeat children.
    pub fn check_child_count(&self, count: i64) -> Result<usize, BuildError> {
        let node = self
            .current_internal()
            .ok_or(BuildError::OutOfOrder("no internal node is awaiting children"))?;
        if count <= 0 {
            return Err(BuildError::EmptyChildren { node });
        }
        let max = self.node_count();
        match usize::try_from(count) {
            Ok(count) if count <= max => Ok(count),
            _ => Err(BuildError::TooManyChildren { node, count, max }),
        }
    }

    /// Build the current internal node from a complete child list.
    ///
    /// On error nothing is recorded; the first invalid slot is reported.
    pub fn push_internal(&mut self, children: &[i64]) -> Result<NodeId, BuildError> {
        let node = self
            .current_internal()
            .ok_or(BuildError::OutOfOrder("no internal node is awaiting children"))?;
        if children.is_empty() {
            return Err(BuildError::EmptyChildren { node });
        }

        let children = children
            .iter()
            .enumerate()
            .map(|(slot, &child)| self.check_child(slot, child))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(node, ?children, "internal node created");
        self.slots[node as usize] = Some(Node::Internal { children });
        self.next_internal = (node as usize).checked_sub(1);
        Ok(node)
    }

    /// Every leaf and internal node has been supplied
    pub fn is_complete(&self) -> bool {
        self.pending_leaves() == 0 && self.next_internal.is_none()
    }

    /// Finish construction; the node at index 0 becomes the root.
    pub fn finish(self) -> Result<GameTree, BuildError> {
        if !self.is_complete() {
            return Err(BuildError::Incomplete {
                pending_leaves: self.pending_leaves(),
                pending_internal: self.next_internal.map_or(0, |i| i + 1),
            });
        }

        let nodes = self
            .slots
            .into_iter()
            .collect::<Option<Vec<Node>>>()
            .ok_or(BuildError::Incomplete {
                pending_leaves: 0,
                pending_internal: 0,
            })?;
        let tree = GameTree::from_nodes(nodes, 0)?;
        debug!(nodes = tree.len(), depth = tree.depth(), "tree construction complete");
        Ok(tree)
    }
}
