//! Node definitions for the game tree
//!
//! This module defines the Node types that make up a two-player adversarial
//! game tree. Nodes live in a flat arena (`GameTree`) and reference their
//! children by index, so a node shared by several parents is stored once and
//! released once when the arena is dropped.

use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// Node ID type (index into flat array storage)
pub type NodeId = u32;

/// Represents a node in the game tree
///
/// Polarity (MAX/MIN) is not stored on the node. It alternates strictly with
/// depth, starting from the polarity the caller supplies for the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal position with a fixed utility
    Leaf {
        /// Utility from the maximizing player's perspective
        value: i32,
    },
    /// Position where a player chooses between children
    Internal {
        /// Child node IDs in evaluation order
        children: Vec<NodeId>,
    },
}

impl Node {
    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Check if this is an internal node
    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal { .. })
    }

    /// Get the leaf value (only defined for Leaf nodes)
    pub fn value(&self) -> Option<i32> {
        match self {
            Node::Leaf { value } => Some(*value),
            Node::Internal { .. } => None,
        }
    }

    /// Get child node IDs
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Internal { children } => children,
        }
    }
}

/// Structural problems rejected by [`GameTree::from_nodes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("root node {root} is out of range for a tree of {len} nodes")]
    RootOutOfRange { root: NodeId, len: usize },

    #[error("node {node} references child {child}, which does not exist")]
    DanglingChild { node: NodeId, child: NodeId },

    #[error("internal node {node} has no children")]
    EmptyChildren { node: NodeId },

    #[error("node {node} is reachable from itself")]
    Cycle { node: NodeId },
}

/// Game tree wrapper
///
/// Contains a flat array of nodes plus the root ID. Every non-empty tree has
/// passed the checks in `from_nodes`: children resolve, internal nodes are
/// non-empty and the structure is acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl GameTree {
    /// Create a new empty game tree
    pub fn new() -> Self {
        GameTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Create a tree consisting of a single leaf
    pub fn leaf(value: i32) -> Self {
        GameTree {
            nodes: vec![Node::Leaf { value }],
            root: Some(0),
        }
    }

    /// Validate a node arena and wrap it as a tree rooted at `root`.
    pub fn from_nodes(nodes: Vec<Node>, root: NodeId) -> Result<Self, TreeError> {
        let len = nodes.len();
        if root as usize >= len {
            return Err(TreeError::RootOutOfRange { root, len });
        }

        for (id, node) in nodes.iter().enumerate() {
            if let Node::Internal { children } = node {
                if children.is_empty() {
                    return Err(TreeError::EmptyChildren { node: id as NodeId });
                }
                if let Some(&child) = children.iter().find(|&&c| c as usize >= len) {
                    return Err(TreeError::DanglingChild {
                        node: id as NodeId,
                        child,
                    });
                }
            }
        }

        check_acyclic(&nodes)?;

        Ok(GameTree {
            nodes,
            root: Some(root),
        })
    }

    /// Root node ID (None for the empty tree)
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Root node (None for the empty tree)
    pub fn root_node(&self) -> Option<&Node> {
        self.root.and_then(|id| self.get(id))
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// All nodes in arena order, including any not reachable from the root
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distinct node IDs reachable from the root, in breadth-first order.
    ///
    /// A node shared by several parents is listed once.
    pub fn reachable(&self) -> Vec<NodeId> {
        let Some(root) = self.root else {
            return Vec::new();
        };

        let mut seen = HashSet::with_capacity(self.nodes.len());
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([root]);
        seen.insert(root);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for &child in self.nodes[id as usize].children() {
                if seen.insert(child) {
                    queue.push_back(child);
                }
            }
        }
        order
    }

    /// Length of the longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        // Longest path below each node, memoized so shared subtrees are walked once.
        let mut below: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            let idx = id as usize;
            if below[idx].is_some() {
                continue;
            }
            let children = self.nodes[idx].children();
            if expanded || children.is_empty() {
                let deepest = children
                    .iter()
                    .filter_map(|&c| below[c as usize])
                    .max()
                    .map_or(0, |d| d + 1);
                below[idx] = Some(deepest);
            } else {
                stack.push((id, true));
                stack.extend(children.iter().map(|&c| (c, false)));
            }
        }
        below[root as usize].unwrap_or(0)
    }
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterative three-colour DFS over the whole arena.
fn check_acyclic(nodes: &[Node]) -> Result<(), TreeError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unseen,
        OnPath,
        Done,
    }

    let mut marks = vec![Mark::Unseen; nodes.len()];
    for start in 0..nodes.len() {
        if marks[start] != Mark::Unseen {
            continue;
        }
        // (node, index of next child to visit)
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        marks[start] = Mark::OnPath;

        while let Some(frame) = stack.last_mut() {
            let (id, next) = *frame;
            let children = nodes[id].children();
            if next == children.len() {
                marks[id] = Mark::Done;
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let child = children[next] as usize;
            match marks[child] {
                Mark::OnPath => {
                    return Err(TreeError::Cycle {
                        node: child as NodeId,
                    })
                }
                Mark::Unseen => {
                    marks[child] = Mark::OnPath;
                    stack.push((child, 0));
                }
                Mark::Done => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal(children: &[NodeId]) -> Node {
        Node::Internal {
            children: children.to_vec(),
        }
    }

    #[test]
    fn test_leaf_accessors() {
        let leaf = Node::Leaf { value: -7 };
        assert!(leaf.is_leaf());
        assert!(!leaf.is_internal());
        assert_eq!(leaf.value(), Some(-7));
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn test_internal_accessors() {
        let node = internal(&[2, 1]);
        assert!(node.is_internal());
        assert_eq!(node.value(), None);
        assert_eq!(node.children(), &[2, 1]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = GameTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert!(tree.root_node().is_none());
        assert!(tree.reachable().is_empty());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = GameTree::leaf(42);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node().and_then(Node::value), Some(42));
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_from_nodes_rejects_bad_root() {
        let err = GameTree::from_nodes(vec![Node::Leaf { value: 1 }], 3).unwrap_err();
        assert_eq!(err, TreeError::RootOutOfRange { root: 3, len: 1 });

        let err = GameTree::from_nodes(vec![], 0).unwrap_err();
        assert_eq!(err, TreeError::RootOutOfRange { root: 0, len: 0 });
    }

    #[test]
    fn test_from_nodes_rejects_dangling_child() {
        let nodes = vec![internal(&[1, 5]), Node::Leaf { value: 1 }];
        let err = GameTree::from_nodes(nodes, 0).unwrap_err();
        assert_eq!(err, TreeError::DanglingChild { node: 0, child: 5 });
    }

    #[test]
    fn test_from_nodes_rejects_empty_internal() {
        let nodes = vec![internal(&[1]), internal(&[])];
        let err = GameTree::from_nodes(nodes, 0).unwrap_err();
        assert_eq!(err, TreeError::EmptyChildren { node: 1 });
    }

    #[test]
    fn test_from_nodes_rejects_self_reference() {
        let nodes = vec![internal(&[0])];
        let err = GameTree::from_nodes(nodes, 0).unwrap_err();
        assert_eq!(err, TreeError::Cycle { node: 0 });
    }

    #[test]
    fn test_from_nodes_rejects_longer_cycle() {
        // 0 -> 1 -> 2 -> 0
        let nodes = vec![internal(&[1]), internal(&[2]), internal(&[0, 3]), Node::Leaf { value: 0 }];
        assert!(matches!(
            GameTree::from_nodes(nodes, 0),
            Err(TreeError::Cycle { .. })
        ));
    }

    #[test]
    fn test_shared_child_is_not_a_cycle() {
        // 0 -> {1, 2}, 1 -> {3}, 2 -> {3}
        let nodes = vec![
            internal(&[1, 2]),
            internal(&[3]),
            internal(&[3]),
            Node::Leaf { value: 9 },
        ];
        let tree = GameTree::from_nodes(nodes, 0).unwrap();
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_reachable_visits_shared_node_once() {
        // Leaf 3 is shared by internal nodes 1 and 2.
        let nodes = vec![
            internal(&[1, 2]),
            internal(&[3, 4]),
            internal(&[3, 5]),
            Node::Leaf { value: 1 },
            Node::Leaf { value: 2 },
            Node::Leaf { value: 3 },
        ];
        let tree = GameTree::from_nodes(nodes, 0).unwrap();
        let reachable = tree.reachable();
        assert_eq!(reachable, vec![0, 1, 2, 3, 4, 5]);

        let distinct: HashSet<NodeId> = reachable.iter().copied().collect();
        assert_eq!(distinct.len(), reachable.len());
    }

    #[test]
    fn test_reachable_skips_orphans() {
        let nodes = vec![
            internal(&[2]),
            Node::Leaf { value: 10 },
            Node::Leaf { value: 20 },
        ];
        let tree = GameTree::from_nodes(nodes, 0).unwrap();
        assert_eq!(tree.reachable(), vec![0, 2]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_depth_uses_longest_branch() {
        // 0 -> {1, 4}, 1 -> {2}, 2 -> {3}
        let nodes = vec![
            internal(&[1, 4]),
            internal(&[2]),
            internal(&[3]),
            Node::Leaf { value: 0 },
            Node::Leaf { value: 0 },
        ];
        let tree = GameTree::from_nodes(nodes, 0).unwrap();
        assert_eq!(tree.depth(), 3);
    }
}
