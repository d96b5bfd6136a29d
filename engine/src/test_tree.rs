//! Hardcoded and generated test trees
//!
//! Node IDs follow the builder's index scheme: internal nodes first (root at
//! 0), leaves after them.
//!
//! Pruning example (MAX root):
//!   0: Internal MAX  [1, 2]
//!   1: Internal MIN  [3, 4]
//!   2: Internal MIN  [5, 6]
//!   3: Leaf  3
//!   4: Leaf  5
//!   5: Leaf  2
//!   6: Leaf  9   <- never visited by alpha-beta
//!
//! Shared-leaf DAG:
//!   0: Internal  [1, 2]
//!   1: Internal  [3, 4]
//!   2: Internal  [3, 5]
//!   3: Leaf  5   (child of both 1 and 2)
//!   4: Leaf  8
//!   5: Leaf  1

use crate::node::{GameTree, Node, NodeId};

/// Second MIN child of the pruning example's root
pub const SECOND_MIN_NODE: NodeId = 2;

/// Leaf the pruning example's cutoff skips
pub const PRUNED_LEAF: NodeId = 6;

/// Leaf shared by two parents in the shared-leaf DAG
pub const SHARED_LEAF: NodeId = 3;

fn internal(children: &[NodeId]) -> Node {
    Node::Internal {
        children: children.to_vec(),
    }
}

fn leaf(value: i32) -> Node {
    Node::Leaf { value }
}

/// Build the 7-node pruning example.
pub fn build_pruning_example() -> GameTree {
    let nodes = vec![
        internal(&[1, 2]),
        internal(&[3, 4]),
        internal(&[5, 6]),
        leaf(3),
        leaf(5),
        leaf(2),
        leaf(9),
    ];
    GameTree::from_nodes(nodes, 0).expect("pruning example is well-formed")
}

/// Build the 6-node DAG where leaf 3 has two parents.
pub fn build_shared_leaf_tree() -> GameTree {
    let nodes = vec![
        internal(&[1, 2]),
        internal(&[SHARED_LEAF, 4]),
        internal(&[SHARED_LEAF, 5]),
        leaf(5),
        leaf(8),
        leaf(1),
    ];
    GameTree::from_nodes(nodes, 0).expect("shared-leaf tree is well-formed")
}

/// Simple LCG for deterministic leaf values
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = (self.state.wrapping_mul(1103515245).wrapping_add(12345)) & 0x7fffffff;
        self.state
    }

    /// Value in [-100, 100]
    fn next_value(&mut self) -> i32 {
        (self.next() % 201) as i32 - 100
    }

    /// Half the time one of the `i32` extremes or zero, otherwise [-1000, 1000]
    fn next_wide_value(&mut self) -> i32 {
        match self.next() % 8 {
            0 => i32::MIN,
            1 => i32::MAX,
            2 => i32::MIN + 1,
            3 => 0,
            _ => (self.next() % 2001) as i32 - 1000,
        }
    }
}

/// Build a complete tree with `branching` children per internal node and all
/// leaves at exactly `depth` edges below the root.
///
/// Nodes are laid out breadth-first, so node `i` has children
/// `i * branching + 1 ..= i * branching + branching`. `depth == 0` yields a
/// single leaf.
pub fn build_uniform_tree(branching: usize, depth: usize, seed: u64) -> GameTree {
    assert!(branching > 0, "branching factor must be positive");

    let mut internal_count = 0usize;
    let mut level_width = 1usize;
    for _ in 0..depth {
        internal_count += level_width;
        level_width *= branching;
    }
    let leaf_count = level_width;

    let mut rng = Lcg::new(seed);
    let mut nodes = Vec::with_capacity(internal_count + leaf_count);
    for i in 0..internal_count {
        let first = i * branching + 1;
        let children: Vec<NodeId> = (first..first + branching).map(|c| c as NodeId).collect();
        nodes.push(Node::Internal { children });
    }
    for _ in 0..leaf_count {
        nodes.push(leaf(rng.next_value()));
    }

    GameTree::from_nodes(nodes, 0).expect("uniform tree is well-formed")
}

/// Build a seeded DAG of `node_count` nodes with irregular shape.
///
/// Node 0 is the root and always internal (for `node_count > 1`); the last
/// node is always a leaf. Every other node is internal two times in three,
/// with 1 to 4 children drawn from higher indices, so subtrees are shared,
/// child lists may repeat an entry, leaves sit at mixed depths and some nodes
/// are unreachable. Leaf values include `i32::MIN` and `i32::MAX`.
pub fn build_random_dag(node_count: usize, seed: u64) -> GameTree {
    assert!(node_count > 0, "a tree needs at least one node");

    let mut rng = Lcg::new(seed);
    let mut nodes = Vec::with_capacity(node_count);
    for i in 0..node_count {
        let is_last = i + 1 == node_count;
        let is_internal = !is_last && (i == 0 || rng.next() % 3 != 0);
        if is_internal {
            let later = (node_count - 1 - i) as u64;
            let child_count = 1 + rng.next() % 4;
            let children: Vec<NodeId> = (0..child_count)
                .map(|_| (i as u64 + 1 + rng.next() % later) as NodeId)
                .collect();
            nodes.push(Node::Internal { children });
        } else {
            nodes.push(leaf(rng.next_wide_value()));
        }
    }

    GameTree::from_nodes(nodes, 0).expect("random DAG only points forward")
}
