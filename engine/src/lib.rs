//! abprune Engine - Game tree types and search
//!
//! This crate contains the arena game tree (`node`), the alpha-beta evaluator
//! and its full-width minimax reference (`search`), and the breadth-first
//! graph traversal exercise (`graph`).
//!
//! The engine performs no I/O; tree construction from user input lives in
//! `abprune-tree` and the command line in `abprune-cli`.

pub mod config;
pub mod graph;
pub mod node;
pub mod search;
pub mod test_tree;

pub use config::SearchConfig;
pub use node::{GameTree, Node, NodeId, TreeError};
pub use search::{AlphaBeta, Minimax, SearchError, SearchOutcome, SearchStats, TreeSearch};
