//! abprune Tree Builder - Game tree construction module
//!
//! This crate turns a structural description (node counts, leaf values and
//! per-node child lists) into a validated `GameTree` for the engine.
//!
//! Two entry points share the same rules: the incremental [`TreeBuilder`],
//! which an interactive front end drives one value at a time, and the pure
//! [`build_tree`], which takes a complete [`TreeDescription`].

pub mod builder;
pub mod description;
pub mod error;

pub use builder::{BuilderLimits, TreeBuilder, DEFAULT_MAX_NODES};
pub use description::{build_tree, TreeDescription};
pub use error::BuildError;
