//! Indented text rendering of a game tree
//!
//! Shared nodes are printed under every parent, the same way the evaluator
//! walks them. The walk uses an explicit stack and stops at `max_depth`, so a
//! long chain neither overflows the call stack nor produces quadratic
//! indentation.

use abprune_engine::{GameTree, Node, NodeId};
use anyhow::{bail, Result};
use std::fmt::Write;

/// Render the tree from its root. `root_is_max` only affects the MAX/MIN labels.
///
/// Fails when a node lies more than `max_depth` edges below the root.
pub fn render_tree(tree: &GameTree, root_is_max: bool, max_depth: usize) -> Result<String> {
    let mut out = String::new();
    let Some(root) = tree.root() else {
        return Ok(out);
    };

    let mut stack: Vec<(NodeId, usize, bool)> = vec![(root, 0, root_is_max)];
    while let Some((id, depth, is_max)) = stack.pop() {
        if depth > max_depth {
            bail!("tree is deeper than {} levels, not printing it", max_depth);
        }
        let Some(node) = tree.get(id) else {
            continue;
        };
        let indent = "  ".repeat(depth);
        match node {
            Node::Leaf { value } => {
                writeln!(out, "{}Leaf: {}", indent, value)?;
            }
            Node::Internal { children } => {
                writeln!(
                    out,
                    "{}{} Node with {} children",
                    indent,
                    if is_max { "MAX" } else { "MIN" },
                    children.len()
                )?;
                // Reversed so the first child is popped first.
                stack.extend(children.iter().rev().map(|&c| (c, depth + 1, !is_max)));
            }
        }
    }
    Ok(out)
}
