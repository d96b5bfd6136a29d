//! Interactive alpha-beta session
//!
//! Protocol: root polarity (1 = MAX, 0 = MIN), internal count, leaf count,
//! leaf values, then for each internal node from the highest index down its
//! child count followed by that many child indices. An invalid child index is
//! re-prompted for that slot only.

use crate::config::MinimaxArgs;
use crate::console::Console;
use crate::render::render_tree;
use abprune_engine::{AlphaBeta, GameTree, Minimax, SearchConfig, TreeSearch};
use abprune_tree::{BuildError, BuilderLimits, TreeBuilder, TreeDescription};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// A built tree plus the polarity its root was declared with
#[derive(Debug)]
pub struct BuiltTree {
    pub root_is_max: bool,
    pub tree: GameTree,
}

/// Read the whole tree interactively, re-prompting for rejected child slots.
pub fn read_tree<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    limits: &BuilderLimits,
) -> Result<BuiltTree> {
    console.note("Building the game tree from user input...")?;

    console.prompt("\nIs the root a MAX (1) or MIN (0) node? ")?;
    let root_is_max = console.read_flag("root polarity")?;

    console.prompt("Enter the total number of internal nodes (non-leaf nodes): ")?;
    let internal = console.read_i64("internal node count")?;
    console.prompt("Enter the total number of leaf nodes: ")?;
    let leaves = console.read_i64("leaf node count")?;

    let mut builder = TreeBuilder::with_limits(internal, leaves, limits)?;

    console.note("\n--- Creating leaf nodes ---")?;
    while let Some(id) = builder.next_leaf() {
        console.prompt(&format!("Enter value for leaf node {}: ", id))?;
        let value = console.read_i32("leaf value")?;
        builder.push_leaf(value)?;
    }

    console.note("\n--- Creating internal nodes ---")?;
    while let Some(node) = builder.current_internal() {
        console.note(&format!("For internal node {}:", node))?;
        let child_count = read_child_count(console, &builder)?;

        let mut children = Vec::new();
        while children.len() < child_count {
            let slot = children.len();
            console.prompt(&format!("Enter child {} node ID: ", slot + 1))?;
            let child = console.read_i64("child node ID")?;
            match builder.check_child(slot, child) {
                Ok(_) => children.push(child),
                Err(err @ BuildError::InvalidChild { .. }) => {
                    debug!(%err, "rejected child reference");
                    console.say(
                        "Invalid node ID. Please enter a valid node ID that's already defined.",
                    )?;
                }
                Err(err) => return Err(err.into()),
            }
        }
        builder.push_internal(&children)?;
    }

    let tree = builder.finish()?;
    console.note("\nTree construction complete!")?;
    Ok(BuiltTree { root_is_max, tree })
}

/// Re-prompts on zero or negative counts; counts above `I + L` are fatal.
fn read_child_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    builder: &TreeBuilder,
) -> Result<usize> {
    loop {
        console.prompt("Enter number of children: ")?;
        let count = console.read_i64("child count")?;
        match builder.check_child_count(count) {
            Ok(count) => return Ok(count),
            Err(BuildError::EmptyChildren { .. }) => {
                console.say("An internal node needs at least one child.")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Load and build a JSON `TreeDescription`.
pub fn load_tree(path: &Path, limits: &BuilderLimits) -> Result<BuiltTree> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let description: TreeDescription = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let tree = abprune_tree::build_tree(&description, limits)
        .with_context(|| format!("invalid tree in {}", path.display()))?;
    info!(path = %path.display(), nodes = tree.len(), "loaded tree description");
    Ok(BuiltTree {
        root_is_max: description.root_is_max,
        tree,
    })
}

/// Run the minimax subcommand and return the root value.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, args: &MinimaxArgs) -> Result<i32> {
    console.note("Alpha-Beta Pruning Algorithm")?;
    console.note("===========================")?;

    let limits = BuilderLimits {
        max_nodes: args.max_nodes,
    };
    let built = match &args.file {
        Some(path) => {
            let built = load_tree(path, &limits)?;
            if args.print_tree {
                let rendered = render_tree(&built.tree, built.root_is_max, args.max_depth)?;
                console.say(rendered.trim_end())?;
            }
            built
        }
        None => {
            let built = read_tree(console, &limits)?;
            console.prompt("\nDo you want to see the tree structure? (y/n): ")?;
            if console.read_yes_no()? {
                console.note("\nTree Structure:")?;
                console.note("==============")?;
                console.prompt("Is the root a MAX node? (1 for yes, 0 for no): ")?;
                let label_max = console.read_flag("root polarity")?;
                let rendered = render_tree(&built.tree, label_max, args.max_depth)?;
                console.say(rendered.trim_end())?;
            }
            built
        }
    };

    let config = SearchConfig::default().with_max_depth(args.max_depth);
    let searcher: Box<dyn TreeSearch> = if args.full {
        Box::new(Minimax::new(config))
    } else {
        Box::new(AlphaBeta::new(config))
    };

    let outcome = searcher.search(&built.tree, built.root_is_max)?;
    info!(
        searcher = searcher.name(),
        value = outcome.value,
        nodes_visited = outcome.stats.nodes_visited,
        leaves = outcome.stats.leaves_evaluated,
        cutoffs = outcome.stats.cutoffs,
        distinct_nodes = built.tree.reachable().len(),
        "evaluation complete"
    );

    let label = if args.full {
        "Minimax"
    } else {
        "Alpha-Beta Pruning"
    };
    console.say(&format!("\nResult of {}: {}", label, outcome.value))?;
    Ok(outcome.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use abprune_engine::config::DEFAULT_MAX_DEPTH;
    use abprune_tree::DEFAULT_MAX_NODES;
    use std::io::Cursor;

    fn args() -> MinimaxArgs {
        MinimaxArgs {
            file: None,
            print_tree: false,
            full: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    fn run_session(input: &str, args: &MinimaxArgs) -> (Result<i32>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
        let result = run(&mut console, args);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    // root MAX, I=3, L=4, leaves 3 5 2 9, node 2 -> [5 6], node 1 -> [3 4], node 0 -> [1 2]
    const PRUNING_EXAMPLE: &str = "1\n3\n4\n3 5 2 9\n2 5 6\n2 3 4\n2 1 2\nn\n";

    #[test]
    fn test_pruning_example_session() {
        let (result, output) = run_session(PRUNING_EXAMPLE, &args());
        assert_eq!(result.unwrap(), 3);
        assert_eq!(output, "\nResult of Alpha-Beta Pruning: 3\n");
    }

    #[test]
    fn test_single_leaf_session() {
        for polarity in ["1", "0"] {
            let input = format!("{} 0 1 42 n", polarity);
            let (result, _) = run_session(&input, &args());
            assert_eq!(result.unwrap(), 42);
        }
    }

    #[test]
    fn test_invalid_child_is_reprompted() {
        // Node 0 first asks for child 5, which does not exist (indices 0..=4).
        let input = "1 2 3 10 20 30  1 2  2 5 1 4  n";
        let (result, output) = run_session(input, &args());
        // MAX over [node 1 = MIN[10], leaf 30]
        assert_eq!(result.unwrap(), 30);
        assert_eq!(
            output
                .matches("Invalid node ID. Please enter a valid node ID that's already defined.")
                .count(),
            1
        );
    }

    #[test]
    fn test_self_reference_is_reprompted() {
        let input = "1 1 2 7 8  2 0 1 2  n";
        let (result, output) = run_session(input, &args());
        assert_eq!(result.unwrap(), 8);
        assert!(output.contains("Invalid node ID"));
    }

    #[test]
    fn test_zero_child_count_is_reprompted() {
        let input = "0 1 2 4 6  0 2 1 2  n";
        let (result, output) = run_session(input, &args());
        assert_eq!(result.unwrap(), 4);
        assert!(output.contains("needs at least one child"));
    }

    #[test]
    fn test_absurd_child_count_is_fatal() {
        let (result, _) = run_session("1 1 1 5 9223372036854775807 1 n", &args());
        let err = result.unwrap_err();
        let build_err = err.downcast_ref::<BuildError>().unwrap();
        assert!(matches!(
            build_err,
            BuildError::TooManyChildren { node: 0, max: 2, .. }
        ));
    }

    #[test]
    fn test_child_count_up_to_node_total_is_accepted() {
        // Two slots for a tree of 2 nodes, both pointing at the single leaf.
        let (result, _) = run_session("1 1 1 5 2 1 1 n", &args());
        assert_eq!(result.unwrap(), 5);
    }

    #[test]
    fn test_min_root_polarity() {
        let input = PRUNING_EXAMPLE.replacen('1', "0", 1);
        let (result, _) = run_session(&input, &args());
        assert_eq!(result.unwrap(), 5);
    }

    #[test]
    fn test_print_tree_uses_label_polarity() {
        let input = PRUNING_EXAMPLE.replace("\nn\n", "\ny 0\n");
        let (result, output) = run_session(&input, &args());
        // Labels follow the second answer; the value follows the first.
        assert_eq!(result.unwrap(), 3);
        assert!(output.starts_with("MIN Node with 2 children\n"));
        assert!(output.ends_with("Result of Alpha-Beta Pruning: 3\n"));
    }

    #[test]
    fn test_print_tree_respects_depth_limit() {
        // Chain: node 0 -> 1 -> 2 -> leaf 3, three edges deep.
        let input = "1 3 1 7 1 3 1 2 1 1 y 1";
        let mut shallow = args();
        shallow.max_depth = 2;
        let (result, output) = run_session(input, &shallow);
        assert!(result.unwrap_err().to_string().contains("deeper than 2 levels"));
        assert!(!output.contains("Leaf: 7"));

        let (result, output) = run_session(input, &args());
        assert_eq!(result.unwrap(), 7);
        assert!(output.contains("      Leaf: 7\n"));
    }

    #[test]
    fn test_full_minimax_matches() {
        let mut full = args();
        full.full = true;
        let (result, output) = run_session(PRUNING_EXAMPLE, &full);
        assert_eq!(result.unwrap(), 3);
        assert!(output.contains("Result of Minimax: 3"));
    }

    #[test]
    fn test_negative_counts_are_fatal() {
        let (result, _) = run_session("1 -1 2", &args());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid tree specification"));
    }

    #[test]
    fn test_truncated_input_is_fatal() {
        let (result, _) = run_session("1 1 2 5", &args());
        assert!(result.is_err());
    }

    #[test]
    fn test_depth_limit_reported() {
        let mut shallow = args();
        shallow.max_depth = 1;
        let (result, _) = run_session(PRUNING_EXAMPLE, &shallow);
        assert!(result.unwrap_err().to_string().contains("maximum depth"));
    }

    #[test]
    fn test_load_tree_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(
            &path,
            r#"{
                "root_is_max": true,
                "internal_count": 3,
                "leaf_values": [3, 5, 2, 9],
                "internal_children": [[1, 2], [3, 4], [5, 6]]
            }"#,
        )
        .unwrap();

        let mut file_args = args();
        file_args.file = Some(path);
        file_args.print_tree = true;
        let (result, output) = run_session("", &file_args);
        assert_eq!(result.unwrap(), 3);
        assert!(output.starts_with("MAX Node with 2 children\n"));
    }

    #[test]
    fn test_load_tree_reports_invalid_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"internal_count": 1, "leaf_values": [1], "internal_children": [[5]]}"#,
        )
        .unwrap();

        let err = load_tree(&path, &BuilderLimits::default()).unwrap_err();
        let build_err = err.downcast_ref::<BuildError>().unwrap();
        assert!(build_err.is_recoverable());
    }

    #[test]
    fn test_load_tree_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_tree(&dir.path().join("nope.json"), &BuilderLimits::default()).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
