//! Command-line configuration
//!
//! CLI arguments take highest priority, then `ABPRUNE_*` environment
//! variables, then built-in defaults.

use abprune_engine::config::DEFAULT_MAX_DEPTH;
use abprune_engine::graph::DEFAULT_MAX_VERTICES;
use abprune_tree::DEFAULT_MAX_NODES;
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "abprune", version)]
#[command(about = "Alpha-beta minimax over a user-built game tree, plus a BFS exercise")]
pub struct Config {
    /// Log level (trace, debug, info, warn, error); logs go to stderr
    #[arg(long, global = true, env = "ABPRUNE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Do not print prompts, only results and errors
    #[arg(long, global = true)]
    pub no_prompt: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a game tree and evaluate it with alpha-beta pruning
    Minimax(MinimaxArgs),
    /// Read an undirected graph and print its breadth-first traversal
    Bfs(BfsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MinimaxArgs {
    /// Load a JSON tree description instead of prompting
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the tree before evaluating (file mode; interactive mode asks)
    #[arg(long)]
    pub print_tree: bool,

    /// Evaluate with plain minimax instead of alpha-beta
    #[arg(long)]
    pub full: bool,

    /// Maximum search depth
    #[arg(long, env = "ABPRUNE_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of nodes (internal + leaf) accepted by the builder
    #[arg(long, env = "ABPRUNE_MAX_NODES", default_value_t = DEFAULT_MAX_NODES)]
    pub max_nodes: usize,
}

#[derive(Args, Debug, Clone)]
pub struct BfsArgs {
    /// Maximum number of vertices accepted from input
    #[arg(long, env = "ABPRUNE_MAX_VERTICES", default_value_t = DEFAULT_MAX_VERTICES)]
    pub max_vertices: u32,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        match &self.command {
            Command::Minimax(args) => {
                if args.max_depth == 0 {
                    return Err(anyhow!("max_depth must be greater than 0"));
                }
                if args.max_nodes == 0 {
                    return Err(anyhow!("max_nodes must be greater than 0"));
                }
            }
            Command::Bfs(args) => {
                if args.max_vertices == 0 {
                    return Err(anyhow!("max_vertices must be greater than 0"));
                }
            }
        }

        Ok(())
    }
}
