//! abprune CLI - Command-line front end for the abprune engine
//!
//! `abprune minimax` builds a game tree from stdin (or a JSON file) and prints
//! its alpha-beta value; `abprune bfs` prints the breadth-first traversal of
//! an undirected graph read from stdin. Logs go to stderr so stdout carries
//! only prompts and results.

use anyhow::Result;
use clap::Parser;
use std::io;

mod bfs;
mod config;
mod console;
mod minimax;
mod render;

use crate::config::{Command, Config};
use crate::console::Console;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), !config.no_prompt);

    match &config.command {
        Command::Minimax(args) => {
            minimax::run(&mut console, args)?;
        }
        Command::Bfs(args) => {
            bfs::run(&mut console, args)?;
        }
    }

    Ok(())
}
