//! Breadth-first traversal session
//!
//! Protocol: vertex count, edge count, then one `a b` pair per edge. Every
//! component is traversed, starting from the lowest unvisited vertex.

use crate::config::BfsArgs;
use crate::console::Console;
use abprune_engine::graph::{Graph, Vertex};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

/// Read the graph and print its traversal; returns the visit order.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    args: &BfsArgs,
) -> Result<Vec<Vertex>> {
    console.prompt("Enter number of vertices and edges: ")?;
    let vertex_count = console.read_u32("vertex count")?;
    let edge_count = console.read_u32("edge count")?;

    let mut graph = Graph::with_limit(vertex_count, args.max_vertices)?;
    console.note("Enter each edge (two vertices per line):")?;
    for i in 0..edge_count {
        let a = console.read_u32("edge endpoint")?;
        let b = console.read_u32("edge endpoint")?;
        graph
            .add_edge(a, b)
            .with_context(|| format!("edge {} ({} {})", i + 1, a, b))?;
    }

    let order = graph.traverse_all();
    info!(vertex_count, edge_count, visited = order.len(), "bfs complete");

    let rendered: Vec<String> = order.iter().map(Vertex::to_string).collect();
    console.say(&format!("BFS traversal: {}", rendered.join(" ")))?;
    Ok(order)
}
