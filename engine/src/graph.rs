//! Undirected graph with breadth-first traversal
//!
//! Vertices are numbered `1..=n`. Adjacency lists are sized to the input;
//! traversal allocates a visited flag per vertex, so callers reading `n` from
//! untrusted input go through `with_limit`.

use std::collections::{HashMap, VecDeque};
use thiserror::Error;
use tracing::trace;

/// Vertex identifier (1-based)
pub type Vertex = u32;

/// Default cap on the vertex count accepted by `Graph::with_limit`
pub const DEFAULT_MAX_VERTICES: u32 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is not in 1..={count}")]
    UnknownVertex { vertex: Vertex, count: u32 },

    #[error("{count} vertices exceeds the limit of {max}")]
    TooManyVertices { count: u32, max: u32 },
}

/// Undirected graph stored as vertex -> neighbours in insertion order
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertex_count: u32,
    adjacency: HashMap<Vertex, Vec<Vertex>>,
}

impl Graph {
    /// Create a graph with vertices `1..=vertex_count` and no edges
    pub fn with_vertices(vertex_count: u32) -> Self {
        Graph {
            vertex_count,
            adjacency: HashMap::new(),
        }
    }

    /// Like `with_vertices`, but rejects more than `max_vertices` vertices.
    pub fn with_limit(vertex_count: u32, max_vertices: u32) -> Result<Self, GraphError> {
        if vertex_count > max_vertices {
            return Err(GraphError::TooManyVertices {
                count: vertex_count,
                max: max_vertices,
            });
        }
        Ok(Self::with_vertices(vertex_count))
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    fn check(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex == 0 || vertex > self.vertex_count {
            return Err(GraphError::UnknownVertex {
                vertex,
                count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// Add an undirected edge. Parallel edges and self loops are kept as given.
    pub fn add_edge(&mut self, a: Vertex, b: Vertex) -> Result<(), GraphError> {
        self.check(a)?;
        self.check(b)?;
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        Ok(())
    }

    /// Neighbours of `vertex` in edge insertion order
    pub fn neighbours(&self, vertex: Vertex) -> &[Vertex] {
        self.adjacency.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Breadth-first visit order starting at `start`.
    pub fn bfs(&self, start: Vertex) -> Result<Vec<Vertex>, GraphError> {
        self.check(start)?;
        let mut visited = vec![false; self.vertex_count as usize + 1];
        let mut order = Vec::new();
        self.bfs_from(start, &mut visited, &mut order);
        Ok(order)
    }

    /// BFS from every not-yet-visited vertex in ascending order, so every
    /// component is covered.
    pub fn traverse_all(&self) -> Vec<Vertex> {
        let mut visited = vec![false; self.vertex_count as usize + 1];
        let mut order = Vec::with_capacity(self.vertex_count as usize);
        for start in 1..=self.vertex_count {
            if !visited[start as usize] {
                trace!(start, "starting new component");
                self.bfs_from(start, &mut visited, &mut order);
            }
        }
        order
    }

    fn bfs_from(&self, start: Vertex, visited: &mut [bool], order: &mut Vec<Vertex>) {
        let mut queue = VecDeque::from([start]);
        visited[start as usize] = true;

        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &next in self.neighbours(v) {
                if !visited[next as usize] {
                    visited[next as usize] = true;
                    queue.push_back(next);
                }
            }
        }
    }
}
