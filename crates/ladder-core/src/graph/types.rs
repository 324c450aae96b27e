use std::collections::TryReserveError;

use serde::Serialize;

use crate::bail_invalid;
use crate::error::Result;

/// Index of a vertex, `0..num_vertices`
pub type VertexId = usize;

/// Accumulated path cost
pub type Distance = u64;

/// Distance of a vertex the search never reached
pub const INFINITY: Distance = Distance::MAX;

/// Most vertices a graph description may declare
pub const MAX_VERTICES: usize = 1 << 24;

/// Outgoing edge of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: VertexId,
    pub weight: u32,
}

/// A directed, weighted graph stored as an adjacency list.
///
/// Weights are unsigned, which is what Dijkstra needs to be correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
}

impl Graph {
    /// A graph with `num_vertices` vertices and no edges
    pub fn new(num_vertices: usize) -> Self {
        Graph {
            adj: vec![Vec::new(); num_vertices],
        }
    }

    /// Like [`Graph::new`], but an allocation the system cannot satisfy is
    /// returned as an error instead of aborting.
    pub fn try_new(num_vertices: usize) -> std::result::Result<Self, TryReserveError> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(num_vertices)?;
        adj.resize_with(num_vertices, Vec::new);
        Ok(Graph { adj })
    }

    /// Append an edge to `from`'s outgoing list.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: u32) -> Result<()> {
        let n = self.num_vertices();
        if from >= n {
            bail_invalid!("edge source", format!("{} (graph has {} vertices)", from, n));
        }
        if to >= n {
            bail_invalid!("edge target", format!("{} (graph has {} vertices)", to, n));
        }
        self.adj[from].push(Edge { to, weight });
        Ok(())
    }

    /// Outgoing edges of `u`, in insertion order
    pub fn neighbors(&self, u: VertexId) -> &[Edge] {
        self.adj.get(u).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.adj.len()
    }
}
