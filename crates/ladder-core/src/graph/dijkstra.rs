use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use super::types::{Distance, Graph, VertexId, INFINITY};
use crate::bail_invalid;
use crate::error::Result;
use crate::trace_time;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub accumulated_cost: Distance,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Distance and predecessor labels from one source vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: VertexId,
    /// `INFINITY` for vertices the source cannot reach
    pub distances: Vec<Distance>,
    /// `None` for the source and for unreachable vertices
    pub previous: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    /// Shortest distance to `target`, `None` when unreachable
    pub fn distance(&self, target: VertexId) -> Option<Distance> {
        self.distances
            .get(target)
            .copied()
            .filter(|&d| d != INFINITY)
    }

    pub fn is_reachable(&self, target: VertexId) -> bool {
        self.distance(target).is_some()
    }

    /// Vertices on a shortest path from the source to `target`, both ends
    /// included. `None` when `target` is unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.is_reachable(target)
            .then(|| extract_path(&self.distances, &self.previous, target))
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != INFINITY).count()
    }
}

/// Single-source shortest paths with a lazy-deletion binary heap.
///
/// Stale heap entries are skipped when popped instead of being removed
/// when a shorter distance is found. Edge weights are unsigned, so the
/// first time a vertex is popped its distance is final.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn shortest_paths(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    let n = graph.num_vertices();
    if !graph.contains(source) {
        bail_invalid!(
            "source vertex",
            format!("{} (graph has {} vertices)", source, n)
        );
    }

    let start = Instant::now();
    let mut distances = vec![INFINITY; n];
    let mut previous: Vec<Option<VertexId>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut stale = 0usize;

    distances[source] = 0;
    heap.push(Reverse(HeapEntry {
        vertex: source,
        accumulated_cost: 0,
    }));

    while let Some(Reverse(HeapEntry {
        vertex: u,
        accumulated_cost,
    })) = heap.pop()
    {
        if finalized[u] {
            stale += 1;
            continue;
        }
        finalized[u] = true;

        for edge in graph.neighbors(u) {
            let candidate = accumulated_cost.saturating_add(Distance::from(edge.weight));
            if candidate < distances[edge.to] {
                distances[edge.to] = candidate;
                previous[edge.to] = Some(u);
                heap.push(Reverse(HeapEntry {
                    vertex: edge.to,
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    let result = ShortestPaths {
        source,
        distances,
        previous,
    };

    trace_time!(start, "dijkstra", stale = stale);
    tracing::debug!(
        reachable = result.reachable_count(),
        stale,
        "shortest paths computed"
    );

    Ok(result)
}

/// Walk predecessor links from `target` back to the source, then reverse.
///
/// The source is the vertex with no predecessor. An unreached or unknown
/// `target` gives an empty path.
pub fn extract_path(
    distances: &[Distance],
    previous: &[Option<VertexId>],
    target: VertexId,
) -> Vec<VertexId> {
    if distances.get(target).is_none_or(|&d| d == INFINITY) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(pred) = previous.get(current).copied().flatten() {
        path.push(pred);
        current = pred;
    }

    path.reverse();
    path
}
