//! Weighted shortest paths
//!
//! Provides the pieces of the shortest path engine:
//! - Adjacency-list graph with unsigned edge weights
//! - Plain-text graph loading
//! - Dijkstra single-source shortest paths and path extraction

pub mod dijkstra;
pub mod parse;
pub mod types;

pub use dijkstra::{extract_path, shortest_paths, ShortestPaths};
pub use types::{Distance, Edge, Graph, VertexId, INFINITY, MAX_VERTICES};
