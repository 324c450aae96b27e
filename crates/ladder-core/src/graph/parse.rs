//! Plain-text graph descriptions
//!
//! The format is a vertex count followed by `src dst weight` triples, all
//! separated by whitespace:
//!
//! ```text
//! 4
//! 0 1 5
//! 0 2 3
//! 2 1 1
//! ```

use std::fs;
use std::path::Path;

use super::types::{Graph, MAX_VERTICES};
use crate::bail_graph;
use crate::error::{LadderError, Result};

/// A whitespace-separated token with the line it came from
struct Token<'a> {
    line: usize,
    text: &'a str,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| {
            line.split_whitespace()
                .map(move |text| Token { line: i + 1, text })
        })
        .collect()
}

fn parse_number<T: std::str::FromStr>(token: &Token<'_>, what: &str) -> Result<T> {
    match token.text.parse::<T>() {
        Ok(value) => Ok(value),
        Err(_) => bail_graph!(token.line, "expected {}, found '{}'", what, token.text),
    }
}

impl Graph {
    /// Parse a graph description.
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = tokenize(text);

        let Some((count, rest)) = tokens.split_first() else {
            bail_graph!(1, "missing vertex count");
        };
        let num_vertices: usize = parse_number(count, "a vertex count")?;
        if num_vertices > MAX_VERTICES {
            bail_graph!(
                count.line,
                "vertex count {} exceeds the limit of {}",
                num_vertices,
                MAX_VERTICES
            );
        }
        let mut graph = match Graph::try_new(num_vertices) {
            Ok(graph) => graph,
            Err(e) => bail_graph!(count.line, "cannot allocate {} vertices: {}", num_vertices, e),
        };

        let mut edges = rest.chunks_exact(3);
        for triple in edges.by_ref() {
            let line = triple[0].line;
            let from: usize = parse_number(&triple[0], "a source vertex")?;
            let to: usize = parse_number(&triple[1], "a target vertex")?;
            let weight: u32 = parse_number(&triple[2], "a non-negative integer weight")?;

            graph
                .add_edge(from, to, weight)
                .map_err(|e| LadderError::graph_format(line, e))?;
        }

        if let Some(dangling) = edges.remainder().first() {
            bail_graph!(
                dangling.line,
                "incomplete edge, expected 'src dst weight'"
            );
        }

        Ok(graph)
    }

    /// Read a graph description from a file.
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| LadderError::io_operation("read graph", path.display(), e))?;
        let graph = Self::parse(&text)?;
        tracing::debug!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "graph loaded"
        );
        Ok(graph)
    }
}
