//! `ladder path` command

use std::path::Path;

use crate::cli::records_header;
use crate::render;
use ladder_core::bail_invalid;
use ladder_core::error::Result;
use ladder_core::graph::{shortest_paths, Graph, ShortestPaths, VertexId};

use super::dispatch::CommandContext;

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    graph_path: &Path,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<()> {
    let graph = Graph::load(graph_path)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "load_graph");

    if let Some(target) = target {
        if !graph.contains(target) {
            bail_invalid!(
                "target vertex",
                format!("{} (graph has {} vertices)", target, graph.num_vertices())
            );
        }
    }

    let result = shortest_paths(&graph, source)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "dijkstra");

    match target {
        Some(target) => output_single(ctx, &result, target),
        None => output_all(ctx, &result),
    }
}

fn join_path(path: &[VertexId]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn output_single(ctx: &CommandContext, result: &ShortestPaths, target: VertexId) -> Result<()> {
    let source = result.source;
    let distance = result.distance(target);
    let path = result.path_to(target).unwrap_or_default();

    render!(ctx.cli.format,
        json => {
            serde_json::json!({
                "source": source,
                "target": target,
                "reachable": distance.is_some(),
                "distance": distance,
                "path": path,
            })
        },
        human => {
            match distance {
                Some(total) => {
                    println!("{}", join_path(&path));
                    println!("Total cost is {}", total);
                }
                None => println!("No path from {} to {}", source, target),
            }
        },
        records => {
            match distance {
                Some(total) => println!(
                    "{} source={} target={} reachable=true distance={} path={}",
                    records_header("path"),
                    source,
                    target,
                    total,
                    path.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
                ),
                None => println!(
                    "{} source={} target={} reachable=false",
                    records_header("path"),
                    source,
                    target
                ),
            }
        }
    )
}

fn output_all(ctx: &CommandContext, result: &ShortestPaths) -> Result<()> {
    let vertices: Vec<VertexId> = (0..result.distances.len()).collect();

    render!(ctx.cli.format,
        json => {
            let rows: Vec<serde_json::Value> = vertices
                .iter()
                .map(|&v| {
                    serde_json::json!({
                        "vertex": v,
                        "distance": result.distance(v),
                        "previous": result.previous[v],
                        "path": result.path_to(v),
                    })
                })
                .collect();
            serde_json::json!({
                "source": result.source,
                "reachable": result.reachable_count(),
                "vertices": rows,
            })
        },
        human => {
            for &v in &vertices {
                match result.path_to(v) {
                    Some(path) => println!(
                        "{}: cost {} via {}",
                        v,
                        result.distances[v],
                        join_path(&path)
                    ),
                    None => println!("{}: unreachable", v),
                }
            }
        },
        records => {
            println!(
                "{} source={} vertices={} reachable={}",
                records_header("path"),
                result.source,
                vertices.len(),
                result.reachable_count()
            );
            for &v in &vertices {
                match result.distance(v) {
                    Some(d) => println!(
                        "V {} distance={} previous={}",
                        v,
                        d,
                        result.previous[v].map_or_else(|| "-".to_string(), |p| p.to_string())
                    ),
                    None => println!("V {} unreachable", v),
                }
            }
        }
    )
}
