//! Integration tests for the `path` command

mod common;

use common::{ladder, write_graph, TRIANGLE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_path_to_target() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), TRIANGLE_GRAPH);

    ladder()
        .args(["path", "0", "2", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("0 1 2\nTotal cost is 3\n");
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), TRIANGLE_GRAPH);

    let output = ladder()
        .args(["--format", "json", "path", "0", "2", "-g"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reachable"], true);
    assert_eq!(json["distance"], 3);
    assert_eq!(json["path"], serde_json::json!([0, 1, 2]));
}

#[test]
fn test_path_unreachable_target() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), TRIANGLE_GRAPH);

    ladder()
        .args(["path", "0", "3", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("No path from 0 to 3\n");

    let output = ladder()
        .args(["--format", "json", "path", "0", "3", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reachable"], false);
    assert_eq!(json["distance"], serde_json::Value::Null);
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_path_all_vertices() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), TRIANGLE_GRAPH);

    ladder()
        .args(["path", "0", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("0: cost 0 via 0\n1: cost 1 via 0 1\n2: cost 3 via 0 1 2\n3: unreachable\n");
}

#[test]
fn test_path_all_vertices_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), TRIANGLE_GRAPH);

    let output = ladder()
        .args(["--format", "json", "path", "0", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reachable"], 3);
    let vertices = json["vertices"].as_array().unwrap();
    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices[2]["previous"], 1);
    assert_eq!(vertices[0]["previous"], serde_json::Value::Null);
    assert_eq!(vertices[3]["path"], serde_json::Value::Null);
}

#[test]
fn test_path_records() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), TRIANGLE_GRAPH);

    ladder()
        .args(["--format", "records", "path", "0", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H ladder=1 records=1 command=path source=0 vertices=4 reachable=3",
        ))
        .stdout(predicate::str::contains("V 2 distance=3 previous=1"))
        .stdout(predicate::str::contains("V 3 unreachable"));
}

#[test]
fn test_path_target_out_of_range() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), TRIANGLE_GRAPH);

    ladder()
        .args(["path", "0", "9", "--graph"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid target vertex"));
}

#[test]
fn test_path_source_out_of_range() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), TRIANGLE_GRAPH);

    ladder()
        .args(["path", "4", "--graph"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid source vertex"));
}

#[test]
fn test_path_malformed_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "3\n0 1 x\n");

    ladder()
        .args(["path", "0", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph at line 2"));
}

#[test]
fn test_path_oversized_vertex_count() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "99999999999999999\n0 1 1\n");

    ladder()
        .args(["path", "0", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph at line 1"))
        .stderr(predicate::str::contains("exceeds the limit"));
}

#[test]
fn test_path_incomplete_edge_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "3\n0 1 4\n1 2\n");

    let output = ladder()
        .args(["--format", "json", "path", "0", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "graph_format");
}

#[test]
fn test_path_missing_graph_file() {
    let dir = tempdir().unwrap();

    ladder()
        .args(["path", "0", "--graph"])
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph"));
}
