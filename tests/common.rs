use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for ladder that ignores any user config on this machine
pub fn ladder() -> Command {
    let mut cmd = cargo_bin_cmd!("ladder");
    cmd.env_remove("LADDER_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("LADDER_LOG")
        .env(
            "LADDER_CONFIG_DIR",
            std::env::temp_dir().join("ladder-tests-no-config"),
        );
    cmd
}

/// The classic hot/cog word list
#[allow(dead_code)]
pub const CLASSIC_WORDS: &str = "hot dot dog\nlot log cog\n";

#[allow(dead_code)]
pub fn write_words(dir: &Path, words: &str) -> PathBuf {
    let path = dir.join("words.txt");
    fs::write(&path, words).expect("write word list");
    path
}

/// A→B(1), B→C(2), A→C(10) as vertices 0, 1, 2, plus an isolated vertex 3
#[allow(dead_code)]
pub const TRIANGLE_GRAPH: &str = "4\n0 1 1\n1 2 2\n0 2 10\n";

#[allow(dead_code)]
pub fn write_graph(dir: &Path, graph: &str) -> PathBuf {
    let path = dir.join("graph.txt");
    fs::write(&path, graph).expect("write graph");
    path
}
