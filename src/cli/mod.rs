//! CLI argument parsing for ladder
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod args;
pub mod format;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DictArgs, SearchArgs};
pub use output::{records_header, OutputFormat};

/// Ladder - word ladders and weighted shortest paths
#[derive(Parser, Debug)]
#[command(name = "ladder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `ladder_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ~/.config/ladder/config.toml)
    #[arg(long, global = true, env = "LADDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest word ladder between two words
    Ladder {
        /// Starting word (need not be in the dictionary)
        begin: String,

        /// Target word (must be in the dictionary)
        end: String,

        #[command(flatten)]
        dict: DictArgs,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// List the dictionary words one edit away from a word
    Neighbors {
        /// Word to expand
        word: String,

        #[command(flatten)]
        dict: DictArgs,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Check whether two words are one edit apart
    Adjacent {
        /// First word
        a: String,

        /// Second word
        b: String,
    },

    /// Check that a sequence of words forms a valid ladder
    Verify {
        /// Ladder words, first to last
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        #[command(flatten)]
        dict: DictArgs,
    },

    /// Write a configuration file with the default settings
    ///
    /// The file goes to `--config` when given, otherwise to the default
    /// location.
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Compute shortest paths through a weighted directed graph
    Path {
        /// Graph file: vertex count followed by `src dst weight` triples
        #[arg(long, short)]
        graph: PathBuf,

        /// Source vertex
        source: usize,

        /// Target vertex (omit to list every vertex)
        target: Option<usize>,
    },
}
