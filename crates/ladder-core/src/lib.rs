//! Ladder Core Library
//!
//! Word ladder search and weighted shortest paths. The search functions are
//! pure and work on in-memory data; dictionary and graph loaders are
//! separate constructors that the CLI calls.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod word;
