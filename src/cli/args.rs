use super::parse::parse_strategy;
use clap::Args;
use ladder_core::word::NeighborStrategy;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct DictArgs {
    /// Word list file (whitespace-separated words)
    #[arg(long, short = 'd')]
    pub dict: PathBuf,

    /// Keep words exactly as written instead of lowercasing them
    #[arg(long)]
    pub keep_case: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Neighbor enumeration: scan or generate (overrides config)
    #[arg(long, value_parser = parse_strategy)]
    pub strategy: Option<NeighborStrategy>,

    /// Longest ladder to consider, in steps (overrides config)
    #[arg(long)]
    pub max_steps: Option<usize>,
}
