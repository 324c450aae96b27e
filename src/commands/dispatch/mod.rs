//! Command dispatch logic for ladder

use std::time::Instant;

use crate::cli::{Cli, Commands};
use ladder_core::config::Config;
use ladder_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

use super::{adjacent, init, ladder, neighbors, path, verify};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // `init` creates the file the other commands read
    let config = match &cli.command {
        Some(Commands::Init { .. }) => Config::default(),
        _ => Config::resolve(cli.config.as_deref())?,
    };

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Ladder {
                begin,
                end,
                dict,
                search,
            } => ladder::execute(ctx, begin, end, dict, search),
            Commands::Neighbors { word, dict, search } => {
                neighbors::execute(ctx, word, dict, search)
            }
            Commands::Adjacent { a, b } => adjacent::execute(ctx, a, b),
            Commands::Verify { words, dict } => verify::execute(ctx, words, dict),
            Commands::Init { force } => init::execute(ctx, *force),
            Commands::Path {
                graph,
                source,
                target,
            } => path::execute(ctx, graph, *source, *target),
        }
    }
}
