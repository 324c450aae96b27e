//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, DictArgs, SearchArgs};
use ladder_core::config::{Config, DictionaryConfig};
use ladder_core::error::Result;
use ladder_core::word::{Dictionary, LadderOptions};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the word list named on the command line, folding case unless
    /// `--keep-case` or the config says otherwise.
    pub fn load_dictionary(&self, args: &DictArgs) -> Result<Dictionary> {
        let dict_config = DictionaryConfig {
            lowercase: self.config.dictionary.lowercase && !args.keep_case,
        };
        let dict = Dictionary::load(&args.dict, &dict_config)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), words = dict.len(), "load_dictionary");
        Ok(dict)
    }

    /// Search options from config with command-line overrides applied
    pub fn ladder_options(&self, args: &SearchArgs) -> LadderOptions {
        let mut opts = self.config.search.to_options();
        if let Some(strategy) = args.strategy {
            opts.strategy = strategy;
        }
        if args.max_steps.is_some() {
            opts.max_steps = args.max_steps;
        }
        opts
    }

    /// Fold a command-line word the same way dictionary words are folded
    pub fn normalize_word(&self, args: &DictArgs, word: &str) -> String {
        if self.config.dictionary.lowercase && !args.keep_case {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("ladder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Word ladders and weighted shortest paths.");
        println!();
        println!("Run `ladder --help` for usage information.");
        Ok(())
    }
}
