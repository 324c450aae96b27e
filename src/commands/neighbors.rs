//! `ladder neighbors` command

use crate::cli::{records_header, DictArgs, SearchArgs};
use crate::render;
use ladder_core::error::Result;
use ladder_core::word::neighbors;

use super::dispatch::CommandContext;

/// Execute the neighbors command
pub fn execute(
    ctx: &CommandContext,
    word: &str,
    dict_args: &DictArgs,
    search: &SearchArgs,
) -> Result<()> {
    let dict = ctx.load_dictionary(dict_args)?;
    let strategy = ctx.ladder_options(search).strategy;
    let word = ctx.normalize_word(dict_args, word);

    let found = neighbors(&word, &dict, strategy);

    render!(ctx.cli.format,
        json => {
            serde_json::json!({
                "word": word,
                "strategy": strategy.to_string(),
                "count": found.len(),
                "neighbors": found,
            })
        },
        human => {
            if found.is_empty() && !ctx.cli.quiet {
                println!("No neighbors of {} in the dictionary.", word);
            }
            for neighbor in &found {
                println!("{}", neighbor);
            }
        },
        records => {
            println!(
                "{} word={} strategy={} count={}",
                records_header("neighbors"),
                word,
                strategy,
                found.len()
            );
            for neighbor in &found {
                println!("N {}", neighbor);
            }
        }
    )
}
