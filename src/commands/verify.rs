//! `ladder verify` command

use crate::cli::{records_header, DictArgs};
use crate::render;
use ladder_core::error::Result;
use ladder_core::word::Ladder;

use super::dispatch::CommandContext;

/// Execute the verify command
pub fn execute(ctx: &CommandContext, words: &[String], dict_args: &DictArgs) -> Result<()> {
    let dict = ctx.load_dictionary(dict_args)?;
    let words: Vec<String> = words
        .iter()
        .map(|w| ctx.normalize_word(dict_args, w))
        .collect();

    let ladder = Ladder::from_words(words, &dict)?;

    render!(ctx.cli.format,
        json => {
            serde_json::json!({
                "valid": true,
                "steps": ladder.steps(),
                "words": ladder,
            })
        },
        human => {
            println!(
                "Valid ladder: {} ({} steps)",
                ladder.words().join(" "),
                ladder.steps()
            );
        },
        records => {
            println!(
                "{} valid=true steps={}",
                records_header("verify"),
                ladder.steps()
            );
        }
    )
}
