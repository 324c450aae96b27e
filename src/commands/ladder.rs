//! `ladder ladder` command

use crate::cli::{records_header, DictArgs, SearchArgs};
use crate::render;
use ladder_core::error::{LadderError, Result};
use ladder_core::word::{generate_word_ladder_with, Ladder};

use super::dispatch::CommandContext;

/// Execute the ladder command
pub fn execute(
    ctx: &CommandContext,
    begin: &str,
    end: &str,
    dict_args: &DictArgs,
    search: &SearchArgs,
) -> Result<()> {
    let dict = ctx.load_dictionary(dict_args)?;
    let opts = ctx.ladder_options(search);
    let begin = ctx.normalize_word(dict_args, begin);
    let end = ctx.normalize_word(dict_args, end);

    match generate_word_ladder_with(&begin, &end, &dict, &opts) {
        Ok(ladder) => {
            tracing::debug!(elapsed = ?ctx.start.elapsed(), steps = ladder.steps(), "search");
            output_found(ctx, &ladder)
        }
        Err(e) if e.is_no_ladder() => {
            output_not_found(ctx, &begin, &end, &e)?;
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn output_found(ctx: &CommandContext, ladder: &Ladder) -> Result<()> {
    render!(ctx.cli.format,
        json => {
            serde_json::json!({
                "begin": ladder.begin(),
                "end": ladder.end(),
                "found": true,
                "steps": ladder.steps(),
                "words": ladder,
            })
        },
        human => {
            println!("Word ladder found: {}", ladder.words().join(" "));
            if !ctx.cli.quiet {
                println!("Steps: {}", ladder.steps());
            }
        },
        records => {
            println!(
                "{} begin={} end={} found=true steps={}",
                records_header("ladder"),
                ladder.begin(),
                ladder.end(),
                ladder.steps()
            );
            for (i, word) in ladder.words().iter().enumerate() {
                println!("W {} {}", i, word);
            }
        }
    )
}

fn output_not_found(ctx: &CommandContext, begin: &str, end: &str, err: &LadderError) -> Result<()> {
    render!(ctx.cli.format,
        json => {
            serde_json::json!({
                "begin": begin,
                "end": end,
                "found": false,
                "reason": err.error_type(),
                "words": [],
            })
        },
        human => {
            println!("No word ladder found.");
        },
        records => {
            println!(
                "{} begin={} end={} found=false reason={}",
                records_header("ladder"),
                begin,
                end,
                err.error_type()
            );
        }
    )
}
