//! `ladder adjacent` command

use crate::cli::records_header;
use crate::render;
use ladder_core::error::Result;
use ladder_core::word::is_adjacent;

use super::dispatch::CommandContext;

/// Execute the adjacent command
pub fn execute(ctx: &CommandContext, a: &str, b: &str) -> Result<()> {
    let adjacent = is_adjacent(a, b);

    render!(ctx.cli.format,
        json => {
            serde_json::json!({
                "a": a,
                "b": b,
                "adjacent": adjacent,
            })
        },
        human => {
            if adjacent {
                println!("{} and {} are adjacent", a, b);
            } else {
                println!("{} and {} are not adjacent", a, b);
            }
        },
        records => {
            println!(
                "{} a={} b={} adjacent={}",
                records_header("adjacent"),
                a,
                b,
                adjacent
            );
        }
    )
}
