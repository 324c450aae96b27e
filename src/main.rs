//! Ladder - word ladder and weighted shortest path CLI
//!
//! Finds the shortest word ladder between two dictionary words and the
//! cheapest paths through a weighted directed graph.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use ladder_core::error::LadderError;
use ladder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&cli, &e),
    }
}

/// clap fails before `Cli.format` exists, so a JSON request is read from
/// argv directly. Help and version output always go through clap.
fn report_parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !json_requested(env::args().skip(1)) {
        err.exit();
    }

    let usage = LadderError::UsageError(err.to_string().trim_end().to_string());
    eprintln!("{}", usage.to_json());
    exit_code(&usage)
}

/// Report a failed command on stderr.
///
/// A search that finds no ladder has already said so on stdout, so its
/// reason is printed without the `error:` prefix kept for bad input.
fn report_failure(cli: &Cli, e: &LadderError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", e.to_json()),
        _ if cli.quiet => {}
        _ if e.is_no_ladder() => eprintln!("{}", e),
        _ => eprintln!("error: {}", e),
    }
    exit_code(e)
}

fn exit_code(e: &LadderError) -> ExitCode {
    ExitCode::from(e.exit_code() as u8)
}

fn json_requested(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
