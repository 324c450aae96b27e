//! `ladder init` command

use crate::cli::records_header;
use crate::render;
use ladder_core::config::Config;
use ladder_core::error::{LadderError, Result};

use super::dispatch::CommandContext;

/// Execute the init command
pub fn execute(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = match &ctx.cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };

    if path.exists() && !force {
        return Err(LadderError::io_operation(
            "write config",
            path.display(),
            "file already exists (use --force to overwrite)",
        ));
    }

    ctx.config.save(&path)?;
    tracing::debug!(path = %path.display(), "config written");

    render!(ctx.cli.format,
        json => {
            serde_json::json!({
                "path": path.display().to_string(),
                "written": true,
            })
        },
        human => {
            if !ctx.cli.quiet {
                println!("Wrote {}", path.display());
            }
        },
        records => {
            println!("{} path={}", records_header("init"), path.display());
        }
    )
}
