//! Rendering a command result in the `--format` the user picked

/// Print one command result.
///
/// The `json` arm evaluates to a `serde_json::Value`, printed pretty on
/// stdout. The `human` and `records` arms print for themselves. Expands to
/// `Ok(())`, so it can close a command function returning `Result<()>`.
///
/// ```rust,ignore
/// render!(ctx.cli.format,
///     json => serde_json::json!({ "adjacent": adjacent }),
///     human => { println!("{}", adjacent); },
///     records => { println!("{} adjacent={}", records_header("adjacent"), adjacent); }
/// )
/// ```
#[macro_export]
macro_rules! render {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {{
        match $format {
            $crate::cli::OutputFormat::Json => {
                let value: serde_json::Value = $json;
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            $crate::cli::OutputFormat::Human => $human,
            $crate::cli::OutputFormat::Records => $records,
        }
        Ok(())
    }};
}
