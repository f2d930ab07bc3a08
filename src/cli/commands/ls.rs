//! Ls command - list a directory of the corpus

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::memex::Memex;
use clap::Args;

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Directory to list (empty or "." for the root)
    #[arg(default_value = "")]
    pub path: String,
}

/// Render directory entries, one per line
pub fn render(entries: &[String], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(entries
            .iter()
            .map(|entry| {
                if entry.ends_with('/') {
                    colors::directory(entry).to_string()
                } else {
                    entry.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => output::to_json(&entries),
    }
}

/// Execute the ls command
pub fn execute(
    args: LsArgs,
    memex: &Memex,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = memex.ls(&args.path);

    if entries.is_empty() {
        output::print_empty(&format!("Nothing under '{}'", args.path), format);
    }
    output::print_rendered(&render(&entries, format)?);

    Ok(())
}
