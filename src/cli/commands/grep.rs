//! Grep command - search every document for a pattern

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::types::GrepResult;
use crate::memex::Memex;
use clap::Args;

/// Arguments for the grep command
#[derive(Args, Debug)]
pub struct GrepArgs {
    /// Pattern to search for (plain text or regex, case-insensitive)
    pub pattern: String,

    /// Only search documents whose path matches this glob
    #[arg(long, short = 'g')]
    pub glob: Option<String>,
}

/// Render grep results
///
/// Human format is one `path:line: content` line per match.
pub fn render(results: &[GrepResult], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(results
            .iter()
            .map(|r| {
                format!(
                    "{}:{}: {}",
                    colors::file_path(&r.path),
                    colors::number(&r.line.to_string()),
                    r.content
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => output::to_json(&results),
    }
}

/// Execute the grep command
pub fn execute(
    args: GrepArgs,
    memex: &Memex,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let results = memex.grep(&args.pattern, args.glob.as_deref())?;

    if results.is_empty() {
        output::print_empty(&format!("No matches for '{}'", args.pattern), format);
    }
    output::print_rendered(&render(&results, format)?);

    Ok(())
}
