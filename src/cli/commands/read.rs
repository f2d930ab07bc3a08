//! Read command - print a document with line numbers

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::memex::Memex;
use clap::Args;
use serde::Serialize;

/// Arguments for the read command
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Document path relative to the corpus root
    pub path: String,

    /// First line to print (1-indexed)
    #[arg(long, short = 'o')]
    pub offset: Option<usize>,

    /// Number of lines to print (at most 2000)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// JSON shape of a read
#[derive(Debug, Serialize)]
pub struct ReadOutput<'a> {
    pub path: &'a str,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub text: &'a str,
}

/// Execute the read command
pub fn execute(
    args: ReadArgs,
    memex: &Memex,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = memex.read(&args.path, args.offset, args.limit)?;

    match format {
        OutputFormat::Human => {
            if text.is_empty() {
                output::print_empty(&format!("No lines in range for '{}'", args.path), format);
            }
            output::print_rendered(&text);
        }
        OutputFormat::Json => {
            let out = ReadOutput {
                path: &args.path,
                offset: args.offset,
                limit: args.limit,
                text: &text,
            };
            println!("{}", output::to_json(&out)?);
        }
    }

    Ok(())
}
