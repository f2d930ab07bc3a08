//! Call command - invoke a tool by name

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::memex::Memex;
use clap::Args;

/// Arguments for the call command
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Tool name (grep, read or ls)
    pub name: String,

    /// JSON argument object, e.g. '{"pattern": "refund"}'
    #[arg(default_value = "{}")]
    pub args: String,
}

/// Execute the call command
///
/// The tool's string result is printed as is in both formats.
pub fn execute(
    args: CallArgs,
    memex: &Memex,
    _format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = memex.call(&args.name, &args.args)?;
    output::print_rendered(&result);
    Ok(())
}
