//! Tools command - show the tool definitions

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::tools::{self, ToolDefinition};
use clap::Args;
use serde_json::Value;

/// Arguments for the tools command
#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Print the compact JSON exactly as handed to an LLM
    #[arg(long)]
    pub raw: bool,
}

/// Human-readable summary of one tool
fn render_tool(def: &ToolDefinition) -> String {
    let mut out = format!("{}\n  {}\n", colors::label(def.name), def.description);
    for (name, spec) in &def.parameters {
        let required = if def.required.contains(name) {
            " (required)"
        } else {
            ""
        };
        out.push_str(&format!(
            "    {} {}{}: {}\n",
            name,
            colors::dim(&format!("<{}>", spec.kind)),
            required,
            spec.description
        ));
    }
    out
}

/// Render the tool table
pub fn render(raw: bool, format: OutputFormat) -> Result<String, serde_json::Error> {
    if raw {
        return Ok(tools::tool_definitions_json().to_string());
    }
    match format {
        OutputFormat::Human => Ok(tools::tool_definitions()
            .iter()
            .map(render_tool)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let value: Value = serde_json::from_str(tools::tool_definitions_json())?;
            serde_json::to_string_pretty(&value)
        }
    }
}

/// Execute the tools command
pub fn execute(args: ToolsArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render(args.raw, format)?);
    if args.raw || format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
