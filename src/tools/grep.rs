//! `grep` tool: pattern search across every document

use serde::Deserialize;
use std::collections::BTreeMap;

use super::definition::{ParameterSpec, ToolDefinition};
use crate::core::error::Result;
use crate::core::search::QueryEngine;
use crate::core::store::DocumentStore;

pub const NAME: &str = "grep";

#[derive(Debug, Clone, Deserialize)]
pub struct GrepArgs {
    pub pattern: String,
    #[serde(default)]
    pub glob: Option<String>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME,
        description: "Search for a pattern across all documents. Returns matching file paths, \
                      line numbers, and content. Use this to find relevant documents before \
                      reading them.",
        parameters: BTreeMap::from([
            (
                "pattern",
                ParameterSpec::string("Search pattern (supports regex)"),
            ),
            (
                "glob",
                ParameterSpec::string("Optional file pattern filter, e.g. 'billing/**/*.md'"),
            ),
        ]),
        required: vec!["pattern"],
    }
}

/// Run the search and render the hits as a JSON array
pub fn execute(store: &DocumentStore, args: GrepArgs) -> Result<String> {
    let results = QueryEngine::new(store).grep(&args.pattern, args.glob.as_deref())?;
    Ok(serde_json::to_string(&results)?)
}
