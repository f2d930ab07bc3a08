//! `ls` tool: immediate children of a directory

use serde::Deserialize;
use std::collections::BTreeMap;

use super::definition::{ParameterSpec, ToolDefinition};
use crate::core::error::Result;
use crate::core::store::DocumentStore;

pub const NAME: &str = "ls";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LsArgs {
    /// Missing means the root
    #[serde(default)]
    pub path: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME,
        description: "List the contents of a directory. Returns immediate children: file names \
                      and subdirectory names (with trailing '/'). Use this to explore the \
                      document structure before grepping or reading.",
        parameters: BTreeMap::from([(
            "path",
            ParameterSpec::string(
                "Directory path to list, e.g. 'account' or 'billing/invoices'. \
                 Use empty string or '.' for root.",
            ),
        )]),
        required: vec!["path"],
    }
}

pub fn execute(store: &DocumentStore, args: LsArgs) -> Result<String> {
    Ok(serde_json::to_string(&store.ls(&args.path))?)
}
