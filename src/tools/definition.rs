//! Tool descriptors handed to an LLM tool-use loop

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{grep, ls, read};

/// One parameter of a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    /// JSON type name ("string", "number")
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

impl ParameterSpec {
    pub const fn string(description: &'static str) -> Self {
        Self {
            kind: "string",
            description,
        }
    }

    pub const fn number(description: &'static str) -> Self {
        Self {
            kind: "number",
            description,
        }
    }
}

/// Descriptor for one tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: BTreeMap<&'static str, ParameterSpec>,
    pub required: Vec<&'static str>,
}

/// Every tool, in the order grep, read, ls
static TOOL_DEFINITIONS: Lazy<Vec<ToolDefinition>> =
    Lazy::new(|| vec![grep::definition(), read::definition(), ls::definition()]);

/// Pre-serialized form of [`TOOL_DEFINITIONS`]
static TOOL_DEFINITIONS_JSON: Lazy<String> = Lazy::new(|| {
    serde_json::to_string(&*TOOL_DEFINITIONS).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize tool definitions: {}", e);
        "[]".to_string()
    })
});

pub fn tool_definitions() -> &'static [ToolDefinition] {
    &TOOL_DEFINITIONS
}

pub fn tool_definitions_json() -> &'static str {
    &TOOL_DEFINITIONS_JSON
}
