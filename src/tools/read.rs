//! `read` tool: line-numbered document text

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use super::definition::{ParameterSpec, ToolDefinition};
use crate::core::error::Result;
use crate::core::store::DocumentStore;

pub const NAME: &str = "read";

#[derive(Debug, Clone, Deserialize)]
pub struct ReadArgs {
    pub path: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub offset: Option<usize>,
    #[serde(default, deserialize_with = "whole_number")]
    pub limit: Option<usize>,
}

/// JSON numbers carry no integer type, so `2.0` is accepted as `2`
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(n) = number.as_u64() {
        return usize::try_from(n).map(Some).map_err(D::Error::custom);
    }
    match number.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 => Ok(Some(f as usize)),
        _ => Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {number}"
        ))),
    }
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME,
        description: "Read the contents of a document. Returns the full document or a specific \
                      line range. Use this after grep to get the full context of a matching \
                      document.",
        parameters: BTreeMap::from([
            (
                "path",
                ParameterSpec::string("Document path relative to the knowledge base root"),
            ),
            (
                "offset",
                ParameterSpec::number("Line number to start reading from (1-indexed)"),
            ),
            ("limit", ParameterSpec::number("Number of lines to return")),
        ]),
        required: vec!["path"],
    }
}

/// Returned as raw text, not JSON
pub fn execute(store: &DocumentStore, args: ReadArgs) -> Result<String> {
    store.read(&args.path, args.offset, args.limit)
}
