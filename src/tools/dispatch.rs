//! Name-based dispatch for tool calls

use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

use super::definition::ToolDefinition;
use super::{grep, ls, read};
use crate::core::error::{MemexError, Result};
use crate::core::store::DocumentStore;

/// The closed set of tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Grep,
    Read,
    Ls,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Grep, Tool::Read, Tool::Ls];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Grep => grep::NAME,
            Tool::Read => read::NAME,
            Tool::Ls => ls::NAME,
        }
    }

    pub fn definition(self) -> ToolDefinition {
        match self {
            Tool::Grep => grep::definition(),
            Tool::Read => read::definition(),
            Tool::Ls => ls::definition(),
        }
    }

    /// Decode `args_json` and run the tool against `store`
    ///
    /// A blank payload is read as `{}`.
    pub fn call(self, store: &DocumentStore, args_json: &str) -> Result<String> {
        tracing::debug!("Dispatching tool call: {} {}", self, args_json);
        match self {
            Tool::Grep => grep::execute(store, decode(self, args_json)?),
            Tool::Read => read::execute(store, decode(self, args_json)?),
            Tool::Ls => ls::execute(store, decode(self, args_json)?),
        }
    }
}

impl FromStr for Tool {
    type Err = MemexError;

    fn from_str(name: &str) -> Result<Self> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| MemexError::UnknownTool(name.to_string()))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up `name` and run it with `args_json`
pub fn call(store: &DocumentStore, name: &str, args_json: &str) -> Result<String> {
    name.parse::<Tool>()?.call(store, args_json)
}

fn decode<T: DeserializeOwned>(tool: Tool, args_json: &str) -> Result<T> {
    let payload = if args_json.trim().is_empty() {
        "{}"
    } else {
        args_json
    };
    serde_json::from_str(payload).map_err(|e| MemexError::InvalidArguments {
        tool: tool.name().to_string(),
        reason: e.to_string(),
    })
}
