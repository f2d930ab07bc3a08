//! Tool layer for LLM tool-use loops
//!
//! Exposes the store through three tools, `grep`, `read` and `ls`.
//! Each tool module owns its argument type, its descriptor and its
//! execution. [`call`] routes a tool name plus a JSON argument object
//! to the right one and always answers with a string: JSON for `grep`
//! and `ls`, raw text for `read`.

pub mod definition;
pub mod dispatch;
pub mod grep;
pub mod ls;
pub mod read;

pub use definition::{tool_definitions, tool_definitions_json, ParameterSpec, ToolDefinition};
pub use dispatch::{call, Tool};
