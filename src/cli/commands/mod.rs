//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command. Commands build their output as a string
//! (`render`) and print it (`execute`).

pub mod call;
pub mod completions;
pub mod grep;
pub mod ls;
pub mod read;
pub mod tools;

// Re-export argument types for use in mod.rs
pub use call::CallArgs;
pub use completions::CompletionsArgs;
pub use grep::GrepArgs;
pub use ls::LsArgs;
pub use read::ReadArgs;
pub use tools::ToolsArgs;
