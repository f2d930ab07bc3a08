//! Core domain logic
//!
//! Everything needed to load a corpus, index it and answer grep,
//! read and ls queries. Nothing here knows about tool calls or the
//! command line.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Shared value types and limits
//! - **document**: One document and its line-numbered reads
//! - **index**: Token to line inverted index
//! - **store**: Immutable document store (read, ls)
//! - **glob**: Path scoping for grep
//! - **search**: Pattern classification and the grep algorithm
//! - **corpus**: Directory walking and loading

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod glob;
pub mod index;
pub mod search;
pub mod store;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{MemexError, Result};
pub use store::DocumentStore;
