//! memex - grep, read and ls over a small document corpus
//!
//! Loads a few hundred to a few thousand text documents into memory,
//! builds a token inverted index and answers the three file-system
//! style queries an LLM agent uses to navigate a knowledge base.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types
//!   - store, document, index (immutable in-memory corpus)
//!   - search (grep with an index fast path)
//!   - corpus (loading a directory tree)
//!
//! - **tools**: Tool definitions and name-based dispatch
//!
//! - **cli**: `memex` command line adapter
//!
//! - **memex**: [`Memex`] facade tying the above together
//!
//! # Example
//!
//! ```
//! use memex::Memex;
//!
//! let memex = Memex::from_documents(vec![
//!     ("billing/refund.md".to_string(), "# Refunds\nContact support.".to_string()),
//! ])
//! .unwrap();
//!
//! let hits = memex.grep("refund", None).unwrap();
//! assert_eq!(hits[0].line, 1);
//! assert_eq!(memex.ls(""), vec!["billing/"]);
//! ```

// Core domain logic
pub mod core;

// Tool layer
pub mod tools;

// Command line adapter
pub mod cli;

mod memex;

// Re-export commonly used types for convenience
pub use crate::memex::Memex;
pub use core::config::Config;
pub use core::error::{MemexError, Result};
pub use core::store::DocumentStore;
pub use core::types::*;
pub use tools::{Tool, ToolDefinition};
