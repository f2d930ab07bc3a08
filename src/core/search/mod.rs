//! Search module for grep over the in-memory store.
//!
//! Patterns are classified once per call (see [`MatchStrategy`]) and
//! answered either from the inverted index or by scanning lines.

mod engine;
mod query;

pub use engine::QueryEngine;
pub use query::{has_regex_metacharacters, MatchStrategy};
