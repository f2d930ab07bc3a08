//! Core data types for memex.
//!
//! This module defines the small value types shared by the store,
//! the inverted index and the query engine.

use serde::{Deserialize, Serialize};

/// Maximum number of results a single grep returns
pub const MAX_GREP_RESULTS: usize = 100;

/// Maximum number of lines a single read returns
pub const MAX_READ_LINES: usize = 2000;

/// Arena index of a document inside a store
///
/// Ids follow ascending path order and stay stable for the lifetime
/// of the store.
pub type DocId = u32;

/// One occurrence of a token: a document and a 1-indexed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Posting {
    /// Document holding the line
    pub doc: DocId,

    /// 1-indexed line number
    pub line: u32,
}

impl Posting {
    pub fn new(doc: DocId, line: u32) -> Self {
        Self { doc, line }
    }
}

/// A single grep match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrepResult {
    /// Document path relative to the corpus root
    pub path: String,

    /// 1-indexed line number
    pub line: u32,

    /// Full line text, original case
    pub content: String,
}
