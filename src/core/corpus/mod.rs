//! Corpus loading from disk
//!
//! Turns a directory tree into the ordered `(path, content)` pairs a
//! [`DocumentStore`](crate::core::store::DocumentStore) is built from.

pub mod loader;
pub mod walker;

pub use loader::CorpusLoader;
pub use walker::{FileWalker, WalkedFile};
