//! Immutable in-memory document store.
//!
//! A [`DocumentStore`] is built once from `(path, content)` pairs.
//! Construction sorts the documents by path, assigns ids in that
//! order and builds the [`InvertedIndex`]. Everything afterwards is
//! a read, so a store can be shared freely between threads.

use std::collections::{BTreeSet, HashMap};

use crate::core::document::Document;
use crate::core::error::{MemexError, Result};
use crate::core::index::InvertedIndex;
use crate::core::types::{DocId, Posting};

/// Documents plus their inverted index
#[derive(Debug)]
pub struct DocumentStore {
    /// Indexed by `DocId`, ascending path order
    docs: Vec<Document>,
    by_path: HashMap<String, DocId>,
    index: InvertedIndex,
}

impl DocumentStore {
    /// Build a store from `(path, content)` pairs
    ///
    /// Fails with `EmptyCorpus` when `documents` is empty. If a path
    /// appears more than once the last occurrence wins.
    pub fn new(documents: Vec<(String, String)>) -> Result<Self> {
        if documents.is_empty() {
            return Err(MemexError::EmptyCorpus);
        }

        let input_len = documents.len();

        // Stable sort keeps input order among equal paths, so the last
        // duplicate is the one that survives the dedup below
        let mut documents = documents;
        documents.sort_by(|a, b| a.0.cmp(&b.0));
        let mut unique: Vec<(String, String)> = Vec::with_capacity(input_len);
        for (path, content) in documents {
            if let Some(last) = unique.last_mut().filter(|last| last.0 == path) {
                tracing::warn!("Duplicate document path '{}', keeping last copy", path);
                last.1 = content;
            } else {
                unique.push((path, content));
            }
        }

        let docs: Vec<Document> = unique
            .into_iter()
            .enumerate()
            .map(|(id, (path, content))| Document::new(id as DocId, path, &content))
            .collect();

        let by_path = docs
            .iter()
            .map(|doc| (doc.path().to_string(), doc.id()))
            .collect();

        let index = InvertedIndex::build(&docs);

        tracing::info!(
            "Built document store: {} documents, {} tokens",
            docs.len(),
            index.token_count()
        );

        Ok(Self {
            docs,
            by_path,
            index,
        })
    }

    /// Build a store from a JSON array of `[path, content]` pairs
    pub fn from_json(json: &str) -> Result<Self> {
        let documents: Vec<(String, String)> =
            serde_json::from_str(json).map_err(|e| MemexError::InvalidCorpus(e.to_string()))?;
        Self::new(documents)
    }

    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    pub fn token_count(&self) -> usize {
        self.index.token_count()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// All documents in id (path) order
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.docs.get(id as usize)
    }

    pub fn get_by_path(&self, path: &str) -> Option<&Document> {
        self.by_path.get(path).and_then(|&id| self.get(id))
    }

    /// Line text for a posting
    pub fn line_text(&self, posting: Posting) -> Option<&str> {
        self.get(posting.doc)?.line(posting.line)
    }

    /// Read a document, optionally a line range of it
    ///
    /// See [`Document::read`] for the output format.
    pub fn read(&self, path: &str, offset: Option<usize>, limit: Option<usize>) -> Result<String> {
        let doc = self
            .get_by_path(path)
            .ok_or_else(|| MemexError::DocumentNotFound(path.to_string()))?;
        Ok(doc.read(offset, limit))
    }

    /// List the immediate children of a virtual directory
    ///
    /// The root is `""` (`"."` and `"/"` are accepted too) and a
    /// trailing `/` is ignored. Subdirectories are reported once with
    /// a trailing `/`, files by bare name, all sorted.
    pub fn ls(&self, dir: &str) -> Vec<String> {
        let prefix = match dir.trim_end_matches('/') {
            "" | "." => String::new(),
            trimmed => format!("{trimmed}/"),
        };

        let mut entries = BTreeSet::new();

        for doc in &self.docs {
            let Some(rest) = doc.path().strip_prefix(&prefix) else {
                continue;
            };

            match rest.find('/') {
                Some(slash) => entries.insert(format!("{}/", &rest[..slash])),
                None => entries.insert(rest.to_string()),
            };
        }

        entries.into_iter().collect()
    }
}
