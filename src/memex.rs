//! `Memex`: one handle over a loaded corpus
//!
//! Bundles the immutable store with the query engine and the tool
//! layer. Clones share the same store.

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::corpus::CorpusLoader;
use crate::core::error::Result;
use crate::core::search::QueryEngine;
use crate::core::store::DocumentStore;
use crate::core::types::GrepResult;
use crate::tools::{self, ToolDefinition};

#[derive(Debug, Clone)]
pub struct Memex {
    store: Arc<DocumentStore>,
}

impl Memex {
    /// Build from `(path, content)` pairs
    pub fn from_documents(documents: Vec<(String, String)>) -> Result<Self> {
        Ok(Self::from_store(DocumentStore::new(documents)?))
    }

    /// Build from a JSON array of `[path, content]` pairs
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_store(DocumentStore::from_json(json)?))
    }

    /// Load the corpus described by the `[corpus]` section
    pub fn from_config(config: &Config) -> Result<Self> {
        let documents = CorpusLoader::new(&config.corpus)?.load()?;
        Self::from_documents(documents)
    }

    pub fn from_store(store: DocumentStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn grep(&self, pattern: &str, glob: Option<&str>) -> Result<Vec<GrepResult>> {
        QueryEngine::new(&self.store).grep(pattern, glob)
    }

    pub fn read(&self, path: &str, offset: Option<usize>, limit: Option<usize>) -> Result<String> {
        self.store.read(path, offset, limit)
    }

    pub fn ls(&self, path: &str) -> Vec<String> {
        self.store.ls(path)
    }

    /// Run a tool by name with a JSON argument object
    pub fn call(&self, name: &str, args_json: &str) -> Result<String> {
        tools::call(&self.store, name, args_json)
    }

    pub fn tool_definitions(&self) -> &'static [ToolDefinition] {
        tools::tool_definitions()
    }

    pub fn tool_definitions_json(&self) -> &'static str {
        tools::tool_definitions_json()
    }

    pub fn document_count(&self) -> usize {
        self.store.document_count()
    }

    pub fn token_count(&self) -> usize {
        self.store.token_count()
    }
}
