// Test helper functions

use memex::core::config::CorpusConfig;
use memex::core::corpus::CorpusLoader;
use memex::{GrepResult, Memex};
use std::path::Path;

use super::fixtures::fixtures_dir;

/// Load a directory with the default corpus settings
#[allow(dead_code)]
pub fn load_dir(root: &Path) -> Vec<(String, String)> {
    let config = CorpusConfig {
        root: root.to_path_buf(),
        ..CorpusConfig::default()
    };
    CorpusLoader::new(&config)
        .expect("Failed to create loader")
        .load()
        .expect("Failed to load corpus")
}

/// Memex over the shipped fixture corpus
#[allow(dead_code)]
pub fn fixture_memex() -> Memex {
    Memex::from_documents(load_dir(&fixtures_dir())).expect("Failed to build fixture memex")
}

/// Memex over a handful of in-memory documents
#[allow(dead_code)]
pub fn small_memex(docs: &[(&str, &str)]) -> Memex {
    Memex::from_documents(
        docs.iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect(),
    )
    .expect("Failed to build memex")
}

/// Paths of grep results, in result order
#[allow(dead_code)]
pub fn paths(results: &[GrepResult]) -> Vec<&str> {
    results.iter().map(|r| r.path.as_str()).collect()
}
