//! Reads a corpus directory into `(path, content)` pairs.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::config::CorpusConfig;
use crate::core::corpus::walker::FileWalker;
use crate::core::error::Result;

/// Loads every matching text file below a root directory
pub struct CorpusLoader {
    root: PathBuf,
    walker: FileWalker,
}

impl CorpusLoader {
    /// Create a loader from the `[corpus]` configuration section
    pub fn new(config: &CorpusConfig) -> Result<Self> {
        Self::with_patterns(
            &config.root,
            &config.include_patterns,
            &config.exclude_patterns,
            config.max_file_size_mb,
        )
    }

    pub fn with_patterns(
        root: impl AsRef<Path>,
        include_patterns: &[String],
        exclude_patterns: &[String],
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            walker: FileWalker::new(include_patterns, exclude_patterns, max_file_size_mb)?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and read every accepted file
    ///
    /// Returns pairs sorted by forward-slash relative path. Files that
    /// are not valid UTF-8 or cannot be read are skipped with a
    /// warning.
    pub fn load(&self) -> Result<Vec<(String, String)>> {
        let start = Instant::now();

        let files = self.walker.collect_files(&self.root)?;
        tracing::info!("Found {} files in {:?}", files.len(), self.root);

        let mut documents = Vec::with_capacity(files.len());
        let mut skipped = 0usize;

        for file in files {
            match fs::read_to_string(&file.absolute_path) {
                Ok(content) => documents.push((file.relative_path, content)),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    tracing::warn!("Skipping non-UTF-8 file: {}", file.relative_path);
                    skipped += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", file.relative_path, e);
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            "Loaded {} documents ({} skipped) in {}ms",
            documents.len(),
            skipped,
            start.elapsed().as_millis()
        );

        Ok(documents)
    }
}
