//! File system walker with pattern-based filtering.
//!
//! Traverses a corpus directory and filters files using glob
//! patterns matched against the root-relative, forward-slash path.
//! Handles errors gracefully (permission denied, etc.) without
//! crashing.

use glob::Pattern;
use std::path::{Component, Path};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{MemexError, Result};

/// A file accepted by the walker
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Forward-slash path relative to the walk root
    pub relative_path: String,

    /// Path on disk
    pub absolute_path: std::path::PathBuf,
}

/// File system walker with pattern-based filtering
pub struct FileWalker {
    /// Patterns to include (e.g., "**/*.md")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/.git/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    /// * `exclude_patterns` - Glob patterns for files to exclude
    /// * `max_file_size_mb` - Maximum file size in megabytes
    ///
    /// # Returns
    ///
    /// A new `FileWalker` instance or an error if patterns are
    /// invalid
    pub fn new(
        include_patterns: &[String],
        exclude_patterns: &[String],
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include_patterns: compile_patterns(include_patterns, "include")?,
            exclude_patterns: compile_patterns(exclude_patterns, "exclude")?,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect all matching files below `root`, sorted by relative path
    pub fn collect_files(&self, root: &Path) -> Result<Vec<WalkedFile>> {
        if !root.is_dir() {
            return Err(MemexError::ConfigError(format!(
                "Corpus root is not a directory: {root:?}"
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    // Check file size
                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::debug!(
                                "Skipping large file: {:?} \
                                 ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    let Some(relative_path) = relative_slash_path(root, path) else {
                        tracing::warn!("Skipping path with non-UTF-8 name: {:?}", path);
                        continue;
                    };

                    // Check patterns
                    if self.matches_patterns(&relative_path) {
                        files.push(WalkedFile {
                            relative_path,
                            absolute_path: path.to_path_buf(),
                        });
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Determine if a directory entry should be processed
    ///
    /// Filters out hidden directories and excluded patterns.
    /// Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if !entry.file_type().is_dir() {
            return true;
        }

        // Skip hidden directories (starting with '.')
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                return false;
            }
        }

        // Skip entire excluded directory trees early. The trailing
        // slash lets "**/target/**" match the directory itself.
        if let Some(relative) = relative_slash_path(root, path) {
            let as_dir = format!("{relative}/");
            if self
                .exclude_patterns
                .iter()
                .any(|p| p.matches(&relative) || p.matches(&as_dir))
            {
                tracing::debug!("Skipping excluded directory: {:?}", path);
                return false;
            }
        }

        true
    }

    /// Check if a relative path matches the include/exclude patterns
    fn matches_patterns(&self, relative_path: &str) -> bool {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);

        // If no include patterns, include all
        let matches_include = self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| p.matches(relative_path) || p.matches(file_name));

        if !matches_include {
            return false;
        }

        // Must not match any exclude pattern
        !self.exclude_patterns.iter().any(|p| p.matches(relative_path))
    }
}

fn compile_patterns(patterns: &[String], kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| MemexError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}")))
        })
        .collect()
}

/// `path` relative to `root`, joined with `/`
///
/// `None` when `path` is outside `root` or not valid UTF-8.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            _ => return None,
        }
    }
    Some(parts.join("/"))
}
