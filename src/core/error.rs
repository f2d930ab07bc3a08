//! Error types and error handling for memex.
//!
//! This module defines the error type shared by the store, the
//! query engine and the tool dispatch layer. Every variant carries
//! the offending input so callers (and LLM tool loops) can show a
//! useful message without extra context.

use thiserror::Error;

/// Result type alias for memex operations
pub type Result<T> = std::result::Result<T, MemexError>;

/// Main error type for memex
#[derive(Error, Debug)]
pub enum MemexError {
    #[error("no documents provided: corpus is empty")]
    EmptyCorpus,

    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl MemexError {
    /// Build an `InvalidPattern` error from any displayable cause
    pub fn invalid_pattern(pattern: &str, reason: impl std::fmt::Display) -> Self {
        MemexError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MemexError::DocumentNotFound(_) | MemexError::UnknownTool(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            MemexError::EmptyCorpus
                | MemexError::InvalidCorpus(_)
                | MemexError::InvalidPattern { .. }
                | MemexError::InvalidArguments { .. }
                | MemexError::ConfigError(_)
        )
    }
}
