//! Configuration management for memex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{MemexError, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project config file checked in the working directory
pub const LOCAL_CONFIG_FILE: &str = "memex.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Directory the corpus is loaded from
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File patterns to include (glob syntax, relative to root)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax, relative to root)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level when neither MEMEX_LOG nor RUST_LOG is set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of the compact text format
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_include_patterns() -> Vec<String> {
    vec!["**/*.md".to_string(), "**/*.txt".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
    ]
}

fn default_max_file_size() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MemexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// User config file location (`$XDG_CONFIG_HOME/memex/config.toml`)
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("memex").join("config.toml"))
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// Priority order for the TOML file:
    /// 1. MEMEX_CONFIG env var
    /// 2. User config file (~/.config/memex/config.toml)
    /// 3. ./memex.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MEMEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            match Self::user_config_file().filter(|path| path.exists()) {
                Some(path) => Self::from_file(path)?,
                None if Path::new(LOCAL_CONFIG_FILE).exists() => {
                    Self::from_file(LOCAL_CONFIG_FILE)?
                }
                None => Self::default(),
            }
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("MEMEX_CORPUS_ROOT") {
            self.corpus.root = PathBuf::from(root);
        }
        if let Ok(max_size) = env::var("MEMEX_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.corpus.max_file_size_mb = size;
            }
        }
        if let Ok(level) = env::var("MEMEX_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.corpus.max_file_size_mb == 0 {
            return Err(MemexError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.corpus.include_patterns.is_empty() {
            return Err(MemexError::ConfigError(
                "At least one include pattern is required".to_string(),
            ));
        }

        for pattern in self
            .corpus
            .include_patterns
            .iter()
            .chain(&self.corpus.exclude_patterns)
        {
            Pattern::new(pattern).map_err(|e| {
                MemexError::ConfigError(format!("Invalid glob pattern '{pattern}': {e}"))
            })?;
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Corpus root: {:?}", self.corpus.root);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.corpus.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.corpus.exclude_patterns.len()
        );
        tracing::info!("  Max file size: {} MB", self.corpus.max_file_size_mb);
        tracing::info!("  Log level: {}", self.logging.level);
        tracing::info!("  JSON logs: {}", self.logging.json);
    }
}
