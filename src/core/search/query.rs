//! Pattern classification for grep.
//!
//! Every grep call decides once how its pattern will be matched:
//!
//! - **Token**: a single word (letters, digits, `_`). Answered from
//!   the inverted index without reading any lines.
//! - **Substring**: any other literal, e.g. a phrase or a string with
//!   punctuation. Linear scan over pre-lowercased lines.
//! - **Regex**: the pattern contains a regex metacharacter. Compiled
//!   case-insensitively and tested against every candidate line.

use regex::{Regex, RegexBuilder};

use crate::core::error::{MemexError, Result};
use crate::core::index::tokenize;

/// Characters that turn a pattern into a regular expression
const REGEX_METACHARACTERS: [char; 14] = [
    '.', '*', '+', '?', '[', ']', '{', '}', '(', ')', '|', '^', '$', '\\',
];

/// How a grep pattern is matched
#[derive(Debug, Clone)]
pub enum MatchStrategy {
    /// Lowercased single-token literal (index fast path)
    Token(String),

    /// Lowercased literal that spans more than one token (scan)
    Substring(String),

    /// Case-insensitive regular expression (scan)
    Regex(Regex),
}

impl MatchStrategy {
    /// Classify and prepare a pattern
    ///
    /// Fails with `InvalidPattern` for an empty pattern or a regex
    /// that does not compile.
    pub fn classify(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(MemexError::invalid_pattern(pattern, "empty search pattern"));
        }

        if has_regex_metacharacters(pattern) {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| MemexError::invalid_pattern(pattern, format!("invalid regex: {e}")))?;
            return Ok(Self::Regex(regex));
        }

        let lower = pattern.to_lowercase();
        let tokens = tokenize(&lower);
        if tokens.len() == 1 && tokens[0] == lower {
            Ok(Self::Token(lower))
        } else {
            Ok(Self::Substring(lower))
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Token(_) => "token",
            Self::Substring(_) => "substring",
            Self::Regex(_) => "regex",
        }
    }
}

/// Whether a pattern contains any regex metacharacter
pub fn has_regex_metacharacters(pattern: &str) -> bool {
    pattern.contains(REGEX_METACHARACTERS)
}
