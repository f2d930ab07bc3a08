//! Path scoping globs.
//!
//! Only `*` is special: a single `*` matches within one path segment
//! and `**` matches across segments, including zero of them. `**` may
//! sit anywhere, so `**.md` and `docs/**b.md` are both fine. Every
//! other character (`?`, `[` and `]` included) matches literally.

use regex::Regex;

use crate::core::error::{MemexError, Result};

/// A compiled path glob
#[derive(Debug, Clone)]
pub struct PathGlob {
    regex: Regex,
}

impl PathGlob {
    /// Compile a glob into an anchored regex
    ///
    /// Every glob has a translation. The only failure left is the
    /// regex size limit, reported as `InvalidPattern`.
    pub fn new(glob: &str) -> Result<Self> {
        let regex = Regex::new(&to_regex(glob))
            .map_err(|e| MemexError::invalid_pattern(glob, format!("invalid glob: {e}")))?;
        Ok(Self { regex })
    }

    /// Whether a forward-slash relative path matches
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// `**/` → any number of leading segments, `**` → anything,
/// `*` → anything but `/`, the rest escaped
fn to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() * 2 + 2);
    out.push('^');

    let mut rest = glob;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("**/") {
            out.push_str("(?:.*/)?");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("**") {
            out.push_str(".*");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('*') {
            out.push_str("[^/]*");
            rest = tail;
        } else {
            let end = rest.find('*').unwrap_or(rest.len());
            out.push_str(&regex::escape(&rest[..end]));
            rest = &rest[end..];
        }
    }

    out.push('$');
    out
}
