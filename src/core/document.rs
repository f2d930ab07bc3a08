//! A single corpus document: a path and its lines.

use crate::core::types::{DocId, MAX_READ_LINES};

/// One corpus entry
///
/// Lines keep their original case and never include the line
/// terminator. Empty lines are preserved so line numbers match the
/// source text.
#[derive(Debug, Clone)]
pub struct Document {
    id: DocId,
    path: String,
    lines: Vec<String>,
    /// Pre-lowercased copy of `lines` for substring scans
    lines_lower: Vec<String>,
}

impl Document {
    /// Split `content` into lines and wrap it as a document
    pub fn new(id: DocId, path: String, content: &str) -> Self {
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        let lines_lower = lines.iter().map(|l| l.to_lowercase()).collect();
        Self {
            id,
            path,
            lines,
            lines_lower,
        }
    }

    pub fn id(&self) -> DocId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn lines_lower(&self) -> &[String] {
        &self.lines_lower
    }

    /// Line text by 1-indexed line number
    pub fn line(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        self.lines.get(idx).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Render a line-numbered slice of the document
    ///
    /// `offset` is 1-indexed (0 is treated as 1). Without a `limit`
    /// the slice runs to the end of the document. Either way at most
    /// [`MAX_READ_LINES`] lines are returned. Each line is prefixed
    /// with its number, right-aligned to the widest number in the
    /// slice, and two spaces.
    pub fn read(&self, offset: Option<usize>, limit: Option<usize>) -> String {
        let start = offset.unwrap_or(1).saturating_sub(1);
        if start >= self.lines.len() {
            return String::new();
        }

        let remaining = self.lines.len() - start;
        let count = limit.unwrap_or(remaining).min(remaining).min(MAX_READ_LINES);
        if count == 0 {
            return String::new();
        }

        let end = start + count;
        let width = end.to_string().len();

        self.lines[start..end]
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{:>width$}  {}", start + i + 1, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
