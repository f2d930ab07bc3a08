//! Grep over a document store.
//!
//! The engine holds no state of its own. One call classifies the
//! pattern, prunes documents with the optional glob, collects every
//! matching line, sorts by `(path, line)` and keeps the first
//! [`MAX_GREP_RESULTS`].

use std::time::Instant;

use crate::core::document::Document;
use crate::core::error::Result;
use crate::core::glob::PathGlob;
use crate::core::search::query::MatchStrategy;
use crate::core::store::DocumentStore;
use crate::core::types::{DocId, GrepResult, Posting, MAX_GREP_RESULTS};

/// Stateless grep algorithm bound to one store
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a DocumentStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Case-insensitive search for `pattern`, optionally scoped by `glob`
    ///
    /// Results are ordered by path, then line, and capped at
    /// [`MAX_GREP_RESULTS`] after sorting. Zero matches is an empty
    /// list, as is a glob that matches no path. Fails with
    /// `InvalidPattern` for an empty pattern or a bad regex.
    pub fn grep(&self, pattern: &str, glob: Option<&str>) -> Result<Vec<GrepResult>> {
        let start = Instant::now();

        let strategy = MatchStrategy::classify(pattern)?;
        let candidates = self.candidates(glob)?;

        let mut hits = self.matching_lines(&strategy, &candidates);
        let total = hits.len();
        hits.truncate(MAX_GREP_RESULTS);

        let results: Vec<GrepResult> = hits
            .into_iter()
            .filter_map(|posting| self.to_result(posting))
            .collect();

        tracing::debug!(
            "grep {:?} (strategy={}, glob={:?}): {} matching lines, {} returned in {}us",
            pattern,
            strategy.name(),
            glob,
            total,
            results.len(),
            start.elapsed().as_micros()
        );

        Ok(results)
    }

    /// Per-document flag: does the document fall inside the glob
    fn candidates(&self, glob: Option<&str>) -> Result<Vec<bool>> {
        let docs = self.store.documents();
        match glob {
            None => Ok(vec![true; docs.len()]),
            Some(glob) => {
                let glob = PathGlob::new(glob)?;
                Ok(docs.iter().map(|doc| glob.matches(doc.path())).collect())
            }
        }
    }

    /// Every matching line among the candidates, sorted, one entry per line
    ///
    /// Ids are assigned in path order, so sorting postings by
    /// `(doc, line)` is sorting results by `(path, line)`.
    fn matching_lines(&self, strategy: &MatchStrategy, candidates: &[bool]) -> Vec<Posting> {
        let mut hits = match strategy {
            MatchStrategy::Token(token) => self
                .store
                .index()
                .postings_containing(token, |doc| is_candidate(candidates, doc)),
            MatchStrategy::Substring(needle) => self.scan(candidates, |doc, i| {
                doc.lines_lower()[i].contains(needle.as_str())
            }),
            MatchStrategy::Regex(regex) => {
                self.scan(candidates, |doc, i| regex.is_match(&doc.lines()[i]))
            }
        };

        hits.sort_unstable();
        hits.dedup();
        hits
    }

    /// Linear scan over every line of every candidate document
    fn scan(&self, candidates: &[bool], matches: impl Fn(&Document, usize) -> bool) -> Vec<Posting> {
        let mut hits = Vec::new();
        for doc in self.store.documents() {
            if !is_candidate(candidates, doc.id()) {
                continue;
            }
            for i in 0..doc.line_count() {
                if matches(doc, i) {
                    hits.push(Posting::new(doc.id(), (i + 1) as u32));
                }
            }
        }
        hits
    }

    fn to_result(&self, posting: Posting) -> Option<GrepResult> {
        let doc = self.store.get(posting.doc)?;
        Some(GrepResult {
            path: doc.path().to_string(),
            line: posting.line,
            content: self.store.line_text(posting)?.to_string(),
        })
    }
}

fn is_candidate(candidates: &[bool], doc: DocId) -> bool {
    candidates.get(doc as usize).copied().unwrap_or(false)
}
