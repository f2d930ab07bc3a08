//! Inverted index from word tokens to document lines.
//!
//! The index is built in one pass over every document and is never
//! mutated afterwards. Postings reference documents by [`DocId`]
//! rather than by path, so each entry is a pair of integers.

use std::collections::HashMap;

use crate::core::document::Document;
use crate::core::types::{DocId, Posting};

/// Token → ordered postings
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
}

impl InvertedIndex {
    /// Build the index over `documents`
    ///
    /// Documents must already be in id order. Postings for every
    /// token then come out sorted by `(doc, line)` without a
    /// separate sort, and a line that repeats a token is recorded
    /// once.
    pub fn build(documents: &[Document]) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();

        for doc in documents {
            for (i, line) in doc.lines().iter().enumerate() {
                let posting = Posting::new(doc.id(), (i + 1) as u32);
                for token in tokenize(line) {
                    let list = postings.entry(token).or_default();
                    if list.last() != Some(&posting) {
                        list.push(posting);
                    }
                }
            }
        }

        Self { postings }
    }

    /// Postings for an exact, already-lowercased token
    ///
    /// An unknown token yields an empty slice.
    pub fn lookup(&self, token: &str) -> &[Posting] {
        self.postings.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct tokens
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Every indexed token that contains `fragment`
    pub fn tokens_containing<'a>(&'a self, fragment: &'a str) -> impl Iterator<Item = &'a str> {
        self.postings
            .keys()
            .filter(move |token| token.contains(fragment))
            .map(String::as_str)
    }

    /// Postings of every token containing `fragment`, restricted to
    /// documents accepted by `keep`, deduplicated and sorted
    pub fn postings_containing(
        &self,
        fragment: &str,
        keep: impl Fn(DocId) -> bool,
    ) -> Vec<Posting> {
        let mut hits: Vec<Posting> = self
            .tokens_containing(fragment)
            .flat_map(|token| self.lookup(token))
            .filter(|posting| keep(posting.doc))
            .copied()
            .collect();

        hits.sort_unstable();
        hits.dedup();
        hits
    }
}

/// Split text into lowercase word tokens
///
/// A token is a maximal run of alphanumeric or `_` characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `c` can appear inside a token
pub fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
