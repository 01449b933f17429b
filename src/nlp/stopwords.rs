//! Stop-word filtering.
//!
//! Stop words contribute a frequency weight of exactly zero regardless of
//! how often they appear in the article. The set is loaded from a file with
//! one lowercase lemma per line, or built from a custom list.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::SummarizeError;

/// A set of stop-word lemmas (lowercase).
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a set from a file with one lemma per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SummarizeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SummarizeError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(&text))
    }

    /// Parse a set from newline-delimited text. Blank lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self {
            words: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    /// Check whether a lemma is a stop word. Matching is case-insensitive.
    pub fn is_stopword(&self, lemma: &str) -> bool {
        self.words.contains(lemma) || self.words.contains(&lemma.to_lowercase())
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
