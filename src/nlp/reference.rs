//! Background reference frequency table.
//!
//! Maps lemmas to their weight in a general-language corpus. During lemma
//! weighting the reference weight is subtracted from a lemma's
//! document-local weight (floored at zero), discounting words that are
//! common everywhere and therefore carry little topical signal.
//!
//! File format: one `lemma<TAB>frequency` entry per line.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::SummarizeError;

/// Lemma weights from a general-language corpus.
#[derive(Debug, Clone, Default)]
pub struct ReferenceFrequencies {
    weights: FxHashMap<String, f64>,
}

impl ReferenceFrequencies {
    /// Create an empty table (no discounting).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the table from a `lemma<TAB>frequency` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SummarizeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SummarizeError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_lines(&text)
    }

    /// Parse the table from newline-delimited text. Blank lines are
    /// skipped; anything else must be `lemma<TAB>frequency`.
    pub fn from_lines(text: &str) -> Result<Self, SummarizeError> {
        let mut weights = FxHashMap::default();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let malformed = || SummarizeError::MalformedReference {
                line: idx + 1,
                content: line.to_string(),
            };
            let (lemma, frequency) = line.split_once('\t').ok_or_else(|| malformed())?;
            let frequency: f64 = frequency.trim().parse().map_err(|_| malformed())?;
            weights.insert(lemma.trim().to_lowercase(), frequency);
        }
        Ok(Self { weights })
    }

    /// Reference weight for a lemma, if the corpus knows it.
    pub fn weight(&self, lemma: &str) -> Option<f64> {
        self.weights.get(lemma).copied()
    }

    /// Number of lemmas in the table.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
