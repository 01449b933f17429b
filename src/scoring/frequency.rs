//! Corpus-relative lemma weighting and the frequency channel.
//!
//! Three passes:
//! 1. During the main document traversal, [`LemmaFrequencyTable::observe`]
//!    counts every lemma and accumulates the article word count.
//! 2. After the traversal, [`LemmaFrequencyTable::into_weights`] turns raw
//!    counts into weights: scaled by corpus size, zeroed for stop words and
//!    multi-token lemma artifacts, and discounted by the background
//!    reference table (floored at zero).
//! 3. [`FrequencyScorer`] sums each sentence's lemma weights.
//!
//! The type split enforces the ordering: pass 3 can only run against a
//! [`LemmaWeights`], which only exists once pass 2 has consumed the table.

use rustc_hash::FxHashMap;

use crate::nlp::{ReferenceFrequencies, StopwordSet};
use crate::scoring::{round_to, ScoreRecord};

/// Raw lemma counts for one document (pass 1).
#[derive(Debug, Default)]
pub struct LemmaFrequencyTable {
    counts: FxHashMap<String, f64>,
    article_word_count: usize,
}

impl LemmaFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one sentence's lemmas and extend the article word count.
    /// Lemmas are expected lowercased (the pipeline lowercases them once
    /// when building the per-document context).
    pub fn observe(&mut self, lemmas: &[String]) {
        self.article_word_count += lemmas.len();
        for lemma in lemmas {
            *self.counts.entry(lemma.clone()).or_insert(0.0) += 1.0;
        }
    }

    /// Words observed so far across the whole article.
    pub fn article_word_count(&self) -> usize {
        self.article_word_count
    }

    /// Raw count for a lemma.
    pub fn count(&self, lemma: &str) -> f64 {
        self.counts.get(lemma).copied().unwrap_or(0.0)
    }

    /// Pass 2: transform raw counts into weights in place.
    ///
    /// `weight = round(count × 10000 / article_word_count, 2)`, except that
    /// stop words and lemmas containing internal whitespace (multi-token
    /// artifacts from the lemmatizer) are forced to zero, and lemmas known
    /// to the reference corpus have the reference weight subtracted,
    /// floored at zero.
    pub fn into_weights(
        mut self,
        stopwords: &StopwordSet,
        reference: &ReferenceFrequencies,
    ) -> LemmaWeights {
        let scale = if self.article_word_count == 0 {
            0.0
        } else {
            10_000.0 / self.article_word_count as f64
        };

        for (lemma, value) in self.counts.iter_mut() {
            if stopwords.is_stopword(lemma) || lemma.contains(char::is_whitespace) {
                *value = 0.0;
                continue;
            }
            let mut weight = round_to(*value * scale, 2);
            if let Some(common) = reference.weight(lemma) {
                weight = (weight - common).max(0.0);
            }
            *value = weight;
        }

        LemmaWeights {
            weights: self.counts,
            article_word_count: self.article_word_count,
        }
    }
}

/// Finalized lemma weights for one document (output of pass 2).
#[derive(Debug)]
pub struct LemmaWeights {
    weights: FxHashMap<String, f64>,
    article_word_count: usize,
}

impl LemmaWeights {
    /// Weight of a lemma; unknown lemmas weigh zero.
    pub fn weight(&self, lemma: &str) -> f64 {
        self.weights.get(lemma).copied().unwrap_or(0.0)
    }

    pub fn article_word_count(&self) -> usize {
        self.article_word_count
    }
}

/// Pass 3: sums lemma weights per sentence. Repeated lemmas contribute
/// once per occurrence.
#[derive(Debug)]
pub struct FrequencyScorer<'a> {
    weights: &'a LemmaWeights,
}

impl<'a> FrequencyScorer<'a> {
    pub fn new(weights: &'a LemmaWeights) -> Self {
        Self { weights }
    }

    /// Score one sentence, setting its word count and frequency channel.
    pub fn score(&self, record: &mut ScoreRecord, lemmas: &[String]) {
        record.word_count = lemmas.len();
        record.frequency_score = lemmas.iter().map(|l| self.weights.weight(l)).sum();
    }
}
