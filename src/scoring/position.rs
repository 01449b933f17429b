//! Position-based scoring channel.
//!
//! Two bonuses per sentence: an absolute bonus looked up by the global
//! sentence counter (only the first few sentences of the whole article
//! carry one), and a container-relative bonus looked up by the sentence's
//! 1-based position within its paragraph. Article paragraphs reward
//! positions 1–3 with decreasing weight; subchapter paragraphs reward
//! only position 2.

use crate::config::SummarizerConfig;
use crate::scoring::ScoreRecord;
use crate::types::ContainerKind;

/// Scores sentences by position. Owns the global sentence counter for one
/// document; construct a fresh scorer per document.
#[derive(Debug)]
pub struct PositionScorer<'a> {
    config: &'a SummarizerConfig,
    /// Incremented once per sentence across the whole document, never
    /// reset mid-document.
    global_position: usize,
}

impl<'a> PositionScorer<'a> {
    pub fn new(config: &'a SummarizerConfig) -> Self {
        Self {
            config,
            global_position: 0,
        }
    }

    /// Score one sentence. `local_position` is 1-based within the
    /// immediate paragraph; the local counter resets at every paragraph,
    /// the global counter does not.
    pub fn score(&mut self, record: &mut ScoreRecord, local_position: usize, kind: ContainerKind) {
        self.global_position += 1;

        record.position_score += self
            .config
            .absolute_position_weights
            .get(&self.global_position)
            .copied()
            .unwrap_or(0.0);

        record.position_score += self
            .config
            .position_weights(kind)
            .get(&local_position)
            .copied()
            .unwrap_or(0.0);
    }

    /// Total sentences scored so far.
    pub fn sentences_seen(&self) -> usize {
        self.global_position
    }
}
