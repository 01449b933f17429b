//! Weighted combination of the normalized channels into the total score.

use crate::config::SummarizerConfig;
use crate::scoring::ScoreRecord;

/// Combines normalized channels:
/// `total = meaning × (α·position + β·format + γ·frequency)`.
///
/// The weights are caller-supplied and need not sum to 1.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCombiner {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl ScoreCombiner {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(config.alpha, config.beta, config.gamma)
    }

    /// Finalize one record's total score.
    pub fn combine(&self, record: &mut ScoreRecord) {
        record.total_score = record.meaning_score
            * (self.alpha * record.position_score
                + self.beta * record.format_score
                + self.gamma * record.frequency_score);
    }
}
