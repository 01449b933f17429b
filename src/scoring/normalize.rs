//! Channel normalization.
//!
//! Each raw channel (position, format, frequency) is independently rescaled
//! so its values sum to 100 across all sentences, turning the channels into
//! comparable relative-contribution percentages. A channel whose raw sum is
//! exactly zero keeps its zeros: the denominator is substituted with 1
//! rather than dividing by zero.

use crate::scoring::{round_to, ScoredSentence, ScoreRecord};

/// Decimal digits kept after rescaling.
const NORMALIZED_DIGITS: i32 = 6;

/// Rescales the three raw channels to comparable ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Normalize all three channels in place.
    pub fn normalize(&self, sentences: &mut [ScoredSentence]) {
        Self::normalize_channel(sentences, |r| r.position_score, |r, v| r.position_score = v);
        Self::normalize_channel(sentences, |r| r.format_score, |r, v| r.format_score = v);
        Self::normalize_channel(
            sentences,
            |r| r.frequency_score,
            |r, v| r.frequency_score = v,
        );
    }

    fn normalize_channel(
        sentences: &mut [ScoredSentence],
        get: fn(&ScoreRecord) -> f64,
        set: fn(&mut ScoreRecord, f64),
    ) {
        let sum: f64 = sentences.iter().map(|s| get(&s.record)).sum();
        let denominator = if sum == 0.0 { 1.0 } else { sum };

        for sentence in sentences.iter_mut() {
            let value = get(&sentence.record);
            set(
                &mut sentence.record,
                round_to(value * 100.0 / denominator, NORMALIZED_DIGITS),
            );
        }
    }
}
