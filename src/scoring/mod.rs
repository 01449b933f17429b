//! Scoring channels and per-sentence score state.
//!
//! Each sentence accumulates three raw channels (position, format,
//! frequency) plus an optional meaning score during the pipeline passes.
//! The channels are normalized to comparable percentages and combined into
//! a single total before selection.

pub mod combine;
pub mod format;
pub mod frequency;
pub mod normalize;
pub mod position;
pub mod semantic;

pub use combine::ScoreCombiner;
pub use format::FormatScorer;
pub use frequency::{FrequencyScorer, LemmaFrequencyTable, LemmaWeights};
pub use normalize::ScoreNormalizer;
pub use position::PositionScorer;
pub use semantic::{MeaningScorer, NeutralMeaning};

/// Mutable score state for one sentence.
///
/// Records are keyed by the sentence's document-order index, so sentences
/// with identical text score independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub word_count: usize,
    pub position_score: f64,
    pub format_score: f64,
    pub frequency_score: f64,
    pub meaning_score: f64,
    pub total_score: f64,
}

impl Default for ScoreRecord {
    fn default() -> Self {
        Self {
            word_count: 0,
            position_score: 0.0,
            format_score: 0.0,
            frequency_score: 0.0,
            // Neutral: an absent meaning scorer leaves totals unchanged.
            meaning_score: 1.0,
            total_score: 0.0,
        }
    }
}

/// One sentence with its score state, held in document order by the
/// per-document context.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub text: String,
    /// Lowercased lemmas of the sentence.
    pub lemmas: Vec<String>,
    pub record: ScoreRecord,
}

/// Round to a fixed number of decimal digits, half away from zero.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
