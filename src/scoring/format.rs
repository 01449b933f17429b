//! Format/punctuation scoring channel.
//!
//! Every sentence starts from a base score. Emphasized sentences (bold or
//! italic sub-spans in the source markup) earn a bonus, but emphasis that
//! ends in an exclamation/question run is penalized as headline-like.
//! Independently, each pattern in the configured table is tested against
//! the plain sentence text and contributes its signed delta on match —
//! patterns are not mutually exclusive.

use regex::Regex;

use crate::config::SummarizerConfig;
use crate::error::SummarizeError;
use crate::scoring::ScoreRecord;
use crate::types::Sentence;

/// Base score assigned to every sentence before any bonus or penalty.
pub const BASE_FORMAT_SCORE: f64 = 5.0;

const EMPHASIS_BONUS: f64 = 8.0;
const EMPHASIS_EXCLAMATION_PENALTY: f64 = 13.0;

const TRAILING_EXCLAMATION: &str = "[!?]+$";

/// Scores sentences by punctuation and markup. Patterns are compiled once
/// at construction; the scorer itself is stateless and reusable across
/// documents.
#[derive(Debug)]
pub struct FormatScorer {
    patterns: Vec<(Regex, f64)>,
    trailing_exclamation: Regex,
}

impl FormatScorer {
    /// Compile the configured pattern table.
    pub fn new(config: &SummarizerConfig) -> Result<Self, SummarizeError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|source| SummarizeError::Pattern {
                pattern: pattern.to_string(),
                source,
            })
        };

        let patterns = config
            .format_pattern_weights
            .iter()
            .map(|(pattern, delta)| compile(pattern).map(|re| (re, *delta)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            trailing_exclamation: compile(TRAILING_EXCLAMATION)?,
        })
    }

    /// Score one sentence, overwriting its format channel.
    pub fn score(&self, record: &mut ScoreRecord, sentence: &Sentence) {
        record.format_score = BASE_FORMAT_SCORE;

        if let Some(emphasis) = &sentence.emphasis {
            record.format_score += EMPHASIS_BONUS;
            if self.trailing_exclamation.is_match(emphasis) {
                record.format_score -= EMPHASIS_EXCLAMATION_PENALTY;
            }
        }

        for (pattern, delta) in &self.patterns {
            if pattern.is_match(&sentence.text) {
                record.format_score += delta;
            }
        }
    }
}
