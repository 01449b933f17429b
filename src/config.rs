//! Weight configuration for the scoring channels.
//!
//! All tables default to the tuned Estonian heuristics; every field can be
//! overridden independently from a partial JSON document (missing fields
//! keep their defaults).

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::types::ContainerKind;

/// Scoring weights, pattern tables, and the target compression rate.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Bonus keyed by the global sentence counter (1-based, never reset).
    /// Only the first few sentences of the article carry a bonus.
    pub absolute_position_weights: FxHashMap<usize, f64>,

    /// Bonus keyed by the 1-based sentence position within an article
    /// paragraph.
    pub article_position_weights: FxHashMap<usize, f64>,

    /// Bonus keyed by the 1-based sentence position within a subchapter
    /// paragraph.
    pub subchapter_position_weights: FxHashMap<usize, f64>,

    /// Ordered `(regex, delta)` pairs tested independently against each
    /// sentence's plain text. Deltas are signed and non-exclusive: every
    /// matching pattern contributes.
    pub format_pattern_weights: Vec<(String, f64)>,

    /// Weight of the normalized position channel.
    pub alpha: f64,
    /// Weight of the normalized format channel.
    pub beta: f64,
    /// Weight of the normalized frequency channel.
    pub gamma: f64,

    /// Target summary size as a fraction of the article word count.
    pub compression_rate: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            absolute_position_weights: [(1, 20.0), (2, 5.0)].into_iter().collect(),
            article_position_weights: [(1, 5.0), (2, 2.0), (3, 1.0)].into_iter().collect(),
            subchapter_position_weights: [(2, 5.0)].into_iter().collect(),
            format_pattern_weights: default_format_patterns(),
            alpha: 0.4,
            beta: 0.4,
            gamma: 0.2,
            compression_rate: 0.3,
        }
    }
}

impl SummarizerConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The relative-position bonus table for the given container kind.
    pub fn position_weights(&self, kind: ContainerKind) -> &FxHashMap<usize, f64> {
        match kind {
            ContainerKind::Article => &self.article_position_weights,
            ContainerKind::Subchapter => &self.subchapter_position_weights,
        }
    }
}

/// The canonical format pattern table, tuned for Estonian punctuation
/// conventions (`«»` and `„“` quote pairs).
fn default_format_patterns() -> Vec<(String, f64)> {
    vec![
        // Trailing exclamation/question run.
        (r"[?!]+$".to_string(), -5.0),
        // Any quote mark.
        (r#"[„“«»"]"#.to_string(), -4.0),
        // Exclamation/question immediately followed by a quote.
        (r#"[!?]+""#.to_string(), -13.0),
        // Leading quoted appositive ending in a comma.
        ("^«[^»]*,»".to_string(), -4.0),
        // Trailing colon-then-quoted span.
        (": «[^»]*»$".to_string(), -4.0),
        // Sentence fully wrapped in quotes.
        ("^«[^»]*»$".to_string(), -4.0),
    ]
}
