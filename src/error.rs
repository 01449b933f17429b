//! Error types for summarization.
//!
//! Only genuinely unrecoverable conditions surface as [`SummarizeError`]:
//! invalid document structure and missing background resources. Zero-sum
//! normalization channels and negative selection budgets have defined
//! fallbacks, and meaning-scoring failures degrade to neutral scores inside
//! the pipeline (see [`MeaningError`](crate::scoring::semantic::MeaningError)).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The document has no body blocks; there is nothing to score.
    #[error("document has no body blocks")]
    EmptyDocument,

    /// The document has no title; the selection budget depends on it.
    #[error("document has no title")]
    MissingTitle,

    /// A background resource file (reference frequencies, stop words)
    /// could not be read at startup.
    #[error("failed to read resource file {path}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line in the reference frequency file did not parse as
    /// `lemma<TAB>frequency`.
    #[error("malformed reference frequency entry on line {line}: {content:?}")]
    MalformedReference { line: usize, content: String },

    /// A format pattern in the configuration is not a valid regex.
    #[error("invalid format pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
