//! estsum — extractive summarization for Estonian-language articles.
//!
//! Given an article that has already been segmented into titled blocks of
//! sentences and lemmatized (both external concerns), the engine scores
//! every sentence along independent channels, combines them into a single
//! ranking, and selects a subset under a word-count budget, emitted in
//! original document order:
//!
//! - **Position**: early sentences in the article and in each paragraph
//!   earn bonuses.
//! - **Format**: punctuation and markup heuristics (emphasis, quotes,
//!   exclamations).
//! - **Frequency**: corpus-relative lemma weights, discounted against a
//!   general-language reference table and a stop-word list.
//! - **Meaning** (optional): an injectable LLM-backed rating; absent or
//!   failing, every sentence keeps the neutral score.
//!
//! # Example
//!
//! ```
//! use estsum::{Block, Document, Paragraph, Sentence, Summarizer, SummarizerConfig, Title};
//!
//! let document = Document {
//!     title: Title::new("Ilm muutub", &["ilm", "muutuma"]),
//!     blocks: vec![Block::Paragraph(Paragraph::new(vec![
//!         Sentence::new(
//!             "Ilmateenistus lubab nädalavahetuseks vihma.",
//!             &["ilmateenistus", "lubama", "nädalavahetus", "vihm"],
//!         ),
//!         Sentence::new(
//!             "Temperatuur püsib kümne kraadi ümber.",
//!             &["temperatuur", "püsima", "kümme", "kraad", "ümber"],
//!         ),
//!     ]))],
//! };
//!
//! let summarizer = Summarizer::new(SummarizerConfig::default())?;
//! let summary = summarizer.summarize(&document)?;
//! assert_eq!(summary.title, "Ilm muutub");
//! # Ok::<(), estsum::SummarizeError>(())
//! ```
//!
//! Background resources are loaded once and shared read-only across runs;
//! all per-document state is rebuilt inside every [`Summarizer::summarize`]
//! call.

pub mod config;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;

pub use config::SummarizerConfig;
pub use error::SummarizeError;
pub use nlp::{ReferenceFrequencies, StopwordSet};
pub use pipeline::{ScoredDocument, Summarizer};
pub use scoring::{MeaningScorer, NeutralMeaning};
pub use summarizer::SummarySelector;
pub use types::{Block, Document, Paragraph, Sentence, Summary, Title};
