//! Summarization pipeline — orchestrates the scoring passes over one
//! document.

pub mod runner;

pub use runner::{ScoredDocument, Summarizer};
