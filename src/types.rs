//! Document model shared across the scoring stages.
//!
//! Documents arrive pre-segmented and pre-lemmatized from an external
//! collaborator (HTML conversion and morphological analysis are not this
//! crate's concern). The model mirrors that contract: a titled article made
//! of ordered blocks, where each block is either a plain paragraph or a
//! subchapter containing its own paragraphs.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Article title with its lemmatized form.
///
/// The lemma count feeds the selection budget (the summary word budget is
/// reduced by the title length, see the selector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub lemmas: Vec<String>,
}

impl Title {
    pub fn new(text: impl Into<String>, lemmas: &[&str]) -> Self {
        Self {
            text: text.into(),
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Title length in words (lemma count).
    pub fn word_count(&self) -> usize {
        self.lemmas.len()
    }
}

/// One sentence of the article.
///
/// `emphasis` carries the text of a bold/italic sub-span when the source
/// markup had one; the format scorer rewards emphasized sentences but
/// penalizes headline-like emphasis ending in `!`/`?`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    #[serde(default)]
    pub emphasis: Option<String>,
    pub lemmas: Vec<String>,
}

impl Sentence {
    pub fn new(text: impl Into<String>, lemmas: &[&str]) -> Self {
        Self {
            text: text.into(),
            emphasis: None,
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn with_emphasis(mut self, emphasis: impl Into<String>) -> Self {
        self.emphasis = Some(emphasis.into());
        self
    }

    /// Sentence length in words (lemma count).
    pub fn word_count(&self) -> usize {
        self.lemmas.len()
    }
}

/// An ordered run of sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }
}

/// A top-level document block: either a plain paragraph or a subchapter
/// grouping several paragraphs under its own heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Subchapter(Vec<Paragraph>),
}

/// A full article ready for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: Title,
    pub blocks: Vec<Block>,
}

/// Which container a paragraph belongs to. The position scorer applies
/// different relative-position bonuses per container kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Article,
    Subchapter,
}

/// The finished summary: title plus the selected sentences in original
/// document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub sentences: Vec<String>,
}

impl Summary {
    /// Number of selected sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Write the summary one sentence per line.
    pub fn write_to<W: Write>(&self, mut sink: W) -> io::Result<()> {
        for sentence in &self.sentences {
            writeln!(sink, "{sentence}")?;
        }
        Ok(())
    }
}
