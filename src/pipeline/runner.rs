//! Pipeline runner — sequences the scoring passes over one document.
//!
//! [`Summarizer`] holds only immutable, shareable state: the configuration,
//! the compiled format patterns, the background resources, and the meaning
//! scorer. All per-document state (score records, lemma table, the global
//! sentence counter) lives in a per-call context built fresh inside
//! [`Summarizer::summarize`], so one engine can serve sequential — or,
//! behind a shared reference, concurrent — requests without score
//! corruption.
//!
//! Pass order:
//! 1. Traversal: position + format scoring and lemma counting, one walk.
//! 2. Lemma weight transform (needs the whole document's counts).
//! 3. Frequency scoring (needs the finished weights).
//! 4. Meaning scoring (best effort; failures keep neutral scores).
//! 5. Normalization, combination, selection.

use tracing::{debug, info_span, warn};

use crate::config::SummarizerConfig;
use crate::error::SummarizeError;
use crate::nlp::{ReferenceFrequencies, StopwordSet};
use crate::scoring::{
    FormatScorer, FrequencyScorer, LemmaFrequencyTable, MeaningScorer, NeutralMeaning,
    PositionScorer, ScoreCombiner, ScoreNormalizer, ScoreRecord, ScoredSentence,
};
use crate::summarizer::SummarySelector;
use crate::types::{Block, ContainerKind, Document, Paragraph, Summary};

/// A fully scored document: every sentence with its finalized record, plus
/// the counts the selector needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    /// Sentences in document order.
    pub sentences: Vec<ScoredSentence>,
    pub article_word_count: usize,
    pub title_word_count: usize,
}

/// The summarization engine.
#[derive(Debug)]
pub struct Summarizer<M = NeutralMeaning> {
    config: SummarizerConfig,
    format_scorer: FormatScorer,
    stopwords: StopwordSet,
    reference: ReferenceFrequencies,
    meaning: M,
}

impl Summarizer<NeutralMeaning> {
    /// Build an engine with the given configuration, no background
    /// resources, and neutral meaning scoring.
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        let format_scorer = FormatScorer::new(&config)?;
        Ok(Self {
            config,
            format_scorer,
            stopwords: StopwordSet::empty(),
            reference: ReferenceFrequencies::empty(),
            meaning: NeutralMeaning,
        })
    }
}

impl<M: MeaningScorer> Summarizer<M> {
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_reference(mut self, reference: ReferenceFrequencies) -> Self {
        self.reference = reference;
        self
    }

    /// Swap in a meaning scorer (e.g. the LLM-backed one).
    pub fn with_meaning_scorer<N: MeaningScorer>(self, meaning: N) -> Summarizer<N> {
        Summarizer {
            config: self.config,
            format_scorer: self.format_scorer,
            stopwords: self.stopwords,
            reference: self.reference,
            meaning,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Run the full pipeline and return the selected summary.
    pub fn summarize(&self, document: &Document) -> Result<Summary, SummarizeError> {
        let scored = self.score_document(document)?;

        let selector = SummarySelector::new(self.config.compression_rate);
        let selected = selector.select(
            &scored.sentences,
            scored.article_word_count,
            scored.title_word_count,
        );
        debug!(
            selected = selected.len(),
            total = scored.sentences.len(),
            "summary selected"
        );

        Ok(Summary {
            title: document.title.text.clone(),
            sentences: selected.iter().map(|s| s.text.clone()).collect(),
        })
    }

    /// Run the scoring passes without selection, returning every
    /// sentence's finalized record.
    pub fn score_document(&self, document: &Document) -> Result<ScoredDocument, SummarizeError> {
        validate(document)?;

        let span = info_span!("summarize", title = %document.title.text);
        let _guard = span.enter();

        // Pass 1: position + format scoring and lemma counting.
        let mut position_scorer = PositionScorer::new(&self.config);
        let mut lemma_table = LemmaFrequencyTable::new();
        let mut sentences: Vec<ScoredSentence> = Vec::new();

        for block in &document.blocks {
            match block {
                Block::Paragraph(paragraph) => self.traverse_paragraph(
                    paragraph,
                    ContainerKind::Article,
                    &mut position_scorer,
                    &mut lemma_table,
                    &mut sentences,
                ),
                Block::Subchapter(paragraphs) => {
                    for paragraph in paragraphs {
                        self.traverse_paragraph(
                            paragraph,
                            ContainerKind::Subchapter,
                            &mut position_scorer,
                            &mut lemma_table,
                            &mut sentences,
                        );
                    }
                }
            }
        }
        debug!(
            sentences = sentences.len(),
            words = lemma_table.article_word_count(),
            "document traversed"
        );

        // Pass 2: lemma counts become weights.
        let weights = lemma_table.into_weights(&self.stopwords, &self.reference);

        // Pass 3: frequency channel.
        let frequency_scorer = FrequencyScorer::new(&weights);
        for sentence in sentences.iter_mut() {
            let ScoredSentence { lemmas, record, .. } = sentence;
            frequency_scorer.score(record, lemmas);
        }

        // Meaning enrichment, best effort.
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        match self.meaning.score(&document.title.text, &texts) {
            Ok(values) => {
                for (sentence, value) in sentences.iter_mut().zip(values) {
                    sentence.record.meaning_score = value;
                }
            }
            Err(error) => {
                warn!(%error, "meaning scoring failed, keeping neutral scores");
            }
        }

        // Normalize and combine.
        ScoreNormalizer.normalize(&mut sentences);
        let combiner = ScoreCombiner::from_config(&self.config);
        for sentence in sentences.iter_mut() {
            combiner.combine(&mut sentence.record);
        }

        Ok(ScoredDocument {
            sentences,
            article_word_count: weights.article_word_count(),
            title_word_count: document.title.word_count(),
        })
    }

    fn traverse_paragraph(
        &self,
        paragraph: &Paragraph,
        kind: ContainerKind,
        position_scorer: &mut PositionScorer<'_>,
        lemma_table: &mut LemmaFrequencyTable,
        sentences: &mut Vec<ScoredSentence>,
    ) {
        for (index, sentence) in paragraph.sentences.iter().enumerate() {
            let mut record = ScoreRecord::default();
            position_scorer.score(&mut record, index + 1, kind);
            self.format_scorer.score(&mut record, sentence);

            let lemmas: Vec<String> = sentence.lemmas.iter().map(|l| l.to_lowercase()).collect();
            lemma_table.observe(&lemmas);

            sentences.push(ScoredSentence {
                text: sentence.text.clone(),
                lemmas,
                record,
            });
        }
    }
}

fn validate(document: &Document) -> Result<(), SummarizeError> {
    if document.title.text.trim().is_empty() {
        return Err(SummarizeError::MissingTitle);
    }
    if document.blocks.is_empty() {
        return Err(SummarizeError::EmptyDocument);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::semantic::MeaningError;
    use crate::types::{Sentence, Title};

    fn two_paragraph_document() -> Document {
        Document {
            title: Title::new("Koerte elu linnas", &["koer", "elu", "linn"]),
            blocks: vec![
                Block::Paragraph(Paragraph::new(vec![
                    Sentence::new(
                        "Koerad vajavad linnas rohkem liikumisruumi.",
                        &["koer", "vajama", "linn", "rohkem", "liikumisruum"],
                    ),
                    Sentence::new(
                        "Parkides on selleks head võimalused.",
                        &["park", "olema", "see", "hea", "võimalus"],
                    ),
                ])),
                Block::Subchapter(vec![Paragraph::new(vec![
                    Sentence::new(
                        "Omanikud peavad koeri rihma otsas hoidma.",
                        &["omanik", "pidama", "koer", "rihm", "ots", "hoidma"],
                    ),
                    Sentence::new(
                        "Koerte väljak on siiski vabam koht.",
                        &["koer", "väljak", "olema", "siiski", "vaba", "koht"],
                    ),
                ])]),
            ],
        }
    }

    #[test]
    fn test_missing_title_fails_fast() {
        let mut doc = two_paragraph_document();
        doc.title.text = "  ".to_string();
        let err = Summarizer::new(SummarizerConfig::default())
            .unwrap()
            .summarize(&doc)
            .unwrap_err();
        assert!(matches!(err, SummarizeError::MissingTitle));
    }

    #[test]
    fn test_empty_body_fails_fast() {
        let mut doc = two_paragraph_document();
        doc.blocks.clear();
        let err = Summarizer::new(SummarizerConfig::default())
            .unwrap()
            .summarize(&doc)
            .unwrap_err();
        assert!(matches!(err, SummarizeError::EmptyDocument));
    }

    #[test]
    fn test_score_document_counts() {
        let summarizer = Summarizer::new(SummarizerConfig::default()).unwrap();
        let scored = summarizer.score_document(&two_paragraph_document()).unwrap();

        assert_eq!(scored.sentences.len(), 4);
        assert_eq!(scored.article_word_count, 22);
        assert_eq!(scored.title_word_count, 3);
    }

    #[test]
    fn test_global_counter_spans_blocks() {
        let summarizer = Summarizer::new(SummarizerConfig::default()).unwrap();
        let scored = summarizer.score_document(&two_paragraph_document()).unwrap();

        // Raw position scores before normalization are not observable
        // here, but the ordering they induce is: the first sentence got
        // the global bonus 20 + article bonus 5 and must dominate the
        // position channel.
        let first = scored.sentences[0].record.position_score;
        for other in &scored.sentences[1..] {
            assert!(first > other.record.position_score);
        }
    }

    #[test]
    fn test_lemmas_are_lowercased_once() {
        let doc = Document {
            title: Title::new("Tallinn", &["Tallinn"]),
            blocks: vec![Block::Paragraph(Paragraph::new(vec![Sentence::new(
                "Tallinn on pealinn.",
                &["Tallinn", "olema", "pealinn"],
            )]))],
        };
        let summarizer = Summarizer::new(SummarizerConfig::default()).unwrap();
        let scored = summarizer.score_document(&doc).unwrap();
        assert_eq!(scored.sentences[0].lemmas[0], "tallinn");
    }

    /// Meaning scorer that always fails, for fallback testing.
    struct FailingMeaning;

    impl MeaningScorer for FailingMeaning {
        fn score(&self, _title: &str, sentences: &[&str]) -> Result<Vec<f64>, MeaningError> {
            Err(MeaningError::CountMismatch {
                expected: sentences.len(),
                actual: 0,
            })
        }
    }

    /// Meaning scorer that zeroes every sentence.
    struct ZeroMeaning;

    impl MeaningScorer for ZeroMeaning {
        fn score(&self, _title: &str, sentences: &[&str]) -> Result<Vec<f64>, MeaningError> {
            Ok(vec![0.0; sentences.len()])
        }
    }

    #[test]
    fn test_meaning_failure_keeps_neutral_scores() {
        let doc = two_paragraph_document();
        let neutral = Summarizer::new(SummarizerConfig::default())
            .unwrap()
            .score_document(&doc)
            .unwrap();
        let fallback = Summarizer::new(SummarizerConfig::default())
            .unwrap()
            .with_meaning_scorer(FailingMeaning)
            .score_document(&doc)
            .unwrap();

        assert_eq!(neutral, fallback);
        for sentence in &fallback.sentences {
            assert_eq!(sentence.record.meaning_score, 1.0);
        }
    }

    #[test]
    fn test_meaning_scores_multiply_totals() {
        let doc = two_paragraph_document();
        let scored = Summarizer::new(SummarizerConfig::default())
            .unwrap()
            .with_meaning_scorer(ZeroMeaning)
            .score_document(&doc)
            .unwrap();

        for sentence in &scored.sentences {
            assert_eq!(sentence.record.total_score, 0.0);
        }
    }

    #[test]
    fn test_duplicate_sentences_score_independently() {
        let doc = Document {
            title: Title::new("Kordused", &["kordus"]),
            blocks: vec![Block::Paragraph(Paragraph::new(vec![
                Sentence::new("Sama lause.", &["sama", "lause"]),
                Sentence::new("Sama lause.", &["sama", "lause"]),
            ]))],
        };
        let scored = Summarizer::new(SummarizerConfig::default())
            .unwrap()
            .score_document(&doc)
            .unwrap();

        // Two records, not one: identical text no longer collapses.
        assert_eq!(scored.sentences.len(), 2);
        // And they differ where position says they should.
        assert_ne!(
            scored.sentences[0].record.position_score,
            scored.sentences[1].record.position_score
        );
    }
}
