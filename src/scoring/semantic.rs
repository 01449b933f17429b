//! Optional meaning-score enrichment via an external language model.
//!
//! The pipeline batches every sentence, numbered in document order, into a
//! single request together with the article title and a fixed rating
//! rubric, and expects one decimal number per line back — same count, same
//! order, decimal comma tolerated. Meaning scoring is best-effort: any
//! failure leaves every sentence at the neutral score 1.0 and never aborts
//! the summarization.
//!
//! The scorer is an injectable capability so the core stays testable
//! without network access: [`NeutralMeaning`] is the no-op default, and
//! [`LlmMeaningScorer`] (behind the `llm` feature) talks to an
//! OpenAI-compatible chat completion endpoint.

use thiserror::Error;

/// Errors internal to meaning scoring. The pipeline downgrades all of
/// these to a warning and keeps neutral scores.
#[derive(Debug, Error)]
pub enum MeaningError {
    #[cfg(feature = "llm")]
    #[error("meaning-score request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unparseable meaning score {value:?} on line {line}")]
    Malformed { line: usize, value: String },

    #[error("expected {expected} meaning scores, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

/// Rates each sentence's importance on a 0.0–1.0 scale.
pub trait MeaningScorer {
    /// Return exactly one score per input sentence, in order.
    fn score(&self, title: &str, sentences: &[&str]) -> Result<Vec<f64>, MeaningError>;
}

/// No-op implementation: every sentence keeps the neutral score 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralMeaning;

impl MeaningScorer for NeutralMeaning {
    fn score(&self, _title: &str, sentences: &[&str]) -> Result<Vec<f64>, MeaningError> {
        Ok(vec![1.0; sentences.len()])
    }
}

/// Parse a newline-delimited decimal response. Decimal commas are
/// normalized to points; blank lines are skipped; the value count must
/// match the submitted sentence count exactly.
pub fn parse_meaning_response(body: &str, expected: usize) -> Result<Vec<f64>, MeaningError> {
    let mut scores = Vec::with_capacity(expected);
    for (idx, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: f64 = line
            .replace(',', ".")
            .parse()
            .map_err(|_| MeaningError::Malformed {
                line: idx + 1,
                value: line.to_string(),
            })?;
        scores.push(value);
    }
    if scores.len() != expected {
        return Err(MeaningError::CountMismatch {
            expected,
            actual: scores.len(),
        });
    }
    Ok(scores)
}

#[cfg(feature = "llm")]
pub use llm::LlmMeaningScorer;

#[cfg(feature = "llm")]
mod llm {
    use std::time::Duration;

    use serde::{Deserialize, Serialize};

    use super::{parse_meaning_response, MeaningError, MeaningScorer};

    #[derive(Serialize)]
    struct ChatRequest<'a> {
        model: &'a str,
        messages: Vec<ChatMessage<'a>>,
    }

    #[derive(Serialize)]
    struct ChatMessage<'a> {
        role: &'a str,
        content: String,
    }

    #[derive(Deserialize)]
    struct ChatResponse {
        choices: Vec<ChatChoice>,
    }

    #[derive(Deserialize)]
    struct ChatChoice {
        message: ResponseMessage,
    }

    #[derive(Deserialize)]
    struct ResponseMessage {
        content: String,
    }

    /// Meaning scorer backed by an OpenAI-compatible chat completion
    /// endpoint. The whole request is bounded by a client-level timeout
    /// and is never retried.
    pub struct LlmMeaningScorer {
        client: reqwest::blocking::Client,
        endpoint: String,
        api_key: String,
        model: String,
    }

    impl LlmMeaningScorer {
        pub fn new(
            endpoint: impl Into<String>,
            api_key: impl Into<String>,
            model: impl Into<String>,
            timeout: Duration,
        ) -> Result<Self, MeaningError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()?;
            Ok(Self {
                client,
                endpoint: endpoint.into(),
                api_key: api_key.into(),
                model: model.into(),
            })
        }

        fn rubric(title: &str) -> String {
            format!(
                "Te olete sisukokkuvõtja. Teile on antud nimekiri lausetest \
                 pikemast tekstist ning pealkiri: \"{title}\". Hinnake iga \
                 lause olulisust skaalal 0.0 kuni 1.0:\n\
                 1.0 — väga oluline, keskse sisuga lause\n\
                 0.5–0.9 — tähtis või täiendav, toetab põhisisu\n\
                 0.1–0.4 — vähem tähtis, aga teemaga seotud\n\
                 0.0 — ebaoluline või teemast kõrvalekalduv\n\
                 Tagastage iga hinnang eraldi real, täpselt samas järjekorras \
                 kui sisendlaused, ilma muu tekstita."
            )
        }

        fn batch(sentences: &[&str]) -> String {
            sentences
                .iter()
                .enumerate()
                .map(|(i, s)| format!("{}. {}", i + 1, s))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    impl MeaningScorer for LlmMeaningScorer {
        fn score(&self, title: &str, sentences: &[&str]) -> Result<Vec<f64>, MeaningError> {
            let request = ChatRequest {
                model: &self.model,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: Self::rubric(title),
                    },
                    ChatMessage {
                        role: "user",
                        content: Self::batch(sentences),
                    },
                ],
            };

            let response: ChatResponse = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()?
                .error_for_status()?
                .json()?;

            let content = response
                .choices
                .first()
                .map(|c| c.message.content.as_str())
                .unwrap_or("");
            parse_meaning_response(content, sentences.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_scorer_returns_ones() {
        let scores = NeutralMeaning.score("Pealkiri", &["a", "b", "c"]).unwrap();
        assert_eq!(scores, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_plain_response() {
        let scores = parse_meaning_response("0.2\n0.7\n1.0\n", 3).unwrap();
        assert_eq!(scores, vec![0.2, 0.7, 1.0]);
    }

    #[test]
    fn test_parse_normalizes_decimal_comma() {
        let scores = parse_meaning_response("0,5\n1,0\n", 2).unwrap();
        assert_eq!(scores, vec![0.5, 1.0]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let scores = parse_meaning_response("\n0.3\n\n0.9\n\n", 2).unwrap();
        assert_eq!(scores, vec![0.3, 0.9]);
    }

    #[test]
    fn test_count_mismatch_is_an_error() {
        let err = parse_meaning_response("0.5\n0.5\n", 3).unwrap_err();
        assert!(matches!(
            err,
            MeaningError::CountMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_garbage_line_is_malformed() {
        let err = parse_meaning_response("0.5\nkindlasti\n", 2).unwrap_err();
        assert!(matches!(err, MeaningError::Malformed { line: 2, .. }));
    }
}
