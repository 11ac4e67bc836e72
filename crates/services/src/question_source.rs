//! The always-resolving question source contract.
//!
//! The inner [`QuestionSource`] trait may fail; the outer
//! [`QuizContentService`] never does. Any inner failure (no API key,
//! transport error, malformed content, even an empty batch) is logged and
//! replaced by the static fallback deck.

use std::sync::Arc;

use async_trait::async_trait;

use garden_core::model::{Question, QuestionId};

use crate::error::QuestionSourceError;
use crate::fallback::fallback_questions;
use crate::gemini::GeminiQuestionSource;

/// How many questions make up one session's deck.
pub const QUESTION_DECK_SIZE: usize = 15;

/// Inner fetch layer. Implementations may fail.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;
}

/// Outer adapter: wraps an optional source and guarantees a non-empty,
/// sequentially numbered deck on every call.
#[derive(Clone)]
pub struct QuizContentService {
    source: Option<Arc<dyn QuestionSource>>,
}

impl QuizContentService {
    #[must_use]
    pub fn new(source: Option<Arc<dyn QuestionSource>>) -> Self {
        Self { source }
    }

    /// Wires the Gemini source when `GEMINI_API_KEY` is present; otherwise
    /// the service serves the fallback deck only.
    #[must_use]
    pub fn from_env() -> Self {
        let source = GeminiQuestionSource::from_env()
            .map(|source| Arc::new(source) as Arc<dyn QuestionSource>);
        Self::new(source)
    }

    /// Returns true when a generator is configured.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.source.is_some()
    }

    /// Loads a deck for one session. Always resolves to a non-empty
    /// sequence; ids are renumbered 1-based regardless of what the source
    /// provided.
    pub async fn load_questions(&self) -> Vec<Question> {
        let fetched = match &self.source {
            Some(source) => source.fetch_questions().await,
            None => Err(QuestionSourceError::Disabled),
        };

        match fetched {
            Ok(questions) if !questions.is_empty() => renumber(questions),
            Ok(_) => {
                tracing::warn!("question source returned an empty deck, using fallback");
                fallback_questions()
            }
            Err(error) => {
                tracing::warn!(%error, "question fetch failed, using fallback deck");
                fallback_questions()
            }
        }
    }
}

fn renumber(questions: Vec<Question>) -> Vec<Question> {
    questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| question.with_id(QuestionId::new(index as u32 + 1)))
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
