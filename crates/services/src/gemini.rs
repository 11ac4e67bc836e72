//! Inner question source: a Gemini `generateContent` client.
//!
//! This layer is allowed to fail; the outer [`QuizContentService`]
//! (`question_source` module) turns any failure into the fallback deck.
//!
//! [`QuizContentService`]: crate::question_source::QuizContentService

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use garden_core::model::{Question, QuestionId};

use crate::error::QuestionSourceError;
use crate::question_source::{QUESTION_DECK_SIZE, QuestionSource};

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// Reads the generator configuration from the environment. A missing or
    /// blank `GEMINI_API_KEY` is a valid state (the game falls back to the
    /// static deck), so this returns `None` rather than an error.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GEMINI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
        let model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-3-flash-preview".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Fetches a quiz deck from the Gemini API as structured JSON.
#[derive(Clone)]
pub struct GeminiQuestionSource {
    client: Client,
    config: GeminiConfig,
    question_count: usize,
}

impl GeminiQuestionSource {
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            question_count: QUESTION_DECK_SIZE,
        }
    }

    /// Builds a source from the environment, or `None` when no API key is
    /// configured.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        GeminiConfig::from_env().map(Self::new)
    }

    #[must_use]
    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }

    fn prompt(&self) -> String {
        format!(
            "Generate {count} multiple-choice questions about principles of human \
             research ethics (e.g. the Belmont Report, informed consent, vulnerable \
             populations, beneficence, justice, privacy). Each question must have \
             exactly 4 options and one correct answer. Provide a short explanation \
             for the correct answer.",
            count = self.question_count
        )
    }

    fn request_payload(&self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: self.prompt(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: question_deck_schema(),
            },
        }
    }
}

#[async_trait]
impl QuestionSource for GeminiQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let response = self
            .client
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&self.request_payload())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(QuestionSourceError::EmptyResponse)?;

        parse_question_deck(&text)
    }
}

/// Parses the model's JSON text into validated questions. Ids are assigned
/// positionally here; the content adapter renumbers again after filtering.
pub(crate) fn parse_question_deck(text: &str) -> Result<Vec<Question>, QuestionSourceError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(text)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::new(
                QuestionId::new(index as u32 + 1),
                record.text,
                record.options,
                record.correct_answer_index,
                record.explanation,
            )
            .map_err(QuestionSourceError::from)
        })
        .collect()
}

fn question_deck_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "INTEGER" },
                "text": { "type": "STRING", "description": "The question text" },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Exactly 4 options"
                },
                "correctAnswerIndex": {
                    "type": "INTEGER",
                    "description": "Index of the correct option (0-3)"
                },
                "explanation": {
                    "type": "STRING",
                    "description": "Why the answer is correct"
                }
            },
            "required": ["text", "options", "correctAnswerIndex", "explanation"]
        }
    })
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    // Source-provided ids are ignored; the caller renumbers sequentially.
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<u32>,
    text: String,
    options: Vec<String>,
    correct_answer_index: usize,
    explanation: String,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
