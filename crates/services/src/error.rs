//! Shared error types for the services crate.

use thiserror::Error;

use garden_core::model::QuestionError;

/// Errors emitted by the inner question source layer.
///
/// None of these reach the session: the outer content adapter absorbs them
/// all and substitutes the fallback deck.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question generation is not configured")]
    Disabled,
    #[error("question source returned an empty response")]
    EmptyResponse,
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("generated questions were not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("generated question was malformed: {0}")]
    InvalidQuestion(#[from] QuestionError),
}
