#![forbid(unsafe_code)]

pub mod error;
pub mod fallback;
pub mod garden;
pub mod gemini;
pub mod question_source;

pub use garden_core::Clock;

pub use error::QuestionSourceError;
pub use fallback::fallback_questions;
pub use garden::{AnswerOutcome, GardenService, SessionOutcome};
pub use gemini::{GeminiConfig, GeminiQuestionSource};
pub use question_source::{QUESTION_DECK_SIZE, QuestionSource, QuizContentService};
