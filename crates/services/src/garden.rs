use rand::Rng;

use garden_core::Clock;
use garden_core::model::{
    Phase, PlantedFlower, PlantingSpot, QuizSession, SPOT_MAX, SPOT_MIN, SessionError,
};

use crate::question_source::QuizContentService;

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub message: String,
    /// The flower planted for a correct answer, already recorded in the
    /// session. Exposed so the presentation layer can delay its reveal.
    pub planted: Option<PlantedFlower>,
}

/// Result of advancing past feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Continue,
    Completed { score: u32 },
}

/// Orchestrates a quiz session: question loading, answer handling with
/// random planting positions, and advancement.
#[derive(Clone)]
pub struct GardenService {
    clock: Clock,
    content: QuizContentService,
}

impl GardenService {
    #[must_use]
    pub fn new(clock: Clock, content: QuizContentService) -> Self {
        Self { clock, content }
    }

    /// Builds a service wired from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Clock::default_clock(), QuizContentService::from_env())
    }

    /// Returns true when a question generator is configured (otherwise every
    /// session plays the fallback deck).
    #[must_use]
    pub fn generator_enabled(&self) -> bool {
        self.content.enabled()
    }

    /// Loads a deck for one session. Never fails and never returns an empty
    /// sequence.
    pub async fn load_questions(&self) -> Vec<garden_core::model::Question> {
        self.content.load_questions().await
    }

    /// Drives a session from setup through loading into playing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` when the session is past setup.
    /// `SessionError::NoQuestions` is unreachable through this path because
    /// the content contract guarantees a non-empty deck.
    pub async fn start(&self, session: &mut QuizSession) -> Result<(), SessionError> {
        session.begin_loading()?;
        let questions = self.content.load_questions().await;
        session.begin_playing(questions)
    }

    /// Answers the current question, drawing a uniform random planting spot.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` for out-of-phase or duplicate answers;
    /// callers treat those as no-ops.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        option_index: usize,
    ) -> Result<AnswerOutcome, SessionError> {
        let spot = random_spot();
        let (is_correct, message) = {
            let feedback = session.answer_current(option_index, spot, self.clock.now())?;
            (feedback.is_correct, feedback.message.clone())
        };

        let planted = if is_correct {
            session.planted_flowers().last().copied()
        } else {
            None
        };

        Ok(AnswerOutcome {
            is_correct,
            message,
            planted,
        })
    }

    /// Advances past the current feedback.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` when there is no feedback to advance past.
    pub fn advance(&self, session: &mut QuizSession) -> Result<SessionOutcome, SessionError> {
        match session.advance()? {
            Phase::Completed => Ok(SessionOutcome::Completed {
                score: session.score(),
            }),
            _ => Ok(SessionOutcome::Continue),
        }
    }
}

fn random_spot() -> PlantingSpot {
    let mut rng = rand::rng();
    PlantingSpot::clamped(
        rng.random_range(SPOT_MIN..=SPOT_MAX),
        rng.random_range(SPOT_MIN..=SPOT_MAX),
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
