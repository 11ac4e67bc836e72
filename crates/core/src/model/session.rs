use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::{FlowerId, FlowerType, PlantedFlower, PlantingSpot, Question};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session has already been started")]
    AlreadyStarted,
    #[error("session is not loading questions")]
    NotLoading,
    #[error("no questions available for session")]
    NoQuestions,
    #[error("session is not in the playing phase")]
    NotPlaying,
    #[error("current question has already been answered")]
    AlreadyAnswered,
    #[error("current question has not been answered yet")]
    NotAnswered,
    #[error("session is not completed")]
    NotCompleted,
    #[error("option index {index} is out of range")]
    InvalidOption { index: usize },
}

//
// ─── PHASE & FEEDBACK ──────────────────────────────────────────────────────────
//

/// Top-level state of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Loading,
    Playing,
    Completed,
}

/// Outcome of answering the current question, shown until the player moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub message: String,
    /// The option the player picked. Lets the view dim a wrong choice
    /// distinctly from the other non-answers.
    pub selected_option: usize,
}

const CORRECT_MESSAGE: &str = "Correct! Your garden is growing!";

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The quiz session state machine.
///
/// Phases move strictly setup → loading → playing → completed, driven by
/// discrete user events plus the single question fetch. The session is a
/// plain value with explicit transitions, so it is testable without any
/// rendering harness. `score()` equals `planted_flowers().len()` at every
/// observable state: a flower is planted synchronously with each correct
/// answer, and any planting animation delay lives in the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    phase: Phase,
    selected_flower: FlowerType,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    planted: Vec<PlantedFlower>,
    feedback: Option<Feedback>,
}

impl QuizSession {
    #[must_use]
    pub fn new(selected_flower: FlowerType) -> Self {
        Self {
            phase: Phase::Setup,
            selected_flower,
            questions: Vec::new(),
            current: 0,
            score: 0,
            planted: Vec::new(),
            feedback: None,
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────
    //

    /// Picks the seed for this garden. Only meaningful during setup; the
    /// choice survives resets. Outside setup the input is ignored.
    pub fn select_flower(&mut self, kind: FlowerType) {
        if self.phase == Phase::Setup {
            self.selected_flower = kind;
        }
    }

    /// Starts the session: setup → loading, resetting progress.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` outside setup, which also
    /// guards against re-entrant starts while a fetch is pending.
    pub fn begin_loading(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Setup {
            return Err(SessionError::AlreadyStarted);
        }
        self.phase = Phase::Loading;
        self.questions.clear();
        self.current = 0;
        self.score = 0;
        self.planted.clear();
        self.feedback = None;
        Ok(())
    }

    /// Hands the fetched deck to the session: loading → playing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoading` outside the loading phase.
    /// Returns `SessionError::NoQuestions` for an empty deck. The content
    /// contract guarantees a non-empty sequence, so an empty one is a
    /// programmer error and the session refuses to enter an unplayable state.
    pub fn begin_playing(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        if self.phase != Phase::Loading {
            return Err(SessionError::NotLoading);
        }
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        self.questions = questions;
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Answers the current question.
    ///
    /// On a correct answer the score increments and a flower is planted at
    /// `spot`, with an id derived from `answered_at` (bumped if needed so ids
    /// stay strictly increasing). On a wrong answer the feedback message
    /// embeds the text of the correct option.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` outside the playing phase,
    /// `SessionError::AlreadyAnswered` if feedback is already pending (the
    /// double-answer guard; state is untouched), and
    /// `SessionError::InvalidOption` for an out-of-range index.
    pub fn answer_current(
        &mut self,
        option_index: usize,
        spot: PlantingSpot,
        answered_at: DateTime<Utc>,
    ) -> Result<&Feedback, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::NotPlaying);
        }
        if self.feedback.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }

        let question = self
            .questions
            .get(self.current)
            .ok_or(SessionError::NotPlaying)?;
        if option_index >= question.options().len() {
            return Err(SessionError::InvalidOption {
                index: option_index,
            });
        }

        let is_correct = option_index == question.correct_answer_index();
        let message = if is_correct {
            CORRECT_MESSAGE.to_string()
        } else {
            format!(
                "Not quite. The correct answer is: {}",
                question.correct_option()
            )
        };

        if is_correct {
            self.score += 1;
            let id = self.next_flower_id(answered_at);
            self.planted
                .push(PlantedFlower::new(id, self.selected_flower, spot));
        }

        let feedback = self.feedback.insert(Feedback {
            is_correct,
            message,
            selected_option: option_index,
        });
        Ok(feedback)
    }

    /// Moves past the current question's feedback: either to the next
    /// question or, after the last one, to the completed phase.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` outside the playing phase and
    /// `SessionError::NotAnswered` when there is no feedback to advance past.
    pub fn advance(&mut self) -> Result<Phase, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::NotPlaying);
        }
        if self.feedback.take().is_none() {
            return Err(SessionError::NotAnswered);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.phase = Phase::Completed;
        }
        Ok(self.phase)
    }

    /// Returns to setup for another round. The flower choice persists;
    /// everything else is cleared.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotCompleted` unless the session is completed.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Completed {
            return Err(SessionError::NotCompleted);
        }
        self.phase = Phase::Setup;
        self.questions.clear();
        self.current = 0;
        self.score = 0;
        self.planted.clear();
        self.feedback = None;
        Ok(())
    }

    fn next_flower_id(&self, answered_at: DateTime<Utc>) -> FlowerId {
        let stamped = FlowerId::new(answered_at.timestamp_millis());
        match self.planted.last() {
            Some(last) if stamped <= last.id() => FlowerId::new(last.id().value() + 1),
            _ => stamped,
        }
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn selected_flower(&self) -> FlowerType {
        self.selected_flower
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == Phase::Playing {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn planted_flowers(&self) -> &[PlantedFlower] {
        &self.planted
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(FlowerType::Sunflower)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Setup => "setup",
            Phase::Loading => "loading",
            Phase::Playing => "playing",
            Phase::Completed => "completed",
        };
        write!(f, "{label}")
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn question(id: u32, correct: usize) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Question {id}?"),
            vec![
                format!("q{id} option a"),
                format!("q{id} option b"),
                format!("q{id} option c"),
                format!("q{id} option d"),
            ],
            correct,
            "an explanation",
        )
        .unwrap()
    }

    fn spot() -> PlantingSpot {
        PlantingSpot::new(42.0, 42.0).unwrap()
    }

    fn playing_session(correct_indices: &[usize]) -> QuizSession {
        let mut session = QuizSession::new(FlowerType::Tulip);
        session.begin_loading().unwrap();
        let deck = correct_indices
            .iter()
            .enumerate()
            .map(|(i, &correct)| question(i as u32 + 1, correct))
            .collect();
        session.begin_playing(deck).unwrap();
        session
    }

    fn assert_score_matches_planted(session: &QuizSession) {
        assert_eq!(session.score() as usize, session.planted_flowers().len());
    }

    #[test]
    fn new_session_starts_in_setup() {
        let session = QuizSession::default();
        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.selected_flower(), FlowerType::Sunflower);
        assert_eq!(session.score(), 0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn select_flower_only_applies_in_setup() {
        let mut session = QuizSession::default();
        session.select_flower(FlowerType::Rose);
        assert_eq!(session.selected_flower(), FlowerType::Rose);

        session.begin_loading().unwrap();
        session.select_flower(FlowerType::Daisy);
        assert_eq!(session.selected_flower(), FlowerType::Rose);
    }

    #[test]
    fn duplicate_start_is_rejected() {
        let mut session = QuizSession::default();
        session.begin_loading().unwrap();
        assert_eq!(
            session.begin_loading().unwrap_err(),
            SessionError::AlreadyStarted
        );
        assert_eq!(session.phase(), Phase::Loading);
    }

    #[test]
    fn empty_deck_is_a_fatal_content_error() {
        let mut session = QuizSession::default();
        session.begin_loading().unwrap();
        assert_eq!(
            session.begin_playing(Vec::new()).unwrap_err(),
            SessionError::NoQuestions
        );
        assert_ne!(session.phase(), Phase::Playing);
    }

    #[test]
    fn begin_playing_requires_loading_phase() {
        let mut session = QuizSession::default();
        assert_eq!(
            session.begin_playing(vec![question(1, 0)]).unwrap_err(),
            SessionError::NotLoading
        );
    }

    #[test]
    fn correct_answer_plants_a_flower_synchronously() {
        let mut session = playing_session(&[1]);
        let feedback = session
            .answer_current(1, spot(), fixed_now())
            .unwrap()
            .clone();

        assert!(feedback.is_correct);
        assert_eq!(feedback.message, CORRECT_MESSAGE);
        assert_eq!(feedback.selected_option, 1);
        assert_eq!(session.score(), 1);
        assert_eq!(session.planted_flowers().len(), 1);
        let flower = session.planted_flowers()[0];
        assert_eq!(flower.kind(), FlowerType::Tulip);
        assert_eq!(flower.x(), 42.0);
        assert_score_matches_planted(&session);
    }

    #[test]
    fn wrong_answer_embeds_correct_option_text() {
        let mut session = playing_session(&[2]);
        let feedback = session
            .answer_current(0, spot(), fixed_now())
            .unwrap()
            .clone();

        assert!(!feedback.is_correct);
        assert!(feedback.message.contains("q1 option c"));
        assert_eq!(feedback.selected_option, 0);
        assert_eq!(session.score(), 0);
        assert!(session.planted_flowers().is_empty());
    }

    #[test]
    fn second_answer_before_advance_changes_nothing() {
        let mut session = playing_session(&[0]);
        session.answer_current(0, spot(), fixed_now()).unwrap();
        let before = session.clone();

        let err = session
            .answer_current(3, spot(), fixed_now())
            .unwrap_err();
        assert_eq!(err, SessionError::AlreadyAnswered);
        assert_eq!(session, before);
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut session = playing_session(&[0]);
        assert_eq!(
            session
                .answer_current(4, spot(), fixed_now())
                .unwrap_err(),
            SessionError::InvalidOption { index: 4 }
        );
        assert!(session.feedback().is_none());
    }

    #[test]
    fn advance_requires_feedback() {
        let mut session = playing_session(&[0]);
        assert_eq!(session.advance().unwrap_err(), SessionError::NotAnswered);
    }

    #[test]
    fn two_question_walkthrough() {
        // Scenario: two questions with correct indices [1, 0].
        let mut session = playing_session(&[1, 0]);

        let feedback = session
            .answer_current(1, spot(), fixed_now())
            .unwrap()
            .clone();
        assert!(feedback.is_correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.planted_flowers().len(), 1);

        assert_eq!(session.advance().unwrap(), Phase::Playing);
        assert_eq!(session.current_index(), 1);

        let feedback = session
            .answer_current(2, spot(), fixed_now())
            .unwrap()
            .clone();
        assert!(!feedback.is_correct);
        assert!(feedback.message.contains("q2 option a"));
        assert_eq!(session.score(), 1);

        assert_eq!(session.advance().unwrap(), Phase::Completed);
        assert_eq!(session.score(), 1);
        assert_score_matches_planted(&session);
    }

    #[test]
    fn final_correct_answer_then_advance_completes() {
        let mut session = playing_session(&[0, 0]);
        session.answer_current(0, spot(), fixed_now()).unwrap();
        session.advance().unwrap();
        session.answer_current(0, spot(), fixed_now()).unwrap();

        assert_eq!(session.advance().unwrap(), Phase::Completed);
        assert!(session.is_complete());
        assert_eq!(session.score(), 2);
        assert_eq!(session.planted_flowers().len(), 2);

        // Terminal until reset: late inputs leave score and garden untouched.
        assert!(session.answer_current(0, spot(), fixed_now()).is_err());
        assert!(session.advance().is_err());
        assert_eq!(session.score(), 2);
        assert_eq!(session.planted_flowers().len(), 2);
    }

    #[test]
    fn index_stays_in_bounds_while_playing() {
        let mut session = playing_session(&[0, 0, 0]);
        while session.phase() == Phase::Playing {
            assert!(session.current_index() < session.total_questions());
            assert!(session.current_question().is_some());
            session.answer_current(0, spot(), fixed_now()).unwrap();
            session.advance().unwrap();
        }
        assert!(session.is_complete());
    }

    #[test]
    fn reset_clears_progress_but_keeps_flower_choice() {
        let mut session = playing_session(&[0]);
        session.select_flower(FlowerType::Daisy); // ignored while playing
        session.answer_current(0, spot(), fixed_now()).unwrap();
        session.advance().unwrap();
        assert!(session.is_complete());

        session.reset().unwrap();
        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.score(), 0);
        assert!(session.planted_flowers().is_empty());
        assert_eq!(session.current_index(), 0);
        assert!(session.feedback().is_none());
        assert_eq!(session.selected_flower(), FlowerType::Tulip);
    }

    #[test]
    fn reset_is_only_valid_from_completed() {
        let mut session = playing_session(&[0]);
        assert_eq!(session.reset().unwrap_err(), SessionError::NotCompleted);
    }

    #[test]
    fn flower_ids_stay_strictly_increasing_within_a_millisecond() {
        let now = fixed_now();
        let mut session = playing_session(&[0, 0]);
        session.answer_current(0, spot(), now).unwrap();
        session.advance().unwrap();
        session.answer_current(0, spot(), now).unwrap();

        let flowers = session.planted_flowers();
        assert!(flowers[0].id() < flowers[1].id());
    }

    #[test]
    fn flower_ids_follow_the_clock_across_answers() {
        let now = fixed_now();
        let mut session = playing_session(&[0, 0]);
        session.answer_current(0, spot(), now).unwrap();
        session.advance().unwrap();
        session
            .answer_current(0, spot(), now + Duration::seconds(5))
            .unwrap();

        let flowers = session.planted_flowers();
        assert_eq!(flowers[0].id().value(), now.timestamp_millis());
        assert_eq!(
            flowers[1].id().value(),
            (now + Duration::seconds(5)).timestamp_millis()
        );
    }

    #[test]
    fn session_round_trips_through_serde() {
        let mut session = playing_session(&[1, 0]);
        session.answer_current(1, spot(), fixed_now()).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: QuizSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
