mod flower;
mod ids;
mod question;
mod session;

pub use flower::{FlowerError, FlowerType, PlantedFlower, PlantingSpot, SPOT_MAX, SPOT_MIN};
pub use ids::{FlowerId, QuestionId};
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use session::{Feedback, Phase, QuizSession, SessionError};
