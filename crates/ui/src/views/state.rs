/// Errors surfaced to the player as a dedicated panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The content service broke its contract and delivered an empty deck.
    NoQuestions,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::NoQuestions => {
                "The quiz arrived without any questions. Please try again."
            }
        }
    }
}
