use crate::Price;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;

/// A trivia prompt with a numeric answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub answer: Price,
    pub units: String,
}

impl Question {
    pub fn new(text: &str, answer: Price, units: &str) -> Self {
        Self {
            text: text.to_string(),
            answer,
            units: units.to_string(),
        }
    }
    /// Finite and within [`crate::MAXIMUM_ANSWER`] in magnitude.
    pub fn is_playable(&self) -> bool {
        self.answer.is_finite() && self.answer.abs() <= crate::MAXIMUM_ANSWER
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (in {})", self.text, self.units)
    }
}

/// Supplies one question per round. `None` means the supply ran dry.
pub trait QuestionProvider {
    fn question(&mut self, rng: &mut dyn RngCore) -> Option<Question>;
}
