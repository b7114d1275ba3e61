use rand::Rng;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;

/// One side of the duel.
///
/// Also doubles as the mover: whichever party must act in the current phase.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Player,
    Bot,
}

impl Party {
    /// The opposing side.
    pub fn other(&self) -> Self {
        match self {
            Self::Player => Self::Bot,
            Self::Bot => Self::Player,
        }
    }
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }
    pub fn is_bot(&self) -> bool {
        matches!(self, Self::Bot)
    }
    /// Fair coin flip, used to pick the first mover of a round.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        if rng.random_bool(0.5) {
            Self::Player
        } else {
            Self::Bot
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Bot => write!(f, "bot"),
        }
    }
}
