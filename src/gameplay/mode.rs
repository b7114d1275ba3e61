use super::*;
use serde::Deserialize;
use serde::Serialize;

/// How many rounds a game lasts.
///
/// - `Single`: one round, then game over regardless of capital
/// - `Battle`: rounds repeat until either capital is exhausted
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Single,
    Battle,
}

impl Mode {
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single)
    }
}

impl TryFrom<&str> for Mode {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "battle" => Ok(Self::Battle),
            _ => Err(Error::Configuration {
                field: "mode",
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Battle => write!(f, "battle"),
        }
    }
}
