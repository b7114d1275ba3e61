use super::*;
use crate::Price;
use crate::Width;

/// A player command that breaks the rules. The game is left untouched and
/// the caller may resubmit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("invalid {field}: {input:?} is not a number")]
    Malformed { field: &'static str, input: String },
    #[error("width must be at least {minimum}, got {actual}")]
    WidthTooSmall { minimum: Width, actual: Width },
    #[error("width must be at most {maximum}, got {actual}")]
    WidthTooLarge { maximum: Width, actual: Width },
    #[error("width reduction must be at least 10%: expected at most {maximum}, got {actual}")]
    ReductionTooSmall { maximum: Width, actual: Width },
    #[error("width {width} cannot be reduced any further, make a market instead")]
    Irreducible { width: Width },
    #[error("spread must equal the current width: expected {expected}, got {actual}")]
    SpreadMismatch { expected: Width, actual: Price },
    #[error("bid must be at least {minimum}, got {actual}")]
    BidTooLow { minimum: Price, actual: Price },
    #[error("invalid trade action {input:?}: expected buy or sell")]
    UnknownTrade { input: String },
    #[error("{command} is not allowed during {phase} with {mover} to move")]
    OutOfTurn {
        command: &'static str,
        phase: Phase,
        mover: Party,
    },
}

/// Everything that can go wrong while running a game.
///
/// - `Validation`: recoverable, surfaced to whoever submitted the move
/// - `Configuration`: unknown strategy, mode or formula name
/// - `Unavailable`: no question could be supplied for a round
/// - `Deserialization`: a persisted game or bot snapshot is unreadable
/// - `Inconsistent`: a game whose fields contradict each other
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] Rejection),
    #[error("unknown {field}: {name:?}")]
    Configuration { field: &'static str, name: String },
    #[error("no question available")]
    Unavailable,
    #[error("unreadable json: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("inconsistent game state: {0}")]
    Inconsistent(&'static str),
}

impl Error {
    /// The rejection behind a validation failure, if that is what this is.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Validation(rejection) => Some(rejection),
            _ => None,
        }
    }
}
