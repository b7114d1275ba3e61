//! Negotiation state machine with damage accounting.
//!
//! ## State Representation
//!
//! - [`Game`]: The full negotiation snapshot, serializable between turns
//! - [`Phase`]: Where in the round the game currently sits
//! - [`Party`]: Player or bot, whoever must act next
//!
//! ## Moves
//!
//! - [`Command`]: A player move submitted from outside
//! - [`Decision`]: Narrow further or become market maker
//! - [`Quote`]: A bid/ask pair at exactly the current width
//! - [`Trade`]: Buy at the ask or sell at the bid
//!
//! ## Resolution
//!
//! - [`Engine`]: Validates and applies moves for both parties
//! - [`DamageModel`]: Maps a trade against the truth to damage
//! - [`Settlement`]: Outcome of one round
mod action;
mod command;
mod damage;
mod engine;
mod error;
mod game;
mod mode;
mod party;
mod phase;
mod quote;
mod rules;
mod settlement;

pub use action::*;
pub use command::*;
pub use damage::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use mode::*;
pub use party::*;
pub use phase::*;
pub use quote::*;
pub use rules::*;
pub use settlement::*;
