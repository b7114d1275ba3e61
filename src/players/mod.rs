//! Decision makers on either side of the duel.
//!
//! Every bot shares the [`Policy`] contract and differs only in its
//! [`Profile`] parameters and a handful of override hooks. Bots carry no
//! identity between turns: their state lives in a [`Snapshot`] embedded in the
//! game, and a fresh policy is revived from it whenever the bot must act.
//!
//! ## Implementations
//!
//! - [`Aggressive`]: eager to quote, tight reductions
//! - [`Passive`]: reluctant to quote, prefers narrowing
//! - [`Lover`]: quotes at the slightest excuse, skews against the player
//! - [`Hater`]: almost never quotes
//! - [`Random`]: coin flips where the others reason
//! - [`Human`]: interactive terminal player (requires `cli` feature)
mod aggressive;
mod hater;
#[cfg(feature = "cli")]
mod human;
mod lover;
mod passive;
mod policy;
mod profile;
mod random;
mod snapshot;
mod strategy;

pub use aggressive::*;
pub use hater::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use lover::*;
pub use passive::*;
pub use policy::*;
pub use profile::*;
pub use random::*;
pub use snapshot::*;
pub use strategy::*;
