//! Round lifecycle on top of the negotiation engine.
//!
//! - [`Room`]: owns the engine, the question supply and the randomness of a game
//! - [`QuestionProvider`]: where each round's hidden answer comes from
//! - [`Catalog`]: built-in or JSON-loaded question list
//! - [`Summary`]: final report once a game is over
mod catalog;
mod question;
mod room;
mod summary;

pub use catalog::*;
pub use question::*;
pub use room::*;
pub use summary::*;
