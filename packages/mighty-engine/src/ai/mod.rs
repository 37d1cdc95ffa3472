//! Automated seats.
//!
//! - [`AiPlayer`]: picks the next command for a seat from its perspective
//! - [`RandomPlayer`]: uniform random legal moves (seedable), used to soak the engine

mod random;
mod trait_def;

pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};
