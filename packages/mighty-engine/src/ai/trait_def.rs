//! AI player trait definition.

use thiserror::Error;

use crate::domain::commands::Command;
use crate::domain::player_view::Perspective;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// Nothing legal to do from this perspective
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// Trait for AI players.
///
/// Implementations receive the perspective of the seat that has to act and
/// must choose a legal command, using `legal_bids` / `legal_plays` from the
/// perspective rather than re-deriving the rules.
pub trait AiPlayer: Send + Sync {
    fn choose_command(&self, view: &Perspective) -> Result<Command, AiError>;
}
