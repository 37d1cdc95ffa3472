#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rule engine for Mighty, the five-player trick-taking game.
//!
//! The engine deals, runs the auction, the kitty exchange and the friend
//! call, enforces legal play trick by trick and scores the hand. It performs
//! no I/O: callers own each [`Game`] and drive it with commands.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;


// Re-exports for public API
pub use config::{ConfigError, ForcedJokerRank, JokerLeadRule, RuleConfig, ScoringConfig};
pub use domain::{
    apply_command, call_misdeal, check_consistency, declare_friend, exchange_kitty,
    exchange_kitty_with_revision, get_perspective, legal_plays, new_game, new_game_with_rules,
    pass, place_bid, play_card, play_card_with, redeal, replay, Card, Command, CommandOutcome,
    Friend, FriendCall, Game, HandOutcome, LeadCall, Perspective, Phase, PlayerId, Rank, Side,
    Suit, Trump,
};
pub use errors::{
    BiddingError, CardParseError, DealError, ErrorCode, GameError, IllegalPlayError,
    InvalidDiscardError, StateError,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
