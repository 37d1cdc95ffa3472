//! Domain-level error types for the Mighty engine.
//!
//! Every command validates before it mutates, so any error returned here
//! means the `Game` was left exactly as it was. Player-facing categories
//! (`BiddingError`, `InvalidDiscardError`, `IllegalPlayError`) are meant to be
//! surfaced for re-prompting; `StateError` signals protocol misuse by the
//! calling layer.

use thiserror::Error;

use super::error_code::ErrorCode;
use crate::config::ConfigError;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::{Card, Suit};

/// The deck handed to the dealer is not the 53-card universe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck holds {found} cards, expected 53")]
    WrongSize { found: usize },
    #[error("duplicate card in deck: {0}")]
    Duplicate(Card),
}

/// Auction rejections, including the contract revision made at exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BiddingError {
    #[error("seat {0} does not exist")]
    InvalidSeat(PlayerId),
    #[error("seat {got} acted out of turn (expected seat {expected})")]
    OutOfTurn { expected: PlayerId, got: PlayerId },
    #[error("bid {offered} does not exceed the high bid {highest}")]
    NotIncreasing { highest: u8, offered: u8 },
    #[error("bid {value} outside {min}..={max}")]
    OutOfRange { value: u8, min: u8, max: u8 },
    #[error("raising bid {bid} by {raise} would exceed {max}")]
    RaiseImpossible { bid: u8, raise: u8, max: u8 },
    #[error("misdeal calls are disabled")]
    MisdealDisabled,
    #[error("hand holds {points} point cards; misdeal needs at most {max}")]
    MisdealRejected { points: u8, max: u8 },
}

/// Kitty discard rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDiscardError {
    #[error("discard must be exactly 3 cards, got {0}")]
    WrongCount(usize),
    #[error("discarded card {0} is not in the declarer's hand")]
    NotInHand(Card),
    #[error("card {0} discarded twice")]
    Duplicate(Card),
}

/// Trick-play rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalPlayError {
    #[error("seat {got} played out of turn (expected seat {expected})")]
    OutOfTurn { expected: PlayerId, got: PlayerId },
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),
    #[error("must follow the led suit {led}")]
    MustFollowSuit { led: Suit },
    #[error("the Joker-Call was led; the Joker must be played")]
    JokerForced,
    #[error("{card} cannot be led as a Joker-Call (call card is {call_card})")]
    InvalidJokerCall { card: Card, call_card: Card },
    #[error("the Joker-Call cannot be made on the first trick")]
    JokerCallOnFirstTrick,
    #[error("trump cannot be led on the first trick while holding other suits")]
    TrumpLeadOnFirstTrick,
    #[error("leading the Joker requires naming the led suit")]
    JokerSuitRequired,
    #[error("lead declaration not allowed for this play")]
    UnexpectedLeadCall,
}

/// Protocol misuse by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("operation requires phase {expected}, game is in {actual:?}")]
    PhaseMismatch {
        expected: &'static str,
        actual: Phase,
    },
    #[error("the hand is over")]
    HandOver,
    #[error("trump revision is disabled by the rules")]
    RevisionDisabled,
    #[error("invariant violated: {0}")]
    InvariantViolated(String),
}

/// Malformed card, suit, trump or friend-call code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("invalid card code: {0:?}")]
    Card(String),
    #[error("invalid suit code: {0:?}")]
    Suit(String),
    #[error("invalid trump code: {0:?}")]
    Trump(String),
    #[error("invalid friend call: {0:?}")]
    FriendCall(String),
}

/// Central engine error returned by every command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error(transparent)]
    Bidding(#[from] BiddingError),
    #[error(transparent)]
    InvalidDiscard(#[from] InvalidDiscardError),
    #[error(transparent)]
    IllegalPlay(#[from] IllegalPlayError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Parse(#[from] CardParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GameError {
    /// Stable wire code for this rejection.
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::Deal(_) => ErrorCode::MalformedDeck,
            GameError::Bidding(e) => match e {
                BiddingError::InvalidSeat(_) => ErrorCode::InvalidSeat,
                BiddingError::OutOfTurn { .. } => ErrorCode::OutOfTurn,
                BiddingError::NotIncreasing { .. } => ErrorCode::BidNotIncreasing,
                BiddingError::OutOfRange { .. } => ErrorCode::BidOutOfRange,
                BiddingError::RaiseImpossible { .. } => ErrorCode::RaiseImpossible,
                BiddingError::MisdealDisabled => ErrorCode::MisdealDisabled,
                BiddingError::MisdealRejected { .. } => ErrorCode::MisdealRejected,
            },
            GameError::InvalidDiscard(e) => match e {
                InvalidDiscardError::WrongCount(_) => ErrorCode::DiscardCount,
                InvalidDiscardError::NotInHand(_) => ErrorCode::DiscardNotInHand,
                InvalidDiscardError::Duplicate(_) => ErrorCode::DiscardDuplicate,
            },
            GameError::IllegalPlay(e) => match e {
                IllegalPlayError::OutOfTurn { .. } => ErrorCode::OutOfTurn,
                IllegalPlayError::CardNotInHand(_) => ErrorCode::CardNotInHand,
                IllegalPlayError::MustFollowSuit { .. } => ErrorCode::MustFollowSuit,
                IllegalPlayError::JokerForced => ErrorCode::JokerForced,
                IllegalPlayError::InvalidJokerCall { .. } => ErrorCode::InvalidJokerCall,
                IllegalPlayError::JokerCallOnFirstTrick => ErrorCode::JokerCallFirstTrick,
                IllegalPlayError::TrumpLeadOnFirstTrick => ErrorCode::TrumpLeadFirstTrick,
                IllegalPlayError::JokerSuitRequired => ErrorCode::JokerSuitRequired,
                IllegalPlayError::UnexpectedLeadCall => ErrorCode::UnexpectedLeadCall,
            },
            GameError::State(e) => match e {
                StateError::PhaseMismatch { .. } => ErrorCode::PhaseMismatch,
                StateError::HandOver => ErrorCode::HandOver,
                StateError::RevisionDisabled => ErrorCode::RevisionDisabled,
                StateError::InvariantViolated(_) => ErrorCode::InvariantViolated,
            },
            GameError::Parse(_) => ErrorCode::ParseCard,
            GameError::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// True for rejections a player can fix by choosing a different action.
    pub fn is_player_facing(&self) -> bool {
        matches!(
            self,
            GameError::Bidding(_) | GameError::InvalidDiscard(_) | GameError::IllegalPlay(_)
        )
    }
}
