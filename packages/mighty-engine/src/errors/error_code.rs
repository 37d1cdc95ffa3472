//! Error codes for the Mighty engine.
//!
//! This module defines all error codes a caller may surface on the wire.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes for engine rejections.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string so that a
/// transport layer can forward rejections without matching on error shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Dealing
    /// Deck is not the 53-card universe
    MalformedDeck,

    // Auction
    /// Seat index outside 0..=4
    InvalidSeat,
    /// Bid or pass by a player who is not the current bidder
    OutOfTurn,
    /// Bid does not exceed the current high bid
    BidNotIncreasing,
    /// Bid outside the minimum..=20 window
    BidOutOfRange,
    /// Trump revision would push the bid past 20
    RaiseImpossible,
    /// Misdeal calls are disabled by the rules
    MisdealDisabled,
    /// Misdeal call by a hand that does not qualify
    MisdealRejected,

    // Kitty exchange
    /// Discard is not exactly three cards
    DiscardCount,
    /// Discarded card not in the declarer's post-kitty hand
    DiscardNotInHand,
    /// Same card discarded twice
    DiscardDuplicate,

    // Trick play
    /// Card not in hand
    CardNotInHand,
    /// Must follow suit
    MustFollowSuit,
    /// Holder of the Joker must play it under a Joker-Call
    JokerForced,
    /// Joker-Call declared with a card that is not the call card
    InvalidJokerCall,
    /// Joker-Call declared on the first trick
    JokerCallFirstTrick,
    /// Trump led on the first trick while holding other suits
    TrumpLeadFirstTrick,
    /// Joker led without naming the led suit
    JokerSuitRequired,
    /// Lead declaration supplied where none is allowed
    UnexpectedLeadCall,

    // Protocol
    /// Operation invoked in the wrong phase
    PhaseMismatch,
    /// Hand already finished
    HandOver,
    /// Trump revision is disabled by the rules
    RevisionDisabled,
    /// Internal invariant breach
    InvariantViolated,

    // Parsing and configuration
    /// Malformed card, suit or trump code
    ParseCard,
    /// Invalid rule configuration
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedDeck => "MALFORMED_DECK",

            Self::InvalidSeat => "INVALID_SEAT",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::BidNotIncreasing => "BID_NOT_INCREASING",
            Self::BidOutOfRange => "BID_OUT_OF_RANGE",
            Self::RaiseImpossible => "RAISE_IMPOSSIBLE",
            Self::MisdealDisabled => "MISDEAL_DISABLED",
            Self::MisdealRejected => "MISDEAL_REJECTED",

            Self::DiscardCount => "DISCARD_COUNT",
            Self::DiscardNotInHand => "DISCARD_NOT_IN_HAND",
            Self::DiscardDuplicate => "DISCARD_DUPLICATE",

            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::JokerForced => "JOKER_FORCED",
            Self::InvalidJokerCall => "INVALID_JOKER_CALL",
            Self::JokerCallFirstTrick => "JOKER_CALL_FIRST_TRICK",
            Self::TrumpLeadFirstTrick => "TRUMP_LEAD_FIRST_TRICK",
            Self::JokerSuitRequired => "JOKER_SUIT_REQUIRED",
            Self::UnexpectedLeadCall => "UNEXPECTED_LEAD_CALL",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::HandOver => "HAND_OVER",
            Self::RevisionDisabled => "REVISION_DISABLED",
            Self::InvariantViolated => "INVARIANT_VIOLATED",

            Self::ParseCard => "PARSE_CARD",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
