use serde::{Deserialize, Serialize};

use crate::config::RuleConfig;
use crate::domain::bidding::Auction;
use crate::domain::friend::{Friend, FriendCall};
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::HandOutcome;
use crate::domain::tricks::Trick;
use crate::domain::{Card, Trump};
use crate::errors::domain::StateError;

pub type PlayerId = u8; // 0..=4

/// Hand progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Seats bid in turn for declarer, trump and contract.
    Bidding,
    /// Declarer takes the kitty and discards three cards.
    Exchange,
    /// Declarer names the friend card (or plays without a friend).
    FriendCall,
    /// Playing tricks; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// All ten tricks played and the outcome is recorded.
    Complete,
    /// The auction failed or a misdeal was called; deal again.
    Redeal,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Bidding => "Bidding",
            Phase::Exchange => "Exchange",
            Phase::FriendCall => "FriendCall",
            Phase::Trick { .. } => "Trick",
            Phase::Complete => "Complete",
            Phase::Redeal => "Redeal",
        }
    }
}

/// The two teams of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Declarer plus the friend, once known.
    Declarer,
    Opposition,
}

/// Cards won in completed tricks, by the side that held them when each trick
/// concluded.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Captured {
    pub declarer: Vec<Card>,
    pub opposition: Vec<Card>,
}

impl Captured {
    pub fn side(&self, side: Side) -> &[Card] {
        match side {
            Side::Declarer => &self.declarer,
            Side::Opposition => &self.opposition,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Declarer => &mut self.declarer,
            Side::Opposition => &mut self.opposition,
        }
    }

    pub fn len(&self) -> usize {
        self.declarer.len() + self.opposition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where every card of the deck currently sits, apart from the open trick.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    pub hands: [Vec<Card>; PLAYERS],
    /// Face-down cards until the declarer picks them up.
    pub kitty: Vec<Card>,
    /// Declarer's discards; out of play for the rest of the hand.
    pub discard: Vec<Card>,
    pub captured: Captured,
}

/// Contract and team information fixed by the auction and the exchange.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Setup {
    pub declarer: Option<PlayerId>,
    pub trump: Option<Trump>,
    pub bid: Option<u8>,
    pub friend_call: Option<FriendCall>,
    pub friend: Friend,
}

impl Setup {
    pub fn empty() -> Self {
        Self {
            declarer: None,
            trump: None,
            bid: None,
            friend_call: None,
            friend: Friend::Unresolved,
        }
    }
}

/// One hand of Mighty: the authoritative state a table owns.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Seed the table was created with; redeals derive from it.
    pub seed: u64,
    /// 0 for the first deal, incremented on every redeal.
    pub deal_no: u32,
    pub rules: RuleConfig,
    pub phase: Phase,
    /// Seat expected to act next.
    /// - Some(seat) in Bidding, Exchange, FriendCall and Trick
    /// - None in Complete and Redeal
    pub turn: Option<PlayerId>,
    pub cards: CardState,
    pub auction: Auction,
    /// Completed tricks, then at most one open trick.
    pub tricks: Vec<Trick>,
    pub setup: Setup,
    pub outcome: Option<HandOutcome>,
}

impl Game {
    pub fn hand(&self, who: PlayerId) -> &[Card] {
        &self.cards.hands[who as usize]
    }

    /// The open trick, if a trick is being played.
    pub fn current_trick(&self) -> Option<&Trick> {
        self.tricks.last().filter(|t| !t.is_complete())
    }

    /// Completed tricks in play order.
    pub fn completed_tricks(&self) -> impl Iterator<Item = &Trick> {
        self.tricks.iter().filter(|t| t.is_complete())
    }

    /// Side `who` belongs to as far as is known right now.
    pub fn side_of(&self, who: PlayerId) -> Side {
        if self.setup.declarer == Some(who) || self.setup.friend == Friend::Resolved(who) {
            Side::Declarer
        } else {
            Side::Opposition
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}

/// Seat / turn math helpers (5 fixed seats: 0..=4).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as PlayerId
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 4 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    seat_offset(p, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: u8) -> PlayerId {
    seat_offset(start, n as i8)
}

/// Expected actor seat during a trick.
///
/// `leader` is the trick leader; `play_count` is how many cards have already
/// been played into the trick.
#[inline]
pub fn expected_actor(leader: PlayerId, play_count: u8) -> PlayerId {
    nth_from(leader, play_count)
}

#[inline]
pub fn is_seat(p: PlayerId) -> bool {
    (p as usize) < PLAYERS
}

fn invariant(what: &str, ctx: &'static str) -> StateError {
    StateError::InvariantViolated(format!("{what} must be set ({ctx})"))
}

pub fn require_turn(game: &Game, ctx: &'static str) -> Result<PlayerId, StateError> {
    game.turn.ok_or_else(|| invariant("turn", ctx))
}

pub fn require_declarer(game: &Game, ctx: &'static str) -> Result<PlayerId, StateError> {
    game.setup.declarer.ok_or_else(|| invariant("declarer", ctx))
}

pub fn require_trump(game: &Game, ctx: &'static str) -> Result<Trump, StateError> {
    game.setup.trump.ok_or_else(|| invariant("trump", ctx))
}

pub fn require_bid(game: &Game, ctx: &'static str) -> Result<u8, StateError> {
    game.setup.bid.ok_or_else(|| invariant("bid", ctx))
}

pub fn require_friend_call(game: &Game, ctx: &'static str) -> Result<FriendCall, StateError> {
    game.setup.friend_call.ok_or_else(|| invariant("friend_call", ctx))
}

/// Reject unless the game is in `expected`.
pub fn require_phase(game: &Game, expected: Phase) -> Result<(), StateError> {
    if game.phase == expected {
        Ok(())
    } else if game.phase == Phase::Complete {
        Err(StateError::HandOver)
    } else {
        Err(StateError::PhaseMismatch {
            expected: expected.name(),
            actual: game.phase,
        })
    }
}
