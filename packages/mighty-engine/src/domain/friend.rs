//! Friend calls and the friend resolver.
//!
//! The declarer names a card (or a condition) at the end of the exchange.
//! Whoever plays that card becomes the declarer's friend. Resolution happens
//! at most once per hand and is never undone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::info;

use super::cards_types::Card;
use super::state::{PlayerId, Setup};
use crate::errors::domain::CardParseError;

/// Wire code for playing without a friend.
pub const NO_FRIEND_CODE: &str = "NF";
/// Wire code for "whoever wins the first trick".
pub const FIRST_TRICK_CODE: &str = "FT";

/// Team membership of the friend seat.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "player", rename_all = "snake_case")]
pub enum Friend {
    Unresolved,
    Resolved(PlayerId),
    NoFriend,
}

impl Friend {
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Friend::Resolved(p) => Some(p),
            Friend::Unresolved | Friend::NoFriend => None,
        }
    }

    pub fn is_unresolved(self) -> bool {
        self == Friend::Unresolved
    }
}

/// What the declarer announced as the friend condition.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FriendCall {
    /// The seat that plays this card.
    Card(Card),
    /// The seat that wins trick 1.
    FirstTrickWinner,
    /// Declarer plays alone.
    NoFriend,
}

impl fmt::Display for FriendCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendCall::Card(card) => write!(f, "{card}"),
            FriendCall::FirstTrickWinner => f.write_str(FIRST_TRICK_CODE),
            FriendCall::NoFriend => f.write_str(NO_FRIEND_CODE),
        }
    }
}

impl FromStr for FriendCall {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NO_FRIEND_CODE => Ok(FriendCall::NoFriend),
            FIRST_TRICK_CODE => Ok(FriendCall::FirstTrickWinner),
            _ => s
                .parse::<Card>()
                .map(FriendCall::Card)
                .map_err(|_| CardParseError::FriendCall(s.to_string())),
        }
    }
}

impl Serialize for FriendCall {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FriendCall {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Check an applied play against the friend card. Returns the revealed seat
/// the first (and only) time the called card is played.
pub(crate) fn observe_play(setup: &mut Setup, who: PlayerId, card: Card) -> Option<PlayerId> {
    if !setup.friend.is_unresolved() || setup.friend_call != Some(FriendCall::Card(card)) {
        return None;
    }
    setup.friend = Friend::Resolved(who);
    info!(player = who, %card, "friend revealed");
    Some(who)
}

/// Check a completed trick against a first-trick-winner call.
pub(crate) fn observe_trick_winner(
    setup: &mut Setup,
    trick_no: u8,
    winner: PlayerId,
) -> Option<PlayerId> {
    if trick_no != 1
        || !setup.friend.is_unresolved()
        || setup.friend_call != Some(FriendCall::FirstTrickWinner)
    {
        return None;
    }
    setup.friend = Friend::Resolved(winner);
    info!(player = winner, "friend revealed by first trick");
    Some(winner)
}
