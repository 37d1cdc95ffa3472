//! Player view of a hand: what one seat is allowed to see.
//!
//! [`get_perspective`] is a pure projection of the authoritative [`Game`].
//! Other seats' hands are reduced to card counts. The kitty (and later the
//! discard) is shown to the declarer only.

use serde::Serialize;

use crate::domain::bidding::{legal_bids, AuctionCall, Bid, HighBid};
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::HandOutcome;
use crate::domain::state::{Captured, Game, Phase, PlayerId, Setup};
use crate::domain::tricks::{legal_plays, LegalPlay, Trick};
use crate::domain::Card;

/// Information visible to one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Perspective {
    pub viewer: PlayerId,
    pub phase: Phase,
    pub turn: Option<PlayerId>,
    /// The viewer's own cards.
    pub hand: Vec<Card>,
    pub hand_sizes: [usize; PLAYERS],
    /// Undisclosed kitty; declarer only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kitty: Option<Vec<Card>>,
    /// Cards put away at the exchange; declarer only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discard: Option<Vec<Card>>,
    pub auction_minimum: u8,
    pub auction: Vec<AuctionCall>,
    pub high_bid: Option<HighBid>,
    pub setup: Setup,
    /// Every trick so far, including the open one.
    pub tricks: Vec<Trick>,
    pub captured: Captured,
    /// Non-empty only when the viewer is expected to bid.
    pub legal_bids: Vec<Bid>,
    /// Non-empty only when the viewer is expected to play a card.
    pub legal_plays: Vec<LegalPlay>,
    pub outcome: Option<HandOutcome>,
}

impl Perspective {
    pub fn is_declarer(&self) -> bool {
        self.setup.declarer == Some(self.viewer)
    }
}

/// Project `game` for `viewer`. Calling this twice on an unchanged game
/// yields equal values.
pub fn get_perspective(game: &Game, viewer: PlayerId) -> Perspective {
    let is_declarer = game.setup.declarer == Some(viewer);
    let hand = game
        .cards
        .hands
        .get(viewer as usize)
        .cloned()
        .unwrap_or_default();
    let hand_sizes = std::array::from_fn(|seat| game.cards.hands[seat].len());

    // Before the exchange the kitty is still face down; afterwards it is the discard.
    let kitty = (is_declarer && !game.cards.kitty.is_empty()).then(|| game.cards.kitty.clone());
    let discard =
        (is_declarer && !game.cards.discard.is_empty()).then(|| game.cards.discard.clone());

    Perspective {
        viewer,
        phase: game.phase,
        turn: game.turn,
        hand,
        hand_sizes,
        kitty,
        discard,
        auction_minimum: game.auction.minimum,
        auction: game.auction.calls.clone(),
        high_bid: game.auction.highest,
        // The friend only resolves through public plays, so the setup is public as is.
        setup: game.setup.clone(),
        tricks: game.tricks.clone(),
        captured: game.cards.captured.clone(),
        legal_bids: legal_bids(game, viewer),
        legal_plays: legal_plays(game, viewer),
        outcome: game.outcome.clone(),
    }
}
