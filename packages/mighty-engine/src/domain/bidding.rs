//! The auction: seats bid in turn for declarer, trump and contract value.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::cards_logic::{count_points, mighty_card};
use crate::domain::dealing::deal_game;
use crate::domain::rules::{valid_bid_range, MAX_BID, PLAYERS};
use crate::domain::state::{is_seat, next_player, require_phase, require_turn, Game, Phase, PlayerId};
use crate::domain::{Card, Trump};
use crate::errors::domain::{BiddingError, GameError};

/// A contract offer: at least `value` points with `trump`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub value: u8,
    pub trump: Trump,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct HighBid {
    pub player: PlayerId,
    pub value: u8,
    pub trump: Trump,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuctionAction {
    Bid { value: u8, trump: Trump },
    Pass,
    Misdeal,
}

/// One public auction call.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct AuctionCall {
    pub player: PlayerId,
    #[serde(flatten)]
    pub action: AuctionAction,
}

/// Auction progress for the current deal.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    /// Lowest acceptable opening bid.
    pub minimum: u8,
    pub highest: Option<HighBid>,
    pub consecutive_passes: u8,
    pub calls: Vec<AuctionCall>,
    /// The minimum was already lowered once after every seat passed.
    pub reopened: bool,
}

impl Auction {
    pub fn new(minimum: u8) -> Self {
        Self {
            minimum,
            highest: None,
            consecutive_passes: 0,
            calls: Vec::new(),
            reopened: false,
        }
    }
}

/// What an accepted auction call led to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BidResult {
    /// The auction goes on with the next seat.
    Continue { next: PlayerId },
    /// Declarer, trump and contract are fixed; the exchange starts.
    Resolved {
        declarer: PlayerId,
        trump: Trump,
        bid: u8,
    },
    /// Every seat passed; bidding restarts at a lower minimum.
    Reopened { minimum: u8 },
    /// The deal is void and must be redealt.
    Redeal,
}

/// Bids `who` could legally place right now (empty when it is not their turn).
pub fn legal_bids(game: &Game, who: PlayerId) -> Vec<Bid> {
    if game.phase != Phase::Bidding || game.turn != Some(who) {
        return Vec::new();
    }
    let floor = match game.auction.highest {
        Some(high) => high.value.saturating_add(1),
        None => game.auction.minimum,
    };
    let mut bids = Vec::new();
    for value in floor..=MAX_BID {
        for trump in Trump::ALL {
            bids.push(Bid { value, trump });
        }
    }
    bids
}

fn require_bidder(game: &Game, who: PlayerId) -> Result<(), GameError> {
    require_phase(game, Phase::Bidding)?;
    if !is_seat(who) {
        return Err(BiddingError::InvalidSeat(who).into());
    }
    let expected = require_turn(game, "auction")?;
    if expected != who {
        return Err(BiddingError::OutOfTurn { expected, got: who }.into());
    }
    Ok(())
}

/// Place a bid for `who`, which must strictly exceed the current high bid.
pub fn place_bid(
    game: &mut Game,
    who: PlayerId,
    value: u8,
    trump: Trump,
) -> Result<BidResult, GameError> {
    require_bidder(game, who)?;
    let range = valid_bid_range(game.auction.minimum);
    if !range.contains(&value) {
        return Err(BiddingError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        }
        .into());
    }
    if let Some(high) = game.auction.highest {
        if value <= high.value {
            return Err(BiddingError::NotIncreasing {
                highest: high.value,
                offered: value,
            }
            .into());
        }
    }

    let auction = &mut game.auction;
    auction.highest = Some(HighBid {
        player: who,
        value,
        trump,
    });
    auction.consecutive_passes = 0;
    auction.calls.push(AuctionCall {
        player: who,
        action: AuctionAction::Bid { value, trump },
    });
    debug!(player = who, value, %trump, "bid accepted");

    // Nothing can top the maximum bid.
    if value == MAX_BID {
        return Ok(resolve_auction(game, who, value, trump));
    }

    let next = next_player(who);
    game.turn = Some(next);
    Ok(BidResult::Continue { next })
}

/// Pass for `who`.
pub fn pass(game: &mut Game, who: PlayerId) -> Result<BidResult, GameError> {
    require_bidder(game, who)?;

    let auction = &mut game.auction;
    auction.consecutive_passes += 1;
    auction.calls.push(AuctionCall {
        player: who,
        action: AuctionAction::Pass,
    });
    debug!(player = who, passes = auction.consecutive_passes, "pass");

    match auction.highest {
        Some(high) if auction.consecutive_passes as usize == PLAYERS - 1 => {
            Ok(resolve_auction(game, high.player, high.value, high.trump))
        }
        None if auction.consecutive_passes as usize == PLAYERS => {
            if game.rules.lower_minimum_on_all_pass && !auction.reopened {
                auction.reopened = true;
                auction.minimum = auction.minimum.saturating_sub(1).max(1);
                auction.consecutive_passes = 0;
                let minimum = auction.minimum;
                game.turn = Some(game.rules.opening_bidder);
                info!(minimum, "every seat passed; auction reopened");
                Ok(BidResult::Reopened { minimum })
            } else {
                game.phase = Phase::Redeal;
                game.turn = None;
                info!("every seat passed; redeal");
                Ok(BidResult::Redeal)
            }
        }
        _ => {
            let next = next_player(who);
            game.turn = Some(next);
            Ok(BidResult::Continue { next })
        }
    }
}

fn resolve_auction(game: &mut Game, declarer: PlayerId, bid: u8, trump: Trump) -> BidResult {
    game.setup.declarer = Some(declarer);
    game.setup.trump = Some(trump);
    game.setup.bid = Some(bid);
    game.phase = Phase::Exchange;
    game.turn = Some(declarer);
    info!(declarer, bid, %trump, "auction resolved");
    BidResult::Resolved {
        declarer,
        trump,
        bid,
    }
}

/// Point cards that count against a misdeal call. The Mighty does not count
/// when it is in play; trump is not fixed yet, so that is the spade ace.
pub fn misdeal_points(hand: &[Card], mighty_enabled: bool) -> u8 {
    let points = count_points(hand);
    if mighty_enabled && hand.contains(&mighty_card(Trump::NoTrump)) {
        points - 1
    } else {
        points
    }
}

/// Void the deal because `who` holds a point-poor hand.
pub fn call_misdeal(game: &mut Game, who: PlayerId) -> Result<BidResult, GameError> {
    require_phase(game, Phase::Bidding)?;
    if !is_seat(who) {
        return Err(BiddingError::InvalidSeat(who).into());
    }
    if !game.rules.allow_misdeal {
        return Err(BiddingError::MisdealDisabled.into());
    }
    let points = misdeal_points(game.hand(who), game.rules.mighty);
    let max = game.rules.misdeal_max_points;
    if points > max {
        return Err(BiddingError::MisdealRejected { points, max }.into());
    }

    game.auction.calls.push(AuctionCall {
        player: who,
        action: AuctionAction::Misdeal,
    });
    game.phase = Phase::Redeal;
    game.turn = None;
    info!(player = who, points, "misdeal called");
    Ok(BidResult::Redeal)
}

/// Deal the next hand of a table whose auction failed.
pub fn redeal(game: &Game) -> Result<Game, GameError> {
    require_phase(game, Phase::Redeal)?;
    let deal_no = game.deal_no + 1;
    info!(seed = game.seed, deal_no, "redealing");
    deal_game(game.seed, deal_no, game.rules.clone())
}
