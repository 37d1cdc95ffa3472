//! End-of-hand scoring and payout settlement.
//!
//! The hand result follows the base rule: the declarer's side wins iff it
//! captured at least `bid` points. Payouts on top of that are computed by a
//! [`PayoutRule`]; [`StandardPayout`] applies the table's [`ScoringConfig`].

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::domain::cards_logic::count_points;
use crate::domain::friend::Friend;
use crate::domain::rules::{PLAYERS, TOTAL_POINTS};
use crate::domain::state::{require_bid, require_declarer, require_trump, Game, PlayerId, Side};
use crate::domain::Trump;
use crate::errors::domain::GameError;

/// Final record of a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOutcome {
    pub declarer: PlayerId,
    pub friend: Friend,
    pub bid: u8,
    pub trump: Trump,
    pub declarer_points: u8,
    pub opposition_points: u8,
    pub declarer_won: bool,
    /// Declarer's side took every point card.
    pub sweep: bool,
    /// Zero-sum score change per seat.
    pub payouts: [i32; PLAYERS],
}

/// Settlement inputs a payout rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct Settlement<'a> {
    pub outcome: &'a HandOutcome,
    /// Auction minimum in force when the contract was won.
    pub minimum_bid: u8,
    pub scoring: &'a ScoringConfig,
}

/// Turns a decided hand into per-seat score changes.
pub trait PayoutRule {
    fn payouts(&self, settlement: &Settlement<'_>) -> [i32; PLAYERS];
}

/// Unit-based settlement.
///
/// A win is worth `(points - bid) + 2 * (bid - minimum)` units, a loss
/// `bid - points`, both scaled by every applicable multiplier. Each opponent
/// pays (or receives) one unit, the friend receives (or pays) one, and the
/// declarer takes the balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPayout;

impl StandardPayout {
    fn multiplier(settlement: &Settlement<'_>) -> i32 {
        let o = settlement.outcome;
        let cfg = settlement.scoring;
        let mut m = 1;
        if o.friend == Friend::NoFriend {
            m *= cfg.no_friend_multiplier;
        }
        if o.trump == Trump::NoTrump {
            m *= cfg.no_trump_multiplier;
        }
        if o.declarer_won && o.sweep {
            m *= cfg.sweep_multiplier;
        }
        if !o.declarer_won && o.declarer_points < cfg.back_run_threshold {
            m *= cfg.back_run_multiplier;
        }
        m
    }
}

impl PayoutRule for StandardPayout {
    fn payouts(&self, settlement: &Settlement<'_>) -> [i32; PLAYERS] {
        let o = settlement.outcome;
        let points = o.declarer_points as i32;
        let bid = o.bid as i32;
        let minimum = settlement.minimum_bid as i32;
        let unit = Self::multiplier(settlement)
            * if o.declarer_won {
                (points - bid) + 2 * (bid - minimum)
            } else {
                -(bid - points)
            };

        let friend = o.friend.player().filter(|&f| f != o.declarer);
        let mut payouts = [0i32; PLAYERS];
        for (seat, payout) in payouts.iter_mut().enumerate() {
            let seat = seat as PlayerId;
            if seat == o.declarer {
                continue;
            }
            *payout = if Some(seat) == friend { unit } else { -unit };
        }
        let others: i32 = payouts.iter().sum();
        payouts[o.declarer as usize] = -others;
        payouts
    }
}

/// Score a finished hand with [`StandardPayout`].
pub fn score_hand(game: &Game) -> Result<HandOutcome, GameError> {
    score_hand_with(game, &StandardPayout)
}

/// Score a finished hand with a custom payout rule.
pub fn score_hand_with(game: &Game, rule: &dyn PayoutRule) -> Result<HandOutcome, GameError> {
    let declarer = require_declarer(game, "score_hand")?;
    let bid = require_bid(game, "score_hand")?;
    let trump = require_trump(game, "score_hand")?;

    let captured = &game.cards.captured;
    let mut declarer_points = count_points(captured.side(Side::Declarer));
    if game.rules.count_discarded_points {
        declarer_points += count_points(&game.cards.discard);
    }
    let opposition_points = count_points(captured.side(Side::Opposition));

    let mut outcome = HandOutcome {
        declarer,
        friend: game.setup.friend,
        bid,
        trump,
        declarer_points,
        opposition_points,
        declarer_won: declarer_points >= bid,
        sweep: declarer_points == TOTAL_POINTS,
        payouts: [0; PLAYERS],
    };
    let payouts = rule.payouts(&Settlement {
        outcome: &outcome,
        minimum_bid: game.auction.minimum,
        scoring: &game.rules.scoring,
    });
    outcome.payouts = payouts;
    Ok(outcome)
}
