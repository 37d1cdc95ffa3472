//! Kitty exchange and the friend declaration that closes it.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::cards_logic::sort_hand;
use crate::domain::friend::{Friend, FriendCall};
use crate::domain::rules::{KITTY_SIZE, MAX_BID};
use crate::domain::state::{
    require_bid, require_declarer, require_phase, require_trump, Game, Phase,
};
use crate::domain::tricks::Trick;
use crate::domain::{Card, Trump};
use crate::errors::domain::{BiddingError, GameError, InvalidDiscardError, StateError};

/// Give the declarer the kitty and discard three cards, keeping the contract.
pub fn exchange_kitty(game: &mut Game, discard: &[Card]) -> Result<(), GameError> {
    exchange_kitty_with_revision(game, discard, None)
}

/// Bid after switching trump from `current` to `new`.
fn revised_bid(game: &Game, bid: u8, current: Trump, new: Trump) -> Result<u8, GameError> {
    if new == current {
        return Ok(bid);
    }
    if !game.rules.allow_trump_change {
        return Err(StateError::RevisionDisabled.into());
    }
    let raise = match new {
        Trump::NoTrump => game.rules.no_trump_change_raise,
        _ => game.rules.suit_change_raise,
    };
    match bid.checked_add(raise) {
        Some(revised) if revised <= MAX_BID => Ok(revised),
        _ => Err(BiddingError::RaiseImpossible {
            bid,
            raise,
            max: MAX_BID,
        }
        .into()),
    }
}

/// Exchange the kitty and optionally change trump.
///
/// The declarer's hand becomes hand ∪ kitty minus `discard`. The discard is
/// out of play for the rest of the hand.
pub fn exchange_kitty_with_revision(
    game: &mut Game,
    discard: &[Card],
    new_trump: Option<Trump>,
) -> Result<(), GameError> {
    require_phase(game, Phase::Exchange)?;
    let declarer = require_declarer(game, "exchange_kitty")?;
    let trump = require_trump(game, "exchange_kitty")?;
    let bid = require_bid(game, "exchange_kitty")?;

    if discard.len() != KITTY_SIZE {
        return Err(InvalidDiscardError::WrongCount(discard.len()).into());
    }
    let mut seen = HashSet::with_capacity(KITTY_SIZE);
    for &card in discard {
        if !seen.insert(card) {
            return Err(InvalidDiscardError::Duplicate(card).into());
        }
        if !game.hand(declarer).contains(&card) && !game.cards.kitty.contains(&card) {
            return Err(InvalidDiscardError::NotInHand(card).into());
        }
    }
    let (trump, bid) = match new_trump {
        Some(new) => (new, revised_bid(game, bid, trump, new)?),
        None => (trump, bid),
    };

    // Commit.
    let kitty = std::mem::take(&mut game.cards.kitty);
    let hand = &mut game.cards.hands[declarer as usize];
    hand.extend(kitty);
    hand.retain(|c| !discard.contains(c));
    sort_hand(hand);
    game.cards.discard = discard.to_vec();
    if game.setup.trump != Some(trump) {
        info!(declarer, %trump, bid, "trump changed at exchange");
    }
    game.setup.trump = Some(trump);
    game.setup.bid = Some(bid);
    game.phase = Phase::FriendCall;
    debug!(declarer, "kitty exchanged");
    Ok(())
}

/// Declare the friend condition and open trick 1 with the declarer leading.
pub fn declare_friend(game: &mut Game, call: FriendCall) -> Result<(), GameError> {
    require_phase(game, Phase::FriendCall)?;
    let declarer = require_declarer(game, "declare_friend")?;

    game.setup.friend_call = Some(call);
    if call == FriendCall::NoFriend {
        game.setup.friend = Friend::NoFriend;
    }
    game.tricks.push(Trick::new(declarer));
    game.phase = Phase::Trick { trick_no: 1 };
    game.turn = Some(declarer);
    info!(declarer, %call, "friend declared");
    Ok(())
}
