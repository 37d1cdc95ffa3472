//! Whole-game invariant checks.

use std::collections::HashSet;

use crate::domain::rules::{DECK_SIZE, KITTY_SIZE, MAX_BID, PLAYERS};
use crate::domain::state::{expected_actor, Game, Phase};
use crate::domain::Card;
use crate::errors::domain::StateError;

fn violated(msg: String) -> StateError {
    StateError::InvariantViolated(msg)
}

/// Every card sits in exactly one place: a hand, the kitty, the discard, a
/// captured pile, or the open trick.
fn check_conservation(game: &Game) -> Result<(), StateError> {
    let open_trick: Vec<Card> = game
        .current_trick()
        .map(|t| t.cards().collect())
        .unwrap_or_default();
    let all = game
        .cards
        .hands
        .iter()
        .flatten()
        .chain(&game.cards.kitty)
        .chain(&game.cards.discard)
        .chain(&game.cards.captured.declarer)
        .chain(&game.cards.captured.opposition)
        .chain(&open_trick);

    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for &card in all {
        if !seen.insert(card) {
            return Err(violated(format!("card {card} appears twice")));
        }
    }
    if seen.len() != DECK_SIZE {
        return Err(violated(format!(
            "{} cards accounted for, expected {DECK_SIZE}",
            seen.len()
        )));
    }
    Ok(())
}

fn check_contract(game: &Game) -> Result<(), StateError> {
    if let Some(bid) = game.setup.bid {
        if bid < game.auction.minimum || bid > MAX_BID {
            return Err(violated(format!(
                "bid {bid} outside {}..={MAX_BID}",
                game.auction.minimum
            )));
        }
    }
    let kitty_ok = match game.phase {
        Phase::Bidding | Phase::Exchange | Phase::Redeal => {
            game.cards.kitty.len() == KITTY_SIZE && game.cards.discard.is_empty()
        }
        _ => game.cards.kitty.is_empty() && game.cards.discard.len() == KITTY_SIZE,
    };
    if !kitty_ok {
        return Err(violated(format!(
            "kitty/discard sizes {}/{} do not fit phase {:?}",
            game.cards.kitty.len(),
            game.cards.discard.len(),
            game.phase
        )));
    }
    Ok(())
}

fn check_tricks(game: &Game) -> Result<(), StateError> {
    let last = game.tricks.len().saturating_sub(1);
    for (i, trick) in game.tricks.iter().enumerate() {
        if trick.plays.len() > PLAYERS {
            return Err(violated(format!("trick {} has too many plays", i + 1)));
        }
        if !trick.is_complete() && i != last {
            return Err(violated(format!("trick {} is open but not last", i + 1)));
        }
        if trick.is_complete() != trick.winner.is_some() {
            return Err(violated(format!("trick {} winner mismatch", i + 1)));
        }
        for (n, play) in trick.plays.iter().enumerate() {
            if play.player != expected_actor(trick.leader, n as u8) {
                return Err(violated(format!(
                    "trick {} play {} out of seat order",
                    i + 1,
                    n + 1
                )));
            }
        }
    }
    if let Phase::Trick { trick_no } = game.phase {
        if game.tricks.len() != trick_no as usize {
            return Err(violated(format!(
                "phase says trick {trick_no}, {} tricks recorded",
                game.tricks.len()
            )));
        }
    }
    Ok(())
}

/// Check conservation, contract bounds and trick shape.
pub fn check_consistency(game: &Game) -> Result<(), StateError> {
    check_conservation(game)?;
    check_contract(game)?;
    check_tricks(game)
}
