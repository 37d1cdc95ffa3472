//! Deterministic card dealing.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::config::RuleConfig;
use crate::domain::bidding::Auction;
use crate::domain::cards_logic::sort_hand;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::seed_derivation::derive_redeal_seed;
use crate::domain::state::{CardState, Captured, Game, Phase, Setup};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DealError, GameError};

/// The 53-card universe in canonical order: suits S, D, H, C by rank, then the Joker.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.push(Card::Joker);
    deck
}

/// Full deck permuted by a ChaCha20 stream seeded with `seed`.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Split a 53-card deck into five sorted hands of ten and a three-card kitty.
///
/// Seat `i` receives `deck[10 * i..10 * (i + 1)]`; the last three cards form
/// the kitty.
pub fn deal_from_deck(deck: &[Card]) -> Result<([Vec<Card>; PLAYERS], Vec<Card>), DealError> {
    if deck.len() != DECK_SIZE {
        return Err(DealError::WrongSize { found: deck.len() });
    }
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for &card in deck {
        if !seen.insert(card) {
            return Err(DealError::Duplicate(card));
        }
    }

    let hands: [Vec<Card>; PLAYERS] = std::array::from_fn(|seat| {
        let mut hand = deck[seat * HAND_SIZE..(seat + 1) * HAND_SIZE].to_vec();
        sort_hand(&mut hand);
        hand
    });
    let kitty = deck[PLAYERS * HAND_SIZE..].to_vec();
    Ok((hands, kitty))
}

/// Deal a new hand with the base rules.
pub fn new_game(seed: u64) -> Result<Game, GameError> {
    new_game_with_rules(seed, RuleConfig::default())
}

/// Deal a new hand under `rules`. Same seed and rules give the same hands.
pub fn new_game_with_rules(seed: u64, rules: RuleConfig) -> Result<Game, GameError> {
    rules.validate()?;
    deal_game(seed, 0, rules)
}

pub(crate) fn deal_game(seed: u64, deal_no: u32, rules: RuleConfig) -> Result<Game, GameError> {
    let deck = shuffled_deck(derive_redeal_seed(seed, deal_no));
    game_from_deck(seed, deal_no, rules, &deck)
}

/// Build a game in the Bidding phase from an explicit deck order.
pub fn game_from_deck(
    seed: u64,
    deal_no: u32,
    rules: RuleConfig,
    deck: &[Card],
) -> Result<Game, GameError> {
    let (hands, kitty) = deal_from_deck(deck)?;
    info!(seed, deal_no, "hand dealt");
    Ok(Game {
        seed,
        deal_no,
        phase: Phase::Bidding,
        turn: Some(rules.opening_bidder),
        cards: CardState {
            hands,
            kitty,
            discard: Vec::new(),
            captured: Captured::default(),
        },
        auction: Auction::new(rules.minimum_bid),
        tricks: Vec::new(),
        setup: Setup::empty(),
        outcome: None,
        rules,
    })
}
