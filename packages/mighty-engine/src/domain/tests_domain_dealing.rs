//! Dealing tests: determinism, partition of the deck, and deck validation.

use std::collections::HashSet;

use crate::config::RuleConfig;
use crate::domain::dealing::{deal_from_deck, full_deck, new_game, new_game_with_rules};
use crate::domain::state::Phase;
use crate::domain::Card;
use crate::errors::domain::{DealError, GameError};

#[test]
fn same_seed_same_deal() {
    let a = new_game(42).unwrap();
    let b = new_game(42).unwrap();
    assert_eq!(a, b, "Same seed must produce identical games");
}

#[test]
fn different_seeds_produce_different_hands() {
    let a = new_game(111).unwrap();
    let b = new_game(222).unwrap();
    assert_ne!(a.cards.hands, b.cards.hands);
}

#[test]
fn deal_partitions_the_deck() {
    let game = new_game(5).unwrap();
    let mut seen: HashSet<Card> = HashSet::new();
    for hand in &game.cards.hands {
        assert_eq!(hand.len(), 10);
        let mut sorted = hand.clone();
        sorted.sort();
        assert_eq!(&sorted, hand, "hands are dealt sorted");
        seen.extend(hand.iter().copied());
    }
    assert_eq!(game.cards.kitty.len(), 3);
    seen.extend(game.cards.kitty.iter().copied());
    assert_eq!(seen.len(), 53);
    assert!(seen.contains(&Card::Joker));
}

#[test]
fn new_game_starts_in_bidding() {
    let game = new_game(5).unwrap();
    assert_eq!(game.phase, Phase::Bidding);
    assert_eq!(game.turn, Some(0));
    assert_eq!(game.deal_no, 0);
    assert!(game.tricks.is_empty());
    assert!(game.cards.captured.is_empty());
    assert!(game.cards.discard.is_empty());
    assert_eq!(game.setup.declarer, None);
    assert_eq!(game.auction.minimum, 13);
}

#[test]
fn full_deck_is_the_53_card_universe() {
    let deck = full_deck();
    assert_eq!(deck.len(), 53);
    assert_eq!(deck.iter().copied().collect::<HashSet<_>>().len(), 53);
    assert_eq!(deck.last(), Some(&Card::Joker));
}

#[test]
fn malformed_decks_are_rejected() {
    let mut deck = full_deck();
    deck.pop();
    assert_eq!(
        deal_from_deck(&deck).unwrap_err(),
        DealError::WrongSize { found: 52 }
    );

    let mut deck = full_deck();
    deck[52] = deck[0];
    assert_eq!(
        deal_from_deck(&deck).unwrap_err(),
        DealError::Duplicate(deck[0])
    );
}

#[test]
fn invalid_rules_are_rejected_before_dealing() {
    let rules = RuleConfig {
        minimum_bid: 0,
        ..RuleConfig::default()
    };
    let err = new_game_with_rules(1, rules).unwrap_err();
    assert!(matches!(err, GameError::Config(_)));
}
