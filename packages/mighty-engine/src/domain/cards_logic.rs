//! Card game logic: suits in hands, point counting, and the special cards
//! whose identity depends on trump.

use super::cards_types::{Card, Rank, Suit, Trump};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.is_suit(suit))
}

/// Number of point cards (A, K, Q, J, 10) among `cards`.
pub fn count_points(cards: &[Card]) -> u8 {
    cards.iter().filter(|c| c.is_point()).count() as u8
}

/// True when `card` belongs to the trump suit. The Joker is never trump.
pub fn is_trump(card: Card, trump: Trump) -> bool {
    trump.suit().is_some_and(|suit| card.is_suit(suit))
}

/// The Mighty: SA, or DA when Spades is trump.
pub fn mighty_card(trump: Trump) -> Card {
    match trump {
        Trump::Spades => Card::new(Suit::Diamonds, Rank::Ace),
        _ => Card::new(Suit::Spades, Rank::Ace),
    }
}

/// The Joker-Call card: C3, or S3 when Clubs is trump.
pub fn joker_call_card(trump: Trump) -> Card {
    match trump {
        Trump::Clubs => Card::new(Suit::Spades, Rank::Three),
        _ => Card::new(Suit::Clubs, Rank::Three),
    }
}

/// Sort a hand into display order (suits S, D, H, C; ascending rank; Joker last).
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort();
}
