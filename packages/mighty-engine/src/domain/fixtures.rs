use super::dealing::full_deck;
use super::rules::{HAND_SIZE, KITTY_SIZE, PLAYERS};
use super::Card;

/// Centralized helper for parsing hardcoded card tokens in test scenarios.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into Card instances.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Parse a space-separated list such as `"SA HT JK"`.
    pub fn parse_list(list: &str) -> Vec<Card> {
        let tokens: Vec<&str> = list.split_whitespace().collect();
        Self::parse_hardcoded(&tokens)
    }

    /// Deck order that deals the given cards to each seat and the kitty.
    ///
    /// Unlisted slots are filled with the remaining cards in canonical order
    /// (spades first, Joker last), seat 0 first and the kitty last.
    pub fn deck_with(hands: [&str; PLAYERS], kitty: &str) -> Vec<Card> {
        let mut slots: Vec<Vec<Card>> = hands.iter().map(|h| Self::parse_list(h)).collect();
        slots.push(Self::parse_list(kitty));

        let used: Vec<Card> = slots.iter().flatten().copied().collect();
        let mut spare = full_deck().into_iter().filter(|c| !used.contains(c));

        let mut deck = Vec::new();
        for (i, slot) in slots.iter_mut().enumerate() {
            let size = if i < PLAYERS { HAND_SIZE } else { KITTY_SIZE };
            assert!(slot.len() <= size, "slot {i} over-specified");
            while slot.len() < size {
                #[allow(clippy::expect_used)]
                slot.push(spare.next().expect("enough spare cards"));
            }
            deck.extend(slot.iter().copied());
        }
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dealing::deal_from_deck;

    #[test]
    fn deck_with_places_listed_cards() {
        let deck = CardFixtures::deck_with(["SA JK", "", "", "", "HT"], "C3");
        let (hands, kitty) = deal_from_deck(&deck).unwrap();
        assert!(hands[0].contains(&Card::Joker));
        assert!(hands[4].contains(&"HT".parse().unwrap()));
        assert!(kitty.contains(&"C3".parse().unwrap()));
    }
}
