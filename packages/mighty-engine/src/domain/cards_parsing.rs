//! Card codes: parsing from and rendering to the 2-character wire form
//! (e.g., "SA", "HT", "JK").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit, Trump};
use crate::errors::domain::CardParseError;

/// Wire code of the Joker.
pub const JOKER_CODE: &str = "JK";
/// Wire code of a lead that activates the Joker-Call.
pub const JOKER_CALL_CODE: &str = "JC";
/// Wire code of no-trump.
pub const NO_TRUMP_CODE: char = 'N';

impl Suit {
    pub fn code(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_code(ch: char) -> Option<Self> {
        match ch {
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl Rank {
    pub fn code(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_code(ch: char) -> Option<Self> {
        match ch {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl Trump {
    pub fn code(self) -> char {
        match self.suit() {
            Some(suit) => suit.code(),
            None => NO_TRUMP_CODE,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { suit, rank } => write!(f, "{}{}", suit.code(), rank.code()),
            Card::Joker => f.write_str(JOKER_CODE),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        single_char(s)
            .and_then(Suit::from_code)
            .ok_or_else(|| CardParseError::Suit(s.to_string()))
    }
}

impl FromStr for Trump {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match single_char(s) {
            Some(NO_TRUMP_CODE) => Ok(Trump::NoTrump),
            Some(ch) => Suit::from_code(ch)
                .map(Trump::from)
                .ok_or_else(|| CardParseError::Trump(s.to_string())),
            None => Err(CardParseError::Trump(s.to_string())),
        }
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == JOKER_CODE {
            return Ok(Card::Joker);
        }
        let mut chars = s.chars();
        let (Some(suit_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(CardParseError::Card(s.to_string()));
        };
        match (Suit::from_code(suit_ch), Rank::from_code(rank_ch)) {
            (Some(suit), Some(rank)) => Ok(Card::new(suit, rank)),
            _ => Err(CardParseError::Card(s.to_string())),
        }
    }
}

/// Non-panicking helper to parse card tokens (e.g., "SA", "C3") into Cards.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, CardParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
