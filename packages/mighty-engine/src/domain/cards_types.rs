//! Core card-related types: Card, Rank, Suit, Trump

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];
}

/// Trump for a hand: one of the suits, or no-trump.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
    NoTrump,
}

impl Trump {
    pub const ALL: [Trump; 5] = [
        Trump::Spades,
        Trump::Diamonds,
        Trump::Hearts,
        Trump::Clubs,
        Trump::NoTrump,
    ];

    /// The elevated suit, or `None` for no-trump.
    pub fn suit(self) -> Option<Suit> {
        match self {
            Trump::Spades => Some(Suit::Spades),
            Trump::Diamonds => Some(Suit::Diamonds),
            Trump::Hearts => Some(Suit::Hearts),
            Trump::Clubs => Some(Suit::Clubs),
            Trump::NoTrump => None,
        }
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Spades => Trump::Spades,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Hearts => Trump::Hearts,
            Suit::Clubs => Trump::Clubs,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// A, K, Q, J and 10 carry one point each.
    pub fn is_point(self) -> bool {
        self >= Rank::Ten
    }
}

/// One of the 53 cards: a ranked suit card, or the Joker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Card {
    Suited { suit: Suit, rank: Rank },
    Joker,
}

// Note: Ord on Card is only for stable sorting: suit order S<D<H<C then rank,
// Joker last. Trick resolution never uses it.

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card::Suited { suit, rank }
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(suit),
            Card::Joker => None,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(rank),
            Card::Joker => None,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::Joker)
    }

    pub fn is_point(self) -> bool {
        self.rank().is_some_and(Rank::is_point)
    }

    pub fn is_suit(self, suit: Suit) -> bool {
        self.suit() == Some(suit)
    }
}
