use std::ops::RangeInclusive;

pub const PLAYERS: usize = 5;
pub const HAND_SIZE: usize = 10;
pub const KITTY_SIZE: usize = 3;
/// 52 ranked cards plus the Joker.
pub const DECK_SIZE: usize = 53;
pub const TRICKS_PER_HAND: u8 = 10;
pub const MAX_BID: u8 = 20;
/// Point cards in the deck (A, K, Q, J, 10 of each suit).
pub const TOTAL_POINTS: u8 = 20;

/// Accepted bid values for an auction opened at `minimum`.
pub fn valid_bid_range(minimum: u8) -> RangeInclusive<u8> {
    minimum..=MAX_BID
}
