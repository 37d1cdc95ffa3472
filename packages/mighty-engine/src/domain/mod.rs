//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod commands;
pub mod consistency;
pub mod dealing;
pub mod friend;
pub mod kitty;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_domain_dealing;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_player_view;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use bidding::{call_misdeal, pass, place_bid, redeal, Bid, BidResult};
pub use cards_logic::{count_points, hand_has_suit, is_trump, joker_call_card, mighty_card};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit, Trump};
pub use commands::{apply_command, replay, Command, CommandOutcome};
pub use consistency::check_consistency;
pub use dealing::{full_deck, new_game, new_game_with_rules};
pub use friend::{Friend, FriendCall};
pub use kitty::{declare_friend, exchange_kitty, exchange_kitty_with_revision};
pub use player_view::{get_perspective, Perspective};
pub use scoring::{score_hand, HandOutcome, PayoutRule, StandardPayout};
pub use state::{Game, Phase, PlayerId, Side};
pub use tricks::{legal_plays, play_card, play_card_with, LeadCall, PlayCardResult};
