//! Test-only builders that drive a scripted deal to a given phase.

use crate::config::RuleConfig;
use crate::domain::bidding::{pass, place_bid};
use crate::domain::dealing::game_from_deck;
use crate::domain::fixtures::CardFixtures;
use crate::domain::friend::FriendCall;
use crate::domain::kitty::{declare_friend, exchange_kitty};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{next_player, Game, PlayerId};
use crate::domain::tricks::{play_card, play_card_with, LeadCall};
use crate::domain::{Card, Trump};

/// Bidding-phase game dealing the listed cards (see [`CardFixtures::deck_with`]).
pub fn scripted_game(rules: RuleConfig, hands: [&str; PLAYERS], kitty: &str) -> Game {
    let deck = CardFixtures::deck_with(hands, kitty);
    game_from_deck(0, 0, rules, &deck).unwrap()
}

/// Pass around to `declarer`, bid, then pass until the auction resolves.
pub fn win_auction(game: &mut Game, declarer: PlayerId, bid: u8, trump: Trump) {
    let mut seat = game.turn.unwrap();
    while seat != declarer {
        pass(game, seat).unwrap();
        seat = next_player(seat);
    }
    place_bid(game, declarer, bid, trump).unwrap();
    if bid < 20 {
        for _ in 0..PLAYERS - 1 {
            seat = next_player(seat);
            pass(game, seat).unwrap();
        }
    }
}

/// Exchange by discarding the kitty itself, leaving the declarer's hand as dealt.
pub fn discard_kitty(game: &mut Game) {
    let kitty: Vec<Card> = game.cards.kitty.clone();
    exchange_kitty(game, &kitty).unwrap();
}

/// Game at the start of trick 1 with `declarer` on lead.
pub fn game_in_tricks(
    rules: RuleConfig,
    hands: [&str; PLAYERS],
    declarer: PlayerId,
    bid: u8,
    trump: Trump,
    call: FriendCall,
) -> Game {
    let mut game = scripted_game(rules, hands, "");
    win_auction(&mut game, declarer, bid, trump);
    discard_kitty(&mut game);
    declare_friend(&mut game, call).unwrap();
    game
}

pub fn card(code: &str) -> Card {
    code.parse().unwrap()
}

/// Play `(seat, card)` pairs in order; panics on the first rejection.
pub fn play_all(game: &mut Game, plays: &[(PlayerId, &str)]) {
    for &(seat, code) in plays {
        play_card(game, seat, card(code)).unwrap();
    }
}

/// Lead with a declaration, then let the others follow.
pub fn lead_with(game: &mut Game, seat: PlayerId, code: &str, call: LeadCall) {
    play_card_with(game, seat, card(code), Some(call)).unwrap();
}
