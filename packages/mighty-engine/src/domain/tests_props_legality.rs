// Property tests: legal_plays agrees with play_card over random hands

use proptest::prelude::*;

use crate::domain::cards_logic::{hand_has_suit, mighty_card};
use crate::domain::commands::Command;
use crate::domain::dealing::game_from_deck;
use crate::domain::state::Game;
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::tricks::{legal_plays, play_card, LegalPlay};
use crate::domain::Card;

/// Check the legality rules at one decision point; returns a description of
/// the first violation.
fn check_decision(game: &Game) -> Result<(), String> {
    let Some(trick) = game.current_trick() else {
        return Ok(());
    };
    let seat = trick.next_to_play();
    let hand = game.hand(seat);
    let legal = legal_plays(game, seat);
    if legal.is_empty() {
        return Err(format!("seat {seat} has no legal play"));
    }
    if let Some(p) = legal.iter().find(|p| !hand.contains(&p.card)) {
        return Err(format!("{} is legal but not in hand", p.card));
    }
    // Nobody else may act.
    for other in (0..5).filter(|&s| s != seat) {
        if !legal_plays(game, other).is_empty() {
            return Err(format!("seat {other} has plays out of turn"));
        }
    }

    // Every plain play is accepted iff listed.
    for &card in hand {
        let listed = legal.contains(&LegalPlay { card, call: None });
        let mut attempt = game.clone();
        let accepted = play_card(&mut attempt, seat, card).is_ok();
        if listed != accepted {
            return Err(format!("{card}: listed={listed} accepted={accepted}"));
        }
        if !accepted && attempt != *game {
            return Err(format!("rejected {card} mutated the game"));
        }
    }

    let Some(led) = trick.led_suit.filter(|_| !trick.plays.is_empty()) else {
        return Ok(());
    };
    let trump = game.setup.trump.ok_or("no trump in trick phase")?;
    let mighty = game.rules.mighty.then(|| mighty_card(trump));
    if !hand_has_suit(hand, led) {
        return Ok(());
    }
    for p in &legal {
        let exempt = Some(p.card) == mighty || p.card == Card::Joker;
        if !p.card.is_suit(led) && !exempt {
            return Err(format!("{} listed while holding led suit {led}", p.card));
        }
    }
    if trick.joker_called && hand.contains(&Card::Joker) {
        if let Some(p) = legal
            .iter()
            .find(|p| p.card != Card::Joker && Some(p.card) != mighty)
        {
            return Err(format!("{} listed while the Joker is forced", p.card));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_legal_plays_match_play_card(
        deck in test_gens::deck(),
        rules in test_gens::rules(),
        ai_seed in any::<u64>(),
    ) {
        let mut game = game_from_deck(13, 0, rules, &deck).unwrap();
        let mut failures = Vec::new();
        test_gens::drive_random(&mut game, ai_seed, |g, cmd| {
            if let Command::PlayCard { .. } = cmd {
                if let Err(e) = check_decision(g) {
                    failures.push(e);
                }
            }
        });
        prop_assert!(failures.is_empty(), "{:?}", failures);
    }

    #[test]
    fn prop_hands_shrink_by_one_per_play(
        deck in test_gens::deck(),
        rules in test_gens::rules(),
        ai_seed in any::<u64>(),
    ) {
        let mut game = game_from_deck(17, 0, rules, &deck).unwrap();
        let mut bad = Vec::new();
        let mut previous: Option<(u8, usize)> = None;
        test_gens::drive_random(&mut game, ai_seed, |g, cmd| {
            if let Some((seat, before)) = previous.take() {
                let after = g.hand(seat).len();
                if after + 1 != before {
                    bad.push((seat, before, after));
                }
            }
            if let Command::PlayCard { player, .. } = cmd {
                previous = Some((*player, g.hand(*player).len()));
            }
        });
        prop_assert!(bad.is_empty(), "{:?}", bad);
        prop_assert!(game.cards.hands.iter().all(Vec::is_empty));
    }
}
