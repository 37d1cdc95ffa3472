//! End-to-end hands through the public operations.

use crate::config::RuleConfig;
use crate::domain::bidding::{pass, place_bid, redeal, BidResult};
use crate::domain::cards_logic::count_points;
use crate::domain::commands::{apply_command, Command};
use crate::domain::consistency::check_consistency;
use crate::domain::dealing::new_game;
use crate::domain::fixtures::CardFixtures;
use crate::domain::friend::{Friend, FriendCall};
use crate::domain::kitty::{declare_friend, exchange_kitty};
use crate::domain::state::{Phase, Side};
use crate::domain::test_gens::drive_random;
use crate::domain::test_state_helpers::{card, game_in_tricks, play_all, scripted_game, win_auction};
use crate::domain::tricks::play_card;
use crate::domain::Trump;
use crate::errors::domain::{GameError, StateError};

#[test]
fn scenario_a_all_pass_then_same_seed_redeals_identically() {
    let mut game = new_game(42).unwrap();
    let initial_hands = game.cards.hands.clone();
    let mut last = None;
    for seat in 0..5 {
        last = Some(pass(&mut game, seat).unwrap());
    }
    assert_eq!(last, Some(BidResult::Redeal));
    assert_eq!(game.phase, Phase::Redeal);

    let again = new_game(42).unwrap();
    assert_eq!(again.cards.hands, initial_hands);
    assert_eq!(again.cards.kitty, game.cards.kitty);

    // The table's next deal is itself reproducible.
    assert_eq!(redeal(&game).unwrap(), redeal(&game).unwrap());
}

#[test]
fn scenario_b_single_bidder_becomes_declarer() {
    let mut game = new_game(99).unwrap();
    pass(&mut game, 0).unwrap();
    pass(&mut game, 1).unwrap();
    place_bid(&mut game, 2, 14, Trump::Hearts).unwrap();
    for seat in [3, 4, 0, 1] {
        pass(&mut game, seat).unwrap();
    }
    assert_eq!(game.setup.declarer, Some(2));
    assert_eq!(game.setup.trump, Some(Trump::Hearts));
    assert_eq!(game.setup.trump.map(|t| t.to_string()), Some("H".into()));
    assert_eq!(game.setup.bid, Some(14));
}

#[test]
fn scenario_c_discard_never_reaches_captured() {
    let mut game = scripted_game(RuleConfig::default(), SCENARIO_E_HANDS, SCENARIO_E_KITTY);
    win_auction(&mut game, 0, 14, Trump::Spades);
    let discard = CardFixtures::parse_list("S9 S8 C2");
    assert_eq!(count_points(&discard), 0);
    exchange_kitty(&mut game, &discard).unwrap();
    assert_eq!(game.hand(0).len(), 10);
    assert_eq!(game.cards.discard, discard);

    drive_random(&mut game, 17, |_, _| {});
    for c in &discard {
        assert!(!game.cards.captured.declarer.contains(c));
        assert!(!game.cards.captured.opposition.contains(c));
    }
    assert_eq!(game.cards.captured.len(), 50);
}

#[test]
fn scenario_d_friend_resolves_exactly_once() {
    let hands = [
        "S2 D2 D3 D4 D5 D6 D7 D8 D9 DT",
        "S3 C2 C3 C4 C5 C6 C7 C8 C9 CT",
        "S4 CJ CQ CK CA H2 H3 H4 H5 H6",
        "SA H7 H8 H9 HT HJ HQ HK HA DJ",
        "",
    ];
    let mut game = game_in_tricks(
        RuleConfig::default(),
        hands,
        0,
        13,
        Trump::Hearts,
        FriendCall::Card(card("SA")),
    );
    play_all(&mut game, &[(0, "S2"), (1, "S3"), (2, "S4")]);
    assert_eq!(game.setup.friend, Friend::Unresolved);

    let result = play_card(&mut game, 3, card("SA")).unwrap();
    assert_eq!(result.friend_revealed, Some(3));
    assert_eq!(game.setup.friend, Friend::Resolved(3));

    let result = play_card(&mut game, 4, card("S5")).unwrap();
    assert_eq!(result.friend_revealed, None);
    assert_eq!(result.trick_winner, Some(3));
    assert_eq!(result.captured_by, Some(Side::Declarer));

    // Re-declaring is out of phase and leaves the friend alone.
    let before = game.clone();
    assert!(declare_friend(&mut game, FriendCall::NoFriend).is_err());
    assert_eq!(game, before);
    assert_eq!(game.setup.friend, Friend::Resolved(3));
}

// Declarer holds nine high trumps and wins tricks 1-9; the opposition takes
// four hearts in trick 10. CT goes to the discard.
const SCENARIO_E_HANDS: [&str; 5] = [
    "SA SK SQ SJ ST S9 S8 S7 S6 H2",
    "HA S2 H3 H4 H5 H6 D2 D3 D4 D5",
    "HK S3 H7 H8 H9 HT D6 D7 D8 D9",
    "HQ S4 DT DJ DQ DK DA C4 C5 C6",
    "HJ S5 C7 C8 C9 CJ CQ CK CA C3",
];
const SCENARIO_E_KITTY: &str = "CT C2 JK";
const SCENARIO_E_PLAYS: &[(u8, &str)] = &[
    (0, "SA"), (1, "S2"), (2, "S3"), (3, "S4"), (4, "S5"),
    (0, "SK"), (1, "H3"), (2, "H7"), (3, "DT"), (4, "C7"),
    (0, "SQ"), (1, "H4"), (2, "H8"), (3, "DJ"), (4, "C8"),
    (0, "SJ"), (1, "H5"), (2, "H9"), (3, "DQ"), (4, "C9"),
    (0, "ST"), (1, "H6"), (2, "HT"), (3, "DK"), (4, "CJ"),
    (0, "S9"), (1, "D2"), (2, "D6"), (3, "DA"), (4, "CQ"),
    (0, "S8"), (1, "D3"), (2, "D7"), (3, "C4"), (4, "CK"),
    (0, "S7"), (1, "D4"), (2, "D8"), (3, "C5"), (4, "CA"),
    (0, "S6"), (1, "D5"), (2, "D9"), (3, "C6"), (4, "C3"),
    (0, "H2"), (1, "HA"), (2, "HK"), (3, "HQ"), (4, "HJ"),
];

#[test]
fn scenario_e_full_hand_declarer_makes_contract() {
    let mut game = scripted_game(RuleConfig::default(), SCENARIO_E_HANDS, SCENARIO_E_KITTY);
    win_auction(&mut game, 0, 14, Trump::Spades);
    exchange_kitty(&mut game, &CardFixtures::parse_list(SCENARIO_E_KITTY)).unwrap();
    declare_friend(&mut game, FriendCall::NoFriend).unwrap();

    for &(seat, code) in SCENARIO_E_PLAYS {
        play_card(&mut game, seat, card(code)).unwrap();
        assert_eq!(check_consistency(&game), Ok(()));
    }

    assert_eq!(game.phase, Phase::Complete);
    assert_eq!(game.turn, None);
    let outcome = game.outcome.clone().unwrap();
    assert_eq!(outcome.declarer_points, 15);
    assert_eq!(outcome.opposition_points, 4);
    assert!(outcome.declarer_won);
    // (15 - 14) + 2 * (14 - 13) = 3 units from each of four opponents.
    assert_eq!(outcome.payouts, [12, -3, -3, -3, -3]);
    assert_eq!(game.tricks.iter().filter_map(|t| t.winner).last(), Some(1));

    let err = play_card(&mut game, 1, card("HA")).unwrap_err();
    assert_eq!(err, GameError::State(StateError::HandOver));
}

#[test]
fn command_log_replays_to_the_same_state() {
    let mut game = scripted_game(RuleConfig::default(), SCENARIO_E_HANDS, SCENARIO_E_KITTY);
    let mut log = vec![
        Command::Bid {
            player: 0,
            value: 14,
            trump: Trump::Spades,
        },
        Command::Pass { player: 1 },
        Command::Pass { player: 2 },
        Command::Pass { player: 3 },
        Command::Pass { player: 4 },
        Command::ExchangeKitty {
            discard: CardFixtures::parse_list(SCENARIO_E_KITTY),
            trump: None,
        },
        Command::DeclareFriend {
            call: FriendCall::NoFriend,
        },
    ];
    log.extend(SCENARIO_E_PLAYS.iter().map(|&(player, code)| Command::PlayCard {
        player,
        card: card(code),
        lead: None,
    }));

    let start = game.clone();
    for command in &log {
        apply_command(&mut game, command).unwrap();
    }

    let json: Vec<String> = log.iter().map(|c| serde_json::to_string(c).unwrap()).collect();
    let mut replayed = start;
    for line in &json {
        let command: Command = serde_json::from_str(line).unwrap();
        apply_command(&mut replayed, &command).unwrap();
    }
    assert_eq!(replayed, game);
    assert!(json[0].contains(r#""type":"bid""#));
}
