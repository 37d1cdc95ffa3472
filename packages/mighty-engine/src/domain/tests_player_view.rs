use crate::config::RuleConfig;
use crate::domain::dealing::new_game;
use crate::domain::friend::{Friend, FriendCall};
use crate::domain::player_view::get_perspective;
use crate::domain::test_state_helpers::{
    card, discard_kitty, game_in_tricks, scripted_game, win_auction,
};
use crate::domain::{Phase, Trump};

#[test]
fn perspective_shows_only_own_hand() {
    let game = new_game(11).unwrap();
    for seat in 0..5u8 {
        let view = get_perspective(&game, seat);
        assert_eq!(view.viewer, seat);
        assert_eq!(view.hand, game.hand(seat));
        assert_eq!(view.hand_sizes, [10; 5]);
        assert_eq!(view.kitty, None);
        assert_eq!(view.phase, Phase::Bidding);
    }
    assert!(!get_perspective(&game, 0).legal_bids.is_empty());
    assert!(get_perspective(&game, 1).legal_bids.is_empty());
}

#[test]
fn kitty_is_visible_to_the_declarer_only() {
    let mut game = scripted_game(RuleConfig::default(), ["", "", "", "", ""], "");
    win_auction(&mut game, 3, 15, Trump::Diamonds);

    let declarer_view = get_perspective(&game, 3);
    assert!(declarer_view.is_declarer());
    assert_eq!(declarer_view.kitty.as_deref(), Some(&game.cards.kitty[..]));
    for seat in [0, 1, 2, 4] {
        assert_eq!(get_perspective(&game, seat).kitty, None);
    }

    discard_kitty(&mut game);
    let declarer_view = get_perspective(&game, 3);
    assert_eq!(declarer_view.kitty, None);
    assert_eq!(declarer_view.discard.as_ref().map(Vec::len), Some(3));
    assert_eq!(get_perspective(&game, 0).discard, None);
}

#[test]
fn friend_stays_unresolved_until_the_card_is_played() {
    let hands = [
        "H5 H6 H7 H8 H9 D2 D3 D4 D5 D6",
        "HA D7 D8 D9 DT DJ DQ DK DA C2",
        "",
        "",
        "",
    ];
    let mut game = game_in_tricks(
        RuleConfig::default(),
        hands,
        0,
        13,
        Trump::Spades,
        FriendCall::Card(card("HA")),
    );
    for seat in 0..5u8 {
        let view = get_perspective(&game, seat);
        assert_eq!(view.setup.friend, Friend::Unresolved);
        assert_eq!(view.setup.friend_call, Some(FriendCall::Card(card("HA"))));
    }

    crate::domain::tricks::play_card(&mut game, 0, card("H5")).unwrap();
    crate::domain::tricks::play_card(&mut game, 1, card("HA")).unwrap();
    for seat in 0..5u8 {
        assert_eq!(get_perspective(&game, seat).setup.friend, Friend::Resolved(1));
    }
    assert_eq!(get_perspective(&game, 4).tricks[0].plays.len(), 2);
}

#[test]
fn legal_plays_only_for_the_seat_to_act() {
    let game = game_in_tricks(
        RuleConfig::default(),
        ["", "", "", "", ""],
        2,
        13,
        Trump::Hearts,
        FriendCall::NoFriend,
    );
    assert_eq!(get_perspective(&game, 2).legal_plays.len(), 10);
    assert!(get_perspective(&game, 3).legal_plays.is_empty());
}

#[test]
fn perspective_is_idempotent() {
    let game = game_in_tricks(
        RuleConfig::classic(),
        ["", "", "", "", ""],
        1,
        14,
        Trump::Clubs,
        FriendCall::FirstTrickWinner,
    );
    for seat in 0..5u8 {
        assert_eq!(get_perspective(&game, seat), get_perspective(&game, seat));
    }
}
