use crate::config::{RuleConfig, ScoringConfig};
use crate::domain::fixtures::CardFixtures;
use crate::domain::friend::{Friend, FriendCall};
use crate::domain::scoring::{
    score_hand, score_hand_with, HandOutcome, PayoutRule, Settlement, StandardPayout,
};
use crate::domain::state::Game;
use crate::domain::test_state_helpers::game_in_tricks;
use crate::domain::Trump;

fn outcome(declarer_points: u8, bid: u8, friend: Friend, trump: Trump) -> HandOutcome {
    HandOutcome {
        declarer: 0,
        friend,
        bid,
        trump,
        declarer_points,
        opposition_points: 20 - declarer_points,
        declarer_won: declarer_points >= bid,
        sweep: declarer_points == 20,
        payouts: [0; 5],
    }
}

fn settle(o: &HandOutcome, minimum_bid: u8, scoring: &ScoringConfig) -> [i32; 5] {
    StandardPayout.payouts(&Settlement {
        outcome: o,
        minimum_bid,
        scoring,
    })
}

/// Game whose captured piles are set directly, as if ten tricks were played.
fn finished(rules: RuleConfig, declarer_cards: &str, opposition_cards: &str) -> Game {
    let mut game = game_in_tricks(
        rules,
        ["", "", "", "", ""],
        0,
        14,
        Trump::Spades,
        FriendCall::NoFriend,
    );
    game.cards.captured.declarer = CardFixtures::parse_list(declarer_cards);
    game.cards.captured.opposition = CardFixtures::parse_list(opposition_cards);
    game
}

#[test]
fn declarer_wins_when_points_meet_the_bid() {
    let game = finished(
        RuleConfig::default(),
        "SA SK SQ SJ ST HA HK HQ HJ HT DA DK DQ DJ",
        "DT CA CK CQ CJ CT",
    );
    let o = score_hand(&game).unwrap();
    assert_eq!(o.declarer_points, 14);
    assert_eq!(o.opposition_points, 6);
    assert!(o.declarer_won);
    assert!(!o.sweep);

    let game = finished(RuleConfig::default(), "SA SK SQ", "HA");
    let o = score_hand(&game).unwrap();
    assert_eq!(o.declarer_points, 3);
    assert!(!o.declarer_won);
}

#[test]
fn non_point_cards_score_nothing() {
    let game = finished(RuleConfig::default(), "S2 S3 S9 JK", "");
    assert_eq!(score_hand(&game).unwrap().declarer_points, 0);
}

#[test]
fn discarded_points_count_only_when_configured() {
    let mut game = finished(RuleConfig::default(), "SA", "");
    game.cards.discard = CardFixtures::parse_list("HA HK H2");
    assert_eq!(score_hand(&game).unwrap().declarer_points, 1);

    game.rules.count_discarded_points = true;
    assert_eq!(score_hand(&game).unwrap().declarer_points, 3);
}

#[test]
fn standard_payout_with_friend_is_two_one_minus_one() {
    let o = outcome(16, 14, Friend::Resolved(3), Trump::Spades);
    // (16 - 14) + 2 * (14 - 13) = 4
    let payouts = settle(&o, 13, &ScoringConfig::default());
    assert_eq!(payouts, [8, -4, -4, 4, -4]);
    assert_eq!(payouts.iter().sum::<i32>(), 0);
}

#[test]
fn standard_payout_flips_on_a_loss() {
    let o = outcome(12, 15, Friend::Resolved(1), Trump::Hearts);
    let payouts = settle(&o, 13, &ScoringConfig::default());
    assert_eq!(payouts, [-6, -3, 3, 3, 3]);
}

#[test]
fn solo_declarer_collects_from_all_four() {
    let o = outcome(15, 15, Friend::NoFriend, Trump::Hearts);
    // 0 + 2 * 2 = 4 units, no multiplier by default.
    assert_eq!(settle(&o, 13, &ScoringConfig::default()), [16, -4, -4, -4, -4]);
    // Doubled under the traditional table.
    assert_eq!(settle(&o, 13, &ScoringConfig::classic()), [32, -8, -8, -8, -8]);
}

#[test]
fn classic_multipliers_stack() {
    let scoring = ScoringConfig::classic();
    // Sweep in no-trump: 2 * 2.
    let o = outcome(20, 13, Friend::Resolved(2), Trump::NoTrump);
    assert_eq!(settle(&o, 13, &scoring), [56, -28, 28, -28, -28]);

    // Back-run: the declarer side lost with fewer than ten points.
    let o = outcome(9, 13, Friend::Resolved(2), Trump::Spades);
    assert_eq!(settle(&o, 13, &scoring), [-16, 8, -8, 8, 8]);
}

#[test]
fn friend_equal_to_declarer_plays_as_solo() {
    let o = outcome(14, 14, Friend::Resolved(0), Trump::Spades);
    assert_eq!(settle(&o, 13, &ScoringConfig::default()), [8, -2, -2, -2, -2]);
}

struct FlatPayout;

impl PayoutRule for FlatPayout {
    fn payouts(&self, settlement: &Settlement<'_>) -> [i32; 5] {
        let sign = if settlement.outcome.declarer_won { 1 } else { -1 };
        let mut p = [-sign; 5];
        p[settlement.outcome.declarer as usize] = 4 * sign;
        p
    }
}

#[test]
fn payout_rule_is_pluggable() {
    let game = finished(
        RuleConfig::default(),
        "SA SK SQ SJ ST HA HK HQ HJ HT DA DK DQ DJ",
        "",
    );
    let o = score_hand_with(&game, &FlatPayout).unwrap();
    assert_eq!(o.payouts, [4, -1, -1, -1, -1]);
}
