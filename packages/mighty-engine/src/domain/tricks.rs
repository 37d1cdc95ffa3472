//! Trick play: legality, winner resolution and capture attribution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info};

use crate::config::{ForcedJokerRank, JokerLeadRule, RuleConfig};
use crate::domain::cards_logic::{hand_has_suit, is_trump, joker_call_card, mighty_card};
use crate::domain::cards_parsing::JOKER_CALL_CODE;
use crate::domain::friend::{observe_play, observe_trick_winner};
use crate::domain::rules::{PLAYERS, TRICKS_PER_HAND};
use crate::domain::scoring::{score_hand, HandOutcome};
use crate::domain::state::{
    expected_actor, require_declarer, require_trump, Game, Phase, PlayerId, Side,
};
use crate::domain::{Card, Suit, Trump};
use crate::errors::domain::{CardParseError, GameError, IllegalPlayError, StateError};

/// Declaration attached to a lead.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum LeadCall {
    /// Leading the Joker-Call card and activating the call.
    JokerCall,
    /// Leading the Joker and naming the led suit.
    JokerAs(Suit),
}

impl fmt::Display for LeadCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadCall::JokerCall => f.write_str(JOKER_CALL_CODE),
            LeadCall::JokerAs(suit) => write!(f, "{suit}"),
        }
    }
}

impl FromStr for LeadCall {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == JOKER_CALL_CODE {
            return Ok(LeadCall::JokerCall);
        }
        s.parse::<Suit>().map(LeadCall::JokerAs)
    }
}

impl Serialize for LeadCall {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LeadCall {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One card put into a trick.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<LeadCall>,
}

/// A card choice together with the lead declaration it needs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LegalPlay {
    pub card: Card,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<LeadCall>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: PlayerId,
    pub plays: Vec<Play>,
    /// Suit the others must follow; `None` before the lead, or after a
    /// no-trump Joker lead.
    pub led_suit: Option<Suit>,
    /// The lead activated the Joker-Call.
    pub joker_called: bool,
    /// Set once all five cards are in.
    pub winner: Option<PlayerId>,
}

impl Trick {
    pub fn new(leader: PlayerId) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYERS),
            led_suit: None,
            joker_called: false,
            winner: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    /// Seat expected to play next into this trick.
    pub fn next_to_play(&self) -> PlayerId {
        expected_actor(self.leader, self.plays.len() as u8)
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|p| p.card)
    }
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayCardResult {
    /// Seat that became the friend with this play or trick, if any.
    pub friend_revealed: Option<PlayerId>,
    /// Winner of the trick this play completed.
    pub trick_winner: Option<PlayerId>,
    /// Side the completed trick was attributed to.
    pub captured_by: Option<Side>,
    /// Set when this play ended the hand.
    pub outcome: Option<HandOutcome>,
}

fn current_trick_no(game: &Game) -> Result<u8, StateError> {
    match game.phase {
        Phase::Trick { trick_no } => Ok(trick_no),
        Phase::Complete => Err(StateError::HandOver),
        actual => Err(StateError::PhaseMismatch {
            expected: "Trick",
            actual,
        }),
    }
}

/// Suit the lead fixes for the rest of the trick.
fn led_suit_for(card: Card, call: Option<LeadCall>, trump: Trump) -> Option<Suit> {
    match (card, call) {
        (Card::Suited { suit, .. }, _) => Some(suit),
        (Card::Joker, Some(LeadCall::JokerAs(suit))) => Some(suit),
        (Card::Joker, _) => trump.suit(),
    }
}

/// Check a lead without touching the game.
fn validate_lead(
    rules: &RuleConfig,
    trump: Trump,
    trick_no: u8,
    hand: &[Card],
    card: Card,
    call: Option<LeadCall>,
) -> Result<(), IllegalPlayError> {
    let first_trick = rules.first_trick_restrictions && trick_no == 1;
    match call {
        Some(LeadCall::JokerCall) => {
            let call_card = joker_call_card(trump);
            if card != call_card {
                return Err(IllegalPlayError::InvalidJokerCall { card, call_card });
            }
            if first_trick {
                return Err(IllegalPlayError::JokerCallOnFirstTrick);
            }
        }
        Some(LeadCall::JokerAs(_)) => {
            if !card.is_joker() || rules.joker_lead != JokerLeadRule::Declared {
                return Err(IllegalPlayError::UnexpectedLeadCall);
            }
        }
        None => {
            if card.is_joker() && rules.joker_lead == JokerLeadRule::Declared {
                return Err(IllegalPlayError::JokerSuitRequired);
            }
        }
    }
    if first_trick && is_trump(card, trump) {
        let holds_other_suit = hand
            .iter()
            .any(|c| c.suit().is_some() && !is_trump(*c, trump));
        if holds_other_suit {
            return Err(IllegalPlayError::TrumpLeadOnFirstTrick);
        }
    }
    Ok(())
}

/// Check a follow without touching the game.
fn validate_follow(
    rules: &RuleConfig,
    trump: Trump,
    trick: &Trick,
    hand: &[Card],
    card: Card,
    call: Option<LeadCall>,
) -> Result<(), IllegalPlayError> {
    if call.is_some() {
        return Err(IllegalPlayError::UnexpectedLeadCall);
    }
    if rules.mighty && card == mighty_card(trump) {
        return Ok(());
    }
    let Some(led) = trick.led_suit else {
        return Ok(());
    };
    let holds_led = hand_has_suit(hand, led);
    let holds_joker = hand.contains(&Card::Joker);

    // The Joker-Call draws the Joker out of anyone who could otherwise follow.
    if trick.joker_called && holds_joker && holds_led {
        return if card.is_joker() {
            Ok(())
        } else {
            Err(IllegalPlayError::JokerForced)
        };
    }

    if !holds_led {
        return Ok(());
    }
    match card {
        Card::Joker if rules.joker_always_playable => Ok(()),
        c if c.is_suit(led) => Ok(()),
        _ => Err(IllegalPlayError::MustFollowSuit { led }),
    }
}

/// Validate a play by `who` in full, without mutating anything.
fn validate_play(
    game: &Game,
    who: PlayerId,
    card: Card,
    call: Option<LeadCall>,
) -> Result<(), GameError> {
    let trick_no = current_trick_no(game)?;
    let trump = require_trump(game, "play_card")?;
    let trick = game.current_trick().ok_or_else(|| {
        StateError::InvariantViolated(format!("no open trick in trick phase {trick_no}"))
    })?;

    let expected = trick.next_to_play();
    if expected != who {
        return Err(IllegalPlayError::OutOfTurn { expected, got: who }.into());
    }
    let hand = game.hand(who);
    if !hand.contains(&card) {
        return Err(IllegalPlayError::CardNotInHand(card).into());
    }

    if trick.plays.is_empty() {
        validate_lead(&game.rules, trump, trick_no, hand, card, call)?;
    } else {
        validate_follow(&game.rules, trump, trick, hand, card, call)?;
    }
    Ok(())
}

/// Every card (with lead declaration) `who` could legally play right now.
///
/// Empty when it is not `who`'s turn in the trick phase.
pub fn legal_plays(game: &Game, who: PlayerId) -> Vec<LegalPlay> {
    let Some(trick) = game.current_trick() else {
        return Vec::new();
    };
    if trick.next_to_play() != who {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for &card in game.hand(who) {
        candidates.push(LegalPlay { card, call: None });
        if trick.plays.is_empty() {
            candidates.push(LegalPlay {
                card,
                call: Some(LeadCall::JokerCall),
            });
            if card.is_joker() {
                for suit in Suit::ALL {
                    candidates.push(LegalPlay {
                        card,
                        call: Some(LeadCall::JokerAs(suit)),
                    });
                }
            }
        }
    }
    candidates
        .into_iter()
        .filter(|p| validate_play(game, who, p.card, p.call).is_ok())
        .collect()
}

/// Play `card` without a lead declaration.
pub fn play_card(game: &mut Game, who: PlayerId, card: Card) -> Result<PlayCardResult, GameError> {
    play_card_with(game, who, card, None)
}

/// Play `card` into the open trick, enforcing turn, suit-following and the
/// Joker rules. Rejected plays leave the game unchanged.
pub fn play_card_with(
    game: &mut Game,
    who: PlayerId,
    card: Card,
    call: Option<LeadCall>,
) -> Result<PlayCardResult, GameError> {
    validate_play(game, who, card, call)?;
    let trick_no = current_trick_no(game)?;
    let trump = require_trump(game, "play_card")?;
    require_declarer(game, "play_card")?;

    // Commit.
    let hand = &mut game.cards.hands[who as usize];
    hand.retain(|&c| c != card);

    let Some(trick) = game.tricks.last_mut() else {
        return Err(StateError::InvariantViolated("no open trick".into()).into());
    };
    if trick.plays.is_empty() {
        trick.led_suit = led_suit_for(card, call, trump);
        trick.joker_called = call == Some(LeadCall::JokerCall);
    }
    trick.plays.push(Play {
        player: who,
        card,
        call,
    });
    debug!(player = who, %card, trick_no, "card played");

    let mut result = PlayCardResult {
        friend_revealed: observe_play(&mut game.setup, who, card),
        trick_winner: None,
        captured_by: None,
        outcome: None,
    };

    if !trick.is_complete() {
        game.turn = Some(trick.next_to_play());
        return Ok(result);
    }

    let winner = resolve_trick_winner(trick, trick_no, trump, &game.rules)
        .ok_or_else(|| StateError::InvariantViolated("complete trick without winner".into()))?;
    trick.winner = Some(winner);
    let cards: Vec<Card> = trick.cards().collect();

    if let Some(friend) = observe_trick_winner(&mut game.setup, trick_no, winner) {
        result.friend_revealed = Some(friend);
    }
    let side = game.side_of(winner);
    game.cards.captured.side_mut(side).extend(cards);
    result.trick_winner = Some(winner);
    result.captured_by = Some(side);
    debug!(winner, trick_no, ?side, "trick complete");

    if trick_no == TRICKS_PER_HAND {
        game.phase = Phase::Complete;
        game.turn = None;
        let outcome = score_hand(game)?;
        info!(
            declarer_points = outcome.declarer_points,
            declarer_won = outcome.declarer_won,
            "hand complete"
        );
        game.outcome = Some(outcome.clone());
        result.outcome = Some(outcome);
    } else {
        game.tricks.push(Trick::new(winner));
        game.phase = Phase::Trick {
            trick_no: trick_no + 1,
        };
        game.turn = Some(winner);
    }
    Ok(result)
}

/// Trick on which an uncalled Joker has no power under
/// `joker_powerless_first_last`.
fn joker_powerless(trick_no: u8, rules: &RuleConfig) -> bool {
    rules.joker_powerless_first_last && (trick_no == 1 || trick_no == TRICKS_PER_HAND)
}

/// Winning strength of one play; the highest strength takes the trick.
fn strength(card: Card, trick: &Trick, trick_no: u8, trump: Trump, rules: &RuleConfig) -> u16 {
    if rules.mighty && card == mighty_card(trump) {
        return 400;
    }
    match card {
        Card::Joker if !trick.joker_called && joker_powerless(trick_no, rules) => 0,
        Card::Joker if !trick.joker_called => 300,
        Card::Joker => match (rules.forced_joker, trump.suit()) {
            // Above every led-suit card, below every real trump.
            (ForcedJokerRank::LowestTrump, Some(_)) => 199,
            _ => 0,
        },
        Card::Suited { suit, rank } => {
            if trump.suit() == Some(suit) {
                200 + rank as u16
            } else if trick.led_suit == Some(suit) {
                100 + rank as u16
            } else {
                0
            }
        }
    }
}

/// Suit precedence for a powerless Joker lead that nobody could follow.
fn fallback_suit_rank(suit: Suit) -> u8 {
    match suit {
        Suit::Spades => 3,
        Suit::Hearts => 2,
        Suit::Diamonds => 1,
        Suit::Clubs => 0,
    }
}

/// Winner of a complete trick played as trick number `trick_no`; `None`
/// while cards are missing.
///
/// Ties cannot occur between distinct cards above zero; among zero-strength
/// cards the earliest play is kept. A powerless Joker lead that draws neither
/// trump nor the led suit goes to the highest card of the highest suit,
/// spades first, then hearts, diamonds and clubs.
pub fn resolve_trick_winner(
    trick: &Trick,
    trick_no: u8,
    trump: Trump,
    rules: &RuleConfig,
) -> Option<PlayerId> {
    if !trick.is_complete() {
        return None;
    }
    let mut best: Option<(u16, PlayerId)> = None;
    for play in &trick.plays {
        let s = strength(play.card, trick, trick_no, trump, rules);
        match best {
            Some((b, _)) if s <= b => {}
            _ => best = Some((s, play.player)),
        }
    }

    let joker_led = trick.plays.first().is_some_and(|p| p.card.is_joker());
    if matches!(best, Some((0, _))) && joker_led && joker_powerless(trick_no, rules) {
        return trick
            .plays
            .iter()
            .filter_map(|p| match p.card {
                Card::Suited { suit, rank } => Some(((fallback_suit_rank(suit), rank), p.player)),
                Card::Joker => None,
            })
            .max_by_key(|&(key, _)| key)
            .map(|(_, player)| player);
    }
    best.map(|(_, p)| p)
}
