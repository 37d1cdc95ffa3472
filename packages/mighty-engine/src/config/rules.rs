//! Table rules.
//!
//! `RuleConfig::default()` is the base rule set: every optional rule from the
//! traditional table game is switched off, so dealing, the auction, the kitty
//! exchange, trick play and scoring behave in their plainest form. Tables opt
//! into the traditional rules one flag at a time, or all at once through
//! [`RuleConfig::classic`].
//!
//! # Example JSON Config
//!
//! ```json
//! {
//!   "minimum_bid": 13,
//!   "mighty": true,
//!   "forced_joker": "ineligible",
//!   "scoring": { "no_trump_multiplier": 2 }
//! }
//! ```
//!
//! Unknown fields are rejected; omitted fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::scoring::ScoringConfig;
use crate::domain::rules::{MAX_BID, PLAYERS};

/// Invalid rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rule config parse error: {0}")]
    Parse(String),
    #[error("invalid rule config: {0}")]
    Invalid(String),
}

/// How the led suit is fixed when the Joker opens a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JokerLeadRule {
    /// The led suit is the trump suit; with no-trump nothing has to be followed.
    AsTrump,
    /// The leader names the led suit.
    Declared,
}

/// How the Joker ranks when it was drawn out by a Joker-Call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForcedJokerRank {
    /// Beats every non-trump card, loses to every real trump.
    /// In a no-trump hand this degrades to `Ineligible`.
    LowestTrump,
    /// Cannot win the trick at all.
    Ineligible,
}

/// Rules for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Lowest opening bid.
    pub minimum_bid: u8,

    /// Seat making the first auction call.
    pub opening_bidder: u8,

    /// When every seat passes without a bid, reopen once at `minimum_bid - 1`
    /// before redealing.
    pub lower_minimum_on_all_pass: bool,

    /// Declarer may change trump while exchanging the kitty.
    pub allow_trump_change: bool,

    /// Bid raise for switching trump to another suit.
    pub suit_change_raise: u8,

    /// Bid raise for switching trump to no-trump.
    pub no_trump_change_raise: u8,

    pub joker_lead: JokerLeadRule,

    pub forced_joker: ForcedJokerRank,

    /// The Joker may be played even while holding the led suit.
    pub joker_always_playable: bool,

    /// Enables the Mighty card (SA, or DA under a Spades trump).
    pub mighty: bool,

    /// On trick 1: no trump lead while holding other suits, no Joker-Call.
    pub first_trick_restrictions: bool,

    /// An uncalled Joker loses its power on the first and last tricks.
    pub joker_powerless_first_last: bool,

    /// Seats with a point-poor hand may call a misdeal during the auction.
    pub allow_misdeal: bool,

    /// Highest point-card count that still qualifies for a misdeal.
    pub misdeal_max_points: u8,

    /// Point cards in the discard count for the declarer's side at scoring.
    pub count_discarded_points: bool,

    pub scoring: ScoringConfig,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            minimum_bid: 13,
            opening_bidder: 0,
            lower_minimum_on_all_pass: false,
            allow_trump_change: false,
            suit_change_raise: 2,
            no_trump_change_raise: 1,
            joker_lead: JokerLeadRule::AsTrump,
            forced_joker: ForcedJokerRank::LowestTrump,
            joker_always_playable: false,
            mighty: false,
            first_trick_restrictions: false,
            joker_powerless_first_last: false,
            allow_misdeal: false,
            misdeal_max_points: 1,
            count_discarded_points: false,
            scoring: ScoringConfig::default(),
        }
    }
}

impl RuleConfig {
    /// Traditional table rules.
    pub fn classic() -> Self {
        Self {
            lower_minimum_on_all_pass: true,
            allow_trump_change: true,
            joker_lead: JokerLeadRule::Declared,
            forced_joker: ForcedJokerRank::Ineligible,
            joker_always_playable: true,
            mighty: true,
            first_trick_restrictions: true,
            joker_powerless_first_last: true,
            allow_misdeal: true,
            count_discarded_points: true,
            scoring: ScoringConfig::classic(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON rule document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BID).contains(&self.minimum_bid) {
            return Err(ConfigError::Invalid(format!(
                "minimum_bid must be 1..={MAX_BID}, got {}",
                self.minimum_bid
            )));
        }
        if self.lower_minimum_on_all_pass && self.minimum_bid < 2 {
            return Err(ConfigError::Invalid(
                "lower_minimum_on_all_pass needs minimum_bid >= 2".into(),
            ));
        }
        if self.opening_bidder as usize >= PLAYERS {
            return Err(ConfigError::Invalid(format!(
                "opening_bidder must be 0..={}, got {}",
                PLAYERS - 1,
                self.opening_bidder
            )));
        }
        if self.allow_trump_change && (self.suit_change_raise == 0 || self.no_trump_change_raise == 0)
        {
            return Err(ConfigError::Invalid(
                "trump change raises must be at least 1".into(),
            ));
        }
        self.scoring.validate()
    }
}
