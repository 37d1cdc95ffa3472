//! Payout multipliers applied at the end of a hand.
//!
//! The defaults leave every multiplier at 1, which reduces settlement to the
//! base rule: the declarer's side wins iff it captured at least `bid` points.
//! Bonuses for special outcomes are table-specific and only apply when a
//! table configures them.

use serde::{Deserialize, Serialize};

use super::rules::ConfigError;
use crate::domain::rules::TOTAL_POINTS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Declarer played without a friend.
    pub no_friend_multiplier: i32,
    /// Contract was played in no-trump.
    pub no_trump_multiplier: i32,
    /// Declarer's side captured every point card.
    pub sweep_multiplier: i32,
    /// Declarer's side lost and finished below `back_run_threshold`.
    pub back_run_multiplier: i32,
    pub back_run_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            no_friend_multiplier: 1,
            no_trump_multiplier: 1,
            sweep_multiplier: 1,
            back_run_multiplier: 1,
            back_run_threshold: 10,
        }
    }
}

impl ScoringConfig {
    /// Doubling table used at traditional tables.
    pub fn classic() -> Self {
        Self {
            no_friend_multiplier: 2,
            no_trump_multiplier: 2,
            sweep_multiplier: 2,
            back_run_multiplier: 2,
            back_run_threshold: 10,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let multipliers = [
            self.no_friend_multiplier,
            self.no_trump_multiplier,
            self.sweep_multiplier,
            self.back_run_multiplier,
        ];
        if multipliers.iter().any(|&m| m < 1) {
            return Err(ConfigError::Invalid(
                "scoring multipliers must be at least 1".into(),
            ));
        }
        if self.back_run_threshold > TOTAL_POINTS {
            return Err(ConfigError::Invalid(format!(
                "back_run_threshold must be 0..={TOTAL_POINTS}"
            )));
        }
        Ok(())
    }
}
