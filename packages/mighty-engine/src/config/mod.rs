//! Rule configuration carried by every `Game`.

pub mod rules;
pub mod scoring;

pub use rules::{ConfigError, ForcedJokerRank, JokerLeadRule, RuleConfig};
pub use scoring::ScoringConfig;
