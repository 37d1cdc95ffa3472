//! Rule configuration for the CLI.
//!
//! Layers, lowest precedence first: engine defaults, the JSON rules file
//! (`--rules` / `MIGHTY_RULES`), then single-field environment overrides.
//! The merged result is validated once at the end.

use std::path::Path;

use mighty_engine::RuleConfig;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CliError;

pub const ENV_MINIMUM_BID: &str = "MIGHTY_MINIMUM_BID";
pub const ENV_FORCED_JOKER: &str = "MIGHTY_FORCED_JOKER";
pub const ENV_JOKER_LEAD: &str = "MIGHTY_JOKER_LEAD";

pub fn load_rules(path: Option<&Path>) -> Result<RuleConfig, CliError> {
    let mut rules = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            RuleConfig::from_json(&text)?
        }
        None => RuleConfig::default(),
    };
    apply_overrides(&mut rules, |var| std::env::var(var).ok())?;
    rules.validate()?;
    debug!(?rules, "rules loaded");
    Ok(rules)
}

/// Apply env-style overrides read through `lookup`.
pub fn apply_overrides<F>(rules: &mut RuleConfig, lookup: F) -> Result<(), CliError>
where
    F: Fn(&'static str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_MINIMUM_BID) {
        rules.minimum_bid = value.trim().parse().map_err(|e| CliError::EnvOverride {
            var: ENV_MINIMUM_BID,
            value: value.clone(),
            reason: format!("{e}"),
        })?;
    }
    if let Some(value) = lookup(ENV_FORCED_JOKER) {
        rules.forced_joker = parse_variant(ENV_FORCED_JOKER, &value)?;
    }
    if let Some(value) = lookup(ENV_JOKER_LEAD) {
        rules.joker_lead = parse_variant(ENV_JOKER_LEAD, &value)?;
    }
    Ok(())
}

/// Parse a unit enum variant by its snake_case serde name.
fn parse_variant<T: DeserializeOwned>(var: &'static str, value: &str) -> Result<T, CliError> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_ascii_lowercase())).map_err(
        |e| CliError::EnvOverride {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        },
    )
}
