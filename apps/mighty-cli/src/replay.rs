//! Deterministic replay of a JSONL command log.

use std::path::Path;

use mighty_engine::{get_perspective, new_game_with_rules, replay, Command, Game, PlayerId, RuleConfig};
use tracing::info;

use crate::error::CliError;

/// Read one command per line. Blank lines and `#` comments are skipped.
pub fn read_log(path: &Path) -> Result<Vec<Command>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    parse_log(path, &text)
}

fn parse_log(path: &Path, text: &str) -> Result<Vec<Command>, CliError> {
    let mut commands = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command = serde_json::from_str(line).map_err(|source| CliError::BadCommand {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

/// Deal with `seed` and apply `commands`; the first rejection aborts.
pub fn run_replay(seed: u64, rules: RuleConfig, commands: &[Command]) -> Result<Game, CliError> {
    let mut game = new_game_with_rules(seed, rules)?;
    let applied = replay(&mut game, commands).map_err(|(index, source)| CliError::Rejected {
        index,
        code: source.code(),
        source,
    })?;
    info!(seed, applied, phase = game.phase.name(), "replay finished");
    Ok(game)
}

/// Final state as pretty JSON, or one seat's view of it.
pub fn render(game: &Game, viewer: Option<PlayerId>) -> Result<String, CliError> {
    let json = match viewer {
        Some(seat) => serde_json::to_string_pretty(&get_perspective(game, seat))?,
        None => serde_json::to_string_pretty(game)?,
    };
    Ok(json)
}
