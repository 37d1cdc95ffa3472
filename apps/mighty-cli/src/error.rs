//! CLI error type.

use std::path::PathBuf;

use mighty_engine::ai::AiError;
use mighty_engine::{ConfigError, ErrorCode, GameError, StateError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed command: {source}")]
    BadCommand {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {var}={value:?}: {reason}")]
    EnvOverride {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("command {index} rejected [{code}]: {source}")]
    Rejected {
        index: usize,
        code: ErrorCode,
        #[source]
        source: GameError,
    },

    #[error("game {game}: inconsistent after command {index}: {source}")]
    Inconsistent {
        game: u32,
        index: usize,
        #[source]
        source: StateError,
    },

    #[error("game {game}: no finished hand after {steps} commands")]
    Stalled { game: u32, steps: usize },

    #[error("{failed} of {total} hands failed")]
    SimulationFailed { failed: u32, total: u32 },

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("AI error: {0}")]
    Ai(#[from] AiError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
