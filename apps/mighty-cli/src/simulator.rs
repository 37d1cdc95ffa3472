//! Random-legal-move soak harness.
//!
//! Every seat is a seeded [`RandomPlayer`]. The engine's consistency check
//! runs after each accepted command, so any rule-engine bug that corrupts
//! state surfaces as a [`CliError::Inconsistent`] with the offending index.

use mighty_engine::ai::{AiPlayer, RandomPlayer};
use mighty_engine::{
    apply_command, check_consistency, get_perspective, new_game_with_rules, Command, Friend,
    GameError, PlayerId, RuleConfig, StateError, Trump,
};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;

const PLAYERS: usize = 5;

/// Upper bound on commands per hand, redeals included.
const MAX_STEPS: usize = 2_000;

/// One finished hand, written as a JSONL line.
#[derive(Debug, Clone, Serialize)]
pub struct HandSummary {
    pub game: u32,
    pub seed: u64,
    /// Deals needed before an auction resolved.
    pub deals: u32,
    pub declarer: PlayerId,
    pub friend: Friend,
    pub bid: u8,
    pub trump: Trump,
    pub declarer_points: u8,
    pub declarer_won: bool,
    pub payouts: [i32; PLAYERS],
    pub commands: Vec<Command>,
}

pub struct Simulator {
    rules: RuleConfig,
    seats: [RandomPlayer; PLAYERS],
}

impl Simulator {
    pub fn new(rules: RuleConfig, ai_seed: u64) -> Self {
        let seats = std::array::from_fn(|seat| {
            RandomPlayer::new(Some(ai_seed.wrapping_add(seat as u64)))
        });
        Self { rules, seats }
    }

    /// Play one hand from `seed` to completion.
    pub fn play_hand(&self, game_no: u32, seed: u64) -> Result<HandSummary, CliError> {
        let mut game = new_game_with_rules(seed, self.rules.clone())?;
        let mut commands = Vec::new();

        while !game.is_complete() {
            if commands.len() >= MAX_STEPS {
                return Err(CliError::Stalled {
                    game: game_no,
                    steps: commands.len(),
                });
            }
            // Nobody holds the turn while a redeal is pending.
            let seat = game.turn.unwrap_or(0);
            let command = self.seats[seat as usize].choose_command(&get_perspective(&game, seat))?;
            let index = commands.len();
            apply_command(&mut game, &command).map_err(|source| CliError::Rejected {
                index,
                code: source.code(),
                source,
            })?;
            check_consistency(&game).map_err(|source| CliError::Inconsistent {
                game: game_no,
                index,
                source,
            })?;
            debug!(game = game_no, index, ?command, "applied");
            commands.push(command);
        }

        let outcome = game.outcome.clone().ok_or_else(|| {
            GameError::from(StateError::InvariantViolated(
                "complete hand without outcome".into(),
            ))
        })?;
        Ok(HandSummary {
            game: game_no,
            seed,
            deals: game.deal_no + 1,
            declarer: outcome.declarer,
            friend: outcome.friend,
            bid: outcome.bid,
            trump: outcome.trump,
            declarer_points: outcome.declarer_points,
            declarer_won: outcome.declarer_won,
            payouts: outcome.payouts,
            commands,
        })
    }
}
