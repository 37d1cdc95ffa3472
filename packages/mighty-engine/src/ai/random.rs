//! Random AI player - makes random legal moves.

use std::sync::Mutex;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::commands::Command;
use crate::domain::dealing::full_deck;
use crate::domain::friend::FriendCall;
use crate::domain::player_view::Perspective;
use crate::domain::rules::KITTY_SIZE;
use crate::domain::state::Phase;

/// AI that makes random legal moves.
///
/// Bidding flips a coin between passing and a uniformly chosen legal bid, so
/// auctions resolve instead of climbing to the maximum every time. The
/// exchange discards three random cards and never revises trump.
pub struct RandomPlayer {
    rng: Mutex<ChaCha20Rng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha20Rng::seed_from_u64(s),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_command(&self, view: &Perspective) -> Result<Command, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        let player = view.viewer;

        match view.phase {
            Phase::Bidding => {
                if view.legal_bids.is_empty() || rng.random_bool(0.5) {
                    return Ok(Command::Pass { player });
                }
                let bid = view
                    .legal_bids
                    .choose(&mut *rng)
                    .copied()
                    .ok_or_else(|| AiError::Internal("Failed to choose random bid".into()))?;
                Ok(Command::Bid {
                    player,
                    value: bid.value,
                    trump: bid.trump,
                })
            }
            Phase::Exchange => {
                let kitty = view
                    .kitty
                    .as_ref()
                    .ok_or_else(|| AiError::InvalidMove("only the declarer exchanges".into()))?;
                let mut pool: Vec<_> = view.hand.iter().chain(kitty).copied().collect();
                pool.shuffle(&mut *rng);
                pool.truncate(KITTY_SIZE);
                Ok(Command::ExchangeKitty {
                    discard: pool,
                    trump: None,
                })
            }
            Phase::FriendCall => {
                let call = match rng.random_range(0..4) {
                    0 => FriendCall::NoFriend,
                    1 => FriendCall::FirstTrickWinner,
                    _ => {
                        let outside: Vec<_> = full_deck()
                            .into_iter()
                            .filter(|c| !view.hand.contains(c))
                            .collect();
                        let card = outside.choose(&mut *rng).copied().ok_or_else(|| {
                            AiError::Internal("Failed to choose friend card".into())
                        })?;
                        FriendCall::Card(card)
                    }
                };
                Ok(Command::DeclareFriend { call })
            }
            Phase::Trick { .. } => {
                let play = view
                    .legal_plays
                    .choose(&mut *rng)
                    .copied()
                    .ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))?;
                Ok(Command::PlayCard {
                    player,
                    card: play.card,
                    lead: play.call,
                })
            }
            Phase::Redeal => Ok(Command::Redeal),
            Phase::Complete => Err(AiError::InvalidMove("the hand is over".into())),
        }
    }
}
