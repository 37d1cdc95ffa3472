//! Serializable commands and a single dispatcher, so a hand can be driven
//! (and replayed) from a command log.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{call_misdeal, pass, place_bid, redeal, BidResult};
use crate::domain::friend::FriendCall;
use crate::domain::kitty::{declare_friend, exchange_kitty_with_revision};
use crate::domain::state::{Game, PlayerId};
use crate::domain::tricks::{play_card_with, LeadCall, PlayCardResult};
use crate::domain::{Card, Trump};
use crate::errors::domain::GameError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Bid {
        player: PlayerId,
        value: u8,
        trump: Trump,
    },
    Pass {
        player: PlayerId,
    },
    Misdeal {
        player: PlayerId,
    },
    /// Deal the next hand after a failed auction or a misdeal.
    Redeal,
    ExchangeKitty {
        discard: Vec<Card>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trump: Option<Trump>,
    },
    DeclareFriend {
        call: FriendCall,
    },
    PlayCard {
        player: PlayerId,
        card: Card,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lead: Option<LeadCall>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Auction(BidResult),
    Redealt { deal_no: u32 },
    KittyExchanged,
    FriendDeclared,
    Played(PlayCardResult),
}

/// Apply one command. On error the game is unchanged.
pub fn apply_command(game: &mut Game, command: &Command) -> Result<CommandOutcome, GameError> {
    let outcome = match command {
        Command::Bid {
            player,
            value,
            trump,
        } => CommandOutcome::Auction(place_bid(game, *player, *value, *trump)?),
        Command::Pass { player } => CommandOutcome::Auction(pass(game, *player)?),
        Command::Misdeal { player } => CommandOutcome::Auction(call_misdeal(game, *player)?),
        Command::Redeal => {
            *game = redeal(game)?;
            CommandOutcome::Redealt {
                deal_no: game.deal_no,
            }
        }
        Command::ExchangeKitty { discard, trump } => {
            exchange_kitty_with_revision(game, discard, *trump)?;
            CommandOutcome::KittyExchanged
        }
        Command::DeclareFriend { call } => {
            declare_friend(game, *call)?;
            CommandOutcome::FriendDeclared
        }
        Command::PlayCard { player, card, lead } => {
            CommandOutcome::Played(play_card_with(game, *player, *card, *lead)?)
        }
    };
    Ok(outcome)
}

/// Apply commands in order, stopping at the first rejection.
///
/// Returns the index of the rejected command with its error.
pub fn replay<'a, I>(game: &mut Game, commands: I) -> Result<usize, (usize, GameError)>
where
    I: IntoIterator<Item = &'a Command>,
{
    let mut applied = 0;
    for (index, command) in commands.into_iter().enumerate() {
        apply_command(game, command).map_err(|e| (index, e))?;
        applied += 1;
    }
    Ok(applied)
}
