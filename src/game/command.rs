//! Inbound commands.
//!
//! The transport authenticates the sender and hands the engine a
//! `(PlayerId, Command)` pair. Commands are a closed set; each is only
//! accepted in its own phase (chat in any).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::Phase;
use crate::rules::PlayCommand;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Ready,
    Unready,
    /// Must name exactly one card; the count is checked by the draft.
    DraftPick {
        card_ids: SmallVec<[CardId; 2]>,
    },
    PlayCard(PlayCommand),
    Chat {
        text: String,
    },
}

impl Command {
    /// Draft pick of a single card.
    #[must_use]
    pub fn pick(card_id: CardId) -> Self {
        Command::DraftPick {
            card_ids: SmallVec::from_slice(&[card_id]),
        }
    }

    /// Phase the command is valid in, `None` for any phase.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Command::Ready | Command::Unready => Some(Phase::Waiting),
            Command::DraftPick { .. } => Some(Phase::Drafting),
            Command::PlayCard(_) => Some(Phase::Playing),
            Command::Chat { .. } => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ready => "ready",
            Command::Unready => "unready",
            Command::DraftPick { .. } => "draft_pick",
            Command::PlayCard(_) => "play_card",
            Command::Chat { .. } => "chat",
        }
    }
}
