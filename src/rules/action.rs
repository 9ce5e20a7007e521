//! Play commands and the audit record of resolved plays.
//!
//! A play is a card plus what to do with it. The action is a closed enum,
//! so every resolver match is exhaustive:
//! - `Place`: put the card in an empty cell
//! - `Replace`: evict an occupant the card outranks
//! - `SpecialPower`: place or replace, then fire the card's power. Queens
//!   and Jacks name a target; Aces and Kings have none and resolve as the
//!   bare board move
//!
//! ## Example
//!
//! ```
//! use regicide::board::Position;
//! use regicide::cards::CardId;
//! use regicide::rules::{BaseAction, PlayAction, PlayCommand};
//!
//! let play = PlayCommand::queen(
//!     CardId::new(11),
//!     BaseAction::Place,
//!     Position::new(1, 0),
//!     Position::new(1, 0),
//!     Position::new(1, 2),
//! );
//!
//! assert_eq!(play.action.base(), BaseAction::Place);
//! assert!(matches!(play.action, PlayAction::SpecialPower { .. }));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Position;
use crate::cards::{Card, CardId};
use crate::core::PlayerId;

/// The board move underneath a special power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseAction {
    Place,
    Replace,
}

/// Target of a Queen or Jack power.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "power", rename_all = "snake_case")]
pub enum PowerTarget {
    /// Queen: swap the occupants of two cells. Must name exactly two.
    Swap { positions: SmallVec<[Position; 2]> },

    /// Jack: give `give` to `target`, take a random card from them.
    Exchange { give: CardId, target: PlayerId },
}

/// What to do with the played card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlayAction {
    Place {
        position: Position,
    },
    Replace {
        position: Position,
    },
    SpecialPower {
        base: BaseAction,
        position: Position,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        power: Option<PowerTarget>,
    },
}

impl PlayAction {
    /// Underlying board move.
    #[must_use]
    pub fn base(&self) -> BaseAction {
        match self {
            PlayAction::Place { .. } => BaseAction::Place,
            PlayAction::Replace { .. } => BaseAction::Replace,
            PlayAction::SpecialPower { base, .. } => *base,
        }
    }

    /// Cell the played card goes to.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            PlayAction::Place { position }
            | PlayAction::Replace { position }
            | PlayAction::SpecialPower { position, .. } => *position,
        }
    }

    #[must_use]
    pub fn power(&self) -> Option<&PowerTarget> {
        match self {
            PlayAction::SpecialPower { power, .. } => power.as_ref(),
            _ => None,
        }
    }
}

/// Body of a `play_card` command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayCommand {
    pub card_id: CardId,

    #[serde(flatten)]
    pub action: PlayAction,
}

impl PlayCommand {
    #[must_use]
    pub fn place(card_id: CardId, position: Position) -> Self {
        Self {
            card_id,
            action: PlayAction::Place { position },
        }
    }

    #[must_use]
    pub fn replace(card_id: CardId, position: Position) -> Self {
        Self {
            card_id,
            action: PlayAction::Replace { position },
        }
    }

    /// Special play with no target, as an Ace or King sends it.
    #[must_use]
    pub fn special(card_id: CardId, base: BaseAction, position: Position) -> Self {
        Self {
            card_id,
            action: PlayAction::SpecialPower {
                base,
                position,
                power: None,
            },
        }
    }

    /// Queen play swapping `a` and `b` after the base move.
    #[must_use]
    pub fn queen(
        card_id: CardId,
        base: BaseAction,
        position: Position,
        a: Position,
        b: Position,
    ) -> Self {
        Self {
            card_id,
            action: PlayAction::SpecialPower {
                base,
                position,
                power: Some(PowerTarget::Swap {
                    positions: SmallVec::from_slice(&[a, b]),
                }),
            },
        }
    }

    /// Jack play giving `give` to `target` after the base move.
    #[must_use]
    pub fn jack(
        card_id: CardId,
        base: BaseAction,
        position: Position,
        give: CardId,
        target: PlayerId,
    ) -> Self {
        Self {
            card_id,
            action: PlayAction::SpecialPower {
                base,
                position,
                power: Some(PowerTarget::Exchange { give, target }),
            },
        }
    }
}

/// A resolved play, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub player: PlayerId,

    /// The card as it landed on the board.
    pub card: Card,

    pub action: PlayAction,

    /// Occupant evicted by a replacement.
    pub replaced: Option<Card>,

    /// Card drawn from the Jack's target.
    pub drawn: Option<CardId>,

    /// Turn number the play was made on.
    pub turn: u32,
}
