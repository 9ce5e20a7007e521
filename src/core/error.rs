//! Engine error type.
//!
//! Every rejected command maps to one `GameError`. Errors are surfaced to
//! the offending player only and never end the game. Each error has a
//! stable snake_case `code()` for the wire.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use super::config::Phase;

/// Why a command was out of turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnViolationKind {
    /// Someone else is the current player.
    NotYourTurn,
    /// Already picked from the pack currently held.
    AlreadyPicked,
}

/// What could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Player,
    CardInHand,
    CardInPack,
    Position,
    TargetPlayer,
    CardToGive,
}

/// Which part of a command's target was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTargetKind {
    /// A draft pick must name exactly one card.
    WrongPickCount,
    /// A Queen needs two distinct, occupied positions.
    QueenTargets,
    /// A Jack needs another card to give and another player.
    JackTargets,
    /// The Jack's target holds no cards.
    TargetHandEmpty,
    /// Special power requested with a number card.
    NotSpecialCard,
    /// Power target does not fit the played card.
    PowerMismatch,
}

/// Which game rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolationKind {
    PositionOccupied,
    /// Missing same-suit support below.
    InvalidPlacement,
    NoCardToReplace,
    /// Hierarchy forbids the replacement.
    CannotReplace,
    /// A Queen swap position would be empty.
    SwapEmptyCell,
    RoomFull,
    AlreadyReady,
    NotReady,
}

/// Central engine error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("command needs the {expected} phase, game is {actual}")]
    PhaseMismatch { expected: Phase, actual: Phase },

    #[error("out of turn: {0}")]
    TurnViolation(TurnViolationKind),

    #[error("not found: {0}")]
    NotFound(NotFoundKind),

    #[error("invalid target: {0}")]
    InvalidTarget(InvalidTargetKind),

    #[error("rule violation: {0}")]
    RuleViolation(RuleViolationKind),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl GameError {
    pub fn phase(expected: Phase, actual: Phase) -> Self {
        Self::PhaseMismatch { expected, actual }
    }

    /// Stable wire code for the `error` event.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GameError::PhaseMismatch { expected, .. } => match expected {
                Phase::Waiting => "game_already_started",
                Phase::Drafting => "not_drafting_phase",
                Phase::Playing => "game_not_playing",
                Phase::Finished => "game_not_finished",
            },
            GameError::TurnViolation(kind) => match kind {
                TurnViolationKind::NotYourTurn => "not_your_turn",
                TurnViolationKind::AlreadyPicked => "already_picked",
            },
            GameError::NotFound(kind) => match kind {
                NotFoundKind::Player => "player_not_found",
                NotFoundKind::CardInHand => "card_not_in_hand",
                NotFoundKind::CardInPack => "card_not_in_pack",
                NotFoundKind::Position => "invalid_position",
                NotFoundKind::TargetPlayer => "target_player_not_found",
                NotFoundKind::CardToGive => "card_to_give_not_found",
            },
            GameError::InvalidTarget(kind) => match kind {
                InvalidTargetKind::WrongPickCount => "wrong_pick_count",
                InvalidTargetKind::QueenTargets => "invalid_queen_targets",
                InvalidTargetKind::JackTargets => "invalid_jack_targets",
                InvalidTargetKind::TargetHandEmpty => "target_hand_empty",
                InvalidTargetKind::NotSpecialCard => "not_special_card",
                InvalidTargetKind::PowerMismatch => "invalid_action",
            },
            GameError::RuleViolation(kind) => match kind {
                RuleViolationKind::PositionOccupied => "position_occupied",
                RuleViolationKind::InvalidPlacement => "invalid_placement",
                RuleViolationKind::NoCardToReplace => "no_card_to_replace",
                RuleViolationKind::CannotReplace => "cannot_replace_card",
                RuleViolationKind::SwapEmptyCell => "invalid_exchange_cards",
                RuleViolationKind::RoomFull => "room_full",
                RuleViolationKind::AlreadyReady => "already_ready",
                RuleViolationKind::NotReady => "not_ready",
            },
            GameError::InvalidConfig(_) => "invalid_config",
            GameError::Internal(_) => "play_card_error",
        }
    }
}

impl Display for TurnViolationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TurnViolationKind::NotYourTurn => write!(f, "it is not your turn"),
            TurnViolationKind::AlreadyPicked => write!(f, "you already picked from this pack"),
        }
    }
}

impl Display for NotFoundKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NotFoundKind::Player => write!(f, "player"),
            NotFoundKind::CardInHand => write!(f, "card is not in your hand"),
            NotFoundKind::CardInPack => write!(f, "card is not in your pack"),
            NotFoundKind::Position => write!(f, "position is not on the pyramid"),
            NotFoundKind::TargetPlayer => write!(f, "target player"),
            NotFoundKind::CardToGive => write!(f, "card to give is not in your hand"),
        }
    }
}

impl Display for InvalidTargetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InvalidTargetKind::WrongPickCount => write!(f, "pick exactly one card"),
            InvalidTargetKind::QueenTargets => write!(f, "a queen swaps exactly two distinct positions"),
            InvalidTargetKind::JackTargets => write!(f, "a jack gives another card to another player"),
            InvalidTargetKind::TargetHandEmpty => write!(f, "target player has no cards"),
            InvalidTargetKind::NotSpecialCard => write!(f, "this card has no special power"),
            InvalidTargetKind::PowerMismatch => write!(f, "power target does not match the card"),
        }
    }
}

impl Display for RuleViolationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RuleViolationKind::PositionOccupied => write!(f, "position is already occupied"),
            RuleViolationKind::InvalidPlacement => write!(f, "no same-suit support below"),
            RuleViolationKind::NoCardToReplace => write!(f, "no card to replace at this position"),
            RuleViolationKind::CannotReplace => write!(f, "card cannot replace the existing card"),
            RuleViolationKind::SwapEmptyCell => write!(f, "both swap positions must hold cards"),
            RuleViolationKind::RoomFull => write!(f, "room is full"),
            RuleViolationKind::AlreadyReady => write!(f, "already ready"),
            RuleViolationKind::NotReady => write!(f, "not ready"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_mismatch_codes() {
        assert_eq!(
            GameError::phase(Phase::Waiting, Phase::Drafting).code(),
            "game_already_started"
        );
        assert_eq!(
            GameError::phase(Phase::Drafting, Phase::Playing).code(),
            "not_drafting_phase"
        );
        assert_eq!(
            GameError::phase(Phase::Playing, Phase::Waiting).code(),
            "game_not_playing"
        );
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(
            GameError::TurnViolation(TurnViolationKind::NotYourTurn).code(),
            "not_your_turn"
        );
        assert_eq!(
            GameError::NotFound(NotFoundKind::CardInHand).code(),
            "card_not_in_hand"
        );
        assert_eq!(
            GameError::InvalidTarget(InvalidTargetKind::TargetHandEmpty).code(),
            "target_hand_empty"
        );
        assert_eq!(
            GameError::RuleViolation(RuleViolationKind::CannotReplace).code(),
            "cannot_replace_card"
        );
    }

    #[test]
    fn test_display() {
        let err = GameError::phase(Phase::Playing, Phase::Drafting);
        assert_eq!(err.to_string(), "command needs the playing phase, game is drafting");

        let err = GameError::RuleViolation(RuleViolationKind::PositionOccupied);
        assert_eq!(err.to_string(), "rule violation: position is already occupied");
    }
}
