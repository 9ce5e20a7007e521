//! Game configuration and phases.
//!
//! `GameOptions` is the structured form of the options a room is created
//! with. It is read once when the game is created and only mutated to
//! record the excluded suit of a 3-player game.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::Suit;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 3;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Game phase. Transitions are monotonic: a game never goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Lobby: players join, leave and toggle ready.
    #[default]
    Waiting,
    /// Rotating-pack draft.
    Drafting,
    /// Turn-by-turn play on the pyramid.
    Playing,
    /// Scored or terminated.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Waiting => "waiting",
            Phase::Drafting => "drafting",
            Phase::Playing => "playing",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Options consumed at game creation.
///
/// ## Example
///
/// ```
/// use regicide::core::GameOptions;
///
/// let options = GameOptions::new(3).private(true).with_room_code("KING");
///
/// assert_eq!(options.player_count, 3);
/// assert!(options.private);
/// assert_eq!(options.room_code.as_deref(), Some("KING"));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of seats the game starts with (3 or 4).
    pub player_count: usize,

    /// Private rooms are only joinable through their room code.
    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub room_code: Option<String>,

    /// Suit of the undealt king in 3-player games. Set during setup.
    #[serde(default)]
    pub excluded_suit: Option<Suit>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new(MAX_PLAYERS)
    }
}

impl GameOptions {
    /// Create public options for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            private: false,
            room_code: None,
            excluded_suit: None,
        }
    }

    /// Set the privacy flag.
    #[must_use]
    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Set the room code.
    #[must_use]
    pub fn with_room_code(mut self, code: impl Into<String>) -> Self {
        self.room_code = Some(code.into());
        self
    }

    /// Record the suit that scores nothing in a 3-player game.
    pub fn set_excluded_suit(&mut self, suit: Option<Suit>) {
        self.excluded_suit = suit;
    }

    /// Check the options describe a playable table.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be {MIN_PLAYERS} or {MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if self.excluded_suit.is_some() {
            return Err(GameError::InvalidConfig(
                "excluded suit is derived during setup".to_string(),
            ));
        }
        Ok(())
    }

    /// Cards per draft pack: 3 at a 3-player table, 4 otherwise.
    #[must_use]
    pub fn pack_size(&self) -> usize {
        if self.player_count == 3 {
            3
        } else {
            4
        }
    }

    /// Cards each player drafts (the secret king comes on top).
    #[must_use]
    pub fn drafted_per_player(&self) -> usize {
        if self.player_count == 3 {
            16
        } else {
            12
        }
    }

    /// Hand size every player should hold when play begins.
    #[must_use]
    pub fn target_hand_size(&self) -> usize {
        self.drafted_per_player() + 1
    }
}
