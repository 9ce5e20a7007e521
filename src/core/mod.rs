//! Core engine types: players, RNG, options, errors and game state.
//!
//! Everything else in the crate builds on these. Game-phase logic lives in
//! `draft`, `rules` and `scoring`; the `game` module wires them together.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use config::{GameOptions, Phase, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{
    GameError, InvalidTargetKind, NotFoundKind, RuleViolationKind, TurnViolationKind,
};
pub use state::GameState;
