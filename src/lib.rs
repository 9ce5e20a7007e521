//! # regicide
//!
//! Rules engine for Regicide, a 3-4 player card placement game: players
//! draft hands from rotating packs, then take turns building a shared
//! pyramid of cards, and score the cells matching their secret king.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: one `Game` owns all state and processes commands
//!    one at a time. There is no shared state between games.
//!
//! 2. **Events out, commands in**: the engine never touches the network.
//!    Every operation returns the events it produced, addressed to
//!    everyone or to one player.
//!
//! 3. **Deterministic**: shuffles and Jack draws come from an injected,
//!    seedable `GameRng`, so a seed replays a whole game.
//!
//! 4. **Validate, then mutate**: a rejected command leaves the game
//!    exactly as it was.
//!
//! ## Modules
//!
//! - `core`: Player ids, options, phases, errors, RNG, game state
//! - `cards`: Card model, deck construction, replacement hierarchy
//! - `board`: The pyramid and its support rule
//! - `draft`: Pack dealing, picks and the pass barrier
//! - `rules`: Play commands, resolution, powers, turn order
//! - `scoring`: Final scores and winner
//! - `game`: Orchestrator, commands, events, watchdog

pub mod core;
pub mod cards;
pub mod board;
pub mod draft;
pub mod rules;
pub mod scoring;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameOptions, GameRng, GameRngState, GameState, Phase, Player, PlayerId,
};

pub use crate::cards::{can_replace, create_deck, shuffle, Card, CardId, CardKind, Suit};

pub use crate::board::{Position, PyramidBoard};

pub use crate::draft::{Direction, DraftState};

pub use crate::rules::{BaseAction, PlayAction, PlayCommand, PlayRecord, PowerTarget};

pub use crate::scoring::FinalScore;

pub use crate::game::{Command, Game, GameEvent, InactivityWatchdog, Outbound, Recipient};
