//! Play phase rules: commands, resolution, powers and turn order.
//!
//! The orchestrator hands every `play_card` command to `resolve_play`,
//! which validates it in full, applies it, fires the card's power and
//! either passes the turn or finishes the game.

pub mod action;
pub mod resolver;
pub mod turn;

pub use action::{BaseAction, PlayAction, PlayCommand, PlayRecord, PowerTarget};
pub use resolver::resolve_play;
pub use turn::{advance_turn, can_move, is_game_over, next_seat};
