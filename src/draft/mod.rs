//! Rotating-pack draft.
//!
//! `DraftState` is owned by the game and handed to every operation
//! explicitly; nothing here keeps state of its own.

pub mod engine;
pub mod state;

pub use engine::{begin, is_complete, on_disconnect, pick, setup};
pub use state::{total_rounds, Direction, DraftState};
