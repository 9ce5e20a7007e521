//! Card/deck service: card model, deck construction, replacement hierarchy.
//!
//! ## Key Types
//!
//! - `CardId`: Unique id of one of the 52 cards
//! - `Suit`, `CardKind`: Suit and rank-derived kind
//! - `Card`: Immutable rank/suit plus mutable board position and visibility
//! - `can_replace`: The hierarchy predicate used by board replacement

pub mod card;
pub mod deck;
pub mod hierarchy;

pub use card::{Card, CardId, CardKind, Suit};
pub use deck::{create_deck, shuffle, split_kings, DECK_SIZE};
pub use hierarchy::can_replace;
