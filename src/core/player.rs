//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Stable identifier allocated when a player joins. Unlike a seat index it
//! never shifts when someone leaves the lobby, so the transport can keep
//! addressing the same player for the whole game.
//!
//! ## Player
//!
//! A seat at the table: connection and ready flags, the private hand, the
//! secret king, and the draft pack currently being picked from.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    pub display_name: String,

    pub connected: bool,

    pub ready: bool,

    /// Private hand, in the order cards arrived.
    pub hand: Vec<Card>,

    /// Copy of the king dealt face-down at setup. The card itself also
    /// sits in `hand` until played.
    pub secret_king: Option<Card>,

    /// Pack currently held during the draft.
    pub draft_pack: Vec<Card>,

    /// Has this player picked from the pack they currently hold?
    pub has_picked: bool,

    pub score: i64,
}

impl Player {
    /// Create a connected, not-ready player with empty containers.
    pub fn new(id: PlayerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            connected: true,
            ready: false,
            hand: Vec::new(),
            secret_king: None,
            draft_pack: Vec::new(),
            has_picked: false,
            score: 0,
        }
    }

    /// Look up a card in hand.
    #[must_use]
    pub fn hand_card(&self, card_id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card_id)
    }

    #[must_use]
    pub fn has_in_hand(&self, card_id: CardId) -> bool {
        self.hand_card(card_id).is_some()
    }

    /// Remove a card from hand, returning it if it was there.
    pub fn take_from_hand(&mut self, card_id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == card_id)?;
        Some(self.hand.remove(pos))
    }

    /// Remove and return the card at `index` in hand.
    pub fn take_hand_index(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Is a player still expected to pick from the pack they hold?
    #[must_use]
    pub fn awaiting_pick(&self) -> bool {
        self.connected && !self.draft_pack.is_empty() && !self.has_picked
    }
}
