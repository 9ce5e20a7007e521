//! Card model.
//!
//! A `Card` is created once at deck build and then only moves between
//! containers. Its rank and suit never change; only its board position
//! and visibility do.

use serde::{Deserialize, Serialize};

use crate::board::Position;

/// Unique identifier for one of the 52 cards of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck enumeration order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// Kind of a card, derived from its rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Ace,
    Number,
    Jack,
    Queen,
    King,
}

impl CardKind {
    /// Kind for a rank in 1..=13, `None` otherwise.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(CardKind::Ace),
            2..=10 => Some(CardKind::Number),
            11 => Some(CardKind::Jack),
            12 => Some(CardKind::Queen),
            13 => Some(CardKind::King),
            _ => None,
        }
    }

    /// Does playing this kind trigger an extra effect?
    #[must_use]
    pub const fn has_power(self) -> bool {
        matches!(self, CardKind::Jack | CardKind::Queen)
    }
}

/// One playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// 1 = ace, 2-10, 11 = jack, 12 = queen, 13 = king.
    pub rank: u8,

    pub suit: Suit,

    /// Board cell while placed on the pyramid.
    #[serde(default)]
    pub position: Option<Position>,

    /// Secret kings are dealt face-down.
    pub visible: bool,
}

impl Card {
    /// Create a face-up, unplaced card.
    #[must_use]
    pub const fn new(id: CardId, rank: u8, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            position: None,
            visible: true,
        }
    }

    /// Derived kind, `None` for an out-of-range rank.
    #[must_use]
    pub const fn kind(&self) -> Option<CardKind> {
        CardKind::from_rank(self.rank)
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.kind() == Some(CardKind::King)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        };
        write!(f, "{} of {}", rank, self.suit)
    }
}
