//! Draft scratch state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// Which neighbour receives a passed remainder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Seat `index - 1`.
    #[default]
    Left,
    /// Seat `index + 1`.
    Right,
}

impl Direction {
    /// Neighbour of `seat` at a table of `n`.
    #[must_use]
    pub fn step(self, seat: usize, n: usize) -> usize {
        match self {
            Direction::Left => (seat + n - 1) % n,
            Direction::Right => (seat + 1) % n,
        }
    }
}

/// Everything the draft needs between commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftState {
    /// Cards not yet dealt into any round's packs. Packs pop from the end.
    pub remaining_deck: Vec<Card>,

    /// Current round, 0 before the first deal.
    pub round: u32,

    pub total_rounds: u32,

    /// Cards per pack at deal time.
    pub pack_size: usize,

    pub direction: Direction,

    /// Leftovers waiting for the barrier, keyed by sender.
    pub pending: FxHashMap<PlayerId, Vec<Card>>,
}

impl DraftState {
    /// Empty state for a table dealing packs of `pack_size`.
    #[must_use]
    pub fn new(pack_size: usize, total_rounds: u32) -> Self {
        Self {
            pack_size,
            total_rounds,
            ..Self::default()
        }
    }

    /// Cards held by the draft itself: undealt deck plus pending remainders.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.remaining_deck
            .iter()
            .chain(self.pending.values().flatten())
            .copied()
            .collect()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }
}

/// Rounds needed to draft `drafted` cards from packs of `pack_size`.
#[must_use]
pub fn total_rounds(drafted: usize, pack_size: usize) -> u32 {
    drafted.div_ceil(pack_size) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_step() {
        assert_eq!(Direction::Left.step(0, 4), 3);
        assert_eq!(Direction::Left.step(2, 4), 1);
        assert_eq!(Direction::Right.step(3, 4), 0);
        assert_eq!(Direction::Right.step(1, 3), 2);
    }

    #[test]
    fn test_total_rounds() {
        assert_eq!(total_rounds(12, 4), 3);
        assert_eq!(total_rounds(16, 3), 6);
    }

    #[test]
    fn test_cards_counts_pending() {
        use crate::cards::{CardId, Suit};

        let mut draft = DraftState::new(4, 3);
        draft.remaining_deck.push(Card::new(CardId::new(0), 1, Suit::Hearts));
        draft
            .pending
            .insert(PlayerId::new(1), vec![Card::new(CardId::new(1), 2, Suit::Hearts)]);

        assert_eq!(draft.cards().len(), 2);
        assert_eq!(draft.pending_count(), 1);
    }
}
