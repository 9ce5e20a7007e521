//! Pyramid board: four rows of 4, 3, 2 and 1 cells.
//!
//! Row 1 is the base. A cell `(row, col)` in rows 2-4 rests on cells
//! `(row - 1, col)` and `(row - 1, col + 1)`; a card may only go there if
//! at least one of those supports holds a card of the same suit.
//!
//! `total_cards + empty_slots == TOTAL_SLOTS` after every mutation.

use serde::{Deserialize, Serialize};

use crate::cards::{can_replace, Card};
use crate::core::error::{GameError, NotFoundKind, RuleViolationKind};

/// Cells per row, base first.
pub const ROW_CAPACITIES: [usize; 4] = [4, 3, 2, 1];

/// Number of rows.
pub const ROWS: u8 = 4;

/// Cells on the board.
pub const TOTAL_SLOTS: usize = 10;

/// A board cell. `row` is 1-based (1 = base), `col` is 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Is this cell on the pyramid?
    #[must_use]
    pub fn is_valid(self) -> bool {
        capacity(self.row).is_some_and(|cap| (self.col as usize) < cap)
    }

    /// Scoring multiplier: the row number.
    #[must_use]
    pub const fn multiplier(self) -> i64 {
        self.row as i64
    }

    /// The two cells this one rests on. Empty for the base row.
    #[must_use]
    pub fn supports(self) -> Vec<Position> {
        if self.row <= 1 {
            return Vec::new();
        }
        vec![
            Position::new(self.row - 1, self.col),
            Position::new(self.row - 1, self.col + 1),
        ]
    }

    /// Every cell, base row first, left to right.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=ROWS).flat_map(|row| {
            let cap = ROW_CAPACITIES[row as usize - 1] as u8;
            (0..cap).map(move |col| Position::new(row, col))
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Capacity of a 1-based row, `None` if the row does not exist.
#[must_use]
pub fn capacity(row: u8) -> Option<usize> {
    match row {
        1..=ROWS => Some(ROW_CAPACITIES[row as usize - 1]),
        _ => None,
    }
}

/// The pyramid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidBoard {
    rows: [Vec<Option<Card>>; 4],
    total_cards: usize,
    empty_slots: usize,
}

impl Default for PyramidBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl PyramidBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: std::array::from_fn(|i| vec![None; ROW_CAPACITIES[i]]),
            total_cards: 0,
            empty_slots: TOTAL_SLOTS,
        }
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    #[must_use]
    pub fn empty_slots(&self) -> usize {
        self.empty_slots
    }

    /// Card at `pos`, `None` if empty or off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Card> {
        if !pos.is_valid() {
            return None;
        }
        self.rows[pos.row as usize - 1][pos.col as usize].as_ref()
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Put `card` (or nothing) at `pos`.
    ///
    /// Returns false and does nothing when `pos` is off the board. Counters
    /// only move on empty/occupied transitions. The previous occupant, if
    /// any, is dropped from the board; callers that need it read it first.
    pub fn set(&mut self, pos: Position, card: Option<Card>) -> bool {
        if !pos.is_valid() {
            return false;
        }
        let cell = &mut self.rows[pos.row as usize - 1][pos.col as usize];
        let was_empty = cell.is_none();

        *cell = card.map(|mut c| {
            c.position = Some(pos);
            c.visible = true;
            c
        });

        match (was_empty, cell.is_some()) {
            (true, true) => {
                self.total_cards += 1;
                self.empty_slots -= 1;
            }
            (false, false) => {
                self.total_cards -= 1;
                self.empty_slots += 1;
            }
            _ => {}
        }
        true
    }

    /// Can `card` go into the empty cell at `pos`?
    ///
    /// The base row only needs an empty cell. Upper rows also need a
    /// same-suit card in one of the two supporting cells.
    #[must_use]
    pub fn can_place(&self, card: &Card, pos: Position) -> bool {
        if !pos.is_valid() || self.is_occupied(pos) {
            return false;
        }
        if pos.row == 1 {
            return true;
        }
        pos.supports()
            .into_iter()
            .filter_map(|support| self.get(support))
            .any(|below| below.suit == card.suit)
    }

    /// Validate a placement without mutating.
    pub fn check_place(&self, card: &Card, pos: Position) -> Result<(), GameError> {
        if !pos.is_valid() {
            return Err(GameError::NotFound(NotFoundKind::Position));
        }
        if self.is_occupied(pos) {
            return Err(GameError::RuleViolation(RuleViolationKind::PositionOccupied));
        }
        if !self.can_place(card, pos) {
            return Err(GameError::RuleViolation(RuleViolationKind::InvalidPlacement));
        }
        Ok(())
    }

    /// Place `card` into an empty cell.
    pub fn place(&mut self, pos: Position, card: Card) -> Result<(), GameError> {
        self.check_place(&card, pos)?;
        self.set(pos, Some(card));
        Ok(())
    }

    /// Validate a replacement without mutating, returning the occupant.
    pub fn check_replace(&self, card: &Card, pos: Position) -> Result<Card, GameError> {
        if !pos.is_valid() {
            return Err(GameError::NotFound(NotFoundKind::Position));
        }
        let existing = self
            .get(pos)
            .copied()
            .ok_or(GameError::RuleViolation(RuleViolationKind::NoCardToReplace))?;
        if !can_replace(card, &existing) {
            return Err(GameError::RuleViolation(RuleViolationKind::CannotReplace));
        }
        Ok(existing)
    }

    /// Replace the occupant of `pos` with `card`.
    ///
    /// The evicted card goes to `discard` (unplaced) and a copy is returned.
    pub fn replace(
        &mut self,
        pos: Position,
        card: Card,
        discard: &mut Vec<Card>,
    ) -> Result<Card, GameError> {
        let mut evicted = self.check_replace(&card, pos)?;
        self.set(pos, Some(card));
        evicted.position = None;
        discard.push(evicted);
        Ok(evicted)
    }

    /// Exchange the occupants of two occupied cells.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), GameError> {
        if !a.is_valid() || !b.is_valid() {
            return Err(GameError::NotFound(NotFoundKind::Position));
        }
        let (Some(first), Some(second)) = (self.get(a).copied(), self.get(b).copied()) else {
            return Err(GameError::RuleViolation(RuleViolationKind::SwapEmptyCell));
        };
        self.set(a, Some(second));
        self.set(b, Some(first));
        Ok(())
    }

    /// Could any card in `hand` be placed or used as a replacement?
    #[must_use]
    pub fn has_legal_move(&self, hand: &[Card]) -> bool {
        hand.iter().any(|card| {
            Position::all().any(|pos| match self.get(pos) {
                None => self.can_place(card, pos),
                Some(existing) => can_replace(card, existing),
            })
        })
    }

    /// Occupied cells, base row first.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Card)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|card| (pos, card)))
    }

    /// Copies of every card on the board.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.occupied().map(|(_, card)| *card).collect()
    }
}
