//! Deck construction and shuffling.

use crate::core::GameRng;

use super::card::{Card, CardId, Suit};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Ranks per suit (ace through king).
pub const RANKS_PER_SUIT: u8 = 13;

/// Build the 52-card deck in enumeration order: suits in `Suit::ALL`
/// order, ranks 1..=13 within each suit. Card ids follow the same order.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=RANKS_PER_SUIT {
            let id = CardId::new(deck.len() as u8);
            deck.push(Card::new(id, rank, suit));
        }
    }
    deck
}

/// Fisher-Yates shuffle driven by the injected RNG.
pub fn shuffle(cards: &mut [Card], rng: &mut GameRng) {
    for i in (1..cards.len()).rev() {
        let j = rng.index_below(i + 1);
        cards.swap(i, j);
    }
}

/// Split the kings out of `deck`, returning `(kings, rest)` with both
/// halves in their original relative order.
#[must_use]
pub fn split_kings(deck: Vec<Card>) -> (Vec<Card>, Vec<Card>) {
    deck.into_iter().partition(Card::is_king)
}
