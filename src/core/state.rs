//! Game state: everything one game instance owns.
//!
//! ## GameState
//!
//! - Phase, options, seats
//! - Turn bookkeeping (`current_player_index`, `turn`)
//! - Pyramid board, discard pile, set-aside kings
//! - Audit history of plays
//! - Deterministic RNG streams for dealing and card powers
//!
//! Draft scratch data lives in a separate `DraftState` that the
//! orchestrator passes to draft operations explicitly.

use im::Vector;

use super::config::{GameOptions, Phase};
use super::error::{GameError, NotFoundKind};
use super::player::{Player, PlayerId};
use super::rng::GameRng;
use crate::board::PyramidBoard;
use crate::cards::{Card, Suit};
use crate::rules::PlayRecord;

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: Phase,

    pub options: GameOptions,

    /// Seats in join order.
    pub players: Vec<Player>,

    /// Seat whose turn it is during PLAYING.
    pub current_player_index: usize,

    /// Starts at 1 when play begins, +1 per successful play.
    pub turn: u32,

    pub board: PyramidBoard,

    pub discard_pile: Vec<Card>,

    /// Kings dealt to nobody (the 4th king of a 3-player game).
    pub set_aside: Vec<Card>,

    pub winner: Option<PlayerId>,

    /// Every successful play, oldest first.
    pub history: Vector<PlayRecord>,

    /// Deck and terminal-round shuffles.
    pub deal_rng: GameRng,

    /// Jack draws.
    pub power_rng: GameRng,
}

impl GameState {
    /// Create an empty WAITING game. The two RNG streams are derived from
    /// `rng` so deals and power draws never perturb each other.
    #[must_use]
    pub fn new(options: GameOptions, rng: &GameRng) -> Self {
        Self {
            phase: Phase::Waiting,
            options,
            players: Vec::new(),
            current_player_index: 0,
            turn: 0,
            board: PyramidBoard::new(),
            discard_pile: Vec::new(),
            set_aside: Vec::new(),
            winner: None,
            history: Vector::new(),
            deal_rng: rng.for_context("deal"),
            power_rng: rng.for_context("powers"),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Suit scoring zero for its holder, 3-player games only.
    #[must_use]
    pub fn excluded_suit(&self) -> Option<Suit> {
        self.options.excluded_suit
    }

    // === Seats ===

    /// Seat index of a player.
    #[must_use]
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Seat index of a player, or `NotFound(Player)`.
    pub fn require_seat(&self, id: PlayerId) -> Result<usize, GameError> {
        self.seat_of(id).ok_or(GameError::NotFound(NotFoundKind::Player))
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Player ids in seat order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.players.iter().filter(|p| p.connected).count()
    }

    #[must_use]
    pub fn ready_count(&self) -> usize {
        self.players.iter().filter(|p| p.connected && p.ready).count()
    }

    // === Turn order ===

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player().map(|p| p.id)
    }

    /// First connected seat at or after `start`, wrapping around.
    #[must_use]
    pub fn first_connected_from(&self, start: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|offset| (start + offset) % n)
            .find(|&seat| self.players[seat].connected)
    }

    /// Next connected seat strictly after `seat`, wrapping around. Returns
    /// `seat` itself when it is the only connected one.
    #[must_use]
    pub fn next_connected_after(&self, seat: usize) -> Option<usize> {
        self.first_connected_from(seat + 1)
    }

    // === History ===

    pub fn record_play(&mut self, record: PlayRecord) {
        self.history.push_back(record);
    }
}
