//! Shared fixtures for integration tests.
#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use regicide::board::Position;
use regicide::cards::{can_replace, Card, CardId, Suit, DECK_SIZE};
use regicide::core::{GameOptions, GameRng, GameState, Phase, Player, PlayerId};
use regicide::draft::DraftState;
use regicide::game::{Command, Game, Outbound};
use regicide::rules::PlayCommand;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(id: u8, rank: u8, suit: Suit) -> Card {
    Card::new(CardId::new(id), rank, suit)
}

pub fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// A WAITING game with `n` seated players.
pub fn lobby(n: usize, seed: u64) -> (Game, Vec<PlayerId>) {
    init_logging();
    let mut game = Game::new(GameOptions::new(n), seed).expect("valid options");
    let ids = (0..n)
        .map(|i| game.join(format!("player{i}")).expect("seat available").0)
        .collect();
    (game, ids)
}

/// A game that just entered DRAFTING.
pub fn drafting(n: usize, seed: u64) -> (Game, Vec<PlayerId>) {
    let (mut game, ids) = lobby(n, seed);
    for id in &ids {
        game.try_handle(*id, Command::Ready).expect("ready accepted");
    }
    assert_eq!(game.phase(), Phase::Drafting);
    (game, ids)
}

/// Seats of connected players still expected to pick.
pub fn awaiting(game: &Game) -> Vec<usize> {
    (0..game.state().player_count())
        .filter(|&s| game.state().players[s].awaiting_pick())
        .collect()
}

/// Every waiting player picks the card at `choice % pack_len`.
pub fn pick_pass(game: &mut Game, choice: usize) -> Vec<Outbound> {
    let mut events = Vec::new();
    for seat in awaiting(game) {
        let player = &game.state().players[seat];
        let id = player.id;
        let card = player.draft_pack[choice % player.draft_pack.len()].id;
        events.extend(game.try_handle(id, Command::pick(card)).expect("pick accepted"));
    }
    events
}

/// Pick until the draft is over.
pub fn finish_draft(game: &mut Game) -> Vec<Outbound> {
    let mut events = Vec::new();
    let mut passes = 0;
    while game.phase() == Phase::Drafting {
        events.extend(pick_pass(game, passes));
        passes += 1;
        assert!(passes < 200, "draft did not terminate");
    }
    events
}

/// The first legal place-or-replace for the current player.
pub fn first_legal_play(game: &Game) -> Option<(PlayerId, PlayCommand)> {
    let state = game.state();
    let player = state.current_player()?;
    for card in &player.hand {
        for at in Position::all() {
            match state.board.get(at) {
                None if state.board.can_place(card, at) => {
                    return Some((player.id, PlayCommand::place(card.id, at)));
                }
                Some(existing) if can_replace(card, existing) => {
                    return Some((player.id, PlayCommand::replace(card.id, at)));
                }
                _ => {}
            }
        }
    }
    None
}

/// Play greedy legal moves until the game ends.
pub fn play_out(game: &mut Game) -> Vec<Outbound> {
    let mut events = Vec::new();
    let mut plays = 0;
    while game.phase() == Phase::Playing {
        let (id, play) = first_legal_play(game).expect("current player can move");
        events.extend(game.try_handle(id, Command::PlayCard(play)).expect("legal play"));
        assert_conserved(game);
        plays += 1;
        assert!(plays < 500, "play did not terminate");
    }
    events
}

/// The census is exactly the 52-card deck.
pub fn assert_conserved(game: &Game) {
    let mut ids: Vec<u8> = game.card_census().iter().map(|c| c.id.raw()).collect();
    ids.sort_unstable();
    let expected: Vec<u8> = (0..DECK_SIZE as u8).collect();
    assert_eq!(ids, expected, "card census is not the 52-card deck");
}

/// Seat description for `scenario`.
pub struct Seat {
    pub king: Suit,
    pub hand: Vec<Card>,
    pub connected: bool,
}

impl Seat {
    pub fn new(king: Suit, hand: Vec<Card>) -> Self {
        Self {
            king,
            hand,
            connected: true,
        }
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }
}

/// A PLAYING game with hand-built seats, seat 0 to move on turn 1.
///
/// Kings get ids 100+ so they never collide with scenario cards.
pub fn scenario(seats: Vec<Seat>, board: &[(Position, Card)]) -> (Game, Vec<PlayerId>) {
    init_logging();
    let mut state = GameState::new(GameOptions::new(seats.len()), &GameRng::new(5));
    for (i, seat) in seats.into_iter().enumerate() {
        let mut player = Player::new(PlayerId::new(i as u32 + 1), format!("player{i}"));
        let mut king = card(100 + i as u8, 13, seat.king);
        king.visible = false;
        player.secret_king = Some(king);
        player.hand = seat.hand;
        player.connected = seat.connected;
        player.ready = true;
        state.players.push(player);
    }
    for (at, c) in board {
        state.board.set(*at, Some(*c));
    }
    state.phase = Phase::Playing;
    state.turn = 1;
    state.current_player_index = state.first_connected_from(0).unwrap_or(0);

    let ids = state.player_ids().collect();
    (Game::from_parts(state, DraftState::default()), ids)
}
