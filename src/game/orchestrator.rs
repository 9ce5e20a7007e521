//! Game orchestrator: the phase state machine.
//!
//! `Game` owns the `GameState` and the `DraftState` and is the only
//! writer of either. Commands are processed one at a time; each returns
//! the events it produced. A rejected command is rolled back and turned
//! into an `error` event for its sender only.
//!
//! ```text
//! WAITING --all seated and ready--> DRAFTING --draft done--> PLAYING --> FINISHED
//!     \__________________________________\___________________\__ terminate
//! ```
//!
//! ## Example
//!
//! ```
//! use regicide::core::{GameOptions, Phase};
//! use regicide::game::{Command, Game};
//!
//! let mut game = Game::new(GameOptions::new(3), 7).unwrap();
//! let mut ids = Vec::new();
//! for name in ["ann", "bob", "cat"] {
//!     let (id, _events) = game.join(name).unwrap();
//!     ids.push(id);
//! }
//! for id in &ids {
//!     game.handle(*id, Command::Ready);
//! }
//!
//! assert_eq!(game.phase(), Phase::Drafting);
//! assert_eq!(game.card_census().len(), 52);
//! ```

use tracing::{debug, info, warn};

use super::command::Command;
use super::event::{GameEvent, Outbound};
use crate::board::PyramidBoard;
use crate::cards::Card;
use crate::core::{
    GameError, GameOptions, GameRng, GameState, NotFoundKind, Phase, Player, PlayerId,
    RuleViolationKind,
};
use crate::draft::{self, DraftState};
use crate::rules::{advance_turn, is_game_over, resolve_play};
use crate::scoring;

/// Reason given when too few players remain connected.
pub const REASON_NOT_ENOUGH_PLAYERS: &str = "not enough players connected";

/// One game instance.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    draft: DraftState,
    next_player_id: u32,
    activity: u64,
}

impl Game {
    /// Create a WAITING game seeded with `seed`.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(options, GameRng::new(seed))
    }

    /// Create a WAITING game with an injected RNG.
    pub fn with_rng(options: GameOptions, rng: GameRng) -> Result<Self, GameError> {
        options.validate()?;
        info!(
            player_count = options.player_count,
            private = options.private,
            seed = rng.seed(),
            "game created"
        );
        Ok(Self {
            state: GameState::new(options, &rng),
            draft: DraftState::default(),
            next_player_id: 1,
            activity: 0,
        })
    }

    /// Resume from saved parts. Player ids continue after the highest seated.
    #[must_use]
    pub fn from_parts(state: GameState, draft: DraftState) -> Self {
        let next_player_id = state.player_ids().map(|id| id.raw() + 1).max().unwrap_or(1);
        Self {
            state,
            draft,
            next_player_id,
            activity: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn board(&self) -> &PyramidBoard {
        &self.state.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.state.phase {
            Phase::Playing => self.state.current_player_id(),
            _ => None,
        }
    }

    /// Bumped by every accepted command and lobby change.
    #[must_use]
    pub fn activity(&self) -> u64 {
        self.activity
    }

    /// Every card the game currently holds, wherever it is.
    ///
    /// Empty until the game starts; exactly the 52-card deck afterwards.
    #[must_use]
    pub fn card_census(&self) -> Vec<Card> {
        let mut cards = self.draft.cards();
        for player in &self.state.players {
            cards.extend_from_slice(&player.hand);
            cards.extend_from_slice(&player.draft_pack);
        }
        cards.extend(self.state.board.cards());
        cards.extend_from_slice(&self.state.discard_pile);
        cards.extend_from_slice(&self.state.set_aside);
        cards
    }

    // === Lobby ===

    /// Seat a new player.
    pub fn join(
        &mut self,
        display_name: impl Into<String>,
    ) -> Result<(PlayerId, Vec<Outbound>), GameError> {
        if self.state.phase != Phase::Waiting {
            return Err(GameError::phase(Phase::Waiting, self.state.phase));
        }
        if self.state.player_count() >= self.state.options.player_count {
            return Err(GameError::RuleViolation(RuleViolationKind::RoomFull));
        }

        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        let player = Player::new(id, display_name);
        let display_name = player.display_name.clone();
        self.state.players.push(player);
        self.touch();

        info!(player = %id, name = %display_name, "player joined");
        let mut events = vec![Outbound::all(GameEvent::PlayerJoined {
            player: id,
            display_name,
        })];
        events.push(self.waiting_event());
        Ok((id, events))
    }

    /// A player left or lost their connection.
    ///
    /// In the lobby the seat is freed. Later the player is only marked
    /// disconnected: turns and draft passes skip them, and the game ends
    /// once fewer than two players remain.
    pub fn leave(&mut self, player: PlayerId) -> Result<Vec<Outbound>, GameError> {
        let seat = self.state.require_seat(player)?;
        self.touch();

        if self.state.phase == Phase::Waiting {
            self.state.players.remove(seat);
            info!(player = %player, "player left lobby");
            return Ok(vec![
                Outbound::all(GameEvent::PlayerLeft { player }),
                self.waiting_event(),
            ]);
        }

        if !self.state.players[seat].connected {
            return Ok(Vec::new());
        }
        self.state.players[seat].connected = false;
        info!(player = %player, phase = %self.state.phase, "player disconnected");

        let mut events = vec![Outbound::all(GameEvent::PlayerDisconnected { player })];
        match self.state.phase {
            Phase::Drafting | Phase::Playing if self.state.connected_count() < 2 => {
                events.extend(self.end_game(REASON_NOT_ENOUGH_PLAYERS));
            }
            Phase::Drafting => {
                events.extend(draft::on_disconnect(&mut self.state, &mut self.draft));
            }
            Phase::Playing => {
                if is_game_over(&self.state) {
                    events.extend(scoring::finish(&mut self.state));
                } else if self.state.current_player_index == seat {
                    events.extend(advance_turn(&mut self.state));
                }
            }
            Phase::Waiting | Phase::Finished => {}
        }
        Ok(events)
    }

    /// A disconnected player is back.
    pub fn reconnect(&mut self, player: PlayerId) -> Result<Vec<Outbound>, GameError> {
        let seat = self.state.require_seat(player)?;
        if self.state.players[seat].connected {
            return Ok(Vec::new());
        }
        self.state.players[seat].connected = true;
        self.touch();

        info!(player = %player, phase = %self.state.phase, "player reconnected");
        Ok(vec![Outbound::all(GameEvent::PlayerReconnected { player })])
    }

    // === Commands ===

    /// Process a command, turning a rejection into an `error` event for
    /// the sender.
    pub fn handle(&mut self, player: PlayerId, command: Command) -> Vec<Outbound> {
        let name = command.name();
        match self.try_handle(player, command) {
            Ok(events) => events,
            Err(err) => {
                warn!(player = %player, command = name, code = err.code(), error = %err, "command rejected");
                vec![Outbound::to(player, GameEvent::error(&err))]
            }
        }
    }

    /// Process a command. On error the game is exactly as before.
    pub fn try_handle(
        &mut self,
        player: PlayerId,
        command: Command,
    ) -> Result<Vec<Outbound>, GameError> {
        debug!(player = %player, command = command.name(), phase = %self.state.phase, "command");
        let snapshot = (self.state.clone(), self.draft.clone());

        match self.dispatch(player, command) {
            Ok(events) => {
                self.touch();
                Ok(events)
            }
            Err(err) => {
                (self.state, self.draft) = snapshot;
                Err(err)
            }
        }
    }

    /// End the game without scoring.
    pub fn terminate(&mut self, reason: &str) -> Vec<Outbound> {
        if self.state.phase == Phase::Finished {
            return Vec::new();
        }
        self.end_game(reason)
    }

    fn dispatch(&mut self, player: PlayerId, command: Command) -> Result<Vec<Outbound>, GameError> {
        if let Some(expected) = command.phase() {
            if self.state.phase != expected {
                return Err(GameError::phase(expected, self.state.phase));
            }
        }

        match command {
            Command::Ready => self.set_ready(player, true),
            Command::Unready => self.set_ready(player, false),
            Command::DraftPick { card_ids } => {
                draft::pick(&mut self.state, &mut self.draft, player, &card_ids)
            }
            Command::PlayCard(play) => resolve_play(&mut self.state, player, &play),
            Command::Chat { text } => self.chat(player, text),
        }
    }

    fn set_ready(&mut self, player: PlayerId, ready: bool) -> Result<Vec<Outbound>, GameError> {
        let seat = self.state.require_seat(player)?;
        let current = &mut self.state.players[seat];
        match (current.ready, ready) {
            (true, true) => return Err(GameError::RuleViolation(RuleViolationKind::AlreadyReady)),
            (false, false) => return Err(GameError::RuleViolation(RuleViolationKind::NotReady)),
            _ => current.ready = ready,
        }

        let mut events = vec![Outbound::all(GameEvent::PlayerReadyUpdate {
            player,
            ready,
            ready_count: self.state.ready_count(),
            total_count: self.state.connected_count(),
        })];

        let target = self.state.options.player_count;
        if self.state.connected_count() == target && self.state.ready_count() == target {
            events.extend(self.start());
        } else {
            events.push(self.waiting_event());
        }
        Ok(events)
    }

    fn start(&mut self) -> Vec<Outbound> {
        self.state.phase = Phase::Drafting;
        info!(players = self.state.player_count(), "all players ready, drafting");
        self.draft = draft::setup(&mut self.state);
        draft::begin(&mut self.state, &mut self.draft)
    }

    fn chat(&mut self, player: PlayerId, text: String) -> Result<Vec<Outbound>, GameError> {
        let sender = self
            .state
            .player(player)
            .ok_or(GameError::NotFound(NotFoundKind::Player))?;
        Ok(vec![Outbound::all(GameEvent::ChatMessage {
            from: player,
            display_name: sender.display_name.clone(),
            text,
        })])
    }

    fn end_game(&mut self, reason: &str) -> Vec<Outbound> {
        self.state.phase = Phase::Finished;
        info!(reason, "game ended");
        vec![Outbound::all(GameEvent::GameEnded {
            reason: reason.to_string(),
        })]
    }

    fn waiting_event(&self) -> Outbound {
        Outbound::all(GameEvent::WaitingForPlayers {
            ready_count: self.state.ready_count(),
            total_count: self.state.connected_count(),
            target_count: self.state.options.player_count,
        })
    }

    fn touch(&mut self) {
        self.activity += 1;
    }
}
