//! Outbound events.
//!
//! The engine never talks to clients. Every operation returns a list of
//! `Outbound` values, each an event plus who should receive it; the
//! transport delivers them in order.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::cards::Card;
use crate::core::{GameError, PlayerId};
use crate::scoring::FinalScore;

/// Who an event is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipient {
    All,
    Player(PlayerId),
}

/// Event addressed to its recipients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outbound {
    pub to: Recipient,
    pub event: GameEvent,
}

impl Outbound {
    /// Broadcast to every player.
    #[must_use]
    pub fn all(event: GameEvent) -> Self {
        Self {
            to: Recipient::All,
            event,
        }
    }

    /// Send to one player.
    #[must_use]
    pub fn to(player: PlayerId, event: GameEvent) -> Self {
        Self {
            to: Recipient::Player(player),
            event,
        }
    }
}

/// Everything the engine can tell clients.
///
/// Serialized with a `type` tag and camelCase fields, e.g.
/// `{"type":"turn_changed","currentPlayer":2,"turn":5}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum GameEvent {
    // === Lobby ===
    PlayerJoined {
        player: PlayerId,
        display_name: String,
    },
    PlayerLeft {
        player: PlayerId,
    },
    PlayerDisconnected {
        player: PlayerId,
    },
    PlayerReconnected {
        player: PlayerId,
    },
    PlayerReadyUpdate {
        player: PlayerId,
        ready: bool,
        ready_count: usize,
        total_count: usize,
    },
    WaitingForPlayers {
        ready_count: usize,
        total_count: usize,
        target_count: usize,
    },

    // === Draft ===
    DraftStarted {
        round: u32,
        cards_per_pack: usize,
        total_rounds: u32,
    },
    DraftPackReceived {
        round: u32,
        cards_count: usize,
    },
    LastDraftRoundComplete {
        round: u32,
    },
    DraftComplete {
        current_player: PlayerId,
    },

    // === Play ===
    CardPlaced {
        player: PlayerId,
        card: Card,
        position: Position,
    },
    CardReplaced {
        player: PlayerId,
        new_card: Card,
        replaced_card: Card,
        position: Position,
    },
    QueenPowerUsed {
        player: PlayerId,
        exchanged_positions: [Position; 2],
    },
    JackPowerUsed {
        player: PlayerId,
        target_player: PlayerId,
    },
    TurnChanged {
        current_player: PlayerId,
        turn: u32,
    },

    // === End ===
    GameFinished {
        winner: PlayerId,
        final_scores: Vec<FinalScore>,
    },
    GameEnded {
        reason: String,
    },

    // === Misc ===
    ChatMessage {
        from: PlayerId,
        display_name: String,
        text: String,
    },
    Error {
        code: String,
        message: String,
    },
}

impl GameEvent {
    /// Wire form of a rejected command.
    #[must_use]
    pub fn error(err: &GameError) -> Self {
        GameEvent::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    /// The `type` tag this event serializes with.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PlayerJoined { .. } => "player_joined",
            GameEvent::PlayerLeft { .. } => "player_left",
            GameEvent::PlayerDisconnected { .. } => "player_disconnected",
            GameEvent::PlayerReconnected { .. } => "player_reconnected",
            GameEvent::PlayerReadyUpdate { .. } => "player_ready_update",
            GameEvent::WaitingForPlayers { .. } => "waiting_for_players",
            GameEvent::DraftStarted { .. } => "draft_started",
            GameEvent::DraftPackReceived { .. } => "draft_pack_received",
            GameEvent::LastDraftRoundComplete { .. } => "last_draft_round_complete",
            GameEvent::DraftComplete { .. } => "draft_complete",
            GameEvent::CardPlaced { .. } => "card_placed",
            GameEvent::CardReplaced { .. } => "card_replaced",
            GameEvent::QueenPowerUsed { .. } => "queen_power_used",
            GameEvent::JackPowerUsed { .. } => "jack_power_used",
            GameEvent::TurnChanged { .. } => "turn_changed",
            GameEvent::GameFinished { .. } => "game_finished",
            GameEvent::GameEnded { .. } => "game_ended",
            GameEvent::ChatMessage { .. } => "chat_message",
            GameEvent::Error { .. } => "error",
        }
    }
}
