//! Draft engine: setup, deals, picks, the pass barrier and completion.
//!
//! ## Round protocol
//!
//! 1. Deal `pack_size` cards per seat from the end of `remaining_deck`.
//! 2. Each player picks one card; the rest of their pack waits in
//!    `pending` keyed by the sender.
//! 3. Once no connected player still holds an unpicked pack, every pending
//!    remainder moves one seat in the draft direction at the same time.
//! 4. When a barrier finds nothing pending the round is over.
//!
//! A 3-player table ends with three undealt cards; those are shuffled and
//! handed out one each without a pick.
//!
//! Disconnected players never hold up the barrier. Their unpicked pack is
//! forwarded whole and deliveries skip them.

use tracing::{debug, info, warn};

use super::state::{total_rounds, Direction, DraftState};
use crate::cards::{create_deck, shuffle, split_kings, CardId};
use crate::core::{
    GameError, GameState, InvalidTargetKind, NotFoundKind, Phase, Player, PlayerId,
    TurnViolationKind,
};
use crate::game::event::{GameEvent, Outbound};

/// Deal the secret kings and shuffle the draft deck.
///
/// Each seat gets one face-down king in hand. At a 3-player table the
/// leftover king is set aside and its suit recorded as excluded.
pub fn setup(state: &mut GameState) -> DraftState {
    let (mut kings, mut rest) = split_kings(create_deck());

    shuffle(&mut kings, &mut state.deal_rng);
    for player in &mut state.players {
        let Some(mut king) = kings.pop() else {
            break;
        };
        king.visible = false;
        player.secret_king = Some(king);
        player.hand.push(king);
    }

    let excluded = kings.first().map(|king| king.suit);
    state.options.set_excluded_suit(excluded);
    state.set_aside.extend(kings);

    shuffle(&mut rest, &mut state.deal_rng);

    let pack_size = state.options.pack_size();
    let rounds = total_rounds(state.options.drafted_per_player(), pack_size);
    let mut draft = DraftState::new(pack_size, rounds);
    draft.remaining_deck = rest;

    info!(
        players = state.player_count(),
        pack_size,
        total_rounds = rounds,
        excluded_suit = ?excluded,
        "draft set up"
    );
    draft
}

/// Announce the draft and deal the first round.
pub fn begin(state: &mut GameState, draft: &mut DraftState) -> Vec<Outbound> {
    let mut events = vec![Outbound::all(GameEvent::DraftStarted {
        round: draft.round + 1,
        cards_per_pack: draft.pack_size,
        total_rounds: draft.total_rounds,
    })];
    start_next_round(state, draft, &mut events);
    events
}

/// Take one card from the player's current pack.
///
/// Redistribution happens only once the barrier is satisfied, so most
/// picks return no events.
pub fn pick(
    state: &mut GameState,
    draft: &mut DraftState,
    player: PlayerId,
    card_ids: &[CardId],
) -> Result<Vec<Outbound>, GameError> {
    if state.phase != Phase::Drafting {
        return Err(GameError::phase(Phase::Drafting, state.phase));
    }
    let seat = state.require_seat(player)?;
    let [card_id] = card_ids else {
        return Err(GameError::InvalidTarget(InvalidTargetKind::WrongPickCount));
    };

    let picker = &mut state.players[seat];
    if picker.has_picked {
        return Err(GameError::TurnViolation(TurnViolationKind::AlreadyPicked));
    }
    let index = picker
        .draft_pack
        .iter()
        .position(|c| c.id == *card_id)
        .ok_or(GameError::NotFound(NotFoundKind::CardInPack))?;

    let card = picker.draft_pack.remove(index);
    picker.hand.push(card);
    picker.has_picked = true;

    let remainder = std::mem::take(&mut picker.draft_pack);
    if !remainder.is_empty() {
        draft.pending.entry(player).or_default().extend(remainder);
    }

    debug!(
        player = %player,
        round = draft.round,
        card = %card,
        pending = draft.pending_count(),
        "draft pick"
    );

    let mut events = Vec::new();
    try_barrier(state, draft, &mut events);
    Ok(events)
}

/// Re-check the barrier after a player dropped out mid-draft.
pub fn on_disconnect(state: &mut GameState, draft: &mut DraftState) -> Vec<Outbound> {
    let mut events = Vec::new();
    if state.phase == Phase::Drafting {
        try_barrier(state, draft, &mut events);
    }
    events
}

/// Has every player reached the target hand size, or is the deck too
/// small for another full round?
#[must_use]
pub fn is_complete(state: &GameState, draft: &DraftState) -> bool {
    let target = state.options.target_hand_size();
    let everyone_full = state.players.iter().all(|p| p.hand.len() >= target);
    everyone_full || draft.remaining_deck.len() < state.player_count() * draft.pack_size
}

fn start_next_round(state: &mut GameState, draft: &mut DraftState, events: &mut Vec<Outbound>) {
    if state.player_count() == 3 && draft.remaining_deck.len() == 3 {
        terminal_round(state, draft, events);
    } else if is_complete(state, draft) {
        finalize(state, draft, events);
    } else {
        deal_round(state, draft, events);
    }
}

fn deal_round(state: &mut GameState, draft: &mut DraftState, events: &mut Vec<Outbound>) {
    draft.round += 1;

    for player in &mut state.players {
        let at = draft.remaining_deck.len().saturating_sub(draft.pack_size);
        player.draft_pack = draft.remaining_deck.split_off(at);
        player.has_picked = false;
        events.push(Outbound::to(
            player.id,
            GameEvent::DraftPackReceived {
                round: draft.round,
                cards_count: player.draft_pack.len(),
            },
        ));
    }

    info!(
        round = draft.round,
        remaining = draft.remaining_deck.len(),
        "draft round dealt"
    );
}

/// Three cards left at a 3-player table: one each, straight to hand.
fn terminal_round(state: &mut GameState, draft: &mut DraftState, events: &mut Vec<Outbound>) {
    draft.round += 1;

    let mut cards = std::mem::take(&mut draft.remaining_deck);
    shuffle(&mut cards, &mut state.deal_rng);
    for (player, card) in state.players.iter_mut().zip(cards) {
        player.hand.push(card);
    }

    info!(round = draft.round, "last draft round dealt directly");
    events.push(Outbound::all(GameEvent::LastDraftRoundComplete { round: draft.round }));
    finalize(state, draft, events);
}

fn try_barrier(state: &mut GameState, draft: &mut DraftState, events: &mut Vec<Outbound>) {
    if state.players.iter().any(Player::awaiting_pick) {
        return;
    }

    for player in state.players.iter_mut().filter(|p| !p.connected) {
        if !player.draft_pack.is_empty() {
            let pack = std::mem::take(&mut player.draft_pack);
            draft.pending.entry(player.id).or_default().extend(pack);
        }
    }

    if draft.pending.is_empty() {
        complete_round(state, draft, events);
    } else {
        redistribute(state, draft, events);
    }
}

/// Next connected seat from `seat` in `direction`; may be `seat` itself.
fn receiver_for(state: &GameState, direction: Direction, seat: usize) -> Option<usize> {
    let n = state.player_count();
    let mut target = seat;
    for _ in 0..n {
        target = direction.step(target, n);
        if state.players[target].connected {
            return Some(target);
        }
    }
    None
}

fn redistribute(state: &mut GameState, draft: &mut DraftState, events: &mut Vec<Outbound>) {
    let mut deliveries = Vec::with_capacity(draft.pending.len());
    for seat in 0..state.player_count() {
        let sender = state.players[seat].id;
        if let Some(cards) = draft.pending.remove(&sender) {
            let target = receiver_for(state, draft.direction, seat).unwrap_or(seat);
            deliveries.push((target, cards));
        }
    }

    let delivered = deliveries.len();
    for (target, cards) in deliveries {
        let receiver = &mut state.players[target];
        receiver.draft_pack.extend(cards);
        receiver.has_picked = false;
    }

    for player in state.players.iter().filter(|p| !p.draft_pack.is_empty()) {
        events.push(Outbound::to(
            player.id,
            GameEvent::DraftPackReceived {
                round: draft.round,
                cards_count: player.draft_pack.len(),
            },
        ));
    }

    debug!(round = draft.round, delivered, "packs passed");
}

fn complete_round(state: &mut GameState, draft: &mut DraftState, events: &mut Vec<Outbound>) {
    for player in &mut state.players {
        player.has_picked = false;
    }
    info!(round = draft.round, "draft round complete");
    start_next_round(state, draft, events);
}

fn finalize(state: &mut GameState, draft: &mut DraftState, events: &mut Vec<Outbound>) {
    let target = state.options.target_hand_size();
    for player in &state.players {
        if player.hand.len() != target {
            warn!(
                player = %player.id,
                hand = player.hand.len(),
                target,
                "unexpected hand size after draft"
            );
        }
    }

    draft.pending.clear();
    state.phase = Phase::Playing;
    state.current_player_index = state.first_connected_from(0).unwrap_or(0);
    state.turn = 1;
    state.discard_pile = Vec::new();

    info!(rounds = draft.round, "draft complete, play begins");
    if let Some(current_player) = state.current_player_id() {
        events.push(Outbound::all(GameEvent::DraftComplete { current_player }));
    }
}
