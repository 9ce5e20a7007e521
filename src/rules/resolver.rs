//! Play resolution.
//!
//! `resolve_play` runs in two stages. `validate` checks everything a play
//! depends on against the current state and produces a `Plan`; nothing is
//! mutated until the whole play is known to be legal. `apply` then carries
//! the plan out, fires the power, checks for the end of the game and
//! passes the turn.
//!
//! Validation order: phase, turn, card in hand, then the action's target.

use tracing::debug;

use super::action::{BaseAction, PlayAction, PlayCommand, PlayRecord, PowerTarget};
use super::turn::{advance_turn, is_game_over};
use crate::board::Position;
use crate::cards::{Card, CardId, CardKind};
use crate::core::{
    GameError, GameState, InvalidTargetKind, NotFoundKind, Phase, PlayerId, RuleViolationKind,
    TurnViolationKind,
};
use crate::game::event::{GameEvent, Outbound};
use crate::scoring;

/// A power whose targets have been checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlannedPower {
    None,
    Swap(Position, Position),
    Exchange { give: CardId, target_seat: usize },
}

/// A fully validated play.
#[derive(Clone, Copy, Debug)]
struct Plan {
    seat: usize,
    card: Card,
    base: BaseAction,
    position: Position,
    power: PlannedPower,
}

/// Resolve one `play_card` command.
///
/// On error nothing has changed. On success the returned events describe
/// the placement, any power, and either the next turn or the final result.
pub fn resolve_play(
    state: &mut GameState,
    player: PlayerId,
    command: &PlayCommand,
) -> Result<Vec<Outbound>, GameError> {
    let plan = validate(state, player, command)?;
    apply(state, player, command, plan)
}

fn validate(state: &GameState, player: PlayerId, command: &PlayCommand) -> Result<Plan, GameError> {
    if state.phase != Phase::Playing {
        return Err(GameError::phase(Phase::Playing, state.phase));
    }

    let seat = state.require_seat(player)?;
    if seat != state.current_player_index {
        return Err(GameError::TurnViolation(TurnViolationKind::NotYourTurn));
    }

    let card = state.players[seat]
        .hand_card(command.card_id)
        .copied()
        .ok_or(GameError::NotFound(NotFoundKind::CardInHand))?;

    let base = command.action.base();
    let position = command.action.position();
    match base {
        BaseAction::Place => state.board.check_place(&card, position)?,
        BaseAction::Replace => {
            state.board.check_replace(&card, position)?;
        }
    }

    let power = match &command.action {
        PlayAction::Place { .. } | PlayAction::Replace { .. } => PlannedPower::None,
        PlayAction::SpecialPower { power, .. } => {
            validate_power(state, seat, &card, position, power.as_ref())?
        }
    };

    Ok(Plan {
        seat,
        card,
        base,
        position,
        power,
    })
}

/// Check a `special_power` target against the played card.
///
/// Queens and Jacks need their own target shape. Aces and Kings take no
/// target and resolve as the bare move. Number cards have no power.
fn validate_power(
    state: &GameState,
    seat: usize,
    card: &Card,
    placed_at: Position,
    power: Option<&PowerTarget>,
) -> Result<PlannedPower, GameError> {
    let Some(kind) = card.kind() else {
        return Err(GameError::InvalidTarget(InvalidTargetKind::NotSpecialCard));
    };
    if !kind.has_power() {
        return match (kind, power) {
            (CardKind::Ace | CardKind::King, None) => Ok(PlannedPower::None),
            _ => Err(GameError::InvalidTarget(InvalidTargetKind::NotSpecialCard)),
        };
    }

    match (kind, power) {
        (CardKind::Queen, Some(PowerTarget::Swap { positions })) => {
            let [a, b] = positions.as_slice() else {
                return Err(GameError::InvalidTarget(InvalidTargetKind::QueenTargets));
            };
            if a == b {
                return Err(GameError::InvalidTarget(InvalidTargetKind::QueenTargets));
            }
            if !a.is_valid() || !b.is_valid() {
                return Err(GameError::NotFound(NotFoundKind::Position));
            }
            // The queen's own cell counts as occupied once she is down.
            let occupied = |p: &Position| *p == placed_at || state.board.is_occupied(*p);
            if !occupied(a) || !occupied(b) {
                return Err(GameError::RuleViolation(RuleViolationKind::SwapEmptyCell));
            }
            Ok(PlannedPower::Swap(*a, *b))
        }
        (CardKind::Jack, Some(PowerTarget::Exchange { give, target })) => {
            let actor = &state.players[seat];
            if *give == card.id || *target == actor.id {
                return Err(GameError::InvalidTarget(InvalidTargetKind::JackTargets));
            }
            let target_seat = state
                .seat_of(*target)
                .ok_or(GameError::NotFound(NotFoundKind::TargetPlayer))?;
            if !actor.has_in_hand(*give) {
                return Err(GameError::NotFound(NotFoundKind::CardToGive));
            }
            if state.players[target_seat].hand.is_empty() {
                return Err(GameError::InvalidTarget(InvalidTargetKind::TargetHandEmpty));
            }
            Ok(PlannedPower::Exchange {
                give: *give,
                target_seat,
            })
        }
        (CardKind::Queen, None) => Err(GameError::InvalidTarget(InvalidTargetKind::QueenTargets)),
        (CardKind::Jack, None) => Err(GameError::InvalidTarget(InvalidTargetKind::JackTargets)),
        _ => Err(GameError::InvalidTarget(InvalidTargetKind::PowerMismatch)),
    }
}

fn apply(
    state: &mut GameState,
    player: PlayerId,
    command: &PlayCommand,
    plan: Plan,
) -> Result<Vec<Outbound>, GameError> {
    let mut events = Vec::new();

    // Board first: if it refuses, the hand is still intact.
    let replaced = match plan.base {
        BaseAction::Place => {
            state.board.place(plan.position, plan.card)?;
            None
        }
        BaseAction::Replace => {
            Some(state.board.replace(plan.position, plan.card, &mut state.discard_pile)?)
        }
    };
    state.players[plan.seat]
        .take_from_hand(plan.card.id)
        .ok_or_else(|| GameError::Internal(format!("{} vanished from hand", plan.card.id)))?;

    let landed = state
        .board
        .get(plan.position)
        .copied()
        .ok_or_else(|| GameError::Internal(format!("nothing at {}", plan.position)))?;
    events.push(Outbound::all(match replaced {
        None => GameEvent::CardPlaced {
            player,
            card: landed,
            position: plan.position,
        },
        Some(replaced_card) => GameEvent::CardReplaced {
            player,
            new_card: landed,
            replaced_card,
            position: plan.position,
        },
    }));

    let mut drawn = None;
    match plan.power {
        PlannedPower::None => {}
        PlannedPower::Swap(a, b) => {
            state.board.swap(a, b)?;
            events.push(Outbound::all(GameEvent::QueenPowerUsed {
                player,
                exchanged_positions: [a, b],
            }));
        }
        PlannedPower::Exchange { give, target_seat } => {
            let received = exchange(state, plan.seat, target_seat, give)?;
            drawn = Some(received);
            events.push(Outbound::all(GameEvent::JackPowerUsed {
                player,
                target_player: state.players[target_seat].id,
            }));
        }
    }

    debug!(
        player = %player,
        card = %landed,
        position = %plan.position,
        turn = state.turn,
        "card played"
    );

    state.record_play(PlayRecord {
        player,
        card: landed,
        action: command.action.clone(),
        replaced,
        drawn,
        turn: state.turn,
    });
    state.turn += 1;

    if is_game_over(state) {
        events.extend(scoring::finish(state));
    } else {
        events.extend(advance_turn(state));
    }
    Ok(events)
}

/// Jack swap: `give` goes to the target, a random card of theirs comes back.
fn exchange(
    state: &mut GameState,
    actor_seat: usize,
    target_seat: usize,
    give: CardId,
) -> Result<CardId, GameError> {
    let target_len = state.players[target_seat].hand.len();
    if target_len == 0 {
        return Err(GameError::InvalidTarget(InvalidTargetKind::TargetHandEmpty));
    }
    let index = state.power_rng.index_below(target_len);

    let given = state.players[actor_seat]
        .take_from_hand(give)
        .ok_or(GameError::NotFound(NotFoundKind::CardToGive))?;
    let received = state.players[target_seat]
        .take_hand_index(index)
        .ok_or_else(|| GameError::Internal("jack draw out of range".to_string()))?;

    state.players[target_seat].hand.push(given);
    state.players[actor_seat].hand.push(received);
    Ok(received.id)
}
