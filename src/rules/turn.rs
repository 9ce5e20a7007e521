//! Turn order and end-of-game detection.

use tracing::debug;

use crate::core::{GameState, Player};
use crate::game::event::{GameEvent, Outbound};

/// Can this connected player still do anything on the board?
#[must_use]
pub fn can_move(state: &GameState, player: &Player) -> bool {
    player.connected && !player.hand.is_empty() && state.board.has_legal_move(&player.hand)
}

/// Has play run out?
///
/// True when every connected hand is empty, or when at most one
/// connected player still has a legal move.
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    let connected: Vec<&Player> = state.players.iter().filter(|p| p.connected).collect();
    if connected.iter().all(|p| p.hand.is_empty()) {
        return true;
    }
    connected.iter().filter(|p| can_move(state, p)).count() <= 1
}

/// Seat of the next player to act after `seat`.
///
/// Prefers the next connected seat that can move; falls back to the next
/// connected seat so the index never lands on a disconnected player.
#[must_use]
pub fn next_seat(state: &GameState, seat: usize) -> Option<usize> {
    let n = state.player_count();
    (1..=n)
        .map(|offset| (seat + offset) % n)
        .find(|&s| can_move(state, &state.players[s]))
        .or_else(|| state.next_connected_after(seat))
}

/// Move the turn to the next player and announce it.
///
/// Returns `None` when nobody is connected.
pub fn advance_turn(state: &mut GameState) -> Option<Outbound> {
    let seat = next_seat(state, state.current_player_index)?;
    state.current_player_index = seat;
    let current_player = state.players[seat].id;

    debug!(player = %current_player, turn = state.turn, "turn changed");
    Some(Outbound::all(GameEvent::TurnChanged {
        current_player,
        turn: state.turn,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::cards::{Card, CardId, Suit};
    use crate::core::{GameOptions, GameRng, PlayerId};

    fn card(id: u8, rank: u8, suit: Suit) -> Card {
        Card::new(CardId::new(id), rank, suit)
    }

    fn state(n: usize) -> GameState {
        let mut state = GameState::new(GameOptions::new(n), &GameRng::new(1));
        for i in 0..n {
            let mut player = Player::new(PlayerId::new(i as u32 + 1), format!("p{i}"));
            player.hand.push(card(i as u8, 2, Suit::Hearts));
            state.players.push(player);
        }
        state
    }

    /// Base row full of hearts kings.
    fn blocked_board(state: &mut GameState) {
        for col in 0..4 {
            state
                .board
                .place(Position::new(1, col), card(40 + col, 13, Suit::Hearts))
                .unwrap();
        }
    }

    #[test]
    fn test_advance_skips_disconnected() {
        let mut s = state(4);
        s.players[1].connected = false;
        s.turn = 3;

        let event = advance_turn(&mut s).unwrap();
        assert_eq!(s.current_player_index, 2);
        assert_eq!(
            event.event,
            GameEvent::TurnChanged {
                current_player: PlayerId::new(3),
                turn: 3,
            }
        );

        s.current_player_index = 3;
        advance_turn(&mut s);
        assert_eq!(s.current_player_index, 0);
    }

    #[test]
    fn test_advance_with_nobody_connected() {
        let mut s = state(3);
        for p in &mut s.players {
            p.connected = false;
        }
        assert!(advance_turn(&mut s).is_none());
    }

    #[test]
    fn test_advance_skips_players_who_cannot_move() {
        let mut s = state(3);
        s.players[1].hand.clear();

        advance_turn(&mut s);
        assert_eq!(s.current_player_index, 2);
    }

    #[test]
    fn test_game_over_when_all_connected_hands_empty() {
        let mut s = state(3);
        s.players[0].hand.clear();
        s.players[1].hand.clear();
        assert!(is_game_over(&s));

        let mut s = state(3);
        s.players[0].hand.clear();
        s.players[1].hand.clear();
        s.players[2].connected = false;
        assert!(is_game_over(&s));
    }

    #[test]
    fn test_game_continues_while_two_can_move() {
        let s = state(3);
        assert!(!is_game_over(&s));
    }

    #[test]
    fn test_empty_hand_and_blocked_hand_ends_game() {
        let mut s = state(2);
        blocked_board(&mut s);
        s.players[0].hand.clear();
        s.players[1].hand = vec![card(1, 9, Suit::Spades)];

        assert!(!s.board.has_legal_move(&s.players[1].hand));
        assert!(is_game_over(&s));
    }

    #[test]
    fn test_single_mover_ends_game() {
        let mut s = state(3);
        blocked_board(&mut s);
        // Only the hearts card can climb onto the kings.
        s.players[0].hand = vec![card(1, 5, Suit::Hearts)];
        s.players[1].hand = vec![card(2, 5, Suit::Clubs)];
        s.players[2].hand = vec![card(3, 5, Suit::Spades)];
        assert!(is_game_over(&s));

        s.players[2].hand = vec![card(3, 13, Suit::Spades)];
        assert!(!is_game_over(&s));
    }
}
