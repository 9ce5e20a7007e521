//! Whole games from lobby to final scores.

mod common;

use regicide::core::{Phase, PlayerId};
use regicide::game::{Command, Game, GameEvent, Outbound, Recipient};
use regicide::scoring::FinalScore;

use common::{assert_conserved, drafting, finish_draft, lobby, play_out};

fn final_result(events: &[Outbound]) -> (PlayerId, Vec<FinalScore>) {
    events
        .iter()
        .find_map(|o| match &o.event {
            GameEvent::GameFinished {
                winner,
                final_scores,
            } => Some((*winner, final_scores.clone())),
            _ => None,
        })
        .expect("game_finished emitted")
}

fn run_game(players: usize, seed: u64) -> (Game, Vec<PlayerId>, Vec<Outbound>) {
    let (mut game, ids) = drafting(players, seed);
    let mut events = finish_draft(&mut game);
    events.extend(play_out(&mut game));
    (game, ids, events)
}

fn check_result(game: &Game, events: &[Outbound]) {
    assert_eq!(game.phase(), Phase::Finished);
    assert_conserved(game);

    let (winner, scores) = final_result(events);
    assert_eq!(game.state().winner, Some(winner));

    let best = scores.iter().map(|s| s.score).max().unwrap();
    let first_best = scores.iter().find(|s| s.score == best).unwrap();
    assert_eq!(first_best.player, winner);

    for (player, line) in game.state().players.iter().zip(&scores) {
        assert_eq!(player.id, line.player);
        assert_eq!(player.score, line.score);
        assert!(line.score >= 0);
        assert!(line.secret_king.is_some_and(|k| k.visible));
    }
}

#[test]
fn test_lobby_to_draft() {
    let (mut game, ids) = lobby(3, 1);
    assert_eq!(game.join("fourth").unwrap_err().code(), "room_full");

    let events = game.handle(ids[0], Command::Ready);
    assert_eq!(
        events.last().map(|o| &o.event),
        Some(&GameEvent::WaitingForPlayers {
            ready_count: 1,
            total_count: 3,
            target_count: 3,
        })
    );

    // A leaving player frees the seat and the ready count follows.
    let events = game.leave(ids[1]).unwrap();
    assert_eq!(events[0].event, GameEvent::PlayerLeft { player: ids[1] });
    let (late, _) = game.join("late").unwrap();

    game.handle(ids[2], Command::Ready);
    assert_eq!(game.phase(), Phase::Waiting);
    let events = game.handle(late, Command::Ready);
    assert_eq!(game.phase(), Phase::Drafting);
    assert!(events
        .iter()
        .any(|o| matches!(o.event, GameEvent::DraftStarted { .. })));
}

#[test]
fn test_full_four_player_game() {
    let (game, ids, events) = run_game(4, 2024);
    check_result(&game, &events);

    // Draft events went to one player each; nothing private leaked to all.
    assert!(events
        .iter()
        .filter(|o| matches!(o.event, GameEvent::DraftPackReceived { .. }))
        .all(|o| matches!(o.to, Recipient::Player(_))));
    assert!(ids.iter().all(|id| game.player(*id).is_some()));
}

#[test]
fn test_full_three_player_game() {
    let (game, _, events) = run_game(3, 99);
    check_result(&game, &events);

    let excluded = game.state().excluded_suit().unwrap();
    let (_, scores) = final_result(&events);
    assert!(scores
        .iter()
        .all(|s| s.secret_king.map(|k| k.suit) != Some(excluded)));
}

#[test]
fn test_many_seeds_terminate_cleanly() {
    for seed in 0..8 {
        for players in [3, 4] {
            let (game, _, events) = run_game(players, seed);
            check_result(&game, &events);
        }
    }
}

#[test]
fn test_turn_numbers_only_grow() {
    let (game, _, events) = run_game(4, 7);

    let turns: Vec<u32> = events
        .iter()
        .filter_map(|o| match o.event {
            GameEvent::TurnChanged { turn, .. } => Some(turn),
            _ => None,
        })
        .collect();
    assert!(!turns.is_empty());
    assert!(turns.windows(2).all(|w| w[0] < w[1]));

    let history = &game.state().history;
    assert!(history.iter().zip(1u32..).all(|(record, turn)| record.turn == turn));
    assert_eq!(game.state().turn as usize, history.len() + 1);
}

#[test]
fn test_same_seed_same_game() {
    let (a, _, events_a) = run_game(4, 31);
    let (b, _, events_b) = run_game(4, 31);

    assert_eq!(events_a, events_b);
    assert_eq!(a.state().winner, b.state().winner);
}

#[test]
fn test_disconnect_mid_play_still_finishes() {
    let (mut game, ids) = drafting(4, 55);
    finish_draft(&mut game);

    let leaver = ids[2];
    game.leave(leaver).unwrap();
    let events = play_out(&mut game);

    assert_eq!(game.phase(), Phase::Finished);
    assert!(!events.iter().any(|o| matches!(
        o.event,
        GameEvent::TurnChanged { current_player, .. } if current_player == leaver
    )));
    assert!(!game
        .state()
        .history
        .iter()
        .any(|record| record.player == leaver));
    assert_conserved(&game);
}

#[test]
fn test_everyone_leaving_ends_without_winner() {
    let (mut game, ids) = drafting(3, 5);
    finish_draft(&mut game);

    game.leave(ids[0]).unwrap();
    let events = game.leave(ids[1]).unwrap();

    assert_eq!(game.phase(), Phase::Finished);
    assert!(game.state().winner.is_none());
    assert!(events
        .iter()
        .any(|o| matches!(o.event, GameEvent::GameEnded { .. })));
}

#[test]
fn test_finished_event_wire_shape() {
    let (_, _, events) = run_game(3, 12);
    let finished = events
        .iter()
        .find(|o| matches!(o.event, GameEvent::GameFinished { .. }))
        .unwrap();

    let json = serde_json::to_value(&finished.event).unwrap();
    assert_eq!(json["type"], "game_finished");
    assert!(json["winner"].is_number());
    let scores = json["finalScores"].as_array().unwrap();
    assert_eq!(scores.len(), 3);
    assert!(scores[0]["displayName"].is_string());
    assert!(scores[0]["secretKing"].is_object());
}
