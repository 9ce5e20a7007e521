//! Final scores and winner selection.
//!
//! A player scores `rank x row` for every board card of their secret
//! king's suit. At a 3-player table the holder of the excluded suit scores
//! zero. The highest score wins; ties go to the lowest seat.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::PyramidBoard;
use crate::cards::{Card, Suit};
use crate::core::{GameState, Phase, PlayerId};
use crate::game::event::{GameEvent, Outbound};

/// One line of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalScore {
    pub player: PlayerId,
    pub display_name: String,
    pub score: i64,
    pub secret_king: Option<Card>,
}

/// Score of a secret king against the board.
#[must_use]
pub fn score_for(board: &PyramidBoard, secret_king: Option<&Card>, excluded: Option<Suit>) -> i64 {
    let Some(king) = secret_king else {
        return 0;
    };
    if excluded == Some(king.suit) {
        return 0;
    }
    board
        .occupied()
        .filter(|(_, card)| card.suit == king.suit)
        .map(|(pos, card)| i64::from(card.rank) * pos.multiplier())
        .sum()
}

/// Standings in seat order.
#[must_use]
pub fn compute_scores(state: &GameState) -> Vec<FinalScore> {
    state
        .players
        .iter()
        .map(|p| FinalScore {
            player: p.id,
            display_name: p.display_name.clone(),
            score: score_for(&state.board, p.secret_king.as_ref(), state.excluded_suit()),
            secret_king: p.secret_king.map(|mut king| {
                king.visible = true;
                king
            }),
        })
        .collect()
}

/// Highest score; the earliest entry wins a tie.
#[must_use]
pub fn select_winner(scores: &[FinalScore]) -> Option<PlayerId> {
    scores
        .iter()
        .fold(None::<&FinalScore>, |best, s| match best {
            Some(b) if b.score >= s.score => Some(b),
            _ => Some(s),
        })
        .map(|s| s.player)
}

/// Score the board, pick the winner and finish the game.
pub fn finish(state: &mut GameState) -> Vec<Outbound> {
    let final_scores = compute_scores(state);
    for (player, line) in state.players.iter_mut().zip(&final_scores) {
        player.score = line.score;
    }

    state.winner = select_winner(&final_scores);
    state.phase = Phase::Finished;

    let Some(winner) = state.winner else {
        return Vec::new();
    };
    info!(
        winner = %winner,
        scores = ?final_scores.iter().map(|s| s.score).collect::<Vec<_>>(),
        "game finished"
    );
    vec![Outbound::all(GameEvent::GameFinished {
        winner,
        final_scores,
    })]
}
