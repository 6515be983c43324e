//! Whole-game-tree analysis.
//!
//! Walks every line of legal play from the empty board, stopping at
//! terminal boards. Used to check engine invariants over the full state
//! space and as a reference for search statistics.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, Result};
use crate::rules::{apply_move, game_result, initial_board, legal_moves, GameResult};

/// Every board reachable by legal play, terminal boards included.
///
/// Play stops at terminal boards, so no board with two winners or a move
/// after a win is produced. The result holds 5478 boards.
pub fn reachable_boards() -> Result<FxHashSet<Board>> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![initial_board()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if game_result(&board).is_some() {
            continue;
        }
        for mv in legal_moves(&board) {
            let child = apply_move(&board, mv)?;
            if !seen.contains(&child) {
                stack.push(child);
            }
        }
    }

    Ok(seen)
}

/// Counts of complete games (distinct move sequences) by outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTreeCounts {
    pub games: u64,
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl GameTreeCounts {
    fn record(&mut self, result: GameResult) {
        self.games += 1;
        match result {
            GameResult::Winner(Player::X) => self.x_wins += 1,
            GameResult::Winner(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Count every complete game from the empty board.
pub fn count_games() -> Result<GameTreeCounts> {
    let mut counts = GameTreeCounts::default();
    count_from(&initial_board(), &mut counts)?;
    Ok(counts)
}

fn count_from(board: &Board, counts: &mut GameTreeCounts) -> Result<()> {
    if let Some(result) = game_result(board) {
        counts.record(result);
        return Ok(());
    }
    for mv in legal_moves(board) {
        count_from(&apply_move(board, mv)?, counts)?;
    }
    Ok(())
}
