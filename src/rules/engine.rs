//! The game engine: pure functions over [`Board`].
//!
//! - Whose turn it is
//! - What moves are legal
//! - How a move produces the next board
//! - Win, terminal and utility checks
//!
//! None of these functions hold state between calls.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, EngineError, IllegalMoveReason, Move, Player, Result, CELL_COUNT};

/// Legal moves of one board. Never more than 9, so kept inline.
pub type LegalMoves = SmallVec<[Move; CELL_COUNT]>;

/// The 8 winning lines as row-major cell indices, in scan order:
/// rows top-to-bottom, columns left-to-right, main diagonal, anti-diagonal.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Score from X's perspective: +1, -1 or 0.
    #[must_use]
    pub const fn utility(&self) -> i32 {
        match self {
            GameResult::Winner(Player::X) => 1,
            GameResult::Winner(Player::O) => -1,
            GameResult::Draw => 0,
        }
    }
}

/// The empty starting board.
#[must_use]
pub const fn initial_board() -> Board {
    Board::new()
}

/// Player to move, derived from mark counts.
///
/// X moves when counts are equal, O when X leads by one. Any other
/// count pair is not reachable and fails with `InvalidState`.
pub fn current_player(board: &Board) -> Result<Player> {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);

    if x_count == o_count {
        Ok(Player::X)
    } else if x_count == o_count + 1 {
        Ok(Player::O)
    } else {
        Err(EngineError::InvalidState { x_count, o_count })
    }
}

/// Every empty cell, in row-major order.
///
/// Empty only when the board is full. Won boards still report their
/// empty cells; check [`is_terminal`] first.
#[must_use]
pub fn legal_moves(board: &Board) -> LegalMoves {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .filter_map(|(index, _)| Move::from_index(index))
        .collect()
}

/// Board after the current player marks `mv`.
///
/// The input board is left untouched.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board> {
    let index = mv.index().ok_or(EngineError::IllegalMove {
        row: mv.row,
        col: mv.col,
        reason: IllegalMoveReason::OutOfRange,
    })?;

    if !board.cell(index).is_empty() {
        return Err(EngineError::IllegalMove {
            row: mv.row,
            col: mv.col,
            reason: IllegalMoveReason::Occupied,
        });
    }

    let player = current_player(board)?;
    Ok(board.with_cell(index, Cell::from(player)))
}

/// First completed line in scan order, if any.
#[must_use]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        let first = board.cell(a);
        !first.is_empty() && first == board.cell(b) && first == board.cell(c)
    })
}

/// Mark of the first completed line, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.cell(a).mark())
}

/// True once a line is complete or no empty cell remains.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Outcome of a finished game, or `None` while play continues.
#[must_use]
pub fn game_result(board: &Board) -> Option<GameResult> {
    match winner(board) {
        Some(player) => Some(GameResult::Winner(player)),
        None if board.is_full() => Some(GameResult::Draw),
        None => None,
    }
}

/// Terminal score from X's perspective: +1 X won, -1 O won, 0 draw.
///
/// Only defined on terminal boards; anything else is a caller bug and
/// fails with `NotTerminal`.
pub fn utility(board: &Board) -> Result<i32> {
    game_result(board)
        .map(|result| result.utility())
        .ok_or(EngineError::NotTerminal)
}
