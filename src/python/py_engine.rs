//! Engine and search bindings for Python.
//!
//! Moves cross the boundary as `(row, col)` tuples and players as `"X"`/`"O"`.

use pyo3::prelude::*;

use crate::core::Move;
use crate::rules;
use crate::search;

use super::py_core::PyBoard;

/// The empty starting board.
#[pyfunction]
pub fn initial_board() -> PyBoard {
    PyBoard(rules::initial_board())
}

/// Player to move: "X" or "O". Raises ValueError on unreachable boards.
#[pyfunction]
pub fn current_player(board: &PyBoard) -> PyResult<String> {
    Ok(rules::current_player(&board.0)?.to_string())
}

/// Empty cells as (row, col) tuples, row-major.
#[pyfunction]
pub fn legal_moves(board: &PyBoard) -> Vec<(usize, usize)> {
    rules::legal_moves(&board.0)
        .into_iter()
        .map(|mv| (mv.row, mv.col))
        .collect()
}

/// New board with the current player's mark at `mv`.
///
/// Raises ValueError for occupied or off-board cells.
#[pyfunction]
pub fn apply_move(board: &PyBoard, mv: (usize, usize)) -> PyResult<PyBoard> {
    Ok(PyBoard(rules::apply_move(&board.0, Move::from(mv))?))
}

/// "X", "O" or None.
#[pyfunction]
pub fn winner(board: &PyBoard) -> Option<String> {
    rules::winner(&board.0).map(|p| p.to_string())
}

#[pyfunction]
pub fn is_terminal(board: &PyBoard) -> bool {
    rules::is_terminal(&board.0)
}

/// 1 if X won, -1 if O won, 0 for a draw. Raises ValueError mid-game.
#[pyfunction]
pub fn utility(board: &PyBoard) -> PyResult<i32> {
    Ok(rules::utility(&board.0)?)
}

/// Optimal (row, col) for the player to move, or None when the game is over.
#[pyfunction]
pub fn minimax(board: &PyBoard) -> PyResult<Option<(usize, usize)>> {
    Ok(search::minimax(&board.0)?.map(|mv| (mv.row, mv.col)))
}
