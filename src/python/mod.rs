//! Python bindings for the tic-tac-toe engine.
//!
//! Presentation layers (terminal or graphical front ends) drive the turn
//! loop from Python and call into the engine for rules and the computer's
//! move.
//!
//! # Quick Start
//!
//! ```python
//! import tictactoe_minimax as ttt
//!
//! board = ttt.initial_board()
//! board = ttt.apply_move(board, (1, 1))      # human plays X in the center
//! reply = ttt.minimax(board)                 # computer answers as O
//! board = ttt.apply_move(board, reply)
//!
//! if ttt.is_terminal(board):
//!     print(ttt.winner(board), ttt.utility(board))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::PyBoard;

/// tictactoe_minimax: Tic-Tac-Toe rules and optimal play.
#[pymodule]
fn tictactoe_minimax(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;

    m.add_function(wrap_pyfunction!(py_engine::initial_board, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::current_player, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::legal_moves, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::apply_move, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::winner, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::is_terminal, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::utility, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::minimax, m)?)?;

    Ok(())
}
