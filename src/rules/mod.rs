//! Tic-Tac-Toe rules.
//!
//! Stateless functions over [`crate::core::Board`]: turn order, legal moves,
//! transitions and terminal scoring.

mod engine;

pub use engine::{
    apply_move, current_player, game_result, initial_board, is_terminal, legal_moves, utility,
    winner, winning_line, GameResult, LegalMoves, WINNING_LINES,
};
