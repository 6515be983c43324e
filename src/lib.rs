//! # tictactoe-minimax
//!
//! Tic-Tac-Toe rules and optimal play by exhaustive minimax search.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every rule and search function takes a board and
//!    returns a value. Nothing is cached or mutated between calls.
//!
//! 2. **Value Boards**: `Board` is `Copy`. Applying a move builds a new
//!    board, so search branches never share state.
//!
//! 3. **Deterministic**: Legal moves are enumerated row-major, so the
//!    first-found optimal move is the same on every run and platform.
//!
//! ## Quick Start
//!
//! ```rust
//! use tictactoe_minimax::core::Move;
//! use tictactoe_minimax::rules::{apply_move, current_player, initial_board};
//! use tictactoe_minimax::search::minimax;
//! use tictactoe_minimax::Player;
//!
//! let board = apply_move(&initial_board(), Move::new(0, 0)).unwrap();
//! assert_eq!(current_player(&board).unwrap(), Player::O);
//!
//! // O must take the center against a corner opening.
//! assert_eq!(minimax(&board).unwrap(), Some(Move::new(1, 1)));
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, cells, boards, moves, errors, RNG
//! - `rules`: Turn order, legal moves, transitions, winner and utility
//! - `search`: Minimax search, configuration and statistics
//! - `agents`: Minimax and random move pickers
//! - `games`: Automated matches between agents
//! - `analysis`: Reachable-state enumeration and game-tree counts
//! - `python` (feature `python`): PyO3 bindings for presentation layers

pub mod core;
pub mod rules;
pub mod search;
pub mod agents;
pub mod games;
pub mod analysis;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Move, Player,
    EngineError, IllegalMoveReason, Result,
    GameRng,
};

pub use crate::rules::{
    apply_move, current_player, game_result, initial_board, is_terminal, legal_moves, utility,
    winner, GameResult, LegalMoves,
};

pub use crate::search::{
    max_value, min_value, minimax,
    Minimax, MoveOrder, ScoredMove, SearchConfig, SearchStats,
};

pub use crate::agents::{Agent, MinimaxAgent, RandomAgent};

pub use crate::games::{play_match, GameRecord};
