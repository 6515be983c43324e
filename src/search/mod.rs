//! Minimax search.
//!
//! ## Overview
//!
//! - [`minimax`]: optimal move for the side to move, `None` once the game is over
//! - [`max_value`] / [`min_value`]: mutually recursive board valuation
//! - [`Minimax`]: the same search with a [`SearchConfig`] and [`SearchStats`]
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_minimax::rules::{apply_move, initial_board, is_terminal};
//! use tictactoe_minimax::search::minimax;
//!
//! let mut board = initial_board();
//! while let Some(mv) = minimax(&board).unwrap() {
//!     board = apply_move(&board, mv).unwrap();
//! }
//! assert!(is_terminal(&board));
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::{MoveOrder, SearchConfig};
pub use minimax::{max_value, min_value, minimax, Minimax, ScoredMove};
pub use stats::SearchStats;
