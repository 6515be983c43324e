//! Core value types: players, cells, boards, moves, errors, RNG.
//!
//! Everything here is a plain value. Game rules live in [`crate::rules`].

pub mod board;
pub mod cell;
pub mod error;
pub mod rng;

pub use board::{Board, Move, BOARD_SIZE, CELL_COUNT};
pub use cell::{Cell, Player};
pub use error::{EngineError, IllegalMoveReason, Result};
pub use rng::GameRng;
