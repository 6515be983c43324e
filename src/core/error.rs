//! Engine error type.

use thiserror::Error;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Row or column outside `0..3`.
    OutOfRange,
    /// Target cell already holds a mark.
    Occupied,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfRange => write!(f, "out of range"),
            IllegalMoveReason::Occupied => write!(f, "already occupied"),
        }
    }
}

/// Errors raised by the game engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    /// Mark counts cannot arise from legal play.
    #[error("invalid board state: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidState { x_count: usize, o_count: usize },

    /// Move targets a cell that cannot be marked.
    #[error("illegal move ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: IllegalMoveReason,
    },

    /// Utility requested for a game that has not ended.
    #[error("board is not terminal")]
    NotTerminal,

    #[error("cannot parse board '{input}': {reason}")]
    ParseBoard { input: String, reason: String },

    /// An agent returned no move while the game was still live.
    #[error("agent '{agent}' returned no move on a non-terminal board")]
    AgentStalled { agent: String },
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, EngineError>;
