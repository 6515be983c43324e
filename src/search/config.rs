//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Order in which root candidates are tried.
///
/// Every order yields the same game value. The order only decides which
/// move is returned when several moves tie for best, since the first one
/// found is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOrder {
    /// Row-major, the order `legal_moves` yields.
    #[default]
    RowMajor,
    /// Center, then corners, then edges (row-major within each group).
    CenterFirst,
}

impl MoveOrder {
    /// Sort key of a move under this order; lower is tried first.
    #[must_use]
    pub fn rank(self, mv: Move) -> usize {
        match self {
            MoveOrder::RowMajor => 0,
            MoveOrder::CenterFirst => match (mv.row, mv.col) {
                (1, 1) => 0,
                (0 | 2, 0 | 2) => 1,
                _ => 2,
            },
        }
    }
}

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Candidate order at the root (decides tie-breaks).
    pub move_order: MoveOrder,

    /// Collect node counters in `SearchStats`.
    /// Timing is always recorded.
    pub record_stats: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::RowMajor,
            record_stats: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom root move order.
    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.move_order = order;
        self
    }

    /// Create a new config with node counting switched on or off.
    pub fn with_record_stats(mut self, record: bool) -> Self {
        self.record_stats = record;
        self
    }
}
