//! Search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Counters collected during one minimax call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated, including the root's children and leaves.
    pub nodes_visited: u64,

    /// Evaluated boards that were terminal.
    pub terminal_nodes: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u8,

    /// Wall time of the call (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one evaluated board at `depth`.
    pub(crate) fn record_node(&mut self, depth: u8) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub(crate) fn record_terminal(&mut self) {
        self.terminal_nodes += 1;
    }

    /// Calculate nodes evaluated per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
