//! Move-choosing agents.
//!
//! An [`Agent`] looks at a board and proposes a move for the side to move.
//! Presentation layers drive human turns themselves; agents cover the
//! computer side and automated matches.

use crate::core::{Board, GameRng, Move, Result};
use crate::rules::{current_player, is_terminal, legal_moves};
use crate::search::{Minimax, SearchConfig, SearchStats};

/// Something that picks moves.
pub trait Agent: Send {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Move for the player to move, or `None` when the board is terminal.
    fn select_move(&mut self, board: &Board) -> Result<Option<Move>>;
}

/// Plays the minimax-optimal move.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    search: Minimax,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: Minimax::new(config),
        }
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select_move(&mut self, board: &Board) -> Result<Option<Move>> {
        self.search.best_move(board)
    }
}

/// Picks uniformly among legal moves.
///
/// Seeded, so the same seed replays the same game.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, board: &Board) -> Result<Option<Move>> {
        if is_terminal(board) {
            return Ok(None);
        }
        current_player(board)?;

        let moves = legal_moves(board);
        Ok(self.rng.choose(&moves).copied())
    }
}
