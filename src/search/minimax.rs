//! Exhaustive minimax over the Tic-Tac-Toe game tree.
//!
//! X maximizes utility, O minimizes it. Every branch is searched to a
//! terminal board: no pruning, no memoization. The tree holds fewer than
//! 550k boards, so plain recursion is enough.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Board, Move, Player, Result};
use crate::rules::{apply_move, current_player, is_terminal, legal_moves, utility, LegalMoves};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// A root move with its minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub mv: Move,
    /// Value of the board after `mv`, from X's perspective.
    pub score: i32,
}

/// Optimal move for the player to move, or `None` if the game is over.
///
/// Ties keep the first optimal move in row-major order.
pub fn minimax(board: &Board) -> Result<Option<Move>> {
    Minimax::default().best_move(board)
}

/// Value of `board` when X is to move (or it is terminal).
pub fn max_value(board: &Board) -> Result<i32> {
    Minimax::untracked().max_value_at(board, 0)
}

/// Value of `board` when O is to move (or it is terminal).
pub fn min_value(board: &Board) -> Result<i32> {
    Minimax::untracked().min_value_at(board, 0)
}

/// Minimax searcher with configuration and per-call statistics.
///
/// ```
/// use tictactoe_minimax::core::Move;
/// use tictactoe_minimax::rules::initial_board;
/// use tictactoe_minimax::search::{Minimax, MoveOrder, SearchConfig};
///
/// let config = SearchConfig::default().with_move_order(MoveOrder::CenterFirst);
/// let mut search = Minimax::new(config);
///
/// let best = search.best_move(&initial_board()).unwrap();
/// assert_eq!(best, Some(Move::new(1, 1)));
/// assert_eq!(search.stats().terminal_nodes, 255_168);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new searcher.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
        }
    }

    fn untracked() -> Self {
        Self::new(SearchConfig::default().with_record_stats(false))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Optimal move for the player to move, or `None` on a terminal board.
    ///
    /// Candidates are tried in the configured order and the first one
    /// reaching the best score is kept (strict `>` for X, `<` for O).
    pub fn best_move(&mut self, board: &Board) -> Result<Option<Move>> {
        let scored = self.scored_moves(board)?;
        if scored.is_empty() {
            return Ok(None);
        }

        let player = current_player(board)?;
        let mut best: Option<ScoredMove> = None;
        for candidate in scored {
            let improves = match best {
                None => true,
                Some(b) => match player {
                    Player::X => candidate.score > b.score,
                    Player::O => candidate.score < b.score,
                },
            };
            if improves {
                best = Some(candidate);
            }
        }

        debug!(
            board = %board.to_compact(),
            %player,
            best = ?best.map(|b| b.mv),
            score = ?best.map(|b| b.score),
            nodes = self.stats.nodes_visited,
            "minimax move selected"
        );
        Ok(best.map(|b| b.mv))
    }

    /// Every legal move with its value, in candidate order.
    ///
    /// Empty on terminal boards.
    pub fn scored_moves(&mut self, board: &Board) -> Result<Vec<ScoredMove>> {
        self.stats.reset();
        let start = Instant::now();

        if is_terminal(board) {
            return Ok(Vec::new());
        }
        let player = current_player(board)?;

        let mut scored = Vec::new();
        for mv in self.candidates(board) {
            let child = apply_move(board, mv)?;
            let score = match player {
                Player::X => self.min_value_at(&child, 1)?,
                Player::O => self.max_value_at(&child, 1)?,
            };
            trace!(%mv, score, "root move scored");
            scored.push(ScoredMove { mv, score });
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(scored)
    }

    /// All moves tied for the best value, in candidate order.
    pub fn optimal_moves(&mut self, board: &Board) -> Result<Vec<Move>> {
        let scored = self.scored_moves(board)?;
        if scored.is_empty() {
            return Ok(Vec::new());
        }
        let player = current_player(board)?;

        let scores = scored.iter().map(|s| s.score);
        let best = match player {
            Player::X => scores.max(),
            Player::O => scores.min(),
        };

        Ok(scored
            .into_iter()
            .filter(|s| Some(s.score) == best)
            .map(|s| s.mv)
            .collect())
    }

    /// Game-theoretic value of `board` from X's perspective.
    pub fn value(&mut self, board: &Board) -> Result<i32> {
        self.stats.reset();
        let start = Instant::now();

        let value = if is_terminal(board) {
            utility(board)?
        } else {
            match current_player(board)? {
                Player::X => self.max_value_at(board, 0)?,
                Player::O => self.min_value_at(board, 0)?,
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(value)
    }

    fn candidates(&self, board: &Board) -> LegalMoves {
        let mut moves = legal_moves(board);
        let order = self.config.move_order;
        moves.sort_by_key(|&mv| order.rank(mv));
        moves
    }

    /// Returns true if the board is terminal.
    fn visit(&mut self, board: &Board, depth: u8) -> bool {
        let terminal = is_terminal(board);
        if self.config.record_stats {
            self.stats.record_node(depth);
            if terminal {
                self.stats.record_terminal();
            }
        }
        terminal
    }

    fn max_value_at(&mut self, board: &Board, depth: u8) -> Result<i32> {
        if self.visit(board, depth) {
            return utility(board);
        }

        let mut value = i32::MIN;
        for mv in legal_moves(board) {
            let child = apply_move(board, mv)?;
            value = value.max(self.min_value_at(&child, depth + 1)?);
        }
        Ok(value)
    }

    fn min_value_at(&mut self, board: &Board, depth: u8) -> Result<i32> {
        if self.visit(board, depth) {
            return utility(board);
        }

        let mut value = i32::MAX;
        for mv in legal_moves(board) {
            let child = apply_move(board, mv)?;
            value = value.min(self.max_value_at(&child, depth + 1)?);
        }
        Ok(value)
    }
}
