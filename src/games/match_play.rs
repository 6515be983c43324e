//! Non-interactive matches between two agents.
//!
//! Records a complete game: every move, every board, and the final result.
//! Histories use `im` vectors so a record can be cloned and extended cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::Agent;
use crate::core::{Board, EngineError, Move, Player, Result};
use crate::rules::{apply_move, current_player, game_result, GameResult};

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the match started from.
    pub start: Board,

    /// Moves in play order.
    pub moves: Vector<Move>,

    /// Board after each move (same length as `moves`).
    pub boards: Vector<Board>,

    /// Outcome of the final board.
    pub result: GameResult,
}

impl GameRecord {
    /// Final position.
    #[must_use]
    pub fn final_board(&self) -> Board {
        self.boards.last().copied().unwrap_or(self.start)
    }

    /// Number of moves played in this match.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when the start board was already terminal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Terminal utility from X's perspective.
    #[must_use]
    pub fn utility(&self) -> i32 {
        self.result.utility()
    }
}

/// Play `x` against `o` from `start` until the game ends.
///
/// Each agent's move goes through `apply_move`, so an illegal proposal
/// fails the match with `IllegalMove`. An agent that returns no move on a
/// live board fails it with `AgentStalled`.
pub fn play_match<'a>(
    x: &mut (dyn Agent + 'a),
    o: &mut (dyn Agent + 'a),
    start: Board,
) -> Result<GameRecord> {
    let mut board = start;
    let mut moves = Vector::new();
    let mut boards = Vector::new();

    let result = loop {
        if let Some(result) = game_result(&board) {
            break result;
        }

        let agent = match current_player(&board)? {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let mv = agent
            .select_move(&board)?
            .ok_or_else(|| EngineError::AgentStalled {
                agent: agent.name().to_string(),
            })?;

        board = apply_move(&board, mv)?;
        moves.push_back(mv);
        boards.push_back(board);
    };

    debug!(
        x = x.name(),
        o = o.name(),
        moves = moves.len(),
        ?result,
        "match finished"
    );

    Ok(GameRecord {
        start,
        moves,
        boards,
        result,
    })
}
