//! Board and move value types.
//!
//! ## Board
//!
//! A 3×3 grid stored row-major:
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`. Transitions in [`crate::rules`] build a new board and
//! never touch the one they were given, so search branches share nothing.
//!
//! ## Textual Form
//!
//! ```
//! use tictactoe_minimax::core::{Board, Cell};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(board.get(0, 1), Some(Cell::X));
//! assert_eq!(board.to_compact(), "XX.OO....");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Player};
use super::error::EngineError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell coordinate to mark.
///
/// Coordinates are not range-checked on construction; `apply_move`
/// rejects anything outside `0..3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a move from a row-major cell index (0-8).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
        } else {
            None
        }
    }

    /// Check that both coordinates lie on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major cell index, if in bounds.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row * BOARD_SIZE + self.col)
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A 3×3 Tic-Tac-Toe position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create the empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from row-major cells.
    ///
    /// No reachability check is made; engine operations validate mark
    /// counts where they matter.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Create a board from three rows.
    #[must_use]
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Get the cell at `(row, col)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Move::new(row, col).index().map(|i| self.cells[i])
    }

    /// Get a cell by row-major index.
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }

    /// Number of cells holding `player`'s mark.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of marks placed so far.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Check if every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Copy of this board with one cell replaced.
    #[must_use]
    pub(crate) fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }

    /// 9-character row-major form, `.` for empty cells.
    #[must_use]
    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse 9 cell characters in row-major order.
    ///
    /// `/`, `|` and line breaks are ignored so rows may be separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for c in s.chars().filter(|c| !matches!(c, '/' | '|' | '\n' | '\r')) {
            let cell = Cell::from_char(c).ok_or_else(|| EngineError::ParseBoard {
                input: s.to_string(),
                reason: format!("unexpected character '{c}'"),
            })?;
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(EngineError::ParseBoard {
                input: s.to_string(),
                reason: format!("expected {CELL_COUNT} cells, got {count}"),
            });
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f, "---------")?;
            }
            let marks: Vec<String> = row
                .iter()
                .map(|c| c.mark().map_or(' ', Player::symbol).to_string())
                .collect();
            writeln!(f, "{}", marks.join(" | "))?;
        }
        Ok(())
    }
}
