//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, EngineError, Move};

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for Board.
///
/// Immutable: every engine function returns a new board.
#[pyclass(name = "Board", frozen)]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create a board.
    ///
    /// # Arguments
    /// - text: 9 cells in row-major order (`X`, `O`, `.`); empty board if omitted
    #[new]
    #[pyo3(signature = (text = None))]
    fn new(text: Option<&str>) -> PyResult<Self> {
        match text {
            Some(text) => Ok(Self(text.parse()?)),
            None => Ok(Self(Board::new())),
        }
    }

    /// Rows of the board; each cell is "X", "O" or None.
    #[getter]
    fn rows(&self) -> Vec<Vec<Option<String>>> {
        self.0
            .rows()
            .map(|row| {
                row.iter()
                    .map(|c| c.mark().map(|p| p.to_string()))
                    .collect()
            })
            .collect()
    }

    /// Cell at (row, col): "X", "O" or None.
    fn get(&self, row: usize, col: usize) -> PyResult<Option<String>> {
        let cell = self.0.get(row, col).ok_or_else(|| {
            PyValueError::new_err(format!("cell {} is off the board", Move::new(row, col)))
        })?;
        Ok(cell.mark().map(|p| p.to_string()))
    }

    /// Number of empty cells.
    fn empty_count(&self) -> usize {
        self.0.empty_count()
    }

    fn compact(&self) -> String {
        self.0.to_compact()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Board('{}')", self.0.to_compact())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
