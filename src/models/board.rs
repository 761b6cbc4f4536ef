use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::decoder;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Reasons a board could not be built from its input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board input is empty")]
    Empty,

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} symbols, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },

    #[error("board must be square")]
    NotSquare,
}

/// A square grid of tile symbols, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<char>,
}

impl Board {
    /// Build a board from rows of symbols. Letters are uppercased.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, symbols) in rows.into_iter().enumerate() {
            if symbols.len() != size {
                return Err(BoardError::NotSquare);
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                cells.push(Self::normalize(row, col, symbol)?);
            }
        }

        Ok(Self { size, cells })
    }

    /// Parse a `size` x `size` board, one row per line.
    /// Blank lines and whitespace around each row are ignored.
    pub fn parse(input: &str, size: usize) -> Result<Self, BoardError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(BoardError::Empty);
        }
        if lines.len() != size {
            return Err(BoardError::RowCount {
                expected: size,
                found: lines.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != size {
                return Err(BoardError::RowLength {
                    row,
                    expected: size,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                cells.push(Self::normalize(row, col, symbol)?);
            }
        }

        Ok(Self { size, cells })
    }

    fn normalize(row: usize, col: usize, symbol: char) -> Result<char, BoardError> {
        if decoder::is_encoded(symbol) {
            return Ok(symbol);
        }
        if !symbol.is_alphabetic() {
            return Err(BoardError::InvalidSymbol { row, col, symbol });
        }
        // Only take single-char uppercase forms; anything else keeps symbol identity
        let mut upper = symbol.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Ok(symbol),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        if self.contains(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Index of `pos` in row-major order. `pos` must be on the board.
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Rows as strings of raw (undecoded) symbols
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.size).map(|row| row.iter().collect())
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    /// The up to 8 cells touching `pos`, including diagonals
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let rows = pos.row.saturating_sub(1)..=(pos.row + 1).min(self.size - 1);
        rows.flat_map(move |row| {
            let cols = pos.col.saturating_sub(1)..=(pos.col + 1).min(self.size - 1);
            cols.map(move |col| Position::new(row, col))
        })
        .filter(move |&neighbor| neighbor != pos)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.rows() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
