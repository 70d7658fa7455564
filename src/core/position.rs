//! Grid coordinates and swap records

use super::{COLS, ROWS};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A cell coordinate that is guaranteed to lie inside the grid
///
/// Construction is the only place bounds are checked; everything that takes a
/// `Position` may index the grid without further validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    RowOutOfRange(usize),
    ColumnOutOfRange(usize),
    Malformed(String),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfRange(row) => {
                write!(f, "Row must be between 0 and {}, got {row}", ROWS - 1)
            }
            Self::ColumnOutOfRange(col) => {
                write!(f, "Column must be between 0 and {}, got {col}", COLS - 1)
            }
            Self::Malformed(text) => {
                write!(f, "Expected a coordinate like '2,3', got '{text}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

impl Position {
    /// Create a new position
    ///
    /// # Errors
    /// Returns `PositionError` if `row >= ROWS` or `col >= COLS`.
    ///
    /// # Examples
    /// ```
    /// use syllable_swap::core::Position;
    ///
    /// let pos = Position::new(1, 3).unwrap();
    /// assert_eq!((pos.row(), pos.col()), (1, 3));
    ///
    /// assert!(Position::new(4, 0).is_err());
    /// ```
    pub const fn new(row: usize, col: usize) -> Result<Self, PositionError> {
        if row >= ROWS {
            return Err(PositionError::RowOutOfRange(row));
        }
        if col >= COLS {
            return Err(PositionError::ColumnOutOfRange(col));
        }
        Ok(Self { row, col })
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Iterate over every cell in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Self { row, col }))
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parse `"row,col"`, tolerating surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PositionError::Malformed(s.trim().to_string());

        let (row, col) = s.split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse().map_err(|_| malformed())?;
        let col = col.trim().parse().map_err(|_| malformed())?;

        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// One executed exchange of two cells
///
/// Swapping is its own inverse, so the same record drives both undo and the
/// last-move highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwapRecord {
    pub from: Position,
    pub to: Position,
}

impl SwapRecord {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// The record with its endpoints exchanged
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Whether either endpoint is `pos`
    #[must_use]
    pub fn touches(self, pos: Position) -> bool {
        self.from == pos || self.to == pos
    }
}

impl fmt::Display for SwapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) <-> ({})", self.from, self.to)
    }
}
