//! Fixed-size syllable grid and its correctness map

use super::{Position, Syllable};
use serde::Serialize;

/// Number of rows in every puzzle grid
pub const ROWS: usize = 4;

/// Number of columns in every puzzle grid
pub const COLS: usize = 4;

/// A `ROWS`×`COLS` table of syllables
///
/// Rows are read left to right as candidate words. Dimensions are fixed by the
/// type, so they can never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Syllable; COLS]; ROWS],
}

impl Grid {
    /// Build a grid from row-major string literals
    ///
    /// # Examples
    /// ```
    /// use syllable_swap::core::{Grid, Position};
    ///
    /// let grid = Grid::from_rows([
    ///     ["af", "fil", "i", "ate"],
    ///     ["im", "mac", "u", "late"],
    ///     ["in", "vis", "i", "ble"],
    ///     ["un", "der", "wa", "ter"],
    /// ]);
    /// assert_eq!(grid.cell(Position::new(3, 1).unwrap()), "der");
    /// ```
    #[must_use]
    pub fn from_rows(rows: [[&str; COLS]; ROWS]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Syllable::from)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[Syllable; COLS]; ROWS] {
        &self.cells
    }

    /// Get one row
    ///
    /// # Panics
    /// Panics if `index >= ROWS`
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> &[Syllable; COLS] {
        &self.cells[index]
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Syllable {
        &self.cells[pos.row()][pos.col()]
    }

    /// Exchange two cells in place
    ///
    /// Swapping a cell with itself leaves the grid unchanged.
    pub(crate) fn swap(&mut self, a: Position, b: Position) {
        if a.row() == b.row() {
            self.cells[a.row()].swap(a.col(), b.col());
            return;
        }

        let (upper, lower) = if a.row() < b.row() { (a, b) } else { (b, a) };
        let (top, bottom) = self.cells.split_at_mut(lower.row());
        std::mem::swap(
            &mut top[upper.row()][upper.col()],
            &mut bottom[0][lower.col()],
        );
    }
}

/// Per-cell flags marking syllables that belong to a valid word prefix
///
/// Always recomputed from a grid; never patched incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CorrectnessMap {
    cells: [[bool; COLS]; ROWS],
}

impl CorrectnessMap {
    #[inline]
    #[must_use]
    pub const fn is_correct(&self, pos: Position) -> bool {
        self.cells[pos.row()][pos.col()]
    }

    /// Get one row of flags
    ///
    /// # Panics
    /// Panics if `index >= ROWS`
    #[inline]
    #[must_use]
    pub const fn row(&self, index: usize) -> &[bool; COLS] {
        &self.cells[index]
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[bool; COLS]; ROWS] {
        &self.cells
    }

    /// Number of cells marked correct
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&correct| correct).count()
    }

    pub(crate) const fn mark(&mut self, row: usize, col: usize) {
        self.cells[row][col] = true;
    }

    pub(crate) const fn clear_row(&mut self, row: usize) {
        self.cells[row] = [false; COLS];
    }
}
