//! Puzzle board: grid truth, scoring, and raw swaps

use super::matching;
use crate::core::{CorrectnessMap, Grid, Position, SwapRecord, TargetWord};
use tracing::debug;

/// Live grid plus the immutable starting layout and the target words
///
/// The board knows nothing about move counts or history; those belong to
/// [`Session`](super::Session).
#[derive(Debug, Clone)]
pub struct Board<'a> {
    grid: Grid,
    initial: Grid,
    words: &'a [TargetWord],
    last_swap: Option<SwapRecord>,
}

impl<'a> Board<'a> {
    /// Create a board starting from a copy of `initial`
    #[must_use]
    pub fn new(initial: &Grid, words: &'a [TargetWord]) -> Self {
        Self {
            grid: initial.clone(),
            initial: initial.clone(),
            words,
            last_swap: None,
        }
    }

    /// Restore the starting layout and clear the last-swap highlight
    pub fn reset(&mut self) {
        self.grid.clone_from(&self.initial);
        self.last_swap = None;
    }

    /// Exchange two cells unconditionally and remember the swap
    pub fn swap(&mut self, from: Position, to: Position) {
        debug!(%from, %to, "swapping cells");
        self.grid.swap(from, to);
        self.last_swap = Some(SwapRecord::new(from, to));
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &'a [TargetWord] {
        self.words
    }

    /// The most recent swap, for highlighting
    #[inline]
    #[must_use]
    pub const fn last_swap(&self) -> Option<SwapRecord> {
        self.last_swap
    }

    /// Freshly computed per-cell correctness
    #[must_use]
    pub fn correct_positions(&self) -> CorrectnessMap {
        matching::correct_positions(&self.grid, self.words)
    }

    /// Number of cells currently marked correct
    #[must_use]
    pub fn calculate_score(&self) -> usize {
        self.correct_positions().count()
    }

    /// True iff every target word is spelled by some row
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matching::all_words_spelled(&self.grid, self.words)
    }

    #[cfg(test)]
    pub(crate) fn overwrite_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, ConfigId};

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board() -> Board<'static> {
        let config = catalog::get(ConfigId::new(1)).unwrap();
        Board::new(config.grid(), config.words())
    }

    #[test]
    fn new_board_copies_initial_grid() {
        let board = board();
        assert_eq!(board.grid().cell(pos(0, 0)), "ter");
        assert_eq!(board.last_swap(), None);
        assert_eq!(board.calculate_score(), 0);
        assert!(!board.is_completed());
    }

    #[test]
    fn swap_records_last_swap() {
        let mut board = board();
        board.swap(pos(0, 0), pos(0, 1));

        assert_eq!(board.grid().cell(pos(0, 0)), "ate");
        assert_eq!(board.grid().cell(pos(0, 1)), "ter");
        assert_eq!(
            board.last_swap(),
            Some(SwapRecord::new(pos(0, 0), pos(0, 1)))
        );
    }

    #[test]
    fn swap_twice_restores_grid() {
        let mut board = board();
        let before = board.grid().clone();
        board.swap(pos(1, 2), pos(3, 0));
        board.swap(pos(1, 2), pos(3, 0));
        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn reset_restores_layout_and_clears_highlight() {
        let mut board = board();
        board.swap(pos(0, 0), pos(3, 3));
        board.swap(pos(2, 1), pos(1, 1));
        board.reset();

        assert_eq!(board.grid(), catalog::get(ConfigId::new(1)).unwrap().grid());
        assert_eq!(board.last_swap(), None);
    }

    #[test]
    fn partial_prefix_scores() {
        let mut board = board();
        // Moves "im" to the front of row 3: [im, vis, af, wa]
        board.swap(pos(1, 2), pos(3, 0));
        assert_eq!(board.calculate_score(), 1);
        assert_eq!(board.correct_positions().row(3), &[true, false, false, false]);
    }

    #[test]
    fn score_matches_correct_cell_count() {
        let mut board = board();
        board.overwrite_grid(Grid::from_rows([
            ["af", "fil", "i", "ate"],
            ["im", "mac", "u", "late"],
            ["in", "mis", "i", "ble"],
            ["un", "der", "wa", "ter"],
        ]));
        assert_eq!(board.calculate_score(), board.correct_positions().count());
        assert_eq!(board.calculate_score(), 13);
        assert!(!board.is_completed());
    }
}
