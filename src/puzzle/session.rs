//! Game session: move counting, undo history, and completion gating

use super::Board;
use crate::catalog::{self, CatalogError, ConfigId, Configuration};
use crate::core::{COLS, CorrectnessMap, Grid, Position, ROWS, SwapRecord};
use serde::Serialize;
use tracing::{debug, info};

/// One game over one configuration
///
/// All mutation goes through the session so that `score` and `completed`
/// always agree with the grid once a call returns. While completed, `swap`
/// and `undo` are no-ops until `reset` or a configuration switch.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    configuration: &'a Configuration,
    board: Board<'a>,
    swaps: usize,
    score: usize,
    completed: bool,
    history: Vec<SwapRecord>,
}

/// Owned copy of everything a presentation layer draws
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub config_id: ConfigId,
    pub name: String,
    pub grid: Grid,
    pub correct: CorrectnessMap,
    pub last_swap: Option<SwapRecord>,
    pub swaps: usize,
    pub score: usize,
    pub max_score: usize,
    pub completed: bool,
}

impl<'a> Session<'a> {
    /// Start a fresh game on `configuration`
    #[must_use]
    pub fn new(configuration: &'a Configuration) -> Self {
        let mut session = Self {
            configuration,
            board: Board::new(configuration.grid(), configuration.words()),
            swaps: 0,
            score: 0,
            completed: false,
            history: Vec::new(),
        };
        session.update_score();
        session
    }

    /// Swap two cells and record the move
    ///
    /// Does nothing once the puzzle is completed. Equal coordinates are
    /// accepted and count as a move.
    pub fn swap(&mut self, from: Position, to: Position) {
        if self.completed {
            debug!(%from, %to, "ignoring swap on completed puzzle");
            return;
        }

        self.board.swap(from, to);
        self.swaps += 1;
        self.history.push(SwapRecord::new(from, to));
        self.update_score();
    }

    /// Revert the most recent swap
    ///
    /// Does nothing when completed or when there is no history.
    pub fn undo(&mut self) {
        if self.completed {
            debug!("ignoring undo on completed puzzle");
            return;
        }

        let Some(last) = self.history.pop() else {
            debug!("nothing to undo");
            return;
        };

        let reverse = last.reversed();
        self.board.swap(reverse.from, reverse.to);
        self.swaps -= 1;
        self.update_score();
    }

    /// Return to the starting layout of the same configuration
    pub fn reset(&mut self) {
        debug!(config = %self.configuration.id(), "resetting session");
        self.board.reset();
        self.swaps = 0;
        self.history.clear();
        self.completed = false;
        self.update_score();
    }

    /// Recompute score and completion from the current grid
    pub fn update_score(&mut self) {
        let was_completed = self.completed;
        self.score = self.board.calculate_score();
        self.completed = self.board.is_completed();

        if self.completed && !was_completed {
            info!(
                config = %self.configuration.id(),
                swaps = self.swaps,
                "puzzle completed"
            );
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.board.grid()
    }

    #[must_use]
    pub fn correct_positions(&self) -> CorrectnessMap {
        self.board.correct_positions()
    }

    #[inline]
    #[must_use]
    pub const fn last_swap(&self) -> Option<SwapRecord> {
        self.board.last_swap()
    }

    #[inline]
    #[must_use]
    pub const fn swaps(&self) -> usize {
        self.swaps
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Score of a fully solved grid
    #[inline]
    #[must_use]
    pub const fn max_score(&self) -> usize {
        ROWS * COLS
    }

    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Executed swaps, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[SwapRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn config_id(&self) -> ConfigId {
        self.configuration.id()
    }

    #[inline]
    #[must_use]
    pub const fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    /// Copy out the current state for rendering
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config_id: self.config_id(),
            name: self.configuration.name().to_string(),
            grid: self.grid().clone(),
            correct: self.correct_positions(),
            last_swap: self.last_swap(),
            swaps: self.swaps,
            score: self.score,
            max_score: self.max_score(),
            completed: self.completed,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board<'a> {
        &mut self.board
    }
}

impl Session<'static> {
    /// Start a game on a catalog configuration
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if `id` is not in the catalog.
    ///
    /// # Examples
    /// ```
    /// use syllable_swap::catalog::ConfigId;
    /// use syllable_swap::core::Position;
    /// use syllable_swap::puzzle::Session;
    ///
    /// let mut session = Session::from_catalog(ConfigId::new(1)).unwrap();
    /// session.swap(Position::new(0, 0).unwrap(), Position::new(0, 1).unwrap());
    /// assert_eq!(session.swaps(), 1);
    ///
    /// session.undo();
    /// assert_eq!(session.swaps(), 0);
    /// ```
    pub fn from_catalog(id: ConfigId) -> Result<Self, CatalogError> {
        catalog::get(id).map(Self::new)
    }

    /// Replace this session with a fresh one on another configuration
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if `id` is unknown; the current game is kept.
    pub fn select_configuration(&mut self, id: ConfigId) -> Result<(), CatalogError> {
        let configuration = catalog::get(id)?;
        debug!(from = %self.config_id(), to = %id, "switching configuration");
        *self = Self::new(configuration);
        Ok(())
    }
}
