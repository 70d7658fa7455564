//! Core domain types for the syllable puzzle
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure, cheap to clone, and testable in isolation.

mod grid;
mod position;
mod syllable;
mod word;

pub use grid::{COLS, CorrectnessMap, Grid, ROWS};
pub use position::{Position, PositionError, SwapRecord};
pub use syllable::Syllable;
pub use word::{TargetWord, WordError};
