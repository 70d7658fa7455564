//! Command implementations

pub mod moves;
pub mod play;
pub mod simple;

pub use moves::{Move, MoveOutcome, MoveParseError, apply_move};
pub use play::{PlayReport, run_script};
pub use simple::{run_simple, run_simple_with};
