//! Puzzle state engine
//!
//! [`Board`] holds the grid and scores it; [`Session`] sequences moves on top
//! of a board and keeps the derived score and completion flag current.

mod board;
pub mod matching;
mod session;

pub use board::Board;
pub use session::{Session, SessionSnapshot};
