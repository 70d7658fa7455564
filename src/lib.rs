//! Syllable Swap
//!
//! A tile-swap word puzzle: a 4×4 grid of syllables is rearranged by swapping
//! pairs of cells until every row spells one of the configuration's words.
//!
//! # Quick Start
//!
//! ```rust
//! use syllable_swap::catalog::ConfigId;
//! use syllable_swap::core::Position;
//! use syllable_swap::puzzle::Session;
//!
//! let mut session = Session::from_catalog(ConfigId::new(1)).unwrap();
//!
//! // Bring "im" to the front of the last row
//! session.swap(Position::new(1, 2).unwrap(), Position::new(3, 0).unwrap());
//! assert_eq!(session.score(), 1);
//! assert!(!session.is_completed());
//! ```

// Core domain types
pub mod core;

// Board, scoring, and session state machine
pub mod puzzle;

// Built-in puzzle configurations
pub mod catalog;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
