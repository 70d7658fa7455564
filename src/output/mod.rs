//! Terminal output formatting
//!
//! Display utilities for boards, snapshots, and the configuration list.

pub mod display;
pub mod formatters;

pub use display::{print_catalog, print_snapshot, render_catalog, render_snapshot};

use clap::ValueEnum;

/// How boards are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored grid for humans
    #[default]
    Text,
    /// Pretty-printed JSON snapshot
    Json,
}
