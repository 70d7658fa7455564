//! Formatting utilities for terminal output

use crate::core::{COLS, Position, ROWS, Syllable};
use crate::puzzle::SessionSnapshot;
use colored::Colorize;
use std::fmt::Write;

/// Width of one rendered cell, including the last-swap brackets
pub const CELL_WIDTH: usize = 9;

/// Format one cell: green when correct, bracketed when part of the last swap
#[must_use]
pub fn render_cell(syllable: &Syllable, correct: bool, highlighted: bool) -> String {
    let text = if highlighted {
        format!("[{syllable}]")
    } else {
        syllable.to_string()
    };
    let padded = format!("{text:^CELL_WIDTH$}");

    if correct {
        padded.green().bold().to_string()
    } else if highlighted {
        padded.bright_white().bold().to_string()
    } else {
        padded
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the whole board with header and status lines
#[must_use]
pub fn render_board(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    let rule = "─".repeat(4 + CELL_WIDTH * COLS);

    let _ = writeln!(
        out,
        "{} {}",
        format!("Configuration {}:", snapshot.config_id).bright_cyan().bold(),
        snapshot.name
    );
    let _ = writeln!(
        out,
        "{}  [{}]",
        format!(
            "Moves: {}  Score: {}/{}",
            snapshot.swaps, snapshot.score, snapshot.max_score
        )
        .bold(),
        create_progress_bar(snapshot.score, snapshot.max_score, 16).green()
    );
    let _ = writeln!(out, "{}", rule.cyan());

    let header: String = (0..COLS).map(|col| format!("{col:^CELL_WIDTH$}")).collect();
    let _ = writeln!(out, "    {}", header.bright_black());

    for row in 0..ROWS {
        let _ = write!(out, "{}", format!("{row:>2}  ").bright_black());
        for col in 0..COLS {
            let Ok(pos) = Position::new(row, col) else {
                continue;
            };
            let highlighted = snapshot.last_swap.is_some_and(|swap| swap.touches(pos));
            out.push_str(&render_cell(
                snapshot.grid.cell(pos),
                snapshot.correct.is_correct(pos),
                highlighted,
            ));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", rule.cyan());

    if snapshot.completed {
        let _ = writeln!(
            out,
            "{}",
            format!(
                "🎉 Congratulations! You completed the puzzle in {} {}!",
                snapshot.swaps,
                if snapshot.swaps == 1 { "move" } else { "moves" }
            )
            .bright_green()
            .bold()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConfigId;
    use crate::puzzle::Session;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 16, 8), "░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(16, 16, 8), "████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(8, 16, 8), "████░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn cell_is_centered_and_bracketed() {
        colored::control::set_override(false);
        let cell = render_cell(&Syllable::from("ter"), false, false);
        assert_eq!(cell, "   ter   ");
        assert_eq!(cell.len(), CELL_WIDTH);

        let highlighted = render_cell(&Syllable::from("ter"), true, true);
        assert_eq!(highlighted, "  [ter]  ");
    }

    #[test]
    fn board_shows_counters_and_grid() {
        colored::control::set_override(false);
        let mut session = Session::from_catalog(ConfigId::new(1)).unwrap();
        session.swap(Position::new(1, 2).unwrap(), Position::new(3, 0).unwrap());

        let text = render_board(&session.snapshot());
        assert!(text.contains("Configuration 1: affiliate / immaculate"));
        assert!(text.contains("Moves: 1  Score: 1/16"));
        assert!(text.contains("[im]"));
        assert!(text.contains("[u]"));
        assert!(!text.contains("Congratulations"));
    }
}
