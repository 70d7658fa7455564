//! Simple interactive CLI mode
//!
//! Line-based play loop without a full-screen interface

use super::moves::{Move, MoveOutcome, apply_move};
use crate::catalog::ConfigId;
use crate::output::formatters::render_board;
use crate::output::render_catalog;
use crate::puzzle::Session;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  r,c r,c     swap two cells (e.g. '0,0 0,1' or '0,0:0,1')
  undo | u    undo the last swap
  reset | r   restart this configuration
  config N    switch to configuration N
  list        show available configurations
  help | h    show this help
  quit | q    exit";

/// A line the loop understands
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Play(Move),
    Config(ConfigId),
    List,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let lower = line.to_lowercase();

    match lower.as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "help" | "h" | "?" => return Ok(Command::Help),
        "list" | "ls" => return Ok(Command::List),
        _ => {}
    }

    if let Some(rest) = lower.strip_prefix("config") {
        return rest
            .trim()
            .parse::<u8>()
            .map(|id| Command::Config(ConfigId::new(id)))
            .map_err(|_| format!("Expected 'config N', got '{line}'"));
    }

    line.parse::<Move>()
        .map(Command::Play)
        .map_err(|err| err.to_string())
}

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple(session: &mut Session<'static>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the interactive loop over arbitrary input and output
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut Session<'static>,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(output, "║          Syllable Swap - Simple Mode         ║")?;
    writeln!(output, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(output, "Swap cells until every row spells a word.")?;
    writeln!(output, "{HELP}\n")?;
    write!(output, "{}", render_board(&session.snapshot()))?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read command")?;
        if read == 0 {
            writeln!(output)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::List) => write!(output, "{}", render_catalog())?,
            Ok(Command::Config(id)) => match session.select_configuration(id) {
                Ok(()) => write!(output, "{}", render_board(&session.snapshot()))?,
                Err(err) => writeln!(output, "❌ {err}")?,
            },
            Ok(Command::Play(mv)) => match apply_move(session, mv) {
                MoveOutcome::Applied => write!(output, "{}", render_board(&session.snapshot()))?,
                MoveOutcome::AlreadySolved => writeln!(
                    output,
                    "The puzzle is already solved. Type 'reset' or 'config N' to play again."
                )?,
                MoveOutcome::NothingToUndo => writeln!(output, "Nothing to undo!")?,
            },
            Err(message) => writeln!(output, "❌ {message}")?,
        }
    }

    writeln!(output, "👋 Thanks for playing!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn play(script: &str) -> (Session<'static>, String) {
        colored::control::set_override(false);
        let mut session = Session::from_catalog(ConfigId::new(1)).unwrap();
        let mut output = Vec::new();
        run_simple_with(&mut session, script.as_bytes(), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command(" HELP "), Ok(Command::Help));
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("config 3"), Ok(Command::Config(ConfigId::new(3))));
        assert_eq!(parse_command("undo"), Ok(Command::Play(Move::Undo)));
        assert!(parse_command("config x").is_err());
        assert!(parse_command("1,1 1,1").is_err());
    }

    #[test]
    fn swaps_and_undo_through_loop() {
        let (session, output) = play("0,0 0,1\nundo\nundo\nquit\n");
        assert_eq!(session.swaps(), 0);
        assert!(output.contains("Moves: 1  Score: 0/16"));
        assert!(output.contains("Nothing to undo!"));
        assert!(output.ends_with("👋 Thanks for playing!\n"));
    }

    #[test]
    fn invalid_lines_are_reported_and_skipped() {
        let (session, output) = play("9,9 0,0\nbanana\n\n1,2:3,0\n");
        assert_eq!(session.swaps(), 1);
        assert_eq!(session.score(), 1);
        assert!(output.contains("Row must be between 0 and 3, got 9"));
        assert!(output.contains("❌"));
    }

    #[test]
    fn config_switch_resets_game() {
        let (session, output) = play("0,0 3,3\nconfig 2\nconfig 8\n");
        assert_eq!(session.config_id(), ConfigId::new(2));
        assert_eq!(session.swaps(), 0);
        assert_eq!(session.grid().cell(Position::new(0, 0).unwrap()), "force");
        assert!(output.contains("Unknown configuration 8"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (_, output) = play("");
        assert!(output.contains("Simple Mode"));
        assert!(output.contains("Thanks for playing"));
    }
}
