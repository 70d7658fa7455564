//! Player moves and how they are applied to a session

use crate::core::{Position, PositionError};
use crate::puzzle::Session;
use std::fmt;
use std::str::FromStr;

/// One player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Swap(Position, Position),
    Undo,
    Reset,
}

/// Error type for unparseable moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    InvalidPosition(PositionError),
    WrongArity(usize),
    SameCell(Position),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(err) => write!(f, "{err}"),
            Self::WrongArity(count) => {
                write!(f, "A swap needs exactly two cells like '0,0:0,1', got {count}")
            }
            Self::SameCell(pos) => write!(f, "Cannot swap cell {pos} with itself"),
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for MoveParseError {
    fn from(err: PositionError) -> Self {
        Self::InvalidPosition(err)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse `undo`/`u`, `reset`/`r`, or two cells separated by `:` or
    /// whitespace (`0,0:0,1` or `0,0 0,1`)
    ///
    /// Swapping a cell with itself is rejected here, before it reaches the
    /// session.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "undo" | "u" => return Ok(Self::Undo),
            "reset" | "r" => return Ok(Self::Reset),
            _ => {}
        }

        let cells: Vec<&str> = s
            .split(|c: char| c == ':' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let [from, to] = cells.as_slice() else {
            return Err(MoveParseError::WrongArity(cells.len()));
        };

        let from: Position = from.parse()?;
        let to: Position = to.parse()?;
        if from == to {
            return Err(MoveParseError::SameCell(from));
        }

        Ok(Self::Swap(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap(from, to) => write!(f, "{from}:{to}"),
            Self::Undo => write!(f, "undo"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

/// What happened when a move was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    AlreadySolved,
    NothingToUndo,
}

/// Apply `mv` to `session`, reporting whether it changed anything
///
/// The session itself treats ignored moves as silent no-ops; the outcome lets
/// callers tell the player why nothing happened.
pub fn apply_move(session: &mut Session<'_>, mv: Move) -> MoveOutcome {
    match mv {
        Move::Swap(..) | Move::Undo if session.is_completed() => MoveOutcome::AlreadySolved,
        Move::Swap(from, to) => {
            session.swap(from, to);
            MoveOutcome::Applied
        }
        Move::Undo if session.history().is_empty() => MoveOutcome::NothingToUndo,
        Move::Undo => {
            session.undo();
            MoveOutcome::Applied
        }
        Move::Reset => {
            session.reset();
            MoveOutcome::Applied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConfigId;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn parse_keywords() {
        assert_eq!("undo".parse(), Ok(Move::Undo));
        assert_eq!(" U ".parse(), Ok(Move::Undo));
        assert_eq!("reset".parse(), Ok(Move::Reset));
        assert_eq!("r".parse(), Ok(Move::Reset));
    }

    #[test]
    fn parse_swap_both_separators() {
        let expected = Ok(Move::Swap(pos(0, 0), pos(0, 1)));
        assert_eq!("0,0:0,1".parse(), expected);
        assert_eq!("0,0 0,1".parse(), expected);
        assert_eq!("  0,0   0,1 ".parse(), expected);
    }

    #[test]
    fn parse_rejects_bad_swaps() {
        assert_eq!(
            "0,0".parse::<Move>(),
            Err(MoveParseError::WrongArity(1))
        );
        assert_eq!(
            "0,0:0,1:1,1".parse::<Move>(),
            Err(MoveParseError::WrongArity(3))
        );
        assert_eq!(
            "2,2:2,2".parse::<Move>(),
            Err(MoveParseError::SameCell(pos(2, 2)))
        );
        assert_eq!(
            "0,0:4,0".parse::<Move>(),
            Err(MoveParseError::InvalidPosition(PositionError::RowOutOfRange(4)))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let mv = Move::Swap(pos(1, 2), pos(3, 0));
        assert_eq!(mv.to_string(), "1,2:3,0");
        assert_eq!(mv.to_string().parse(), Ok(mv));
    }

    #[test]
    fn apply_reports_outcomes() {
        let mut session = Session::from_catalog(ConfigId::new(1)).unwrap();

        assert_eq!(apply_move(&mut session, Move::Undo), MoveOutcome::NothingToUndo);
        assert_eq!(
            apply_move(&mut session, Move::Swap(pos(0, 0), pos(0, 1))),
            MoveOutcome::Applied
        );
        assert_eq!(session.swaps(), 1);
        assert_eq!(apply_move(&mut session, Move::Undo), MoveOutcome::Applied);
        assert_eq!(session.swaps(), 0);
        assert_eq!(apply_move(&mut session, Move::Reset), MoveOutcome::Applied);
    }
}
