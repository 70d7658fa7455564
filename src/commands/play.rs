//! Scripted play: apply a list of moves in order

use super::moves::{Move, MoveOutcome, apply_move};
use crate::puzzle::Session;
use tracing::warn;

/// Summary of a scripted run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayReport {
    pub applied: usize,
    pub ignored: Vec<(Move, MoveOutcome)>,
}

/// Apply every move in `script` to `session`
///
/// Moves that the session ignores (after completion, or undo with nothing to
/// undo) are collected in the report rather than aborting the run.
pub fn run_script(session: &mut Session<'_>, script: &[Move]) -> PlayReport {
    let mut report = PlayReport::default();

    for &mv in script {
        match apply_move(session, mv) {
            MoveOutcome::Applied => report.applied += 1,
            outcome => {
                warn!(%mv, ?outcome, "move had no effect");
                report.ignored.push((mv, outcome));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConfigId;
    use crate::core::Position;

    fn swap(a: (usize, usize), b: (usize, usize)) -> Move {
        Move::Swap(
            Position::new(a.0, a.1).unwrap(),
            Position::new(b.0, b.1).unwrap(),
        )
    }

    /// Moves that solve configuration 1 from its starting layout
    fn solution_one() -> Vec<Move> {
        // Fills the rows top to bottom, one cell at a time
        vec![
            swap((0, 0), (3, 2)),
            swap((0, 1), (1, 0)),
            swap((0, 2), (1, 3)),
            swap((0, 3), (1, 0)),
            swap((1, 0), (1, 2)),
            swap((1, 1), (2, 2)),
            swap((1, 2), (3, 0)),
            swap((1, 3), (2, 1)),
            swap((2, 0), (2, 2)),
            swap((2, 1), (3, 1)),
            swap((2, 3), (3, 1)),
            swap((3, 0), (3, 1)),
            swap((3, 2), (3, 3)),
        ]
    }

    #[test]
    fn script_counts_applied_moves() {
        let mut session = Session::from_catalog(ConfigId::new(1)).unwrap();
        let report = run_script(
            &mut session,
            &[swap((0, 0), (0, 1)), Move::Undo, Move::Undo, swap((1, 2), (3, 0))],
        );

        assert_eq!(report.applied, 3);
        assert_eq!(report.ignored, vec![(Move::Undo, MoveOutcome::NothingToUndo)]);
        assert_eq!(session.swaps(), 1);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn solving_script_completes_and_freezes() {
        let mut session = Session::from_catalog(ConfigId::new(1)).unwrap();
        let mut script = solution_one();
        let solving_moves = script.len();
        script.push(swap((0, 0), (0, 1)));
        script.push(Move::Undo);

        let report = run_script(&mut session, &script);

        assert!(session.is_completed());
        assert_eq!(session.score(), 16);
        assert_eq!(session.swaps(), solving_moves);
        assert_eq!(report.applied, solving_moves);
        assert_eq!(report.ignored.len(), 2);
        assert!(
            report
                .ignored
                .iter()
                .all(|(_, outcome)| *outcome == MoveOutcome::AlreadySolved)
        );
    }

    #[test]
    fn reset_in_script_unfreezes() {
        let mut session = Session::from_catalog(ConfigId::new(1)).unwrap();
        let mut script = solution_one();
        script.push(Move::Reset);
        script.push(swap((0, 0), (0, 1)));

        let report = run_script(&mut session, &script);

        assert!(!session.is_completed());
        assert_eq!(session.swaps(), 1);
        assert!(report.ignored.is_empty());
    }
}
