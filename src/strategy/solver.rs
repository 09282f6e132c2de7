use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Digit, Puzzle};
use crate::strategy::log::{ActionLog, LogEntry, Snapshot};
use crate::strategy::strategies::{cell_name, Technique};

/// Terminal state of a solve attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SolveOutcome {
    /// Every cell holds a value.
    Solved,
    /// No implemented technique can progress the puzzle further.
    Failed,
    /// The caller cancelled the solve between engine iterations.
    Cancelled,
}

/// Cooperative cancellation handle for [`StrategySolver::solve_cancellable`].
///
/// Cloning is cheap and clones share the flag, so a token can be handed to
/// another thread and cancelled from there. Cancellation is coarse-grained:
/// it is only polled between engine iterations, an in-progress technique
/// scan always runs to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// Requests cancellation. Irrevocable.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Checks whether [`cancel`](CancelToken::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Solves one [`Puzzle`] by logical deduction alone.
///
/// The solver drives a fixed-point loop: resolve every naked single, then
/// try the deduction techniques in their fixed order and restart as soon as
/// one of them changes the board. If a full pass over the technique list
/// changes nothing, the puzzle cannot be progressed by the implemented rule
/// set and the solve fails. The solver never guesses.
///
/// Every committed action appends an immutable snapshot to the
/// [`ActionLog`], including the initial "Puzzle loaded" entry and the
/// terminal solved/failed/cancelled entry.
#[derive(Debug, Clone)]
pub struct StrategySolver {
    puzzle: Puzzle,
    log: ActionLog,
}

impl StrategySolver {
    /// Wraps `puzzle` in a new solver session and records the initial
    /// snapshot.
    pub fn new(puzzle: Puzzle) -> StrategySolver {
        let mut solver = StrategySolver {
            puzzle,
            log: ActionLog::default(),
        };
        solver.record("Puzzle loaded");
        solver
    }

    /// The puzzle in its current state of progress.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Mutable access to the puzzle, e.g. for editing givens on a custom
    /// puzzle between solve attempts.
    pub fn puzzle_mut(&mut self) -> &mut Puzzle {
        &mut self.puzzle
    }

    /// The actions committed so far.
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Decomposes the session into the puzzle and its log.
    pub fn into_parts(self) -> (Puzzle, ActionLog) {
        (self.puzzle, self.log)
    }

    /// Runs the engine to a terminal state.
    pub fn solve(&mut self) -> SolveOutcome {
        self.solve_cancellable(&CancelToken::new())
    }

    /// Runs the engine to a terminal state, polling `token` between
    /// iterations.
    pub fn solve_cancellable(&mut self, token: &CancelToken) -> SolveOutcome {
        loop {
            if token.is_cancelled() {
                self.record("Cancelled");
                return SolveOutcome::Cancelled;
            }

            // forced singles first, assignments can cascade into new ones
            if let Some((index, digit)) = self.find_naked_single() {
                self.puzzle.clear_marks();
                self.puzzle.mark_culprit(index);
                self.puzzle.assign(index, digit);
                self.record(&format!(
                    "Naked single: {} must be {}",
                    cell_name(index),
                    digit
                ));
                continue;
            }

            if self.puzzle.is_solved() {
                self.record("Solved");
                return SolveOutcome::Solved;
            }

            let mut progressed = false;
            for &technique in Technique::ORDER {
                self.puzzle.clear_marks();
                if let Some(description) = technique.apply(&mut self.puzzle) {
                    self.record(&description);
                    progressed = true;
                    break;
                }
            }
            if !progressed {
                self.record("Failed: no technique can progress the puzzle");
                return SolveOutcome::Failed;
            }
        }
    }

    fn find_naked_single(&self) -> Option<(usize, Digit)> {
        for (index, cell) in self.puzzle.cells().enumerate() {
            if cell.is_solved() {
                continue;
            }
            if let Some(digit) = cell.candidates().unique() {
                return Some((index, digit));
            }
        }
        None
    }

    fn record(&mut self, description: &str) {
        self.log.push(LogEntry::new(
            description.to_string(),
            Snapshot::capture(&self.puzzle),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_input_terminates_immediately() {
        let puzzle: Puzzle = "\
            123456789\n\
            456789123\n\
            789123456\n\
            234567891\n\
            567891234\n\
            891234567\n\
            345678912\n\
            678912345\n\
            912345678"
            .parse()
            .unwrap();
        let mut solver = StrategySolver::new(puzzle);
        assert_eq!(solver.solve(), SolveOutcome::Solved);
        assert_eq!(solver.log().len(), 2);
        assert_eq!(solver.log().get(0).unwrap().description(), "Puzzle loaded");
        assert_eq!(solver.log().get(1).unwrap().description(), "Solved");
    }

    #[test]
    fn empty_custom_puzzle_fails_without_crashing() {
        let mut solver = StrategySolver::new(Puzzle::custom());
        assert_eq!(solver.solve(), SolveOutcome::Failed);
        let last = solver.log().last().unwrap();
        assert!(last.description().starts_with("Failed"));
    }

    #[test]
    fn staged_jellyfish_is_logged_by_name() {
        // 2 is confined to columns 1/3/5/7 in rows 1/3/5/7, nothing simpler
        // applies to a board this open
        let mut puzzle = Puzzle::custom();
        for &row in &[0usize, 2, 4, 6] {
            for &col in &[1usize, 3, 5, 7, 8] {
                puzzle.eliminate(row * 9 + col, Digit::new(2));
            }
        }
        let mut solver = StrategySolver::new(puzzle);
        solver.solve();
        assert!(!solver.puzzle().check_for_errors());
        assert!(solver
            .log()
            .iter()
            .any(|entry| entry.description().starts_with("Jellyfish: 2")));
    }

    #[test]
    fn cancelled_token_stops_before_any_deduction() {
        let token = CancelToken::new();
        token.cancel();
        let mut solver = StrategySolver::new(Puzzle::custom());
        assert_eq!(solver.solve_cancellable(&token), SolveOutcome::Cancelled);
        assert_eq!(solver.log().last().unwrap().description(), "Cancelled");
        // session state remains inspectable
        assert_eq!(solver.puzzle().solved_count(), 0);
    }
}
