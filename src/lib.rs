#![warn(missing_docs)]
//! A sudoku solving library that never guesses.
//!
//! ## Overview
//!
//! `sudoku-logic` solves 9×9 sudokus purely by logical deduction. A
//! [`Puzzle`] tracks the remaining candidate digits of every cell; the
//! [`StrategySolver`] repeatedly places forced singles and otherwise works
//! through a fixed battery of deduction techniques (pairs, fish, wings,
//! rectangles, ...). When no technique makes progress the solver reports
//! failure instead of falling back to trial and error, so every step of a
//! successful solve is a provable deduction.
//!
//! Every action is recorded in an append-only [`ActionLog`] together with a
//! full board snapshot, which allows a UI to replay the solve step by step.
//!
//! ## Example
//!
//! ```
//! use sudoku_logic::{Puzzle, SolveOutcome, StrategySolver};
//!
//! let grid = "\
//! 123456789
//! 456789123
//! 789123456
//! 234567891
//! 567891234
//! 891234567
//! 345678912
//! 678912345
//! 91234567-";
//!
//! let puzzle: Puzzle = grid.parse().unwrap();
//! let mut solver = StrategySolver::new(puzzle);
//! assert_eq!(solver.solve(), SolveOutcome::Solved);
//! assert_eq!(solver.puzzle().cell_at(8, 8).value().map(|d| d.get()), Some(8));
//! ```

pub mod bitset;
pub mod board;
pub mod strategy;

pub use crate::bitset::{CandidateSet, Set};
pub use crate::board::{Cell, Digit, GridParseError, Pos, Puzzle, Region, RegionKind};
pub use crate::strategy::{
    ActionLog, CancelToken, CellSnapshot, LogEntry, Snapshot, SolveOutcome, StrategySolver,
    Technique,
};
