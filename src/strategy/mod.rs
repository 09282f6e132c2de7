//! The deduction engine and its technique library.
//!
//! The [`StrategySolver`] mimics human approaches to sudoku solving: it
//! repeatedly places forced singles and otherwise invokes a fixed, ordered
//! battery of deduction [`Technique`]s, stopping as soon as any of them
//! changes the board. All actions are recorded in an [`ActionLog`] with a
//! per-step board [`Snapshot`] for replay.

mod log;
mod solver;
pub(crate) mod strategies;

pub use self::log::{ActionLog, CellSnapshot, LogEntry, Snapshot};
pub use self::solver::{CancelToken, SolveOutcome, StrategySolver};
pub use self::strategies::Technique;
