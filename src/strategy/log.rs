use crate::bitset::CandidateSet;
use crate::board::{Digit, Puzzle};

/// The recorded state of one cell at the time a snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSnapshot {
    /// The value the cell held, if any.
    pub value: Option<Digit>,
    /// The candidates the cell had left.
    pub candidates: CandidateSet,
    /// Whether the cell directly triggered the logged action.
    pub culprit: bool,
    /// Whether the cell was involved in, but did not trigger, the action.
    pub semi_culprit: bool,
}

/// An immutable full-board snapshot, one [`CellSnapshot`] per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    cells: Vec<CellSnapshot>,
}

impl Snapshot {
    pub(crate) fn capture(puzzle: &Puzzle) -> Snapshot {
        Snapshot {
            cells: puzzle
                .cells()
                .map(|cell| CellSnapshot {
                    value: cell.value(),
                    candidates: cell.candidates(),
                    culprit: cell.is_culprit(),
                    semi_culprit: cell.is_semi_culprit(),
                })
                .collect(),
        }
    }

    /// The snapshot of the cell with flat index `index`.
    pub fn cell(&self, index: usize) -> &CellSnapshot {
        &self.cells[index]
    }

    /// The snapshot of the cell in column `col` of row `row`.
    pub fn cell_at(&self, col: u8, row: u8) -> &CellSnapshot {
        assert!(col < 9 && row < 9, "cell out of range: C{}R{}", col, row);
        &self.cells[row as usize * 9 + col as usize]
    }

    /// All 81 cell snapshots in flat index order.
    pub fn cells(&self) -> &[CellSnapshot] {
        &self.cells
    }

    /// Sum of the candidate counts of all cells.
    pub fn total_candidates(&self) -> u32 {
        self.cells
            .iter()
            .map(|cell| u32::from(cell.candidates.len()))
            .sum()
    }

    /// Number of cells holding a value.
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value.is_some()).count()
    }
}

/// One committed solver action: a human-readable description plus the board
/// state right after the action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    description: String,
    board: Snapshot,
}

impl LogEntry {
    pub(crate) fn new(description: String, board: Snapshot) -> LogEntry {
        LogEntry { description, board }
    }

    /// What happened, e.g. `Naked single: R4C7 must be 2`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The board right after the action.
    pub fn board(&self) -> &Snapshot {
        &self.board
    }
}

/// Append-only sequence of solver actions, the only externally observable
/// history of a solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionLog {
    entries: Vec<LogEntry>,
}

impl ActionLog {
    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Number of recorded actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether any action has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `index`th action, if it exists.
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    /// The most recently recorded action.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Iterates over all actions in the order they were committed.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}
