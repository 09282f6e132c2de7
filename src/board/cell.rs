use crate::bitset::CandidateSet;
use crate::board::Digit;

/// One position of the grid, owning its value, its given value and its
/// remaining candidates.
///
/// Cells live in the flat 81-slot arena of a [`Puzzle`](crate::Puzzle) and
/// reference each other by index. The 20 peers of a cell (the other cells it
/// shares a row, column or block with) are computed once at construction and
/// never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    index: u8,
    pub(crate) original: Option<Digit>,
    pub(crate) value: Option<Digit>,
    pub(crate) candidates: CandidateSet,
    peers: [u8; 20],
    pub(crate) culprit: bool,
    pub(crate) semi_culprit: bool,
}

impl Cell {
    pub(crate) fn new(index: u8, original: Option<Digit>) -> Cell {
        debug_assert!(index < 81);
        let col = index % 9;
        let row = index / 9;
        let block_col = col / 3 * 3;
        let block_row = row / 3 * 3;

        // 8 block mates, then 6 row mates and 6 col mates outside the block
        let mut peers = [0; 20];
        let mut n = 0;
        for r in block_row..block_row + 3 {
            for c in block_col..block_col + 3 {
                if r * 9 + c != index {
                    peers[n] = r * 9 + c;
                    n += 1;
                }
            }
        }
        for c in 0..9 {
            if c / 3 != col / 3 {
                peers[n] = row * 9 + c;
                n += 1;
            }
        }
        for r in 0..9 {
            if r / 3 != row / 3 {
                peers[n] = r * 9 + col;
                n += 1;
            }
        }
        debug_assert_eq!(n, 20);

        Cell {
            index,
            original,
            value: original,
            candidates: CandidateSet::NONE,
            peers,
            culprit: false,
            semi_culprit: false,
        }
    }

    /// Flat index of the cell, `0..=80`, going left to right, top to bottom.
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Column index from 0..=8, leftmost column is 0.
    pub fn col(&self) -> u8 {
        self.index % 9
    }

    /// Row index from 0..=8, topmost row is 0.
    pub fn row(&self) -> u8 {
        self.index / 9
    }

    /// Block index from 0..=8, numbered left to right, top to bottom.
    pub fn block(&self) -> u8 {
        self.col() / 3 + self.row() / 3 * 3
    }

    /// The current value, if the cell is solved or given.
    pub fn value(&self) -> Option<Digit> {
        self.value
    }

    /// The given clue the puzzle was constructed with, if any.
    pub fn original(&self) -> Option<Digit> {
        self.original
    }

    /// The candidates still possible for this cell. Empty for solved cells.
    pub fn candidates(&self) -> CandidateSet {
        self.candidates
    }

    /// Checks whether the cell holds a value.
    pub fn is_solved(&self) -> bool {
        self.value.is_some()
    }

    /// The flat indices of the 20 cells sharing a row, column or block with
    /// this cell.
    pub fn peers(&self) -> &[u8; 20] {
        &self.peers
    }

    /// Checks whether `other` is one of this cell's peers.
    pub fn sees(&self, other: usize) -> bool {
        let other = other as u8;
        if other == self.index {
            return false;
        }
        let (col, row) = (other % 9, other / 9);
        col == self.col()
            || row == self.row()
            || col / 3 + row / 3 * 3 == self.block()
    }

    /// True if this cell directly triggered the most recent logged deduction.
    pub fn is_culprit(&self) -> bool {
        self.culprit
    }

    /// True if this cell was involved in, but did not trigger, the most
    /// recent logged deduction.
    pub fn is_semi_culprit(&self) -> bool {
        self.semi_culprit
    }
}
