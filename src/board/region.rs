use crate::bitset::{CandidateSet, Set, SetElement};
use crate::board::{Digit, Puzzle};

/// A position within a region, or a row/column index in a line-based scan.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Pos(u8);

impl Pos {
    /// Constructs a new `Pos`.
    ///
    /// # Panic
    /// Panics, if the position is not in the range of `0..=8`.
    pub fn new(pos: u8) -> Self {
        assert!(pos < 9, "position out of range 0..=8: {}", pos);
        Pos(pos)
    }

    /// Returns the position as an index.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

impl SetElement for Pos {
    const COUNT: u8 = 9;

    fn as_index(self) -> usize {
        Pos::as_index(self)
    }

    fn from_index(index: u8) -> Self {
        Pos::new(index)
    }
}

/// The three kinds of cell groups a digit must be unique within.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum RegionKind {
    /// A horizontal line of 9 cells.
    Row,
    /// A vertical line of 9 cells.
    Col,
    /// A 3×3 box of cells.
    Block,
}

/// An ordered view of the 9 cells forming one row, column or block.
///
/// Regions store flat cell indices into the puzzle's cell arena and are fixed
/// at puzzle construction. All scans are linear and preserve region order,
/// which keeps technique output deterministic.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Region {
    kind: RegionKind,
    index: u8,
    cells: [u8; 9],
}

impl Region {
    pub(crate) fn new(kind: RegionKind, index: u8, cells: [u8; 9]) -> Region {
        Region { kind, index, cells }
    }

    /// Whether this region is a row, column or block.
    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    /// Index of this region among regions of the same kind, `0..=8`.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// The flat cell indices of the 9 member cells, in region order.
    pub fn cells(&self) -> &[u8; 9] {
        &self.cells
    }

    /// The flat index of the member cell at `pos`.
    pub fn cell_at(&self, pos: Pos) -> usize {
        self.cells[pos.as_index()] as usize
    }

    /// Checks whether the cell with flat index `cell` belongs to this region.
    pub fn contains_cell(&self, cell: usize) -> bool {
        self.cells.iter().any(|&c| c as usize == cell)
    }

    /// Human readable name, e.g. `row 3`, 1-based.
    pub fn name(&self) -> String {
        let kind = match self.kind {
            RegionKind::Row => "row",
            RegionKind::Col => "column",
            RegionKind::Block => "block",
        };
        format!("{} {}", kind, self.index + 1)
    }

    /// The positions of all member cells that still have `digit` as a candidate.
    pub fn positions_with_candidate(&self, puzzle: &Puzzle, digit: Digit) -> Set<Pos> {
        let mut positions = Set::NONE;
        for (i, &cell) in self.cells.iter().enumerate() {
            if puzzle.cell(cell as usize).candidates().contains(digit) {
                positions.insert(Pos::new(i as u8));
            }
        }
        positions
    }

    /// The positions of all unsolved member cells with exactly `count` candidates.
    pub fn positions_with_candidate_count(&self, puzzle: &Puzzle, count: u8) -> Set<Pos> {
        let mut positions = Set::NONE;
        for (i, &cell) in self.cells.iter().enumerate() {
            let cell = puzzle.cell(cell as usize);
            if !cell.is_solved() && cell.candidates().len() == count {
                positions.insert(Pos::new(i as u8));
            }
        }
        positions
    }

    /// The positions of all unsolved member cells.
    pub fn unsolved_positions(&self, puzzle: &Puzzle) -> Set<Pos> {
        let mut positions = Set::NONE;
        for (i, &cell) in self.cells.iter().enumerate() {
            if !puzzle.cell(cell as usize).is_solved() {
                positions.insert(Pos::new(i as u8));
            }
        }
        positions
    }

    /// The set of digits already placed in this region.
    pub fn solved_digits(&self, puzzle: &Puzzle) -> CandidateSet {
        let mut digits = CandidateSet::NONE;
        for &cell in self.cells.iter() {
            if let Some(value) = puzzle.cell(cell as usize).value() {
                digits.insert(value);
            }
        }
        digits
    }

    /// Checks whether any value occurs more than once within this region.
    pub fn has_duplicate_value(&self, puzzle: &Puzzle) -> bool {
        let mut seen = CandidateSet::NONE;
        for &cell in self.cells.iter() {
            if let Some(value) = puzzle.cell(cell as usize).value() {
                if !seen.insert(value) {
                    return true;
                }
            }
        }
        false
    }
}
