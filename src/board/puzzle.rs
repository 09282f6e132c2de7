use std::fmt;
use std::str::FromStr;

use crate::bitset::CandidateSet;
use crate::board::{Cell, Digit, Region, RegionKind};

/// Errors encountered when reading a puzzle from its 9-line textual form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    /// The input does not consist of exactly 9 rows.
    #[error("expected 9 rows, found {0}")]
    WrongRowCount(usize),
    /// A row does not consist of exactly 9 characters. Row index is 0-based.
    #[error("row {row} has {len} characters instead of 9")]
    WrongRowLength {
        /// 0-based index of the offending row.
        row: usize,
        /// Number of characters found in that row.
        len: usize,
    },
}

/// A 9×9 sudoku grid with full candidate bookkeeping.
///
/// The puzzle owns a flat arena of 81 [`Cell`]s and 27 [`Region`]s (9 rows,
/// 9 columns, 9 blocks) referencing them by index. All mutation goes through
/// the puzzle so that cell values and candidate sets never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    cells: Vec<Cell>,
    regions: Vec<Region>,
    is_custom: bool,
}

impl Puzzle {
    /// Creates an empty, user-editable puzzle. Givens can be placed with
    /// [`set_given`](Puzzle::set_given).
    pub fn custom() -> Puzzle {
        Puzzle::build([None; 81], true)
    }

    /// Creates a puzzle from 9 rows of 9 characters each.
    ///
    /// Digit characters `1..=9` become givens, every other character (`-`,
    /// `.`, `0`, letters, ...) leaves the cell empty.
    pub fn from_rows(rows: &[&str]) -> Result<Puzzle, GridParseError> {
        if rows.len() != 9 {
            return Err(GridParseError::WrongRowCount(rows.len()));
        }
        let mut givens = [None; 81];
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != 9 {
                return Err(GridParseError::WrongRowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                givens[row * 9 + col] = ch
                    .to_digit(10)
                    .and_then(|digit| Digit::new_checked(digit as u8));
            }
        }
        Ok(Puzzle::build(givens, false))
    }

    fn build(givens: [Option<Digit>; 81], is_custom: bool) -> Puzzle {
        let cells = (0..81).map(|i| Cell::new(i, givens[i as usize])).collect();

        let mut regions = Vec::with_capacity(27);
        for row in 0..9u8 {
            let mut cells = [0; 9];
            for (col, slot) in cells.iter_mut().enumerate() {
                *slot = row * 9 + col as u8;
            }
            regions.push(Region::new(RegionKind::Row, row, cells));
        }
        for col in 0..9u8 {
            let mut cells = [0; 9];
            for (row, slot) in cells.iter_mut().enumerate() {
                *slot = row as u8 * 9 + col;
            }
            regions.push(Region::new(RegionKind::Col, col, cells));
        }
        for block in 0..9u8 {
            let base_row = block / 3 * 3;
            let base_col = block % 3 * 3;
            let mut cells = [0; 9];
            for (i, slot) in cells.iter_mut().enumerate() {
                *slot = (base_row + i as u8 / 3) * 9 + base_col + i as u8 % 3;
            }
            regions.push(Region::new(RegionKind::Block, block, cells));
        }

        let mut puzzle = Puzzle {
            cells,
            regions,
            is_custom,
        };
        puzzle.refresh_candidates();
        puzzle
    }

    /// The cell with flat index `index`.
    ///
    /// # Panic
    /// Panics, if `index >= 81`.
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// The cell in column `col` of row `row`, both `0..=8`.
    ///
    /// # Panic
    /// Panics, if either coordinate is out of range.
    pub fn cell_at(&self, col: u8, row: u8) -> &Cell {
        assert!(col < 9 && row < 9, "cell out of range: C{}R{}", col, row);
        &self.cells[row as usize * 9 + col as usize]
    }

    /// Iterates over all 81 cells in flat index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All 27 regions: rows 0..=8, then columns, then blocks.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The region with index `index` into [`regions`](Puzzle::regions).
    pub fn region(&self, index: usize) -> Region {
        self.regions[index]
    }

    /// The row region with index `row`.
    pub fn row(&self, row: u8) -> Region {
        self.regions[row as usize]
    }

    /// The column region with index `col`.
    pub fn col(&self, col: u8) -> Region {
        self.regions[9 + col as usize]
    }

    /// The block region with index `block`.
    pub fn block(&self, block: u8) -> Region {
        self.regions[18 + block as usize]
    }

    /// Whether this puzzle was created blank for manual editing.
    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    /// Checks whether every cell holds a value.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    /// Number of cells currently holding a value.
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_solved()).count()
    }

    /// Checks whether any region contains the same value twice.
    ///
    /// Validity is orthogonal to solving: a puzzle with errors can still be
    /// handed to the solver, it will simply stall.
    pub fn check_for_errors(&self) -> bool {
        self.regions
            .iter()
            .any(|region| region.has_duplicate_value(self))
    }

    /// Recomputes every cell's candidates from scratch.
    ///
    /// Resets unsolved cells to all nine candidates, then eliminates every
    /// placed value from its peers. Elimination only ever removes, so the
    /// result is independent of processing order and the pass is idempotent.
    pub fn refresh_candidates(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.candidates = if cell.value.is_some() {
                CandidateSet::NONE
            } else {
                CandidateSet::ALL
            };
        }
        for index in 0..81 {
            if let Some(value) = self.cells[index].value {
                let peers = *self.cells[index].peers();
                for &peer in peers.iter() {
                    self.cells[peer as usize].candidates.remove(value);
                }
            }
        }
    }

    /// Reverts every cell to its given value and restores candidates.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.value = cell.original;
            cell.culprit = false;
            cell.semi_culprit = false;
        }
        self.refresh_candidates();
    }

    /// Changes the given value of one cell on a custom puzzle and
    /// reinitializes all candidates.
    ///
    /// # Panic
    /// Panics, if the puzzle is not custom or a coordinate is out of range.
    pub fn set_given(&mut self, col: u8, row: u8, digit: Option<Digit>) {
        assert!(self.is_custom, "givens can only be edited on custom puzzles");
        assert!(col < 9 && row < 9, "cell out of range: C{}R{}", col, row);
        let index = row as usize * 9 + col as usize;
        self.cells[index].original = digit;
        self.cells[index].value = digit;
        self.refresh_candidates();
    }

    /// Places `digit` as the value of the cell at `index` and eliminates it
    /// from all peers.
    pub(crate) fn assign(&mut self, index: usize, digit: Digit) {
        debug_assert!(self.cells[index].value.is_none());
        debug_assert!(self.cells[index].candidates.contains(digit));
        self.cells[index].value = Some(digit);
        self.cells[index].candidates = CandidateSet::NONE;
        let peers = *self.cells[index].peers();
        for &peer in peers.iter() {
            self.cells[peer as usize].candidates.remove(digit);
        }
    }

    /// Removes `digit` from the candidates of the cell at `index`.
    /// Returns `true` if the candidate was present.
    pub(crate) fn eliminate(&mut self, index: usize, digit: Digit) -> bool {
        self.cells[index].candidates.remove(digit)
    }

    pub(crate) fn clear_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.culprit = false;
            cell.semi_culprit = false;
        }
    }

    pub(crate) fn mark_culprit(&mut self, index: usize) {
        self.cells[index].culprit = true;
        self.cells[index].semi_culprit = false;
    }

    pub(crate) fn mark_semi_culprit(&mut self, index: usize) {
        if !self.cells[index].culprit {
            self.cells[index].semi_culprit = true;
        }
    }

    /// A bordered rendering of the current cell values, for terminal output.
    pub fn display_fancy(&self) -> FancyGrid<'_> {
        FancyGrid(self)
    }
}

impl FromStr for Puzzle {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Puzzle, GridParseError> {
        let rows: Vec<&str> = s.lines().collect();
        Puzzle::from_rows(&rows)
    }
}

/// Plain 9-line form of the *givens*, empty cells rendered as `-`.
/// Feeding the output back into the parser reproduces the puzzle.
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..9 {
                match self.cells[row * 9 + col].original {
                    Some(digit) => write!(f, "{}", digit)?,
                    None => write!(f, "-")?,
                }
            }
        }
        Ok(())
    }
}

/// Bordered rendering of a puzzle's current values. Purely presentational.
pub struct FancyGrid<'a>(&'a Puzzle);

impl fmt::Display for FancyGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for col in 0..9 {
                if col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self.0.cells[row * 9 + col].value {
                    Some(digit) => write!(f, "{} ", digit)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: &str = "\
123456789
456789123
789123456
234567891
567891234
891234567
345678912
678912345
912345678";

    #[test]
    fn parse_and_display_round_trip() {
        let text = GRID.replace('1', "-");
        let puzzle: Puzzle = text.parse().unwrap();
        assert_eq!(puzzle.to_string(), text);
        assert_eq!(text.parse::<Puzzle>().unwrap().to_string(), text);
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        let eight_rows: Vec<&str> = GRID.lines().take(8).collect();
        assert_eq!(
            Puzzle::from_rows(&eight_rows),
            Err(GridParseError::WrongRowCount(8))
        );
        let ten_rows: Vec<&str> = GRID.lines().chain(Some("---------")).collect();
        assert_eq!(
            Puzzle::from_rows(&ten_rows),
            Err(GridParseError::WrongRowCount(10))
        );
    }

    #[test]
    fn wrong_row_length_is_rejected() {
        let mut rows: Vec<&str> = GRID.lines().collect();
        rows[3] = "1234";
        assert_eq!(
            Puzzle::from_rows(&rows),
            Err(GridParseError::WrongRowLength { row: 3, len: 4 })
        );
    }

    #[test]
    fn non_digit_characters_are_empty_cells() {
        let puzzle: Puzzle = "\
            1.-0x 8#_\n\
            ---------\n\
            ---------\n\
            ---------\n\
            ---------\n\
            ---------\n\
            ---------\n\
            ---------\n\
            ---------"
            .parse()
            .unwrap();
        assert_eq!(puzzle.cell_at(0, 0).value().map(Digit::get), Some(1));
        assert_eq!(puzzle.cell_at(6, 0).value().map(Digit::get), Some(8));
        for col in &[1, 2, 3, 4, 5, 7, 8] {
            assert_eq!(puzzle.cell_at(*col, 0).value(), None);
        }
    }

    #[test]
    fn fancy_display_renders_current_values() {
        let mut puzzle: Puzzle = GRID.replace('1', "-").parse().unwrap();
        let expected = "\
+-------+-------+-------+
| . 2 3 | 4 5 6 | 7 8 9 |
| 4 5 6 | 7 8 9 | . 2 3 |
| 7 8 9 | . 2 3 | 4 5 6 |
+-------+-------+-------+
| 2 3 4 | 5 6 7 | 8 9 . |
| 5 6 7 | 8 9 . | 2 3 4 |
| 8 9 . | 2 3 4 | 5 6 7 |
+-------+-------+-------+
| 3 4 5 | 6 7 8 | 9 . 2 |
| 6 7 8 | 9 . 2 | 3 4 5 |
| 9 . 2 | 3 4 5 | 6 7 8 |
+-------+-------+-------+";
        assert_eq!(puzzle.display_fancy().to_string(), expected);

        // solved values show up, the plain display still prints the givens
        puzzle.assign(0, Digit::new(1));
        assert!(puzzle
            .display_fancy()
            .to_string()
            .starts_with("+-------+-------+-------+\n| 1 2 3 |"));
        assert!(puzzle.to_string().starts_with("-23456789"));
    }

    #[test]
    fn candidates_match_visible_values() {
        let puzzle: Puzzle = GRID.replace('5', "-").parse::<Puzzle>().unwrap();
        for cell in puzzle.cells() {
            if cell.is_solved() {
                assert!(cell.candidates().is_empty());
            } else {
                assert_eq!(cell.candidates().unique().map(Digit::get), Some(5));
            }
        }
    }

    #[test]
    fn refresh_candidates_is_idempotent() {
        let mut puzzle: Puzzle = GRID.replace('3', "-").parse::<Puzzle>().unwrap();
        let before: Vec<_> = puzzle.cells().map(Cell::candidates).collect();
        puzzle.refresh_candidates();
        let after: Vec<_> = puzzle.cells().map(Cell::candidates).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn check_for_errors_flags_region_duplicates() {
        let valid: Puzzle = GRID.parse().unwrap();
        assert!(!valid.check_for_errors());

        let dup: Puzzle = GRID.replacen('4', "1", 1).parse::<Puzzle>().unwrap();
        assert!(dup.check_for_errors());
    }

    #[test]
    fn reset_restores_givens() {
        let mut puzzle: Puzzle = GRID.replace('7', "-").parse::<Puzzle>().unwrap();
        let target = (0..81)
            .find(|&i| !puzzle.cell(i).is_solved())
            .expect("grid has empty cells");
        puzzle.assign(target, Digit::new(7));
        assert!(puzzle.cell(target).is_solved());

        puzzle.reset();
        assert!(!puzzle.cell(target).is_solved());
        assert_eq!(
            puzzle.cell(target).candidates().unique(),
            Some(Digit::new(7))
        );
    }

    #[test]
    fn set_given_refreshes_candidates() {
        let mut puzzle = Puzzle::custom();
        assert!(puzzle.is_custom());
        puzzle.set_given(0, 0, Some(Digit::new(5)));
        assert_eq!(puzzle.cell_at(0, 0).original(), Some(Digit::new(5)));
        // peers lost the 5, unrelated cells kept it
        assert!(!puzzle.cell_at(8, 0).candidates().contains(Digit::new(5)));
        assert!(!puzzle.cell_at(0, 8).candidates().contains(Digit::new(5)));
        assert!(!puzzle.cell_at(2, 2).candidates().contains(Digit::new(5)));
        assert!(puzzle.cell_at(8, 8).candidates().contains(Digit::new(5)));

        puzzle.set_given(0, 0, None);
        assert_eq!(puzzle.cell_at(0, 0).value(), None);
        assert!(puzzle.cell_at(8, 0).candidates().contains(Digit::new(5)));
    }

    #[test]
    fn assignment_eliminates_from_peers() {
        let mut puzzle = Puzzle::custom();
        puzzle.assign(40, Digit::new(9)); // R5C5
        assert!(!puzzle.cell(39).candidates().contains(Digit::new(9)));
        assert!(!puzzle.cell(4).candidates().contains(Digit::new(9)));
        assert!(!puzzle.cell(30).candidates().contains(Digit::new(9)));
        assert!(puzzle.cell(0).candidates().contains(Digit::new(9)));
        assert!(puzzle.cell(40).candidates().is_empty());
    }

    #[test]
    #[should_panic]
    fn set_given_rejects_non_custom_puzzles() {
        let mut puzzle: Puzzle = GRID.parse().unwrap();
        puzzle.set_given(0, 0, None);
    }
}
