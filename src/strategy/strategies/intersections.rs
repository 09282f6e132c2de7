//! Line/block intersections.
//!
//! When all spots for a digit within a row or column fall into a single
//! block, the digit cannot appear elsewhere in that block (locked
//! candidate). The converse holds too: when all spots within a block line
//! up on one row or column, the digit is banned from the rest of that line
//! (pointing tuple).

use crate::board::{Digit, Puzzle};

pub(crate) fn locked_candidate(puzzle: &mut Puzzle) -> Option<String> {
    // regions 0..18 are the rows followed by the columns
    for line_index in 0..18 {
        let line = puzzle.region(line_index);
        for digit in Digit::all() {
            let positions = line.positions_with_candidate(puzzle, digit);
            // a single spot is a hidden single, not an intersection
            if positions.len() < 2 {
                continue;
            }
            let cells: Vec<usize> = positions.iter().map(|pos| line.cell_at(pos)).collect();
            let block = puzzle.cell(cells[0]).block();
            if cells.iter().any(|&cell| puzzle.cell(cell).block() != block) {
                continue;
            }
            let block_region = puzzle.block(block);
            let mut targets = Vec::new();
            for &other in block_region.cells() {
                let other = other as usize;
                if line.contains_cell(other) {
                    continue;
                }
                if puzzle.eliminate(other, digit) {
                    targets.push(other);
                }
            }
            if targets.is_empty() {
                continue;
            }
            for &cell in &cells {
                puzzle.mark_culprit(cell);
            }
            for &target in &targets {
                puzzle.mark_semi_culprit(target);
            }
            return Some(format!(
                "Locked candidate: {} in {} confined to {}",
                digit,
                line.name(),
                block_region.name()
            ));
        }
    }
    None
}

pub(crate) fn pointing_tuple(puzzle: &mut Puzzle) -> Option<String> {
    for block_index in 18..27 {
        let block = puzzle.region(block_index);
        for digit in Digit::all() {
            let positions = block.positions_with_candidate(puzzle, digit);
            if positions.len() < 2 {
                continue;
            }
            let cells: Vec<usize> = positions.iter().map(|pos| block.cell_at(pos)).collect();

            let row = puzzle.cell(cells[0]).row();
            let col = puzzle.cell(cells[0]).col();
            let line = if cells.iter().all(|&cell| puzzle.cell(cell).row() == row) {
                puzzle.row(row)
            } else if cells.iter().all(|&cell| puzzle.cell(cell).col() == col) {
                puzzle.col(col)
            } else {
                continue;
            };

            let mut targets = Vec::new();
            for &other in line.cells() {
                let other = other as usize;
                if block.contains_cell(other) {
                    continue;
                }
                if puzzle.eliminate(other, digit) {
                    targets.push(other);
                }
            }
            if targets.is_empty() {
                continue;
            }
            for &cell in &cells {
                puzzle.mark_culprit(cell);
            }
            for &target in &targets {
                puzzle.mark_semi_culprit(target);
            }
            return Some(format!(
                "Pointing tuple: {} in {} points along {}",
                digit,
                block.name(),
                line.name()
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{candidates, remove};
    use super::*;

    #[test]
    fn row_confined_digit_clears_block() {
        let mut puzzle = Puzzle::custom();
        // 5 in row 1 only fits in the first three columns
        for col in 3..9 {
            remove(&mut puzzle, col, 0, 5);
        }

        let description = locked_candidate(&mut puzzle).expect("locked candidate expected");
        assert!(description.contains("5 in row 1"));
        assert!(description.contains("block 1"));
        for col in 0..3 {
            for row in 1..3 {
                assert!(!candidates(&puzzle, col, row).contains(&5));
            }
        }
        // the line itself keeps the digit
        assert!(candidates(&puzzle, 0, 0).contains(&5));
        assert!(puzzle.cell_at(0, 0).is_culprit());
        assert!(puzzle.cell_at(0, 1).is_semi_culprit());
    }

    #[test]
    fn block_confined_digit_clears_line() {
        let mut puzzle = Puzzle::custom();
        // 7 in block 1 only fits in its top row
        for col in 0..3 {
            for row in 1..3 {
                remove(&mut puzzle, col, row, 7);
            }
        }

        let description = pointing_tuple(&mut puzzle).expect("pointing tuple expected");
        assert!(description.contains("7 in block 1"));
        assert!(description.contains("row 1"));
        for col in 3..9 {
            assert!(!candidates(&puzzle, col, 0).contains(&7));
        }
        assert!(candidates(&puzzle, 1, 0).contains(&7));
    }

    #[test]
    fn no_intersection_on_untouched_board() {
        let mut puzzle = Puzzle::custom();
        assert_eq!(locked_candidate(&mut puzzle), None);
        assert_eq!(pointing_tuple(&mut puzzle), None);
    }
}
