//! A digit with only one remaining spot in a region must go there, however
//! many other candidates that spot still lists.

use crate::board::{Digit, Puzzle};

use super::cell_name;

pub(crate) fn find(puzzle: &mut Puzzle) -> Option<String> {
    for region_index in 0..27 {
        let region = puzzle.region(region_index);
        for digit in Digit::all() {
            let positions = region.positions_with_candidate(puzzle, digit);
            if let Some(pos) = positions.unique() {
                let cell = region.cell_at(pos);
                puzzle.mark_culprit(cell);
                puzzle.assign(cell, digit);
                return Some(format!(
                    "Hidden single: {} must be {} in {}",
                    cell_name(cell),
                    digit,
                    region.name()
                ));
            }
        }
    }
    None
}
