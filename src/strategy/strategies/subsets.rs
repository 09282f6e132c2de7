//! Naked and hidden subsets of size 2 to 4.
//!
//! A naked subset is `k` cells of one region whose candidates union to
//! exactly `k` digits, excluding those digits from the rest of the region.
//! A hidden subset is the dual view: `k` digits whose spots within a region
//! union to exactly `k` cells, stripping every other candidate from those
//! cells.

use crate::bitset::{CandidateSet, Set};
use crate::board::{Digit, Pos, Puzzle};

use super::{cell_list, combinations, common_peers, digit_list};

pub(crate) fn naked(puzzle: &mut Puzzle, size: usize, label: &str) -> Option<String> {
    for region_index in 0..27 {
        let region = puzzle.region(region_index);
        let members: Vec<usize> = region
            .cells()
            .iter()
            .map(|&cell| cell as usize)
            .filter(|&cell| {
                let len = puzzle.cell(cell).candidates().len() as usize;
                len >= 2 && len <= size
            })
            .collect();

        let mut found = None;
        combinations(&members, size, &mut |combo| {
            let mut union = CandidateSet::NONE;
            for &cell in combo {
                union |= puzzle.cell(cell).candidates();
            }
            if union.len() as usize != size {
                return false;
            }
            // a tuple sharing both a line and a block eliminates from both
            let mut targets = Vec::new();
            for other in common_peers(puzzle, combo) {
                for digit in union.iter() {
                    if puzzle.eliminate(other, digit) && !targets.contains(&other) {
                        targets.push(other);
                    }
                }
            }
            if targets.is_empty() {
                return false;
            }
            for &cell in combo {
                puzzle.mark_culprit(cell);
            }
            for &target in &targets {
                puzzle.mark_semi_culprit(target);
            }
            found = Some(format!(
                "{}: {} lock {} in {}",
                label,
                cell_list(combo),
                digit_list(union),
                region.name()
            ));
            true
        });
        if found.is_some() {
            return found;
        }
    }
    None
}

pub(crate) fn hidden(puzzle: &mut Puzzle, size: usize, label: &str) -> Option<String> {
    for region_index in 0..27 {
        let region = puzzle.region(region_index);
        let unplaced: Vec<(Digit, Set<Pos>)> = Digit::all()
            .filter_map(|digit| {
                let positions = region.positions_with_candidate(puzzle, digit);
                if positions.is_empty() {
                    None
                } else {
                    Some((digit, positions))
                }
            })
            .collect();
        // with no spare digits there is nothing to strip
        if unplaced.len() <= size {
            continue;
        }

        let mut found = None;
        combinations(&unplaced, size, &mut |combo| {
            let mut digits = CandidateSet::NONE;
            let mut spots = Set::NONE;
            for &(digit, positions) in combo {
                digits.insert(digit);
                spots |= positions;
            }
            if spots.len() as usize != size {
                return false;
            }
            let cells: Vec<usize> = spots.iter().map(|pos| region.cell_at(pos)).collect();
            let mut changed = false;
            for &cell in &cells {
                for digit in puzzle.cell(cell).candidates().without(digits).iter() {
                    changed |= puzzle.eliminate(cell, digit);
                }
            }
            if !changed {
                return false;
            }
            for &cell in &cells {
                puzzle.mark_culprit(cell);
            }
            found = Some(format!(
                "{}: {} confined to {} in {}",
                label,
                digit_list(digits),
                cell_list(&cells),
                region.name()
            ));
            true
        });
        if found.is_some() {
            return found;
        }
    }
    None
}
