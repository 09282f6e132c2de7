//! Uniqueness-based rectangle patterns.
//!
//! Four cells on two rows, two columns and exactly two blocks can hold the
//! same pair of digits in two interchangeable ways. A puzzle with a unique
//! solution can never reduce to that deadly pattern, which licenses the
//! eliminations below. All variants assume the puzzle actually has a unique
//! solution, for contradictory inputs they simply find nothing or stall.

use crate::bitset::Set;
use crate::board::{Digit, Pos, Puzzle};

use super::{cell_list, cell_name, common_peers, digit_list};

/// Visits every rectangle spanning exactly two blocks. Stops early when
/// `visit` returns `true`.
fn for_each_rectangle(mut visit: impl FnMut([usize; 4], [u8; 2], [u8; 2]) -> bool) {
    for r1 in 0..9u8 {
        for r2 in r1 + 1..9 {
            for c1 in 0..9u8 {
                for c2 in c1 + 1..9 {
                    // one shared band or one shared stack, not both
                    if (r1 / 3 == r2 / 3) == (c1 / 3 == c2 / 3) {
                        continue;
                    }
                    let corners = [
                        (r1 as usize) * 9 + c1 as usize,
                        (r1 as usize) * 9 + c2 as usize,
                        (r2 as usize) * 9 + c1 as usize,
                        (r2 as usize) * 9 + c2 as usize,
                    ];
                    if visit(corners, [r1, r2], [c1, c2]) {
                        return;
                    }
                }
            }
        }
    }
}

pub(crate) fn unique(puzzle: &mut Puzzle) -> Option<String> {
    let mut found = None;
    for_each_rectangle(|corners, _, _| {
        found = unique_type1(puzzle, corners);
        found.is_some()
    });
    if found.is_some() {
        return found;
    }
    for_each_rectangle(|corners, _, _| {
        found = unique_type2(puzzle, corners);
        found.is_some()
    });
    found
}

/// Three corners hold the bare pair, so the fourth cannot: either of the
/// pair digits there would complete the deadly pattern.
fn unique_type1(puzzle: &mut Puzzle, corners: [usize; 4]) -> Option<String> {
    for free in 0..4 {
        let others: Vec<usize> = corners
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != free)
            .map(|(_, &corner)| corner)
            .collect();
        let pair = puzzle.cell(others[0]).candidates();
        if pair.len() != 2 {
            continue;
        }
        if !others.iter().all(|&corner| puzzle.cell(corner).candidates() == pair) {
            continue;
        }
        let free_cell = corners[free];
        let free_cands = puzzle.cell(free_cell).candidates();
        if !free_cands.overlaps(pair) || free_cands.without(pair).is_empty() {
            continue;
        }
        let removed = free_cands & pair;
        for digit in removed.iter() {
            puzzle.eliminate(free_cell, digit);
        }
        for &corner in &others {
            puzzle.mark_culprit(corner);
        }
        puzzle.mark_semi_culprit(free_cell);
        return Some(format!(
            "Unique rectangle: {} force {} to drop {}",
            cell_list(&others),
            cell_name(free_cell),
            digit_list(removed)
        ));
    }
    None
}

// corner order is (r1,c1), (r1,c2), (r2,c1), (r2,c2), so these pairs share
// a row or a column
const ADJACENT_SPLITS: [([usize; 2], [usize; 2]); 4] = [
    ([0, 1], [2, 3]),
    ([2, 3], [0, 1]),
    ([0, 2], [1, 3]),
    ([1, 3], [0, 2]),
];

/// Two floor corners hold the bare pair and both roof corners carry the
/// same single extra digit. One roof must take the extra digit, so no cell
/// seeing both roofs can.
fn unique_type2(puzzle: &mut Puzzle, corners: [usize; 4]) -> Option<String> {
    for &(floor, roof) in &ADJACENT_SPLITS {
        let pair = puzzle.cell(corners[floor[0]]).candidates();
        if pair.len() != 2 || puzzle.cell(corners[floor[1]]).candidates() != pair {
            continue;
        }
        let roof_cells = [corners[roof[0]], corners[roof[1]]];
        let first_cands = puzzle.cell(roof_cells[0]).candidates();
        let second_cands = puzzle.cell(roof_cells[1]).candidates();
        if first_cands != second_cands || first_cands.len() != 3 {
            continue;
        }
        let extra = match first_cands.without(pair).unique() {
            Some(digit) => digit,
            None => continue,
        };

        let mut targets = Vec::new();
        for peer in common_peers(puzzle, &roof_cells) {
            if puzzle.eliminate(peer, extra) {
                targets.push(peer);
            }
        }
        if targets.is_empty() {
            continue;
        }
        for &corner in &corners {
            puzzle.mark_culprit(corner);
        }
        for &target in &targets {
            puzzle.mark_semi_culprit(target);
        }
        return Some(format!(
            "Unique rectangle: roof {} eliminates {}",
            cell_list(&roof_cells),
            extra
        ));
    }
    None
}

// diagonally opposite corner index pairs
const DIAGONALS: [(usize, usize); 4] = [(0, 3), (3, 0), (1, 2), (2, 1)];

/// One corner holds the bare pair and one of its digits is confined to the
/// rectangle along both lines through the opposite corner. Placing the
/// other pair digit in that opposite corner would then force the deadly
/// pattern.
pub(crate) fn hidden(puzzle: &mut Puzzle) -> Option<String> {
    let mut found = None;
    for_each_rectangle(|corners, rows, cols| {
        found = hidden_at(puzzle, corners, rows, cols);
        found.is_some()
    });
    found
}

fn hidden_at(
    puzzle: &mut Puzzle,
    corners: [usize; 4],
    rows: [u8; 2],
    cols: [u8; 2],
) -> Option<String> {
    let mut rect_rows = Set::NONE;
    let mut rect_cols = Set::NONE;
    for &row in &rows {
        rect_rows.insert(Pos::new(row));
    }
    for &col in &cols {
        rect_cols.insert(Pos::new(col));
    }

    for &(anchor, opposite) in &DIAGONALS {
        let anchor_cell = corners[anchor];
        let opposite_cell = corners[opposite];
        let pair = puzzle.cell(anchor_cell).candidates();
        let (first, second) = match pair.as_pair() {
            Some(pair) => pair,
            None => continue,
        };
        if puzzle.cell(opposite_cell).is_solved() {
            continue;
        }
        let opposite_row = (opposite_cell / 9) as u8;
        let opposite_col = (opposite_cell % 9) as u8;
        for &(removed, locked) in &[(first, second), (second, first)] {
            let row_spots = puzzle
                .row(opposite_row)
                .positions_with_candidate(puzzle, locked);
            let col_spots = puzzle
                .col(opposite_col)
                .positions_with_candidate(puzzle, locked);
            if row_spots != rect_cols || col_spots != rect_rows {
                continue;
            }
            if !puzzle.eliminate(opposite_cell, removed) {
                continue;
            }
            for &(other, _) in &DIAGONALS {
                if other != opposite {
                    puzzle.mark_culprit(corners[other]);
                }
            }
            puzzle.mark_semi_culprit(opposite_cell);
            return Some(format!(
                "Hidden rectangle: {} locked onto the rectangle at {} removes {} from {}",
                locked,
                cell_name(anchor_cell),
                removed,
                cell_name(opposite_cell)
            ));
        }
    }
    None
}

/// Three corners are solved by the solver (not given) and form one half of
/// a deadly pattern. The free corner cannot take the value completing it,
/// otherwise swapping the four cells would yield a second solution built
/// from the same givens.
pub(crate) fn avoidable(puzzle: &mut Puzzle) -> Option<String> {
    let mut found = None;
    for_each_rectangle(|corners, _, _| {
        found = avoidable_at(puzzle, corners);
        found.is_some()
    });
    found
}

fn avoidable_at(puzzle: &mut Puzzle, corners: [usize; 4]) -> Option<String> {
    for free in 0..4 {
        let free_cell = corners[free];
        if puzzle.cell(free_cell).is_solved() {
            continue;
        }
        let solved: Vec<usize> = (0..4)
            .filter(|&i| i != free)
            .map(|i| corners[i])
            .collect();
        if !solved
            .iter()
            .all(|&corner| puzzle.cell(corner).is_solved() && puzzle.cell(corner).original().is_none())
        {
            continue;
        }
        // the two corners sharing a line with the free cell must match
        let diagonal = corners[3 - free];
        let adjacent: Vec<Digit> = solved
            .iter()
            .filter(|&&corner| corner != diagonal)
            .filter_map(|&corner| puzzle.cell(corner).value())
            .collect();
        if adjacent.len() != 2 || adjacent[0] != adjacent[1] {
            continue;
        }
        let forbidden = match puzzle.cell(diagonal).value() {
            Some(value) => value,
            None => continue,
        };
        if forbidden == adjacent[0] {
            continue;
        }
        if !puzzle.eliminate(free_cell, forbidden) {
            continue;
        }
        for &corner in &solved {
            puzzle.mark_culprit(corner);
        }
        puzzle.mark_semi_culprit(free_cell);
        return Some(format!(
            "Avoidable rectangle: {} cannot be {}",
            cell_name(free_cell),
            forbidden
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{candidates, keep_only, remove};
    use super::*;
    use crate::board::Digit;

    #[test]
    fn type1_strips_the_pair_from_the_fourth_corner() {
        let mut puzzle = Puzzle::custom();
        keep_only(&mut puzzle, 0, 0, &[1, 2]);
        keep_only(&mut puzzle, 4, 0, &[1, 2]);
        keep_only(&mut puzzle, 0, 2, &[1, 2]);

        let description = unique(&mut puzzle).expect("unique rectangle expected");
        assert!(description.contains("force R3C5 to drop 1/2"));
        assert_eq!(candidates(&puzzle, 4, 2), vec![3, 4, 5, 6, 7, 8, 9]);
        assert!(puzzle.cell_at(0, 0).is_culprit());
        assert!(puzzle.cell_at(4, 2).is_semi_culprit());
    }

    #[test]
    fn type2_eliminates_the_extra_digit_around_the_roof() {
        let mut puzzle = Puzzle::custom();
        keep_only(&mut puzzle, 0, 0, &[1, 2]);
        keep_only(&mut puzzle, 4, 0, &[1, 2]);
        keep_only(&mut puzzle, 0, 2, &[1, 2, 4]);
        keep_only(&mut puzzle, 4, 2, &[1, 2, 4]);

        let description = unique(&mut puzzle).expect("unique rectangle expected");
        assert_eq!(description, "Unique rectangle: roof R3C1, R3C5 eliminates 4");
        // the rest of row 3 sees both roof cells
        assert!(!candidates(&puzzle, 2, 2).contains(&4));
        assert!(!candidates(&puzzle, 8, 2).contains(&4));
        assert!(candidates(&puzzle, 8, 8).contains(&4));
        // the roof keeps its own extra candidate
        assert_eq!(candidates(&puzzle, 0, 2), vec![1, 2, 4]);
    }

    #[test]
    fn hidden_rectangle_clears_the_opposite_corner() {
        let mut puzzle = Puzzle::custom();
        keep_only(&mut puzzle, 0, 0, &[1, 2]);
        for col in 0..9 {
            if col != 0 && col != 4 {
                remove(&mut puzzle, col, 2, 2);
            }
        }
        for row in 0..9 {
            if row != 0 && row != 2 {
                remove(&mut puzzle, 4, row, 2);
            }
        }

        let description = hidden(&mut puzzle).expect("hidden rectangle expected");
        assert!(description.contains("removes 1 from R3C5"));
        assert!(!candidates(&puzzle, 4, 2).contains(&1));
        assert!(candidates(&puzzle, 4, 2).contains(&2));
    }

    #[test]
    fn avoidable_rectangle_blocks_the_second_solution() {
        let mut puzzle = Puzzle::custom();
        puzzle.assign(0, Digit::new(1)); // R1C1
        puzzle.assign(4, Digit::new(2)); // R1C5
        puzzle.assign(18, Digit::new(2)); // R3C1

        let description = avoidable(&mut puzzle).expect("avoidable rectangle expected");
        assert_eq!(description, "Avoidable rectangle: R3C5 cannot be 1");
        assert!(!candidates(&puzzle, 4, 2).contains(&1));
    }

    #[test]
    fn givens_never_form_an_avoidable_rectangle() {
        let mut puzzle = Puzzle::custom();
        puzzle.set_given(0, 0, Some(Digit::new(1)));
        puzzle.set_given(4, 0, Some(Digit::new(2)));
        puzzle.set_given(0, 2, Some(Digit::new(2)));
        assert_eq!(avoidable(&mut puzzle), None);
    }

    #[test]
    fn no_rectangle_on_untouched_board() {
        let mut puzzle = Puzzle::custom();
        assert_eq!(unique(&mut puzzle), None);
        assert_eq!(hidden(&mut puzzle), None);
        assert_eq!(avoidable(&mut puzzle), None);
    }
}
