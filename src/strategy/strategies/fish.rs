//! Basic fish of size 2 to 4: X-wing, swordfish and jellyfish.
//!
//! A fish fixes one digit and looks for `n` base lines whose spots for that
//! digit fall into no more than `n` cover lines of the other orientation.
//! The digit must then land on one base line per cover line, so every spot
//! on a cover line outside the base lines is dead.

use crate::bitset::Set;
use crate::board::{Digit, Pos, Puzzle, RegionKind};

use super::combinations;

pub(crate) fn find(puzzle: &mut Puzzle, size: usize, label: &str) -> Option<String> {
    for digit in Digit::all() {
        for &base in &[RegionKind::Row, RegionKind::Col] {
            if let Some(description) = find_in_lines(puzzle, digit, base, size, label) {
                return Some(description);
            }
        }
    }
    None
}

fn find_in_lines(
    puzzle: &mut Puzzle,
    digit: Digit,
    base: RegionKind,
    size: usize,
    label: &str,
) -> Option<String> {
    let mut eligible: Vec<(u8, Set<Pos>)> = Vec::new();
    for line in 0..9u8 {
        let region = match base {
            RegionKind::Row => puzzle.row(line),
            _ => puzzle.col(line),
        };
        let positions = region.positions_with_candidate(puzzle, digit);
        // single-spot lines are hidden singles and would make the fish degenerate
        let spots = positions.len() as usize;
        if spots >= 2 && spots <= size {
            eligible.push((line, positions));
        }
    }

    let mut found = None;
    combinations(&eligible, size, &mut |combo| {
        let mut cover = Set::NONE;
        for &(_, positions) in combo {
            cover |= positions;
        }
        if cover.len() as usize != size {
            return false;
        }
        let base_lines: Vec<u8> = combo.iter().map(|&(line, _)| line).collect();
        found = eliminate_outside_base(puzzle, digit, base, &base_lines, cover, label);
        found.is_some()
    });
    found
}

fn eliminate_outside_base(
    puzzle: &mut Puzzle,
    digit: Digit,
    base: RegionKind,
    base_lines: &[u8],
    cover: Set<Pos>,
    label: &str,
) -> Option<String> {
    let mut targets = Vec::new();
    for cover_line in cover.iter() {
        for other in 0..9u8 {
            if base_lines.contains(&other) {
                continue;
            }
            let index = match base {
                RegionKind::Row => other as usize * 9 + cover_line.as_index(),
                _ => cover_line.as_index() * 9 + other as usize,
            };
            if puzzle.eliminate(index, digit) {
                targets.push(index);
            }
        }
    }
    if targets.is_empty() {
        return None;
    }

    for &line in base_lines {
        for cover_line in cover.iter() {
            let index = match base {
                RegionKind::Row => line as usize * 9 + cover_line.as_index(),
                _ => cover_line.as_index() * 9 + line as usize,
            };
            if puzzle.cell(index).candidates().contains(digit) {
                puzzle.mark_culprit(index);
            }
        }
    }
    for &target in &targets {
        puzzle.mark_semi_culprit(target);
    }

    let (base_name, cover_name) = match base {
        RegionKind::Row => ("rows", "columns"),
        _ => ("columns", "rows"),
    };
    Some(format!(
        "{}: {} in {} {}, {} {}",
        label,
        digit,
        base_name,
        line_list(base_lines.iter().copied()),
        cover_name,
        line_list(cover.iter().map(|pos| pos.as_index() as u8)),
    ))
}

fn line_list(lines: impl Iterator<Item = u8>) -> String {
    let names: Vec<String> = lines.map(|line| (line + 1).to_string()).collect();
    names.join("/")
}
