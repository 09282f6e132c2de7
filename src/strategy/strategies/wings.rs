//! Bivalue chain patterns: Y-wing, XYZ-wing and the general XY-chain.
//!
//! All three rest on the same pincer argument. Whichever value the hinge
//! (or chain start) takes, some cell of the pattern ends up holding the
//! shared digit `z`, so `z` is impossible wherever all pattern exits are
//! visible at once.

use crate::bitset::CandidateSet;
use crate::board::{Digit, Puzzle};

use super::{cell_list, cell_name};

pub(crate) fn y_wing(puzzle: &mut Puzzle) -> Option<String> {
    for hinge in 0..81 {
        let hinge_cands = puzzle.cell(hinge).candidates();
        if hinge_cands.len() != 2 {
            continue;
        }
        let pincers: Vec<usize> = puzzle
            .cell(hinge)
            .peers()
            .iter()
            .map(|&peer| peer as usize)
            .filter(|&peer| {
                let cands = puzzle.cell(peer).candidates();
                cands.len() == 2 && (cands & hinge_cands).len() == 1
            })
            .collect();

        for (i, &first) in pincers.iter().enumerate() {
            for &second in &pincers[i + 1..] {
                let first_cands = puzzle.cell(first).candidates();
                let second_cands = puzzle.cell(second).candidates();
                if first_cands == second_cands {
                    continue;
                }
                if (hinge_cands | first_cands | second_cands).len() != 3 {
                    continue;
                }
                let shared = match (first_cands & second_cands).unique() {
                    Some(digit) => digit,
                    None => continue,
                };
                if hinge_cands.contains(shared) {
                    continue;
                }
                let targets =
                    eliminate_where_seen(puzzle, shared, &[first, second], &[hinge, first, second]);
                if targets.is_empty() {
                    continue;
                }
                mark_pattern(puzzle, &[hinge, first, second], &targets);
                return Some(format!(
                    "Y-wing: hinge {} and pincers {} eliminate {}",
                    cell_name(hinge),
                    cell_list(&[first, second]),
                    shared
                ));
            }
        }
    }
    None
}

pub(crate) fn xyz_wing(puzzle: &mut Puzzle) -> Option<String> {
    for hinge in 0..81 {
        let hinge_cands = puzzle.cell(hinge).candidates();
        if hinge_cands.len() != 3 {
            continue;
        }
        let pincers: Vec<usize> = puzzle
            .cell(hinge)
            .peers()
            .iter()
            .map(|&peer| peer as usize)
            .filter(|&peer| {
                let cands = puzzle.cell(peer).candidates();
                cands.len() == 2 && cands.without(hinge_cands).is_empty()
            })
            .collect();

        for (i, &first) in pincers.iter().enumerate() {
            for &second in &pincers[i + 1..] {
                let first_cands = puzzle.cell(first).candidates();
                let second_cands = puzzle.cell(second).candidates();
                if first_cands == second_cands {
                    continue;
                }
                let shared = match (first_cands & second_cands).unique() {
                    Some(digit) => digit,
                    None => continue,
                };
                // the hinge itself can hold z, targets must see it too
                let targets = eliminate_where_seen(
                    puzzle,
                    shared,
                    &[hinge, first, second],
                    &[hinge, first, second],
                );
                if targets.is_empty() {
                    continue;
                }
                mark_pattern(puzzle, &[hinge, first, second], &targets);
                return Some(format!(
                    "XYZ-wing: hinge {} and pincers {} eliminate {}",
                    cell_name(hinge),
                    cell_list(&[first, second]),
                    shared
                ));
            }
        }
    }
    None
}

pub(crate) fn xy_chain(puzzle: &mut Puzzle) -> Option<String> {
    for start in 0..81 {
        let cands = puzzle.cell(start).candidates();
        let (first, second) = match cands.as_pair() {
            Some(pair) => pair,
            None => continue,
        };
        for &(target, carry) in &[(first, second), (second, first)] {
            let mut visited = [false; 81];
            visited[start] = true;
            let mut chain = vec![start];
            if extend_chain(puzzle, target, carry, &mut visited, &mut chain) {
                let end = chain[chain.len() - 1];
                let targets = eliminate_where_seen(puzzle, target, &[start, end], &[start, end]);
                debug_assert!(!targets.is_empty());
                mark_pattern(puzzle, &chain, &targets);
                return Some(format!(
                    "XY-chain: {} linked cells from {} to {} eliminate {}",
                    chain.len(),
                    cell_name(start),
                    cell_name(end),
                    target
                ));
            }
        }
    }
    None
}

/// Depth-first growth of an xy-chain.
///
/// `carry` is the value the chain tail is forced to if the start cell does
/// not hold `target`. A chain is reported as soon as its tail is forced to
/// `target` and at least one outside cell would lose a candidate over it.
fn extend_chain(
    puzzle: &Puzzle,
    target: Digit,
    carry: Digit,
    visited: &mut [bool; 81],
    chain: &mut Vec<usize>,
) -> bool {
    let current = chain[chain.len() - 1];
    if chain.len() >= 3 && carry == target && sees_a_target(puzzle, target, chain[0], current) {
        return true;
    }
    let peers = *puzzle.cell(current).peers();
    for &next in peers.iter() {
        let next = next as usize;
        if visited[next] {
            continue;
        }
        let cands = puzzle.cell(next).candidates();
        if cands.len() != 2 || !cands.contains(carry) {
            continue;
        }
        let next_carry = match cands.without(CandidateSet::from(carry)).unique() {
            Some(digit) => digit,
            None => continue,
        };
        visited[next] = true;
        chain.push(next);
        if extend_chain(puzzle, target, next_carry, visited, chain) {
            return true;
        }
        chain.pop();
        visited[next] = false;
    }
    false
}

fn sees_a_target(puzzle: &Puzzle, digit: Digit, start: usize, end: usize) -> bool {
    (0..81).any(|index| {
        index != start
            && index != end
            && puzzle.cell(index).candidates().contains(digit)
            && puzzle.cell(start).sees(index)
            && puzzle.cell(end).sees(index)
    })
}

/// Removes `digit` from every cell outside `exclude` that sees all of
/// `witnesses`. Returns the cells that actually changed.
fn eliminate_where_seen(
    puzzle: &mut Puzzle,
    digit: Digit,
    witnesses: &[usize],
    exclude: &[usize],
) -> Vec<usize> {
    let mut targets = Vec::new();
    for index in 0..81 {
        if exclude.contains(&index) {
            continue;
        }
        if !witnesses.iter().all(|&w| puzzle.cell(w).sees(index)) {
            continue;
        }
        if puzzle.eliminate(index, digit) {
            targets.push(index);
        }
    }
    targets
}

fn mark_pattern(puzzle: &mut Puzzle, pattern: &[usize], targets: &[usize]) {
    for &cell in pattern {
        puzzle.mark_culprit(cell);
    }
    for &target in targets {
        puzzle.mark_semi_culprit(target);
    }
}
