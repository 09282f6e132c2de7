use sudoku_logic::{
    CancelToken, Digit, GridParseError, Puzzle, SolveOutcome, StrategySolver,
};

const SOLVED_GRID: &str = "\
123456789
456789123
789123456
234567891
567891234
891234567
345678912
678912345
912345678";

fn parse(grid: &str) -> Puzzle {
    grid.parse().unwrap_or_else(|err| panic!("{:?}", err))
}

#[test]
fn rejects_wrong_row_count() {
    let eight_rows: String = SOLVED_GRID.lines().take(8).collect::<Vec<_>>().join("\n");
    assert_eq!(
        eight_rows.parse::<Puzzle>(),
        Err(GridParseError::WrongRowCount(8))
    );
}

#[test]
fn rejects_wrong_row_length() {
    let mut rows: Vec<&str> = SOLVED_GRID.lines().collect();
    rows[5] = "12345678";
    assert_eq!(
        rows.join("\n").parse::<Puzzle>(),
        Err(GridParseError::WrongRowLength { row: 5, len: 8 })
    );
}

#[test]
fn single_empty_cell_is_a_naked_single() {
    let grid = SOLVED_GRID.replacen("912345678", "91234567-", 1);
    let mut solver = StrategySolver::new(parse(&grid));
    assert_eq!(solver.solve(), SolveOutcome::Solved);

    let descriptions: Vec<&str> = solver.log().iter().map(|entry| entry.description()).collect();
    assert_eq!(
        descriptions,
        vec!["Puzzle loaded", "Naked single: R9C9 must be 8", "Solved"]
    );
    assert_eq!(
        solver.puzzle().cell_at(8, 8).value().map(Digit::get),
        Some(8)
    );
}

#[test]
fn blanked_row_is_solved_by_naked_singles() {
    let grid = SOLVED_GRID.replacen("912345678", "---------", 1);
    let mut solver = StrategySolver::new(parse(&grid));
    assert_eq!(solver.solve(), SolveOutcome::Solved);
    assert!(solver.puzzle().is_solved());
    assert!(!solver.puzzle().check_for_errors());

    // the filled values match the grid the puzzle was blanked from
    let reference = parse(SOLVED_GRID);
    for index in 0..81 {
        assert_eq!(
            solver.puzzle().cell(index).value(),
            reference.cell(index).value(),
            "mismatch in cell {}",
            index
        );
    }
    // 9 assignments plus the load and solve markers
    assert_eq!(solver.log().len(), 11);
}

#[test]
fn display_round_trip_solves_identically() {
    let grid = SOLVED_GRID.replace('4', "-");
    let mut solver = StrategySolver::new(parse(&grid));
    let outcome = solver.solve();

    let reparsed = parse(&solver.puzzle().to_string());
    let mut second = StrategySolver::new(reparsed);
    assert_eq!(second.solve(), outcome);
    for index in 0..81 {
        assert_eq!(
            solver.puzzle().cell(index).value(),
            second.puzzle().cell(index).value()
        );
    }
}

#[test]
fn hidden_single_fires_before_other_techniques() {
    // no cell is down to one candidate, but 1 has a single spot in row 1:
    // the block containing R2C4 covers columns 4-6 and the block containing
    // R3C7 covers columns 7-9
    let grid = "\
23-------
---1-----
------1--
---------
---------
---------
---------
---------
---------";
    let mut solver = StrategySolver::new(parse(grid));
    assert_eq!(solver.solve(), SolveOutcome::Failed);
    assert!(!solver.puzzle().check_for_errors());

    let first_action = solver.log().get(1).unwrap().description();
    assert!(
        first_action.starts_with("Hidden single: R1C3 must be 1"),
        "unexpected first action: {}",
        first_action
    );
    assert_eq!(
        solver.puzzle().cell_at(2, 0).value().map(Digit::get),
        Some(1)
    );
}

#[test]
fn log_snapshots_progress_monotonically() {
    let grid = SOLVED_GRID.replace('7', "-");
    let mut solver = StrategySolver::new(parse(&grid));
    assert_eq!(solver.solve(), SolveOutcome::Solved);

    let entries: Vec<_> = solver.log().iter().collect();
    assert!(entries.len() > 2);
    for pair in entries.windows(2) {
        assert!(pair[1].board().total_candidates() <= pair[0].board().total_candidates());
        assert!(pair[1].board().solved_count() >= pair[0].board().solved_count());
    }
    assert_eq!(entries[entries.len() - 1].board().solved_count(), 81);
    assert_eq!(entries[entries.len() - 1].board().total_candidates(), 0);
}

#[test]
fn assignments_mark_their_culprit_cell() {
    let grid = SOLVED_GRID.replacen("912345678", "91234567-", 1);
    let mut solver = StrategySolver::new(parse(&grid));
    solver.solve();

    let assignment = solver.log().get(1).unwrap();
    assert!(assignment.board().cell_at(8, 8).culprit);
    let marked = assignment
        .board()
        .cells()
        .iter()
        .filter(|cell| cell.culprit || cell.semi_culprit)
        .count();
    assert_eq!(marked, 1);
}

#[test]
fn cancellation_preserves_the_session() {
    let token = CancelToken::new();
    token.cancel();

    let grid = SOLVED_GRID.replace('2', "-");
    let mut solver = StrategySolver::new(parse(&grid));
    assert_eq!(solver.solve_cancellable(&token), SolveOutcome::Cancelled);
    assert_eq!(solver.log().last().unwrap().description(), "Cancelled");
    // nothing was deduced, the puzzle is still editable and resolvable
    assert_eq!(solver.puzzle().solved_count(), 72);
    assert_eq!(solver.solve(), SolveOutcome::Solved);
}

#[test]
fn solver_never_guesses_on_underdetermined_input() {
    let mut solver = StrategySolver::new(Puzzle::custom());
    assert_eq!(solver.solve(), SolveOutcome::Failed);
    assert_eq!(solver.puzzle().solved_count(), 0);
    assert!(solver
        .log()
        .last()
        .unwrap()
        .description()
        .starts_with("Failed"));
}

#[test]
fn reset_after_solving_restores_the_givens() {
    let grid = SOLVED_GRID.replace('9', "-");
    let mut solver = StrategySolver::new(parse(&grid));
    assert_eq!(solver.solve(), SolveOutcome::Solved);

    solver.puzzle_mut().reset();
    assert_eq!(solver.puzzle().solved_count(), 72);
    assert_eq!(solver.solve(), SolveOutcome::Solved);
}
