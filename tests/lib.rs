use queens::{ColumnOrder, Placement, Queens, Solution};

/// Known solution counts for n = 0..=8, OEIS A000170 (plus the empty
/// placement for n = 0).
const SOLUTION_COUNTS: [usize; 9] = [1, 1, 0, 0, 2, 10, 4, 40, 92];

fn p(row: usize, col: usize) -> Placement {
    Placement { row, col }
}

fn sorted_solutions(queens: Queens) -> Vec<Solution> {
    let mut solutions = queens.solve_all();
    for solution in &mut solutions {
        solution.sort();
    }
    solutions.sort();
    solutions
}

#[test]
fn known_solution_counts() {
    for (n, &count) in SOLUTION_COUNTS.iter().enumerate() {
        assert_eq!(
            Queens::new(n).solve_all().len(),
            count,
            "solution count for the {}-queens problem",
            n
        );
    }
}

#[test]
fn empty_board_has_the_empty_placement() {
    let solutions = Queens::new(0).solve_all();
    assert_eq!(solutions, vec![vec![]]);
}

#[test]
fn tiny_boards_have_no_solution() {
    assert!(Queens::new(2).solve_all().is_empty());
    assert!(Queens::new(3).solve_all().is_empty());
    assert!(Queens::new(2).solve_one().is_none());
}

#[test]
fn four_queens_solutions() {
    let solutions = sorted_solutions(Queens::new(4));
    assert_eq!(
        solutions,
        vec![
            vec![p(0, 1), p(1, 3), p(2, 0), p(3, 2)],
            vec![p(0, 2), p(1, 0), p(2, 3), p(3, 1)],
        ]
    );
}

#[test]
fn solutions_are_valid_placements() {
    for n in 1..=7 {
        for solution in Queens::new(n).solve_all() {
            assert_eq!(solution.len(), n);

            let mut rows: Vec<_> = solution.iter().map(|p| p.row).collect();
            let mut cols: Vec<_> = solution.iter().map(|p| p.col).collect();
            rows.sort_unstable();
            cols.sort_unstable();
            assert_eq!(rows, (0..n).collect::<Vec<_>>());
            assert_eq!(cols, (0..n).collect::<Vec<_>>());

            let mut sums: Vec<_> = solution.iter().map(|p| p.row + p.col).collect();
            let mut diffs: Vec<_> = solution
                .iter()
                .map(|p| p.row as isize - p.col as isize)
                .collect();
            sums.sort_unstable();
            sums.dedup();
            diffs.sort_unstable();
            diffs.dedup();
            assert_eq!(sums.len(), n, "two queens share an anti-diagonal");
            assert_eq!(diffs.len(), n, "two queens share a main diagonal");
        }
    }
}

#[test]
fn organ_pipe_order_finds_the_same_solutions() {
    for n in 0..=7 {
        assert_eq!(
            sorted_solutions(Queens::new(n)),
            sorted_solutions(Queens::with_order(n, ColumnOrder::OrganPipe)),
            "solution sets differ for the {}-queens problem",
            n
        );
    }
}

#[test]
fn identical_runs_are_deterministic() {
    // Without sorting: the solutions must come back in the same order.
    assert_eq!(Queens::new(6).solve_all(), Queens::new(6).solve_all());
    assert_eq!(
        Queens::with_order(6, ColumnOrder::OrganPipe).solve_all(),
        Queens::with_order(6, ColumnOrder::OrganPipe).solve_all()
    );
}

#[test]
fn solve_at_most_stops_early() {
    assert_eq!(Queens::new(8).solve_at_most(5).len(), 5);
    assert_eq!(Queens::new(8).solve_at_most(0).len(), 0);
    // A limit above the solution count changes nothing.
    assert_eq!(Queens::new(4).solve_at_most(100).len(), 2);
}

#[test]
fn solve_one_agrees_with_solve_all() {
    let queens = Queens::new(7);
    let first = queens.solve_one().unwrap();
    assert_eq!(first, queens.solve_all()[0]);
}
