use std::collections::BTreeSet;

use crate::expression::{Expression, Notation};
use crate::solver::constants::{DEFAULT_TARGET, TOLERANCE};
use crate::solver::{
    Aggregator, ExpressionSolver, SolutionSink, SolverConfig, StreamingAggregator,
    format_solution,
};

fn solve(numbers: &[i64]) -> Vec<String> {
    ExpressionSolver::default().solve(numbers, Notation::Ascii)
}

fn assert_all_reach(solutions: &[String], target: f64) {
    for text in solutions {
        let parsed = Expression::parse(text);
        assert!(parsed.is_ok(), "could not parse '{}'", text);
        if let Ok(expr) = parsed {
            assert!(
                expr.is_close_to(target, TOLERANCE),
                "'{}' evaluates to {}",
                text,
                expr.value()
            );
        }
    }
}

#[test]
fn test_one_two_three_four() {
    let solutions = solve(&[1, 2, 3, 4]);
    assert!(solutions.iter().any(|s| s == "1 * 2 * 3 * 4"));
    assert_all_reach(&solutions, DEFAULT_TARGET);
}

#[test]
fn test_two_six_seven_eight() {
    let solutions = solve(&[2, 6, 7, 8]);
    assert!(!solutions.is_empty());
    assert_all_reach(&solutions, DEFAULT_TARGET);
}

#[test]
fn test_four_ones_have_no_solution() {
    assert!(solve(&[1, 1, 1, 1]).is_empty());

    let mut aggregator = Aggregator::default();
    let found = ExpressionSolver::default().solve_into(&[1, 1, 1, 1], &mut aggregator);
    assert!(!found);
    assert!(aggregator.is_empty());
}

#[test]
fn test_fraction_only_solution() {
    let solutions = solve(&[3, 3, 8, 8]);
    assert!(solutions.iter().any(|s| s == "8 / (3 - 8 / 3)"));
    assert_all_reach(&solutions, DEFAULT_TARGET);
}

#[test]
fn test_zero_operand_skips_division_by_zero() {
    let solver = ExpressionSolver::new(SolverConfig::with_target(6.0));
    let solutions = solver.solve(&[0, 1, 2, 3], Notation::Ascii);
    assert!(solutions.iter().any(|s| s == "0 + 1 + 2 + 3"));
    assert_all_reach(&solutions, 6.0);

    assert!(solve(&[0, 1, 2, 3]).is_empty());
}

#[test]
fn test_solutions_are_unique_and_sorted() {
    let solutions = solve(&[2, 6, 7, 8]);
    let unique: BTreeSet<&String> = solutions.iter().collect();
    assert_eq!(unique.len(), solutions.len());

    let mut sorted = solutions.clone();
    sorted.sort();
    assert_eq!(sorted, solutions);
}

#[test]
fn test_input_order_does_not_matter() {
    let expected = solve(&[1, 2, 3, 4]);
    for permutation in [[4, 3, 2, 1], [2, 4, 1, 3], [3, 1, 4, 2]] {
        assert_eq!(solve(&permutation), expected);
    }

    let expected = solve(&[2, 6, 7, 8]);
    for permutation in [[8, 7, 6, 2], [7, 2, 8, 6]] {
        assert_eq!(solve(&permutation), expected);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = solve(&[5, 5, 5, 1]);
    let second = solve(&[5, 5, 5, 1]);
    assert_eq!(first, second);
    assert!(first.iter().any(|s| s == "(5 - 1 / 5) * 5"));
}

#[test]
fn test_parallel_matches_sequential() {
    let solver = ExpressionSolver::default();
    for numbers in [[1, 2, 3, 4], [2, 6, 7, 8], [1, 1, 1, 1], [3, 3, 8, 8]] {
        assert_eq!(
            solver.solve_parallel(&numbers, Notation::Ascii),
            solver.solve(&numbers, Notation::Ascii)
        );
    }
}

#[test]
fn test_streaming_reports_each_solution_once() {
    let mut lines = Vec::new();
    let found = {
        let mut sink = StreamingAggregator::new(Notation::Ascii, |text: &str| {
            lines.push(format_solution(text, DEFAULT_TARGET));
        });
        ExpressionSolver::default().solve_into(&[1, 2, 3, 4], &mut sink)
    };

    assert!(found);
    assert!(lines.iter().any(|line| line == "1 * 2 * 3 * 4 = 24"));

    let unique: BTreeSet<&String> = lines.iter().collect();
    assert_eq!(unique.len(), lines.len());
    assert_eq!(lines.len(), solve(&[1, 2, 3, 4]).len());
}

#[test]
fn test_aggregator_ignores_duplicates() {
    let mut aggregator = Aggregator::new(Notation::Ascii);
    let a = Expression::combine(
        crate::expression::Operator::Add,
        Expression::leaf(20),
        Expression::leaf(4),
    );
    let b = Expression::combine(
        crate::expression::Operator::Add,
        Expression::leaf(4),
        Expression::leaf(20),
    );
    assert!(aggregator.add(&a));
    assert!(!aggregator.add(&b));
    assert_eq!(aggregator.solutions(), vec!["4 + 20"]);
}

#[test]
fn test_unicode_notation() {
    let solutions = ExpressionSolver::default().solve(&[1, 2, 3, 4], Notation::Unicode);
    assert!(solutions.iter().any(|s| s == "1 × 2 × 3 × 4"));
    assert!(solutions.iter().all(|s| !s.contains('*') && !s.contains('/')));
}

#[test]
fn test_custom_target() {
    let solver = ExpressionSolver::new(SolverConfig::with_target(10.0));
    let solutions = solver.solve(&[1, 2, 3, 4], Notation::Ascii);
    assert!(solutions.iter().any(|s| s == "1 + 2 + 3 + 4"));
    assert_all_reach(&solutions, 10.0);
}

#[test]
fn test_single_number() {
    assert_eq!(solve(&[24]), vec!["24"]);
    assert!(solve(&[5]).is_empty());
}

#[test]
#[should_panic(expected = "empty working set")]
fn test_empty_working_set_is_fatal() {
    let mut aggregator = Aggregator::default();
    ExpressionSolver::default().search(&mut aggregator, Vec::new());
}
