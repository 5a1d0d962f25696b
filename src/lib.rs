//! Twenty-four - find every distinct way to combine a handful of integers into a target
//!
//! The search pairs up numbers with `+ - * /` until one expression is left,
//! canonicalizes each tree so algebraically equivalent answers render the
//! same, and collects the distinct rendered solutions.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Notation, Operator};
pub use solver::{
    Aggregator, ExpressionSolver, SolutionSink, SolverConfig, SolverError, StreamingAggregator,
    format_solution,
};
pub use utils::{UtilsError, split_numbers, validate_count, validate_numbers};

/// Find every distinct expression combining `numbers` into `target`
///
/// This is a convenience function that builds a solver with the default
/// tolerance and collects the solutions in ASCII notation.
///
/// # Returns
///
/// The unique solutions in lexicographic order; empty if there are none.
///
/// # Errors
///
/// Returns an error if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use twenty_four::solve;
///
/// let solutions = solve(&[1, 2, 3, 4], 24.0).unwrap_or_default();
/// assert!(solutions.iter().any(|s| s == "1 * 2 * 3 * 4"));
/// ```
pub fn solve(numbers: &[i64], target: f64) -> Result<Vec<String>, SolverError> {
    validate_numbers(numbers)?;

    let solver = ExpressionSolver::new(SolverConfig::with_target(target));
    Ok(solver.solve(numbers, Notation::Ascii))
}

/// Check whether a written expression evaluates to `target`
///
/// # Errors
///
/// Returns an error if the text cannot be parsed or divides by zero.
pub fn verify_solution(text: &str, target: f64) -> Result<bool, SolverError> {
    let expr = Expression::parse(text)?;
    Ok(expr.is_close_to(target, solver::constants::TOLERANCE))
}
