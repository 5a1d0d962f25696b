use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Expression, Notation, Operator};
use crate::solver::config::SolverConfig;
use crate::solver::sink::{Aggregator, SolutionSink};

/// Exhaustive search for expressions that combine a set of numbers into the target
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search the numbers and return every distinct solution, sorted.
    ///
    /// # Panics
    ///
    /// Panics if `numbers` is empty.
    pub fn solve(&self, numbers: &[i64], notation: Notation) -> Vec<String> {
        let mut aggregator = Aggregator::new(notation);
        self.solve_into(numbers, &mut aggregator);
        aggregator.into_solutions()
    }

    /// Search the numbers, offering every solution to `sink` as it is found.
    ///
    /// Returns whether any solution was found, duplicates included.
    ///
    /// # Panics
    ///
    /// Panics if `numbers` is empty.
    pub fn solve_into<S>(&self, numbers: &[i64], sink: &mut S) -> bool
    where
        S: SolutionSink + ?Sized,
    {
        info!(
            "Searching {:?} for expressions equal to {}",
            numbers, self.config.target
        );

        let found = self.search(sink, leaves(numbers));

        if found {
            info!("Search finished with solutions");
        } else {
            info!("No expression reaches {}", self.config.target);
        }
        found
    }

    /// Like [`ExpressionSolver::solve`], with the top-level branches spread
    /// over the rayon thread pool. Each branch collects into its own
    /// aggregator; the results are merged at the end.
    ///
    /// # Panics
    ///
    /// Panics if `numbers` is empty.
    pub fn solve_parallel(&self, numbers: &[i64], notation: Notation) -> Vec<String> {
        let working = leaves(numbers);
        if working.len() < 2 {
            return self.solve(numbers, notation);
        }

        let mut branches = Vec::new();
        for_each_branch(&working, |branch| branches.push(branch));
        info!(
            "Searching {:?} across {} parallel branches",
            numbers,
            branches.len()
        );

        branches
            .into_par_iter()
            .map(|branch| {
                let mut aggregator = Aggregator::new(notation);
                self.search(&mut aggregator, branch);
                aggregator
            })
            .reduce(
                || Aggregator::new(notation),
                |mut merged, aggregator| {
                    merged.merge(aggregator);
                    merged
                },
            )
            .into_solutions()
    }

    /// Whether the expression lands within tolerance of the target
    pub fn is_target(&self, expression: &Expression) -> bool {
        expression.is_close_to(self.config.target, self.config.tolerance)
    }

    /// Reduce the working set pair by pair until one expression is left,
    /// handing every expression that matches the target to `sink`.
    ///
    /// Every branch is explored; the result only tells whether any of them
    /// reached the target.
    ///
    /// # Panics
    ///
    /// Panics if `working` is empty.
    pub fn search<S>(&self, sink: &mut S, working: Vec<Expression>) -> bool
    where
        S: SolutionSink + ?Sized,
    {
        match working.as_slice() {
            [] => unreachable!("search reached an empty working set"),
            [last] => {
                if self.is_target(last) {
                    debug!("Reached target: {}", last);
                    sink.add(last);
                    true
                } else {
                    false
                }
            }
            _ => {
                let mut found = false;
                for_each_branch(&working, |branch| {
                    found |= self.search(sink, branch);
                });
                found
            }
        }
    }
}

fn leaves(numbers: &[i64]) -> Vec<Expression> {
    numbers.iter().copied().map(Expression::leaf).collect()
}

/// Call `visit` with every working set one reduction step away from `working`.
fn for_each_branch(working: &[Expression], mut visit: impl FnMut(Vec<Expression>)) {
    for (i, a) in working.iter().enumerate() {
        for (j, b) in working.iter().enumerate().skip(i + 1) {
            let remainder: Vec<Expression> = working
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, expr)| expr.clone())
                .collect();

            for combined in pair_combinations(a, b) {
                let mut next = Vec::with_capacity(remainder.len() + 1);
                next.extend(remainder.iter().cloned());
                next.push(combined);
                visit(next);
            }
        }
    }
}

/// Every legal way to combine one pair. Subtraction only runs from the larger
/// value, and nothing is divided by an exact zero.
fn pair_combinations(a: &Expression, b: &Expression) -> Vec<Expression> {
    let mut combined = Vec::with_capacity(6);

    for operator in Operator::BINARY {
        match operator {
            Operator::Add | Operator::Multiply => {
                combined.push(Expression::combine(operator, a.clone(), b.clone()));
            }
            Operator::Subtract => {
                if a.value() >= b.value() {
                    combined.push(Expression::combine(operator, a.clone(), b.clone()));
                }
                if b.value() >= a.value() {
                    combined.push(Expression::combine(operator, b.clone(), a.clone()));
                }
            }
            Operator::Divide => {
                if b.value() != 0.0 {
                    combined.push(Expression::combine(operator, a.clone(), b.clone()));
                }
                if a.value() != 0.0 {
                    combined.push(Expression::combine(operator, b.clone(), a.clone()));
                }
            }
            Operator::None => {}
        }
    }

    combined
}
