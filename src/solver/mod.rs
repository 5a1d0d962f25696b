pub mod constants;
mod config;
mod core;
mod errors;
mod sink;

pub use config::SolverConfig;
pub use core::ExpressionSolver;
pub use errors::SolverError;
pub use sink::{Aggregator, SolutionSink, StreamingAggregator, format_solution};

#[cfg(test)]
mod tests;
