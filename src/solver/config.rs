use crate::solver::constants::{DEFAULT_TARGET, TOLERANCE};

/// Configuration for the search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub target: f64,
    pub tolerance: f64,
}

impl SolverConfig {
    /// Default tolerance, custom target
    pub fn with_target(target: f64) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            tolerance: TOLERANCE,
        }
    }
}
