/// Value every query tries to reach unless told otherwise
pub const DEFAULT_TARGET: f64 = 24.0;

/// How many numbers a query combines
pub const DEFAULT_COUNT: usize = 4;

/// Absolute tolerance when comparing a result against the target
pub const TOLERANCE: f64 = 1e-9;
