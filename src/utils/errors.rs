use thiserror::Error;

/// Errors that can occur while reading the numbers of a query
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one number is required")]
    EmptyInput,
    #[error("Not an integer: {0}")]
    InvalidNumber(String),
    #[error("Expected {expected} numbers, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}
