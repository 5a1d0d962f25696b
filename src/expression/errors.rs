use thiserror::Error;

/// Errors raised while reading an expression back from text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}
