use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse one token as an integer
///
/// # Errors
///
/// Returns an error if the token is not an integer.
pub fn parse_number(token: &str) -> Result<i64, UtilsError> {
    token.trim().parse::<i64>().map_err(|_| {
        warn!("Rejecting non-integer token: '{}'", token);
        UtilsError::InvalidNumber(token.to_string())
    })
}

/// Split a line of input into integers. Whitespace and commas both separate
/// numbers.
///
/// # Errors
///
/// Returns an error if the line holds no numbers or any token is not an
/// integer.
pub fn split_numbers(line: &str) -> Result<Vec<i64>, UtilsError> {
    debug!("Splitting input line: '{}'", line);

    let numbers = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        return Err(UtilsError::EmptyInput);
    }

    debug!("Parsed numbers: {:?}", numbers);
    Ok(numbers)
}
