use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if there are no numbers to search.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    if numbers.is_empty() {
        warn!("No numbers given");
        return Err(UtilsError::EmptyInput);
    }
    Ok(())
}

/// # Errors
///
/// Returns an error unless exactly `expected` numbers are given.
pub fn validate_count(numbers: &[i64], expected: usize) -> Result<(), UtilsError> {
    debug!("Validating {:?} against a count of {}", numbers, expected);

    if numbers.len() != expected {
        warn!("Expected {} numbers, got {}", expected, numbers.len());
        return Err(UtilsError::WrongCount {
            expected,
            actual: numbers.len(),
        });
    }

    validate_numbers(numbers)
}
