//! Reading and checking the numbers of a query

mod errors;
mod numbers;
mod validation;

pub use errors::UtilsError;
pub use numbers::{parse_number, split_numbers};
pub use validation::{validate_count, validate_numbers};
