use thiserror::Error;

/// Errors that can occur when constructing a year range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum YearRangeError {
    #[error("Invalid year range: first year {first} is after second year {second}")]
    Inverted { first: i32, second: i32 },
}
