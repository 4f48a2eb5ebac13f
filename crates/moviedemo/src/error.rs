//! Application error types.

use moviedemo_core::movie::YearRangeError;
use moviedemo_core::storage::GatewayError;
use thiserror::Error;

use crate::loader::LoaderError;

/// Result type alias for the interactive loop.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors that can occur while dispatching a menu command.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Database error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Sample data error: {0}")]
    Loader(#[from] LoaderError),

    #[error("No table selected, create or select a table with option 1 first")]
    NoTableSelected,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid input: {0}")]
    InvalidRange(#[from] YearRangeError),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
