//! moviedemo - interactive walkthrough of DynamoDB data-plane operations.

pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod prelude;
pub mod repl;
pub mod storage;

pub use error::{DemoError, Result};
