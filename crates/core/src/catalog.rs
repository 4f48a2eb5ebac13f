//! Sample movie catalog parsing.
//!
//! The sample document is a single JSON array of movie records. Only a
//! fixed-size prefix is ever loaded.

use serde_json::Value;
use thiserror::Error;

use crate::movie::Movie;

/// Number of sample records loaded from the catalog.
pub const SAMPLE_LIMIT: usize = 100;

/// Errors that can occur when parsing the sample catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Catalog document must be a JSON array of movies")]
    NotAnArray,

    #[error("Invalid movie record at position {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses the catalog and returns its first [`SAMPLE_LIMIT`] movies.
///
/// Records past the limit are never decoded, so a malformed record beyond
/// the prefix does not fail the load.
pub fn parse_catalog(document: &[u8]) -> Result<Vec<Movie>, CatalogError> {
    let records = match serde_json::from_slice::<Value>(document)? {
        Value::Array(records) => records,
        _ => return Err(CatalogError::NotAnArray),
    };

    records
        .into_iter()
        .take(SAMPLE_LIMIT)
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .map_err(|source| CatalogError::InvalidRecord { index, source })
        })
        .collect()
}
