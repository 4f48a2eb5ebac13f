//! Attribute names and expressions for the movies table.
//!
//! `year` is a DynamoDB reserved word, so every expression refers to it
//! through the `#yr` placeholder.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use moviedemo_core::movie::MovieKey;
use moviedemo_core::storage::{PARTITION_KEY, SORT_KEY};

pub const YEAR: &str = PARTITION_KEY;
pub const TITLE: &str = SORT_KEY;
pub const INFO: &str = "info";
pub const PLOT: &str = "plot";
pub const RATING: &str = "rating";

/// Placeholder for the `year` attribute name.
pub const YEAR_PLACEHOLDER: &str = "#yr";

/// Key condition for a query by release year.
pub const QUERY_BY_YEAR: &str = "#yr = :year";

/// Filter for a scan over a year range, bounds included.
pub const SCAN_YEAR_FILTER: &str = "#yr BETWEEN :first AND :second";

/// Projection for scan results.
pub const SCAN_PROJECTION: &str = "#yr, title, info.rating";

/// Builds the primary key attribute map for a movie.
pub fn movie_key(key: &MovieKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (YEAR.to_string(), number(key.year)),
        (TITLE.to_string(), AttributeValue::S(key.title.clone())),
    ])
}

/// Wraps an integer as a DynamoDB number.
pub fn number(value: i32) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_key() {
        let key = movie_key(&MovieKey::new(1995, "Heat"));

        assert_eq!(key.len(), 2);
        assert_eq!(key.get("year").unwrap().as_n().unwrap(), "1995");
        assert_eq!(key.get("title").unwrap().as_s().unwrap(), "Heat");
    }

    #[test]
    fn test_expressions_use_year_placeholder() {
        for expression in [QUERY_BY_YEAR, SCAN_YEAR_FILTER, SCAN_PROJECTION] {
            assert!(expression.contains(YEAR_PLACEHOLDER));
        }
    }

    #[test]
    fn test_number() {
        assert_eq!(number(-5), AttributeValue::N("-5".to_string()));
    }
}
