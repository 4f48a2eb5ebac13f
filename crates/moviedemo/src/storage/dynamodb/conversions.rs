//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use moviedemo_core::movie::{Movie, MovieInfo, MovieKey, MovieSummary};
use moviedemo_core::storage::GatewayError;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use super::keys::{self, INFO, PLOT, RATING, TITLE, YEAR};

type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Movie conversions
// ============================================================================

/// Convert a Movie to DynamoDB item.
pub fn movie_to_item(movie: &Movie) -> Item {
    let mut item = keys::movie_key(&movie.key());
    item.insert(INFO.to_string(), AttributeValue::M(info_to_map(&movie.info)));
    item
}

fn info_to_map(info: &MovieInfo) -> Item {
    let mut map: Item = info
        .details
        .iter()
        .map(|(name, value)| (name.clone(), json_to_attribute(value)))
        .collect();

    if let Some(plot) = &info.plot {
        map.insert(PLOT.to_string(), AttributeValue::S(plot.clone()));
    }
    if let Some(rating) = &info.rating {
        map.insert(RATING.to_string(), AttributeValue::N(rating.to_string()));
    }

    map
}

/// Convert a DynamoDB item to Movie.
pub fn item_to_movie(item: &Item) -> Result<Movie, GatewayError> {
    let info = match item.get(INFO) {
        Some(AttributeValue::M(map)) => map_to_info(map)?,
        Some(_) => return Err(invalid_type(INFO, "a map")),
        None => MovieInfo::default(),
    };

    Ok(Movie {
        year: get_year(item)?,
        title: get_string(item, TITLE)?,
        info,
    })
}

fn map_to_info(map: &Item) -> Result<MovieInfo, GatewayError> {
    let mut info = MovieInfo::default();

    for (name, value) in map {
        match (name.as_str(), value) {
            (PLOT, AttributeValue::S(plot)) => info.plot = Some(plot.clone()),
            (RATING, AttributeValue::N(rating)) => info.rating = Some(parse_decimal(rating)?),
            (PLOT | RATING, _) => return Err(invalid_type(name, "a scalar of the declared type")),
            _ => {
                info.details.insert(name.clone(), attribute_to_json(value)?);
            }
        }
    }

    Ok(info)
}

/// Convert a projected scan item (`year`, `title`, `info.rating`) to MovieSummary.
pub fn item_to_summary(item: &Item) -> Result<MovieSummary, GatewayError> {
    let rating = match item.get(INFO) {
        Some(AttributeValue::M(info)) => match info.get(RATING) {
            Some(AttributeValue::N(rating)) => Some(parse_decimal(rating)?),
            Some(_) => return Err(invalid_type(RATING, "a number")),
            None => None,
        },
        Some(_) => return Err(invalid_type(INFO, "a map")),
        None => None,
    };

    Ok(MovieSummary {
        year: get_year(item)?,
        title: get_string(item, TITLE)?,
        rating,
    })
}

/// Convert a last evaluated key to MovieKey.
pub fn item_to_key(item: &Item) -> Result<MovieKey, GatewayError> {
    Ok(MovieKey::new(get_year(item)?, get_string(item, TITLE)?))
}

// ============================================================================
// Free-form attribute conversions
// ============================================================================

/// Convert a JSON value to an AttributeValue.
///
/// Numbers keep their textual form, so no precision is lost.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert an AttributeValue to a JSON value.
///
/// String and number sets become arrays. Binary attributes are rejected.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, GatewayError> {
    Ok(match value {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(n) => Value::Number(parse_number(n)?),
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::Ss(items) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(items) => Value::Array(
            items
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::L(items) => Value::Array(
            items
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(k, v)| attribute_to_json(v).map(|v| (k.clone(), v)))
                .collect::<Result<Map<_, _>, _>>()?,
        ),
        other => {
            return Err(GatewayError::InvalidData(format!(
                "unsupported attribute value: {:?}",
                other
            )))
        }
    })
}

// ============================================================================
// Field helpers
// ============================================================================

fn get_year(item: &Item) -> Result<i32, GatewayError> {
    let raw = match item.get(YEAR) {
        Some(AttributeValue::N(n)) => n,
        Some(_) => return Err(invalid_type(YEAR, "a number")),
        None => return Err(missing(YEAR)),
    };
    raw.parse()
        .map_err(|_| GatewayError::InvalidData(format!("'{}' is not a valid year: {}", YEAR, raw)))
}

fn get_string(item: &Item, name: &str) -> Result<String, GatewayError> {
    match item.get(name) {
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(_) => Err(invalid_type(name, "a string")),
        None => Err(missing(name)),
    }
}

fn parse_decimal(raw: &str) -> Result<Decimal, GatewayError> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| GatewayError::InvalidData(format!("invalid decimal {}: {}", raw, e)))
}

fn parse_number(raw: &str) -> Result<Number, GatewayError> {
    Number::from_str(raw)
        .map_err(|e| GatewayError::InvalidData(format!("invalid number {}: {}", raw, e)))
}

fn missing(name: &str) -> GatewayError {
    GatewayError::InvalidData(format!("missing attribute '{}'", name))
}

fn invalid_type(name: &str, expected: &str) -> GatewayError {
    GatewayError::InvalidData(format!("attribute '{}' must be {}", name, expected))
}
