use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

const PLOT: &str = "plot";
const RATING: &str = "rating";

/// A movie record. `year` is the partition key and `title` the sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub year: i32,
    pub title: String,
    #[serde(default)]
    pub info: MovieInfo,
}

impl Movie {
    /// Creates a movie with a plot and a rating and no other details.
    pub fn new(
        year: i32,
        title: impl Into<String>,
        plot: impl Into<String>,
        rating: Decimal,
    ) -> Self {
        Self {
            year,
            title: title.into(),
            info: MovieInfo {
                plot: Some(plot.into()),
                rating: Some(rating),
                details: Map::new(),
            },
        }
    }

    /// Returns the primary key of this movie.
    pub fn key(&self) -> MovieKey {
        MovieKey::new(self.year, self.title.clone())
    }
}

/// Nested movie attributes.
///
/// `plot` and `rating` are typed. Every other attribute found under `info`
/// (directors, genres, actors, ...) is kept verbatim in `details` so that
/// sample records are stored whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct MovieInfo {
    pub plot: Option<String>,
    pub rating: Option<Decimal>,
    pub details: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for MovieInfo {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let plot = match map.remove(PLOT) {
            None | Some(Value::Null) => None,
            Some(Value::String(plot)) => Some(plot),
            Some(other) => return Err(format!("plot must be a string, got {other}")),
        };

        let rating = match map.remove(RATING) {
            None | Some(Value::Null) => None,
            Some(Value::Number(number)) => Some(decimal_from_number(&number)?),
            Some(other) => return Err(format!("rating must be a number, got {other}")),
        };

        Ok(Self {
            plot,
            rating,
            details: map,
        })
    }
}

impl From<MovieInfo> for Map<String, Value> {
    fn from(info: MovieInfo) -> Self {
        let mut map = info.details;
        if let Some(plot) = info.plot {
            map.insert(PLOT.to_string(), Value::String(plot));
        }
        if let Some(number) = info.rating.and_then(|r| Number::from_str(&r.to_string()).ok()) {
            map.insert(RATING.to_string(), Value::Number(number));
        }
        map
    }
}

/// Parses a JSON number into a decimal using its textual form.
fn decimal_from_number(number: &Number) -> Result<Decimal, String> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| format!("invalid decimal {text}: {e}"))
}

/// The primary key of a movie: partition key `year`, sort key `title`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieKey {
    pub year: i32,
    pub title: String,
}

impl MovieKey {
    pub fn new(year: i32, title: impl Into<String>) -> Self {
        Self {
            year,
            title: title.into(),
        }
    }
}

impl std::fmt::Display for MovieKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

/// A projected scan record: only `year`, `title` and `info.rating`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub year: i32,
    pub title: String,
    pub rating: Option<Decimal>,
}

impl From<&Movie> for MovieSummary {
    fn from(movie: &Movie) -> Self {
        Self {
            year: movie.year,
            title: movie.title.clone(),
            rating: movie.info.rating,
        }
    }
}
