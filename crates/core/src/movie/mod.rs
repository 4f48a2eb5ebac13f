mod error;
mod range;
mod types;

pub use error::YearRangeError;
pub use range::YearRange;
pub use types::{Movie, MovieInfo, MovieKey, MovieSummary};
