//! Sample movie data loading.
//!
//! The sample catalog ships as a zip archive holding one JSON document. The
//! archive is downloaded and unpacked in memory; nothing is written to disk.

mod archive;
mod error;
mod http;

use async_trait::async_trait;
use moviedemo_core::movie::Movie;

pub use archive::extract_document;
pub use error::LoaderError;
pub use http::{load_archive, HttpSampleSource};

/// Source of the sample movies loaded by menu option 2.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Returns the first `SAMPLE_LIMIT` movies of the sample catalog.
    async fn fetch(&self) -> Result<Vec<Movie>, LoaderError>;
}
