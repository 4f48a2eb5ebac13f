//! HTTP sample source.

use async_trait::async_trait;
use moviedemo_core::catalog::parse_catalog;
use moviedemo_core::movie::Movie;

use super::archive::extract_document;
use super::error::LoaderError;
use super::SampleSource;

/// Downloads the sample archive over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSampleSource {
    url: String,
}

impl HttpSampleSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SampleSource for HttpSampleSource {
    async fn fetch(&self) -> Result<Vec<Movie>, LoaderError> {
        tracing::info!(url = %self.url, "Downloading sample data");

        let archive = reqwest::get(&self.url)
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        tracing::debug!(bytes = archive.len(), "Sample archive downloaded");

        load_archive(&archive)
    }
}

/// Extracts and parses the sample catalog from a downloaded archive.
pub fn load_archive(archive: &[u8]) -> Result<Vec<Movie>, LoaderError> {
    let document = extract_document(archive)?;
    let movies = parse_catalog(&document)?;
    tracing::info!(records = movies.len(), "Sample data parsed");
    Ok(movies)
}
