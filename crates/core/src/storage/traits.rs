use async_trait::async_trait;

use crate::movie::{Movie, MovieKey, MovieSummary, YearRange};

use super::{BatchSummary, Result, ScanCursor, ScanPage, TableHandle, TableSpec};

/// Data-plane capabilities of the movie database.
///
/// Every method is a single pass-through to the backing service. Failures
/// come back as [`GatewayError`](super::GatewayError) and are never retried.
#[async_trait]
pub trait MovieGateway: Send + Sync {
    /// Returns true if a table with this name exists.
    async fn table_exists(&self, table_name: &str) -> Result<bool>;

    /// Creates a table and waits until it is active.
    async fn create_table(&self, spec: &TableSpec) -> Result<TableHandle>;

    /// Writes all movies using the service's batching mechanism.
    async fn batch_write(&self, table_name: &str, movies: &[Movie]) -> Result<BatchSummary>;

    /// Inserts a movie, overwriting any movie with the same key.
    async fn put_movie(&self, table_name: &str, movie: &Movie) -> Result<()>;

    /// Gets a movie by its full primary key.
    async fn get_movie(&self, table_name: &str, key: &MovieKey) -> Result<Option<Movie>>;

    /// Gets every movie released in `year`, in title order.
    async fn query_by_year(&self, table_name: &str, year: i32) -> Result<Vec<Movie>>;

    /// Runs one bounded scan call starting after `start`.
    async fn scan_page(
        &self,
        table_name: &str,
        range: YearRange,
        start: Option<ScanCursor>,
    ) -> Result<ScanPage>;

    /// Scans the whole table for movies released within `range`.
    ///
    /// Follows the continuation cursor until a page comes back without one.
    async fn scan_range(&self, table_name: &str, range: YearRange) -> Result<Vec<MovieSummary>> {
        let mut movies = Vec::new();
        let mut cursor = None;
        let mut pages = 0usize;

        loop {
            let page = self.scan_page(table_name, range, cursor).await?;
            pages += 1;
            movies.extend(page.items);

            match page.cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::debug!(
            table = table_name,
            %range,
            pages,
            count = movies.len(),
            "Scan complete"
        );

        Ok(movies)
    }
}
