//! In-memory gateway implementation.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use moviedemo_core::movie::{Movie, MovieKey, MovieSummary, YearRange};
use moviedemo_core::storage::{
    BatchSummary, GatewayError, MovieGateway, Result, ScanCursor, ScanPage, TableHandle,
    TableSpec,
};

/// Number of items examined by one scan call unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 25;

type Table = BTreeMap<MovieKey, Movie>;

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access. Each
/// table keeps its movies ordered by primary key. Scans examine at most
/// `page_size` items per call and hand back a cursor, the same way the
/// service bounds a scan page. Data is lost when the gateway is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryGateway {
    tables: Arc<RwLock<HashMap<String, Table>>>,
    page_size: usize,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    /// Creates a new gateway with no tables.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets how many items a single scan call examines.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

/// Builds a service error and logs it the way the DynamoDB backend does.
fn service_error(
    operation: &'static str,
    table_name: &str,
    code: &str,
    message: String,
) -> GatewayError {
    tracing::error!(
        operation,
        table = table_name,
        code,
        message = %message,
        "In-memory request failed"
    );
    GatewayError::service(code, message)
}

fn table_not_found(operation: &'static str, table_name: &str) -> GatewayError {
    service_error(
        operation,
        table_name,
        "ResourceNotFoundException",
        format!("Requested resource not found: Table: {} not found", table_name),
    )
}

#[async_trait]
impl MovieGateway for InMemoryGateway {
    async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let tables = self.tables.read().await;
        Ok(tables.contains_key(table_name))
    }

    async fn create_table(&self, spec: &TableSpec) -> Result<TableHandle> {
        let mut tables = self.tables.write().await;
        if tables.contains_key(&spec.table_name) {
            return Err(service_error(
                "CreateTable",
                &spec.table_name,
                "ResourceInUseException",
                format!("Table already exists: {}", spec.table_name),
            ));
        }
        tables.insert(spec.table_name.clone(), Table::new());
        Ok(TableHandle {
            table_name: spec.table_name.clone(),
            table_arn: None,
        })
    }

    async fn batch_write(&self, table_name: &str, movies: &[Movie]) -> Result<BatchSummary> {
        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(table_name)
            .ok_or_else(|| table_not_found("BatchWriteItem", table_name))?;
        for movie in movies {
            table.insert(movie.key(), movie.clone());
        }
        Ok(BatchSummary {
            submitted: movies.len(),
            unprocessed: 0,
        })
    }

    async fn put_movie(&self, table_name: &str, movie: &Movie) -> Result<()> {
        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(table_name)
            .ok_or_else(|| table_not_found("PutItem", table_name))?;
        table.insert(movie.key(), movie.clone());
        Ok(())
    }

    async fn get_movie(&self, table_name: &str, key: &MovieKey) -> Result<Option<Movie>> {
        let tables = self.tables.read().await;
        let table = tables
            .get(table_name)
            .ok_or_else(|| table_not_found("GetItem", table_name))?;
        Ok(table.get(key).cloned())
    }

    async fn query_by_year(&self, table_name: &str, year: i32) -> Result<Vec<Movie>> {
        let tables = self.tables.read().await;
        let table = tables
            .get(table_name)
            .ok_or_else(|| table_not_found("Query", table_name))?;
        Ok(table
            .range(MovieKey::new(year, "")..)
            .take_while(|(key, _)| key.year == year)
            .map(|(_, movie)| movie.clone())
            .collect())
    }

    async fn scan_page(
        &self,
        table_name: &str,
        range: YearRange,
        start: Option<ScanCursor>,
    ) -> Result<ScanPage> {
        let tables = self.tables.read().await;
        let table = tables
            .get(table_name)
            .ok_or_else(|| table_not_found("Scan", table_name))?;

        let lower = match start {
            Some(cursor) => Bound::Excluded(cursor.into_key()),
            None => Bound::Unbounded,
        };
        let mut remaining = table.range((lower, Bound::Unbounded));

        // The page limit applies to examined items, before the filter.
        let examined: Vec<&Movie> = remaining
            .by_ref()
            .take(self.page_size)
            .map(|(_, movie)| movie)
            .collect();
        let items = examined
            .iter()
            .filter(|movie| range.contains(movie.year))
            .map(|movie| MovieSummary::from(*movie))
            .collect();

        let cursor = match (examined.last(), remaining.next()) {
            (Some(last), Some(_)) => Some(ScanCursor::new(last.key())),
            _ => None,
        };

        Ok(ScanPage { items, cursor })
    }
}
