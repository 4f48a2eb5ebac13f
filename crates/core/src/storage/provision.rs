use super::{MovieGateway, Result, TableProvision, TableSpec};

/// Creates the table unless one with the same name already exists.
///
/// The existence check runs first, so an existing table never receives a
/// creation request.
pub async fn provision_table<G>(gateway: &G, spec: &TableSpec) -> Result<TableProvision>
where
    G: MovieGateway + ?Sized,
{
    if gateway.table_exists(&spec.table_name).await? {
        tracing::info!(table = %spec.table_name, "Table already exists, skipping creation");
        return Ok(TableProvision::AlreadyExists {
            table_name: spec.table_name.clone(),
        });
    }

    let handle = gateway.create_table(spec).await?;
    tracing::info!(table = %handle.table_name, "Table created");
    Ok(TableProvision::Created(handle))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::movie::{Movie, MovieKey, YearRange};
    use crate::storage::{
        movie_table_spec, BatchSummary, GatewayError, ScanCursor, ScanPage, TableHandle,
    };

    #[derive(Default)]
    struct TableStub {
        tables: Mutex<HashSet<String>>,
        create_requests: Mutex<usize>,
        reject_creation: bool,
    }

    impl TableStub {
        fn create_requests(&self) -> usize {
            *self.create_requests.lock().unwrap()
        }
    }

    #[async_trait]
    impl MovieGateway for TableStub {
        async fn table_exists(&self, table_name: &str) -> Result<bool> {
            Ok(self.tables.lock().unwrap().contains(table_name))
        }

        async fn create_table(&self, spec: &TableSpec) -> Result<TableHandle> {
            *self.create_requests.lock().unwrap() += 1;
            if self.reject_creation {
                return Err(GatewayError::service(
                    "LimitExceededException",
                    "Too many tables",
                ));
            }
            self.tables.lock().unwrap().insert(spec.table_name.clone());
            Ok(TableHandle {
                table_name: spec.table_name.clone(),
                table_arn: None,
            })
        }

        async fn batch_write(&self, _table_name: &str, _movies: &[Movie]) -> Result<BatchSummary> {
            unimplemented!()
        }

        async fn put_movie(&self, _table_name: &str, _movie: &Movie) -> Result<()> {
            unimplemented!()
        }

        async fn get_movie(&self, _table_name: &str, _key: &MovieKey) -> Result<Option<Movie>> {
            unimplemented!()
        }

        async fn query_by_year(&self, _table_name: &str, _year: i32) -> Result<Vec<Movie>> {
            unimplemented!()
        }

        async fn scan_page(
            &self,
            _table_name: &str,
            _range: YearRange,
            _start: Option<ScanCursor>,
        ) -> Result<ScanPage> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_provision_creates_missing_table() {
        let stub = TableStub::default();

        let outcome = provision_table(&stub, &movie_table_spec("Movies"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            TableProvision::Created(TableHandle {
                table_name: "Movies".to_string(),
                table_arn: None,
            })
        );
        assert_eq!(stub.create_requests(), 1);
    }

    #[tokio::test]
    async fn test_provision_twice_creates_once() {
        let stub = TableStub::default();
        let spec = movie_table_spec("Movies");

        provision_table(&stub, &spec).await.unwrap();
        let second = provision_table(&stub, &spec).await.unwrap();

        assert_eq!(
            second,
            TableProvision::AlreadyExists {
                table_name: "Movies".to_string()
            }
        );
        assert_eq!(stub.create_requests(), 1);
    }

    #[tokio::test]
    async fn test_provision_propagates_creation_failure() {
        let stub = TableStub {
            reject_creation: true,
            ..Default::default()
        };

        let result = provision_table(&stub, &movie_table_spec("Movies")).await;

        assert!(matches!(
            result,
            Err(GatewayError::Service { code, .. }) if code == "LimitExceededException"
        ));
    }
}
